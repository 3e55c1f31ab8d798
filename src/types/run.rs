use crate::types::Style;

/// Text with one resolved style, the unit appended to a `Paragraph`
#[derive(Debug,Clone,PartialEq)]
pub struct TextRun {
    /// may carry a leading space joining it to the previous run
    pub content: String,
    pub style: Style,
    pub font_size: f32,
}

/// Ordered runs plus the block level layout written by the last formatted run
#[derive(Debug,Clone,PartialEq,Default)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    /// indent level × indent unit, may be negative
    pub left_margin: f32,
    pub alignment: crate::types::TextAlignment,
}

impl Paragraph {
    /// concatenated run content
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.content.as_str()).collect()
    }
}
