use crate::types::{ Style, TextAlignment };

/// Block level container for the laid out lines of one paragraph
/// ```ignore
/// let mut text_block = TextBlock::new()
///     .with_font_size(font_size) // f32, height of an empty line
///     .and_alignment(alignment)  // TextAlignment
///     .and_indent(indent);       // f32
/// ```
pub struct TextBlock {
    pub alignment: TextAlignment,
    pub lines: Vec<Line>,
    pub font_size: f32,
    // keeps track of which `Line` is currently being pushed to by `Doc::render_paragraph()`
    pub index: usize,
    pub indent: f32
}

impl TextBlock {
    /// default settings:
    /// - Font size: 12.0
    /// - Text alignment: Left
    /// - Indentation: 0.0
    pub fn new() -> Self {
        TextBlock::default()
    }

    /// builder function setting the height of an empty line
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// builder function setting block alignment
    pub fn and_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// builder function setting block indentation
    pub fn and_indent(mut self, indent: f32) -> Self {
        self.indent = indent;
        self
    }

    /// the `Line` currently being filled
    pub fn current(&mut self) -> &mut Line {
        &mut self.lines[self.index]
    }

    /// creates a new, empty, `Line` for `Doc::render_paragraph()` to push `Word` objects into
    pub fn next(&mut self) {
        self.lines.push(Line::default());

        self.index = self.lines.len() - 1;
    }

    /// Stretches the inter-word gaps of every line but the last so that it
    /// spans `writeable_area`. Left aligned blocks are untouched.
    pub fn apply_alignment(&mut self, writeable_area: f32) {
        if self.alignment != TextAlignment::Justify {
            return;
        }

        let Some((_last, lines)) = self.lines.split_last_mut() else {
            return;
        };

        for line in lines {
            let gaps = line.body.iter().filter(|word| word.stretchable).count();

            if gaps == 0 || line.width >= writeable_area {
                continue;
            }

            let extra = (writeable_area - line.width) / gaps as f32;

            for word in line.body.iter_mut().filter(|word| word.stretchable) {
                word.offset += extra;
            }

            line.width = writeable_area;
        }
    }
}

/// Wrapper for `Word` objects that fit a visual line
#[derive(Debug,Default)]
pub struct Line {
    pub body: Vec<Word>,
    pub width: f32,
    /// largest font size on the line
    pub height: f32,
}

impl Line {
    pub fn push(&mut self, word: Word) {
        self.width += word.offset + word.width;
        self.height = self.height.max(word.font_size);
        self.body.push(word);
    }
}

/// text container with word level styles
#[derive(Debug,Clone,PartialEq)]
pub struct Word {
    pub text: String,
    pub font_style: Style,
    pub font_size: f32,
    /// horizontal distance from the end of the previous word
    pub offset: f32,
    pub width: f32,
    /// the gap before this word may be widened when justifying
    pub stretchable: bool,
}

impl Default for TextBlock {
    fn default() -> Self {
        TextBlock {
            alignment: TextAlignment::Left,
            font_size: 12.0,
            lines: Vec::from([Line::default()]),
            index: 0,
            indent: 0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, offset: f32, width: f32) -> Word {
        Word {
            text: text.to_string(),
            font_style: Style::Regular,
            font_size: 12.0,
            offset,
            width,
            stretchable: offset > 0.0,
        }
    }

    fn block(alignment: TextAlignment) -> TextBlock {
        let mut text_block = TextBlock::new().and_alignment(alignment);
        for text in ["a", "b", "c"] {
            let offset = if text_block.current().body.is_empty() { 0.0 } else { 5.0 };
            text_block.current().push(word(text, offset, 10.0));
        }
        text_block.next();
        text_block.current().push(word("d", 0.0, 10.0));
        text_block.current().push(word("e", 5.0, 10.0));
        text_block
    }

    #[test]
    fn justify_stretches_all_but_last_line() {
        let mut text_block = block(TextAlignment::Justify);
        text_block.apply_alignment(100.0);

        // 3 words of 10 plus 2 gaps of 5 leaves 60 to share between 2 gaps
        let first = &text_block.lines[0];
        assert_eq!(first.width, 100.0);
        assert_eq!(first.body[0].offset, 0.0);
        assert_eq!(first.body[1].offset, 35.0);
        assert_eq!(first.body[2].offset, 35.0);

        let last = &text_block.lines[1];
        assert_eq!(last.width, 25.0);
        assert_eq!(last.body[1].offset, 5.0);
    }

    #[test]
    fn left_alignment_is_untouched() {
        let mut text_block = block(TextAlignment::Left);
        text_block.apply_alignment(100.0);

        assert_eq!(text_block.lines[0].width, 40.0);
        assert_eq!(text_block.lines[0].body[1].offset, 5.0);
    }

    #[test]
    fn line_height_follows_largest_word() {
        let mut line = Line::default();
        line.push(word("a", 0.0, 10.0));
        line.push(Word { font_size: 30.0, ..word("B", 5.0, 20.0) });

        assert_eq!(line.height, 30.0);
        assert_eq!(line.width, 35.0);
    }
}
