//! The directive interpreter and the run formatter.
//!
//! The interpreter walks the source one line at a time. Directives flip
//! switches on a [`FormattingState`], literal lines are formatted into
//! [`TextRun`]s and gathered into the open [`Paragraph`]. A paragraph is
//! sealed when its segment ends, at the next `.paragraph` or at the end of
//! input, and only if the segment held at least one literal.
use tracing::{debug, trace};

use crate::{
    config::Config,
    traits::DocumentSink,
    types::{
        Directive,
        FormattingState,
        Paragraph,
        Result,
        Size,
        TextRun,
        Token,
    }};

/// Resolves a `FormattingState` into run and paragraph attributes
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Formatter {
    pub normal_font_size: f32,
    pub large_font_size: f32,
    pub indent_unit: f32,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::from(&Config::default())
    }
}

impl From<&Config> for Formatter {
    fn from(config: &Config) -> Self {
        Formatter {
            normal_font_size: config.normal_font_size,
            large_font_size: config.large_font_size,
            indent_unit: config.indent_unit,
        }
    }
}

impl Formatter {
    /// snapshot of `state` applied to `text`
    pub fn format(&self, state: &FormattingState, text: &str) -> TextRun {
        let font_size = match state.size {
            Size::Normal => self.normal_font_size,
            Size::Large => self.large_font_size,
        };

        TextRun {
            content: text.to_string(),
            style: state.style(),
            font_size,
        }
    }

    pub fn left_margin(&self, state: &FormattingState) -> f32 {
        state.indent_level as f32 * self.indent_unit
    }

    /// Formats `text` onto the end of `paragraph`. Margin and alignment are
    /// rewritten on every call, so the last run before sealing decides them.
    pub fn append(&self, paragraph: &mut Paragraph, state: &FormattingState, text: &str) {
        paragraph.runs.push(self.format(state, text));
        paragraph.left_margin = self.left_margin(state);
        paragraph.alignment = state.alignment();
    }
}

/// One conversion: owns its formatting state, so independent conversions never share it
#[derive(Debug,Clone,Default)]
pub struct Interpreter {
    formatter: Formatter,
    state: FormattingState,
    paragraph: Paragraph,
    /// at least one literal has been added to the open paragraph
    in_literal_run: bool,
}

impl Interpreter {
    pub fn new(formatter: Formatter) -> Self {
        Interpreter {
            formatter,
            ..Interpreter::default()
        }
    }

    pub fn state(&self) -> &FormattingState {
        &self.state
    }

    /// Interprets `tokens` into `document`.
    ///
    /// Stops at the first malformed `.indent`; paragraphs sealed before it
    /// stay in the document, the open one is dropped.
    pub fn interpret<'a, I, D>(&mut self, tokens: I, document: &mut D) -> Result<()>
    where
        I: IntoIterator<Item = &'a str>,
        D: DocumentSink + ?Sized,
    {
        for (index, text) in tokens.into_iter().enumerate() {
            match Token::classify(text, index + 1)? {
                Token::Directive(Directive::Paragraph) => {
                    debug!(line = index + 1, "paragraph break");
                    self.seal(document);
                },
                Token::Directive(directive) => {
                    debug!(line = index + 1, ?directive, "directive");
                    self.state.apply(&directive);
                },
                Token::Blank => {},
                Token::Literal(text) => self.push_literal(text),
            }
        }

        self.seal(document);

        Ok(())
    }

    fn push_literal(&mut self, text: &str) {
        trace!(text, "literal");

        if !self.in_literal_run || text.starts_with(',') {
            self.formatter.append(&mut self.paragraph, &self.state, text);
        } else {
            self.formatter.append(&mut self.paragraph, &self.state, &format!(" {text}"));
        }

        self.in_literal_run = true;
    }

    /// hands the open paragraph to `document` if it holds text, then starts a fresh one
    fn seal<D: DocumentSink + ?Sized>(&mut self, document: &mut D) {
        let paragraph = std::mem::take(&mut self.paragraph);

        if self.in_literal_run {
            debug!(runs = paragraph.runs.len(), left_margin = paragraph.left_margin, "paragraph sealed");
            document.add(paragraph);
        }

        self.in_literal_run = false;
    }
}

/// Runs a fresh interpreter with default state over `tokens`
pub fn interpret<'a, I, D>(tokens: I, formatter: Formatter, document: &mut D) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
    D: DocumentSink + ?Sized,
{
    Interpreter::new(formatter).interpret(tokens, document)
}
