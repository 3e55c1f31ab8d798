use pdf_writer::{ Content, Name, Ref, Str };
use tracing::warn;

use crate::{
    config::Config,
    traits::FontType,
    types::{
        Font,
        FontReference,
        Page,
        PageContent,
        Style,
        TextBlock,
        win_ansi
}};

/// the rendering engine
/// contains
/// - page references
/// - ref allocator
/// - registered fonts and their metrics
/// - page geometry
pub struct Writer {
    pub x: f32,
    pub y: f32,
    pub alloc: Ref,
    pub font: Font,
    pub font_refs: Vec<FontReference>,
    pub pages: Vec<Page>,
    pub page_height: f32,
    pub page_width: f32,
    pub page_margin: f32,
    pub line_spacing: f32,
}

impl Writer {
    /// Creates the first page, registers the Helvetica family and places the
    /// write head at the top left corner of the writable area
    pub fn new(config: &Config) -> Self {
        let mut writer = Writer {
            x: config.page_margin,
            y: config.page_height - config.page_margin,
            alloc: Ref::new(1),
            font: Font::new(),
            font_refs: Vec::with_capacity(4),
            pages: Vec::with_capacity(1),
            page_height: config.page_height,
            page_width: config.page_width,
            page_margin: config.page_margin,
            line_spacing: config.line_spacing,
        };

        let faces: [(Style, &'static [u8]); 4] = [
            (Style::Regular, b"Helvetica"),
            (Style::Bold, b"Helvetica-Bold"),
            (Style::Italics, b"Helvetica-Oblique"),
            (Style::BoldItalics, b"Helvetica-BoldOblique"),
        ];

        for (style, name) in faces {
            let id = writer.bump();
            writer.font_refs.push(FontReference { id, style, name: Name(name) });
        }

        writer.new_page();
        writer
    }

    /// get a new reference for indirect object
    pub fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    /// scrolls the writer down the page
    pub fn feed(&mut self, num: f32) {
        self.y -= num;
    }

    /// moves the writer to a new position
    pub fn go_to(&mut self, num_x: f32, num_y: f32) {
        self.x = num_x;
        self.y = num_y;
    }

    /// width between the page margins
    pub fn text_width(&self) -> f32 {
        self.page_width - self.page_margin * 2.0
    }

    /// starts a fresh page and moves the write head to its top margin
    pub fn new_page(&mut self) {
        let page_id = self.bump();
        let content_id = self.bump();

        self.pages.push(Page {
            page_id,
            content: PageContent {
                content_id,
                content: Content::new()
            }
        });

        self.go_to(self.page_margin, self.page_height - self.page_margin);
    }

    /// true when nothing has been written below the top margin of the current page
    fn at_page_top(&self) -> bool {
        self.y >= self.page_height - self.page_margin
    }

    /// does the heavy lifting of rendering the `TextBlock` to the last page
    pub fn write(&mut self, text_block: TextBlock) {
        // a page must exist by now
        debug_assert!(!self.pages.is_empty());
        // fonts must exist by now
        debug_assert!(!self.font_refs.is_empty());

        for line in text_block.lines.iter() {
            let height = if line.body.is_empty() { text_block.font_size } else { line.height };
            let line_height = height * self.line_spacing;

            // lines taller than the writable area are placed at the top of a page anyway
            if self.y - line_height < self.page_margin && !self.at_page_top() {
                self.new_page();
            }

            let baseline = self.y - height;
            self.feed(line_height);

            // line break
            if line.body.is_empty() {
                continue;
            }

            self.x = self.page_margin + text_block.indent;

            let font_refs = &self.font_refs;
            let Some(page) = self.pages.last_mut() else {
                return;
            };
            let target = &mut page.content.content;

            target.begin_text();
            target.next_line(self.x, baseline);

            let mut advance = 0.0;

            for word in &line.body {
                // a `Word` object can't have empty text
                // if it is, there is likely a bug in `Doc::render_paragraph()`
                debug_assert!(!word.text.is_empty());

                target.next_line(advance + word.offset, 0.0);

                if let Some(font_ref) = font_refs.iter().find(|font_ref| font_ref.style == word.font_style) {
                    target.set_font(font_ref.name, word.font_size);
                }

                target.show(Str(&encode_win_ansi(&word.text)));
                advance = word.width;
            }

            target.end_text();

            self.x += line.width;
        }
    }

    pub fn word_width(&self, word: &str, font_style: &Style, font_size: f32) -> f32 {
        self.font.text_width(word, font_style, font_size)
    }
}

/// Maps text onto WinAnsiEncoding bytes. Characters the standard fonts
/// cannot show are replaced by `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| win_ansi(ch).unwrap_or_else(|| {
            warn!(character = %ch.escape_unicode(), "character outside WinAnsiEncoding replaced");
            b'?'
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Line, TextAlignment, Word};

    fn line_of(text: &str, font_size: f32) -> Line {
        let mut line = Line::default();
        line.push(Word {
            text: text.to_string(),
            font_style: Style::Regular,
            font_size,
            offset: 0.0,
            width: 10.0,
            stretchable: false,
        });
        line
    }

    #[test]
    fn registers_four_faces_and_a_first_page() {
        let writer = Writer::new(&Config::default());

        assert_eq!(writer.font_refs.len(), 4);
        assert_eq!(writer.pages.len(), 1);
        assert_eq!(writer.y, 842.0 - 36.0);
    }

    #[test]
    fn breaks_to_a_new_page_when_full() {
        let config = Config::default();
        let mut writer = Writer::new(&config);

        // (842 - 72) / (12 * 1.2) = 53.47 lines per page
        let mut text_block = TextBlock::new().and_alignment(TextAlignment::Left);
        text_block.lines.clear();
        for _ in 0..60 {
            text_block.lines.push(line_of("x", 12.0));
        }
        writer.write(text_block);

        assert_eq!(writer.pages.len(), 2);
        let remaining = config.page_height - config.page_margin - 7.0 * 12.0 * 1.2;
        assert!((writer.y - remaining).abs() < 0.01);
    }

    #[test]
    fn oversized_line_stays_on_an_empty_page() {
        let config = Config { page_height: 100.0, page_margin: 10.0, ..Config::default() };
        let mut writer = Writer::new(&config);

        let mut text_block = TextBlock::new();
        text_block.lines = vec![line_of("huge", 90.0)];
        writer.write(text_block);

        assert_eq!(writer.pages.len(), 1);
    }

    #[test]
    fn win_ansi_keeps_typographic_punctuation() {
        assert_eq!(encode_win_ansi("caf\u{e9}"), b"caf\xe9".to_vec());
        assert_eq!(
            encode_win_ansi("\u{201C}hi\u{201D} \u{2014} \u{20AC}"),
            vec![147, 104, 105, 148, 32, 151, 32, 128]
        );
        assert_eq!(encode_win_ansi("\u{2018}\u{2019}\u{2013}\u{2026}\u{2022}"), vec![0x91, 0x92, 0x96, 0x85, 0x95]);
    }

    #[test]
    fn win_ansi_substitutes_unsupported_characters() {
        assert_eq!(encode_win_ansi("\u{3b1}\t\u{81}"), b"???".to_vec());
    }
}
