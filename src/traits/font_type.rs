use crate::types::Style;

/// Glyph advance widths for the four style variants of a font family.
///
/// Widths are given in 1/1000 em, as listed in the font's AFM metrics, and
/// scaled by `standardize` to the requested font size.
pub trait FontType {
    fn new() -> Self;
    fn normal(&self, ch: &char, font_size: f32) -> f32;
    fn bold(&self, ch: &char, font_size: f32) -> f32;
    fn italic(&self, ch: &char, font_size: f32) -> f32;
    fn bold_italic(&self, ch: &char, font_size: f32) -> f32;

    fn standardize(width: f32, font_size: f32) -> f32 {
        width * font_size / 1000.0
    }

    fn char_width(&self, ch: &char, font_style: &Style, font_size: f32) -> f32 {
        match *font_style {
            Style::Regular => self.normal(ch, font_size),
            Style::Bold => self.bold(ch, font_size),
            Style::Italics => self.italic(ch, font_size),
            Style::BoldItalics => self.bold_italic(ch, font_size),
        }
    }

    fn text_width(&self, text: &str, font_style: &Style, font_size: f32) -> f32 {
        text.chars().map(|ch| self.char_width(&ch, font_style, font_size)).sum()
    }
}
