use crate::traits::FontType;

/// AFM advance widths of Helvetica for the printable ASCII range, starting at ' '
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' ' to '/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,                               // '0' to '9'
    278, 278, 584, 584, 584, 556, 1015,                                             // ':' to '@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,                // 'A' to 'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,                // 'N' to 'Z'
    278, 278, 278, 469, 556, 333,                                                   // '[' to '`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,                // 'a' to 'm'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,                // 'n' to 'z'
    334, 260, 334, 584,                                                             // '{' to '~'
];

/// AFM advance widths of Helvetica-Bold for the printable ASCII range, starting at ' '
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    333, 333, 584, 584, 584, 611, 975,
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    333, 278, 333, 584, 556, 333,
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    389, 280, 389, 584,
];

/// AFM advance widths of Helvetica for WinAnsiEncoding 0x80 to 0x9F, unassigned codes use the fallback
const HELVETICA_HIGH: [u16; 32] = [
    556, 556, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 556, 611, 556, // 0x80 to 0x8F
    556, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 556, 500, 667,  // 0x90 to 0x9F
];

/// AFM advance widths of Helvetica-Bold for WinAnsiEncoding 0x80 to 0x9F
const HELVETICA_BOLD_HIGH: [u16; 32] = [
    556, 556, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 556, 611, 556,
    556, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 556, 500, 667,
];

/// Unicode characters placed at WinAnsiEncoding 0x80 to 0x9F, `\0` marks an unassigned code
const WIN_ANSI_HIGH: [char; 32] = [
    '\u{20AC}', '\0', '\u{201A}', '\u{0192}', '\u{201E}', '\u{2026}', '\u{2020}', '\u{2021}',
    '\u{02C6}', '\u{2030}', '\u{0160}', '\u{2039}', '\u{0152}', '\0', '\u{017D}', '\0',
    '\0', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}', '\u{2022}', '\u{2013}', '\u{2014}',
    '\u{02DC}', '\u{2122}', '\u{0161}', '\u{203A}', '\u{0153}', '\0', '\u{017E}', '\u{0178}',
];

/// used for Latin-1 glyphs above 0xA0 and unassigned codes
const FALLBACK_WIDTH: u16 = 556;

/// The WinAnsiEncoding code of `ch`, `None` for characters the standard
/// fonts cannot show and for control characters.
pub fn win_ansi(ch: char) -> Option<u8> {
    match u32::from(ch) {
        0x20..=0x7E | 0xA0..=0xFF => u8::try_from(ch).ok(),
        0 => None,
        _ => WIN_ANSI_HIGH.iter()
            .position(|high| *high == ch)
            .and_then(|index| u8::try_from(0x80 + index).ok()),
    }
}

/// Helvetica family metrics. The oblique faces share the widths of their
/// upright counterparts.
#[derive(Debug,Clone,Copy)]
pub struct Font;

impl Font {
    /// characters without a WinAnsi code are measured as the `?` shown in their place
    fn lookup(ascii: &[u16; 95], high: &[u16; 32], ch: &char) -> f32 {
        let width = match win_ansi(*ch).unwrap_or(b'?') {
            byte @ 0x20..=0x7E => ascii[usize::from(byte - 0x20)],
            byte @ 0x80..=0x9F => high[usize::from(byte - 0x80)],
            _ => FALLBACK_WIDTH,
        };

        f32::from(width)
    }
}

impl FontType for Font {
    fn new() -> Self {
        Font
    }

    fn normal(&self, ch: &char, font_size: f32) -> f32 {
        Font::standardize(Font::lookup(&HELVETICA, &HELVETICA_HIGH, ch), font_size)
    }

    fn bold(&self, ch: &char, font_size: f32) -> f32 {
        Font::standardize(Font::lookup(&HELVETICA_BOLD, &HELVETICA_BOLD_HIGH, ch), font_size)
    }

    fn italic(&self, ch: &char, font_size: f32) -> f32 {
        self.normal(ch, font_size)
    }

    fn bold_italic(&self, ch: &char, font_size: f32) -> f32 {
        self.bold(ch, font_size)
    }
}
