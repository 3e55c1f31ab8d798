mod directive;
mod doc;
mod error;
mod font;
mod font_reference;
mod font_style;
mod page;
mod run;
mod state;
mod text;
mod text_alignment;
mod writer;

pub use directive::{ Directive, Token };
pub use doc::Doc;
pub use error::{ Error, Result };
pub use font::{ win_ansi, Font };
pub use font_reference::FontReference;
pub use font_style::Style;
pub use page::{ Page, PageContent };
pub use run::{ Paragraph, TextRun };
pub use state::{
    Fill,
    FormattingState,
    Size,
    Slant,
    Weight
};
pub use text::{ Line, TextBlock, Word };
pub use text_alignment::TextAlignment;
pub use writer::{ encode_win_ansi, Writer };
