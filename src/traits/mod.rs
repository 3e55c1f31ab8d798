mod document_sink;
mod font_type;

pub use document_sink::DocumentSink;
pub use font_type::FontType;
