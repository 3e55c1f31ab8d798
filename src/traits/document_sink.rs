use crate::types::{Paragraph, Result};

/// Append-only destination for finished paragraphs
pub trait DocumentSink {
    /// what `close` hands back once the document is finalized
    type Output;

    fn add(&mut self, paragraph: Paragraph);

    fn close(self) -> Result<Self::Output> where Self: Sized;
}

/// in-memory document, closing returns the collected paragraphs
impl DocumentSink for Vec<Paragraph> {
    type Output = Vec<Paragraph>;

    fn add(&mut self, paragraph: Paragraph) {
        self.push(paragraph);
    }

    fn close(self) -> Result<Self::Output> {
        Ok(self)
    }
}
