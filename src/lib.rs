//! # Introduction
//!
//! txtpdf turns a plain text file with inline formatting directives into a paginated PDF.
//! Every line of the source is one token: either a directive that flips a formatting switch,
//! or literal text that is appended to the current paragraph in the current style. Built on
//! top of pdf_writer (Typst) with the base-14 Helvetica family, so nothing is embedded.
//!
//! ## Directives
//! | Line | Effect |
//! |---|---|
//! | `.large` / `.normal` | large (30pt) or normal (12pt) text |
//! | `.bold` / `.italics` | bold weight / italic slant, they combine |
//! | `.regular` | regular weight, the slant is kept |
//! | `.fill` / `.nofill` | justified or left aligned paragraphs |
//! | `.indent <n>` | adds the signed `n` to the indent level |
//! | `.paragraph` | starts a new paragraph |
//!
//! Anything else that is not an empty line is text. Formatting is never reset by
//! `.paragraph`, only by the directives above.
//!
//! # Basic Usage
//! The interpreter feeds any [`DocumentSink`](traits::DocumentSink). [`Doc`](types::Doc)
//! renders PDF, a `Vec<Paragraph>` keeps the paragraphs in memory.
//!
//! ```
//! use txtpdf::{ interpreter::{ interpret, Formatter }, types::Paragraph };
//!
//! let mut document: Vec<Paragraph> = Vec::new();
//! interpret(".bold\nHello,\nworld.".lines(), Formatter::default(), &mut document)?;
//!
//! assert_eq!(document[0].text(), "Hello, world.");
//! # Ok::<(), txtpdf::types::Error>(())
//! ```
//!
//! ### Render to a file
//! ```no_run
//! use std::path::Path;
//! use txtpdf::{ config::Config, types::Doc };
//!
//! let source = txtpdf::read_source(Path::new("file.txt"))?;
//! let mut doc = Doc::new(Config::default());
//! txtpdf::convert(&source, 1, &mut doc)?;
//! doc.save(Path::new("txttopdf.pdf"))?;
//! # Ok::<(), txtpdf::types::Error>(())
//! ```
pub mod config;
pub mod interpreter;
pub mod traits;
pub mod types;

use std::path::Path;

use interpreter::{ Formatter, Interpreter };
use traits::DocumentSink;
use types::{ Doc, Error, Result };

/// reads the whole source, failing with `InputUnavailable`
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source
    })
}

/// the source split into line tokens, `\r\n` endings included
pub fn tokens(source: &str) -> impl Iterator<Item = &str> {
    source.lines()
}

/// Interprets `source` into the PDF `doc` `copies` times. Every copy starts
/// from the default formatting state.
pub fn convert(source: &str, copies: usize, doc: &mut Doc) -> Result<()> {
    convert_into(source, Formatter::from(&doc.config), copies, doc)
}

/// `convert` for any sink
pub fn convert_into<D>(source: &str, formatter: Formatter, copies: usize, document: &mut D) -> Result<()>
where
    D: DocumentSink + ?Sized,
{
    for copy in 0..copies {
        tracing::debug!(copy = copy + 1, copies, "interpreting source");
        Interpreter::new(formatter).interpret(tokens(source), document)?;
    }

    Ok(())
}
