use std::path::Path;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use txtpdf::{
    config::Config,
    convert, convert_into,
    interpreter::Formatter,
    read_source,
    traits::DocumentSink,
    types::{ Doc, Error, Paragraph, Style, Token },
};

const SAMPLE: &str = "\
.large
.bold
Title
.paragraph
.normal
.regular
.fill
.indent +2
Some body text
,with a comma
that wraps.
.paragraph
.italics
.indent -2
Closing words
";

#[test]
fn sample_builds_expected_paragraphs() {
    let mut document: Vec<Paragraph> = Vec::new();
    convert_into(SAMPLE, Formatter::default(), 1, &mut document).unwrap();

    let summary: Vec<(String, Style, f32, f32)> = document.iter()
        .map(|p| (p.text(), p.runs[0].style, p.runs[0].font_size, p.left_margin))
        .collect();

    assert_eq!(summary, vec![
        ("Title".to_string(), Style::Bold, 30.0, 0.0),
        ("Some body text,with a comma that wraps.".to_string(), Style::Regular, 12.0, 40.0),
        ("Closing words".to_string(), Style::Italics, 12.0, 0.0),
    ]);
}

#[test]
fn copies_restart_from_default_state() {
    let mut document: Vec<Paragraph> = Vec::new();
    convert_into(SAMPLE, Formatter::default(), 3, &mut document).unwrap();

    assert_eq!(document.len(), 9);
    assert_eq!(document[3], document[0]);
    assert_eq!(document[8], document[2]);
}

#[test]
fn crlf_sources_are_tokenized_by_line() {
    let mut document: Vec<Paragraph> = Vec::new();
    convert_into(".bold\r\nHello,\r\nworld.\r\n", Formatter::default(), 1, &mut document).unwrap();

    assert_eq!(document[0].text(), "Hello, world.");
}

#[test]
fn pdf_contains_every_word() {
    let mut doc = Doc::new(Config::default());
    convert(SAMPLE, 1, &mut doc).unwrap();
    let bytes = doc.close().unwrap();
    let text = String::from_utf8_lossy(&bytes);

    for word in ["Title", "Some", "body", "text", ",with", "comma", "wraps.", "Closing", "words"] {
        assert!(text.contains(&format!("({word}) Tj")), "missing {word}");
    }
    assert!(text.contains("/Helvetica-Bold 30 Tf"));
    assert!(text.contains("/Helvetica-Oblique 12 Tf"));
}

#[test]
fn malformed_indent_stops_conversion() {
    let mut doc = Doc::new(Config::default());
    let err = convert("text\n.indent\nmore", 1, &mut doc).unwrap_err();

    assert!(matches!(err, Error::MalformedDirective { line: 2, .. }));
    assert!(doc.paragraphs.is_empty());
    assert_eq!(err.to_string(), "line 2: malformed directive `.indent`: missing indent amount, expected `.indent <signed integer>`");
}

#[test]
fn saves_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("file.txt");
    let output = dir.path().join("out.pdf");
    std::fs::write(&input, SAMPLE).unwrap();

    let source = read_source(&input).unwrap();
    let mut doc = Doc::new(Config { title: Some("Sample".to_string()), ..Config::default() });
    convert(&source, 1, &mut doc).unwrap();
    doc.save(&output).unwrap();

    assert!(std::fs::read(&output).unwrap().starts_with(b"%PDF-"));
}

#[test]
fn missing_source_is_input_unavailable() {
    match read_source(Path::new("/nonexistent/file.txt")) {
        Err(Error::InputUnavailable { path, .. }) => assert_eq!(path, Path::new("/nonexistent/file.txt")),
        other => panic!("expected InputUnavailable, got {other:?}"),
    }
}

/// The strings shown with `Tj` in the content streams, in page order. Only
/// suited to text without parentheses or backslashes.
fn shown_text(pdf: &[u8]) -> String {
    let text = String::from_utf8_lossy(pdf);
    let mut chunks: Vec<&str> = text.split(") Tj").collect();
    // whatever follows the last `Tj`
    chunks.pop();

    chunks.iter()
        .filter_map(|chunk| chunk.rfind('(').map(|start| &chunk[start + 1..]))
        .collect()
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|ch| !ch.is_whitespace()).collect()
}

#[test]
fn tab_separated_columns_reach_the_pdf() {
    let mut doc = Doc::new(Config::default());
    convert("col1\tcol2\n.bold\ncol3 \t col4", 1, &mut doc).unwrap();
    let bytes = doc.close().unwrap();

    assert_eq!(shown_text(&bytes), "col1col2col3col4");
}

#[test]
fn typographic_punctuation_is_encoded() {
    let mut doc = Doc::new(Config::default());
    convert("\u{201C}quoted\u{201D} \u{2014} 5\u{20AC}", 1, &mut doc).unwrap();
    let bytes = doc.close().unwrap();

    assert!(!bytes.windows(b"?quoted?".len()).any(|window| window == b"?quoted?"));
}

fn source_line() -> impl Strategy<Value = String> {
    prop_oneof![
        // literal text with spaces and tabs, never starting with `.`
        "[a-zA-Z0-9,!?][a-zA-Z0-9,.!? \t]{0,24}",
        Just(String::new()),
        Just(".bold".to_string()),
        Just(".italics".to_string()),
        Just(".regular".to_string()),
        Just(".large".to_string()),
        Just(".normal".to_string()),
        Just(".fill".to_string()),
        Just(".nofill".to_string()),
        Just(".paragraph".to_string()),
        (-3i32..=3).prop_map(|n| format!(".indent {n:+}")),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn rendered_text_matches_source_without_directives(lines in prop::collection::vec(source_line(), 0..40)) {
        let source = lines.join("\n");

        let mut doc = Doc::new(Config::default());
        convert(&source, 1, &mut doc).unwrap();
        let bytes = doc.close().unwrap();

        let expected: String = lines.iter()
            .filter(|line| matches!(Token::classify(line, 1), Ok(Token::Literal(_))))
            .map(|line| strip_whitespace(line))
            .collect();

        prop_assert_eq!(strip_whitespace(&shown_text(&bytes)), expected);
    }
}
