use crate::types::{Error, Result};

/// The closed set of formatting commands
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Directive {
    Large,
    Normal,
    Regular,
    Bold,
    Italics,
    Fill,
    NoFill,
    /// signed, cumulative
    Indent(i32),
    Paragraph,
}

/// one line of source text
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum Token<'a> {
    Directive(Directive),
    Blank,
    Literal(&'a str),
}

impl<'a> Token<'a> {
    /// Classifies a line. Matching is exact and case-sensitive; anything that is
    /// not a directive and not empty is literal text.
    ///
    /// `line` is the 1-based source line, only used for error reporting.
    pub fn classify(text: &'a str, line: usize) -> Result<Token<'a>> {
        let directive = match text {
            "" => return Ok(Token::Blank),
            ".large" => Directive::Large,
            ".normal" => Directive::Normal,
            ".regular" => Directive::Regular,
            ".bold" => Directive::Bold,
            ".italics" => Directive::Italics,
            ".fill" => Directive::Fill,
            ".nofill" => Directive::NoFill,
            ".paragraph" => Directive::Paragraph,
            _ => {
                if text.split(' ').next() != Some(".indent") {
                    return Ok(Token::Literal(text));
                }

                Directive::Indent(Token::indent_parameter(text, line)?)
            }
        };

        Ok(Token::Directive(directive))
    }

    /// the whole remainder after `.indent ` must be a signed integer
    fn indent_parameter(text: &str, line: usize) -> Result<i32> {
        let malformed = |reason| Error::MalformedDirective {
            line,
            token: text.to_string(),
            reason
        };

        let parameter = match text.split_once(' ') {
            Some((_, parameter)) if !parameter.is_empty() => parameter,
            _ => return Err(malformed("missing indent amount")),
        };

        match parameter.split_once(' ') {
            Some((amount, _)) if amount.parse::<i32>().is_ok() => {
                Err(malformed("unexpected text after the indent amount"))
            },
            _ => parameter.parse::<i32>().map_err(|_| malformed("indent amount is not a signed integer")),
        }
    }
}
