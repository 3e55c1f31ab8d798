use core::fmt;
use std::{io, path::PathBuf};
use derive_more::From;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug,From)]
pub enum Error {
    /// `.indent` token without a signed integer parameter, `line` is 1-based
    MalformedDirective { line: usize, token: String, reason: &'static str },
    /// the token source could not be read
    InputUnavailable { path: PathBuf, source: io::Error },
   #[from]
    SaveError(io::Error),
   #[from]
    Config(serde_json::Error),
    InvalidConfig(String),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InputUnavailable { source, .. } => Some(source),
            Error::SaveError(e) => Some(e),
            Error::Config(e) => Some(e),
            _ => None
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MalformedDirective { line, token, reason } => {
                write!(f, "line {line}: malformed directive `{token}`: {reason}, expected `.indent <signed integer>`")
            },
            Error::InputUnavailable { path, source } => {
                write!(f, "cannot read {}: {source}", path.display())
            },
            Error::SaveError(e) => write!(f, "failed to write document: {e}"),
            Error::Config(e) => write!(f, "invalid config file: {e}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}
