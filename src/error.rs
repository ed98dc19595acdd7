//! Error type shared by note parsing, layout and the keyboard facade.

use thiserror::Error;

/// Errors raised while parsing note names or building a keyboard.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The string does not follow the `<Letter>[b|#]<Digit>` grammar.
    #[error("invalid note name: {name:?}")]
    Parse {
        /// The offending raw input
        name: String,
    },

    /// A value is outside its allowed range, e.g. the highest note is
    /// below the lowest one or the black-key height ratio is out of bounds.
    #[error("{0}")]
    Range(String),

    /// An argument is unusable: bad options JSON, a null callback from FFI,
    /// a non-positive key width.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn parse(name: &str) -> Self {
        Error::Parse {
            name: name.to_string(),
        }
    }

    /// Stable status code reported through the C FFI.
    pub fn code(&self) -> i32 {
        match self {
            Error::Parse { .. } => 1,
            Error::Range(_) => 2,
            Error::InvalidArgument(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
