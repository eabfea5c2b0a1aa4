use std::fmt::{Display, Formatter};

/// Result type of fallible bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// A transport error.
///
/// Every variant is fatal to the polling loop.
#[derive(Debug)]
pub enum Error {
    /// The terminal transport failed.
    Io(std::io::Error),
    /// The terminal transport accepted fewer bytes than it was handed.
    ShortWrite {
        /// Amount of bytes handed to the transport.
        expected: usize,
        /// Amount of bytes the transport accepted.
        sent: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(error) => write!(f, "I/O error: {error}"),
            Self::ShortWrite { expected, sent } => write!(
                f,
                "Short write to terminal. Expected {expected} bytes, but sent {sent} bytes."
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(error) => Some(error),
            Self::ShortWrite { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error)
    }
}
