use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never produced a response (connection refused, DNS,
    /// reset, unreadable body).
    Transport,
    /// The server answered with a non-success status.
    Status,
    /// The response body was not the expected shape.
    Decode,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Transport => write!(f, "Transport error"),
            ErrorKind::Status => write!(f, "API error"),
            ErrorKind::Decode => write!(f, "Malformed response"),
        }
    }
}

/// Error returned by a [`crate::Backend`] call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Creates an error of the given kind.
    #[inline]
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a [`ErrorKind::Transport`] error.
    #[inline]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::Transport, message)
    }

    /// Creates a [`ErrorKind::Status`] error.
    #[inline]
    pub fn status<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::Status, message)
    }

    /// Creates a [`ErrorKind::Decode`] error.
    #[inline]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::Decode, message)
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl StdError for Error {}
