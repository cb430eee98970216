use std::fmt;

#[derive(Debug)]
pub enum Error {
    /// No sheet template with this name in the catalog.
    UnknownTemplate(String),
    /// A label referenced a reusable form that was never registered.
    UnknownForm(String),
    Io(std::io::Error),
    /// Failure raised by a caller-supplied label callback, passed through unchanged.
    Content(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownTemplate(name) => write!(f, "unknown sheet template: {name}"),
            Error::UnknownForm(name) => write!(f, "unknown form: {name}"),
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::Content(e) => write!(f, "label content error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Content(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
