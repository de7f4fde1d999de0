use derive_more::{Display, From};

/// Errors that end a markdown generation run
///
/// None of these are recoverable: the caller gets the error and the run stops.
#[derive(Debug, Display, From)]
pub enum Error {
    /// Required configuration is missing or the input is unusable
    #[display(fmt = "invalid input: {}", _0)]
    #[from(ignore)]
    InvalidInput(String),

    /// The destination could not be created or written, or a directory
    /// could not be read
    #[display(fmt = "I/O error: {}", _0)]
    Io(std::io::Error),

    /// The base URL could not be used to compose file links
    #[display(fmt = "malformed base URL `{}`: {}", base, reason)]
    #[from(ignore)]
    Url { base: String, reason: String },
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    pub(crate) fn url(base: impl Into<String>, reason: impl ToString) -> Self {
        Error::Url {
            base: base.into(),
            reason: reason.to_string(),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::InvalidInput(_) | Error::Url { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
