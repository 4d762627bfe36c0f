use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid collector input: {0}")]
    InvalidInput(String),

    #[error("Invalid corpus: {0}")]
    InvalidCorpus(String),

    #[error("Failed to parse input: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors caused by caller-supplied data rather than the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidInput(_) | Error::InvalidCorpus(_) | Error::ParseError(_)
        )
    }
}
