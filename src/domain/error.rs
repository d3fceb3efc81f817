use thiserror::Error;

/// Unified error type for help rendering and its surroundings
#[derive(Error, Debug)]
pub enum HelpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Output error: {0}")]
    Output(String),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type HelpResult<T> = Result<T, HelpError>;

impl HelpError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
