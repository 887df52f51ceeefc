use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The first field names the offending input, the second is the user-facing message.
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),
}

impl CoreError {
    /// The message without the field prefix, suitable for API error bodies.
    pub fn message(&self) -> &str {
        match self {
            CoreError::InvalidInput(_, message) => message,
        }
    }
}
