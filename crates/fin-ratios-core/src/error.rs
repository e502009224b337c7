use thiserror::Error;

#[derive(Debug, Error)]
pub enum FinRatiosError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Unknown ratio '{name}'")]
    UnknownRatio { name: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for FinRatiosError {
    fn from(e: serde_json::Error) -> Self {
        FinRatiosError::Serialization(e.to_string())
    }
}
