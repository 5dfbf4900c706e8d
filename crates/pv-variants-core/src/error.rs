use thiserror::Error;

#[derive(Debug, Error)]
pub enum PvVariantsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl PvVariantsError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        PvVariantsError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for PvVariantsError {
    fn from(e: serde_json::Error) -> Self {
        PvVariantsError::SerializationError(e.to_string())
    }
}
