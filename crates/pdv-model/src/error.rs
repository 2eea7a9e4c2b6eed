use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("record must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
