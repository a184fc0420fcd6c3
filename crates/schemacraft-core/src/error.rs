use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid schema json: {0}")]
    Json(#[from] serde_json::Error),
}
