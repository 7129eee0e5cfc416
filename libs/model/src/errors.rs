use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("serialization failed")]
    Serialize(#[from] serde_json::Error),
}
