use thiserror::Error;

/// Failure talking to a document store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("field '{0}' is out of range")]
    OutOfRange(&'static str),
    #[error("invalid document key '{0}'")]
    InvalidKey(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("transport error: {0}")]
    Transport(String),
}

/// Non-fatal sync failures. The `Display` text is what the presentation
/// layer shows; the underlying store error stays reachable via `source()`.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Failed to load model {id}")]
    LoadFailure {
        id: String,
        #[source]
        source: StoreError,
    },
    #[error("Failed to save model {id}")]
    SaveFailure {
        id: String,
        #[source]
        source: StoreError,
    },
}

impl SyncError {
    pub fn id(&self) -> &str {
        match self {
            SyncError::LoadFailure { id, .. } | SyncError::SaveFailure { id, .. } => id,
        }
    }
}
