/// Failure reading or writing the persisted word list
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Word not found: {0}")]
    WordNotFound(String),

    #[error("Failed to persist word list: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No words to study")]
    NothingToStudy,

    #[error("Not reviewing any card")]
    NotReviewing,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Definition fetch cancelled after {completed}/{total} words")]
    Cancelled { completed: usize, total: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech disabled")]
    Disabled,

    #[error("Speech backend failed: {0}")]
    Backend(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
