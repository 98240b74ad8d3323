use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeadboardError>;

#[derive(Debug, Error)]
pub enum LeadboardError {
    #[error("Lead not found: {0}")]
    LeadNotFound(String),

    #[error("Invalid lead status: {0}")]
    InvalidStatus(String),

    #[error("Invalid lead ID: {0:?}")]
    InvalidLeadId(String),

    #[error("Duplicate lead ID: {0}")]
    DuplicateLeadId(String),

    #[error("Score {0} is outside the range 0-100")]
    InvalidScore(i64),

    #[error("A drag is already in progress for lead {0}")]
    DragInProgress(String),

    #[error("No drag in progress")]
    NoActiveDrag,

    #[error("Lead store not initialized. Run initialize() first.")]
    StoreNotInitialized,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<toml::de::Error> for LeadboardError {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}

impl From<toml::ser::Error> for LeadboardError {
    fn from(err: toml::ser::Error) -> Self {
        Self::ConfigError(err.to_string())
    }
}
