use crate::{
    domain::{BoardConfig, Lead},
    error::Result,
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;

/// Storage trait for the lead seed and board configuration
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Replaces the stored lead list
    async fn save_leads(&self, leads: &[Lead]) -> Result<()>;

    /// Loads the stored lead list in its saved order
    async fn load_leads(&self) -> Result<Vec<Lead>>;

    /// Saves the board configuration
    async fn save_config(&self, config: &BoardConfig) -> Result<()>;

    /// Loads the board configuration, falling back to the default
    async fn load_config(&self) -> Result<BoardConfig>;

    /// Checks if the storage has been initialized
    async fn is_initialized(&self) -> bool;
}
