use crate::{
    domain::{BoardConfig, Lead},
    error::{LeadboardError, Result},
    storage::Storage,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

/// File-based storage implementation
pub struct FileStorage {
    root_path: PathBuf,
}

impl FileStorage {
    const LEADBOARD_DIR: &'static str = ".leadboard";
    const LEADS_FILE: &'static str = "leads.json";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Creates a new FileStorage instance for the given project root
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::LEADBOARD_DIR),
        }
    }

    fn leads_file(&self) -> PathBuf {
        self.root_path.join(Self::LEADS_FILE)
    }

    fn config_file(&self) -> PathBuf {
        self.root_path.join(Self::CONFIG_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        if !self.config_file().exists() {
            self.save_config(&BoardConfig::default()).await?;
        }

        if !self.leads_file().exists() {
            self.save_leads(&[]).await?;
        }

        info!(path = %self.root_path.display(), "lead storage initialized");
        Ok(())
    }

    async fn save_leads(&self, leads: &[Lead]) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(leads)?;
        fs::write(self.leads_file(), json).await?;
        Ok(())
    }

    async fn load_leads(&self) -> Result<Vec<Lead>> {
        let leads_file = self.leads_file();

        if !leads_file.exists() {
            return Err(LeadboardError::StoreNotInitialized);
        }

        let contents = fs::read_to_string(&leads_file).await?;
        let leads: Vec<Lead> = serde_json::from_str(&contents)?;

        Ok(leads)
    }

    async fn save_config(&self, config: &BoardConfig) -> Result<()> {
        config.validate()?;
        self.ensure_directory_exists(&self.root_path).await?;

        let toml = toml::to_string_pretty(config)?;
        fs::write(self.config_file(), toml).await?;

        Ok(())
    }

    async fn load_config(&self) -> Result<BoardConfig> {
        let config_file = self.config_file();

        if !config_file.exists() {
            return Ok(BoardConfig::default());
        }

        let contents = fs::read_to_string(&config_file).await?;
        let config: BoardConfig = toml::from_str(&contents)?;
        config.validate()?;

        Ok(config)
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.leads_file().exists()
    }
}
