use std::path::PathBuf;

/// Process configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory the session storage files live in.
    pub storage_dir: PathBuf,
    /// Whether to bootstrap the store with the bundled demo dataset.
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let storage_dir = std::env::var("UROOM_STORAGE_DIR")
            .unwrap_or_else(|_| ".uroom".into())
            .into();
        let seed_demo = std::env::var("UROOM_SEED_DEMO")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);
        Ok(Self {
            storage_dir,
            seed_demo,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(".uroom"),
            seed_demo: true,
        }
    }
}
