use crate::infrastructure::file_repository::is_plain_key;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_session_key")]
    pub session_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl StorageSettings {
    /// Each store needs its own entry, and both keys must be usable as file names.
    fn validate(&self) -> anyhow::Result<()> {
        for (name, key) in [("session_key", &self.session_key), ("theme_key", &self.theme_key)] {
            anyhow::ensure!(
                is_plain_key(key),
                "storage.{name} '{key}' must be non-empty and use only ASCII letters, digits, '-' or '_'"
            );
        }
        anyhow::ensure!(
            self.session_key != self.theme_key,
            "storage.session_key and storage.theme_key must differ (both are '{}')",
            self.session_key
        );
        Ok(())
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            dir: default_storage_dir(),
            session_key: default_session_key(),
            theme_key: default_theme_key(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_storage_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_session_key() -> String {
    "auth-storage".to_string()
}

fn default_theme_key() -> String {
    "theme-storage".to_string()
}

/// Load `config/dashboard.*` (optional) overlaid by `SLATE__SECTION__KEY` variables.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from(config::File::with_name("config/dashboard").required(false))
}

pub fn load_app_config_from<S>(source: S) -> anyhow::Result<AppConfig>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = config::Config::builder()
        .add_source(source)
        .add_source(config::Environment::with_prefix("SLATE").separator("__"))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.storage.validate()?;
    Ok(config)
}
