use crate::error::{DocliError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the configuration directory (used by tests and sandboxed setups).
pub const CONFIG_DIR_ENV: &str = "DOCLI_CONFIG_DIR";

pub const DEFAULT_API_URL: &str = "https://api.digitalocean.com/v2";

/// Persisted settings, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocliConfig {
    /// The stored API token. Only one token is kept at a time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Base URL of the API, for pointing the client at another endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl DocliConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DocliConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        write_private(&config_path, &content)?;
        log::debug!("wrote config to {}", config_path.display());
        Ok(())
    }

    /// Replaces the stored token.
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DocliError::Validation("Token cannot be empty".into()));
        }
        self.token = Some(token.to_string());
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }
}

/// Resolves the configuration directory: `DOCLI_CONFIG_DIR` if set, otherwise
/// the platform config dir.
pub fn config_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    ProjectDirs::from("com", "docli", "docli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DocliError::Config("Could not determine config dir".into()))
}

// The file holds a credential.
/// Writes `content` to a file only the owner can read. The mode is narrowed
/// before any bytes land, including when the file already existed.
#[cfg(unix)]
fn write_private(path: &Path, content: &str) -> Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.set_permissions(fs::Permissions::from_mode(0o600))?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
