use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SyncError, SyncResult};
use crate::note::EntryFormat;
use crate::schedule::Schedule;

pub const CONFIG_FILENAME: &str = "remlog.json";
pub const CONFIG_VERSION: &str = "1.0.0";

/// Top-level configuration: where the vault lives and which lists to capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncConfig {
    pub version: String,
    /// Absolute path to the folder holding `YYYY-MM-DD.md` daily notes.
    pub daily_notes_folder: PathBuf,
    pub lists: Vec<ListConfig>,
}

/// One Reminders list and how its items land in the daily note.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListConfig {
    /// Stable key used for logging and day-state tracking.
    pub key: String,
    /// Name of the list inside the Reminders application.
    pub reminders_list: String,
    /// When set, entries are inserted after this marker in the existing
    /// note instead of being appended as timestamped lines.
    #[serde(default)]
    pub marker: Option<String>,
    #[serde(default)]
    pub format: EntryFormat,
    #[serde(default)]
    pub schedule: Schedule,
}

impl SyncConfig {
    pub fn default_new() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        Self {
            version: CONFIG_VERSION.to_string(),
            daily_notes_folder: home.join("Documents/obsidian/Daily"),
            lists: vec![ListConfig {
                key: "log".to_string(),
                reminders_list: "Log".to_string(),
                marker: None,
                format: EntryFormat::Plain,
                schedule: Schedule::Always,
            }],
        }
    }
}

/// Load the configuration from `dir`, writing a default one first if none
/// exists yet.
pub fn load_or_create_config(dir: &Path) -> SyncResult<SyncConfig> {
    std::fs::create_dir_all(dir).map_err(|error| {
        SyncError::InvalidConfig(format!(
            "failed to create config directory {}: {error}",
            dir.display()
        ))
    })?;

    let path = config_path(dir);
    if !path.exists() {
        let config = SyncConfig::default_new();
        write_config(&path, &config)?;
        return Ok(config);
    }

    let data = std::fs::read_to_string(&path).map_err(|error| {
        SyncError::InvalidConfig(format!("failed to read {}: {error}", path.display()))
    })?;
    let config: SyncConfig = serde_json::from_str(&data).map_err(|error| {
        SyncError::InvalidConfig(format!("failed to parse {}: {error}", path.display()))
    })?;

    if config.version != CONFIG_VERSION {
        return Err(SyncError::InvalidConfig(format!(
            "unsupported config version {} in {} (expected {CONFIG_VERSION})",
            config.version,
            path.display()
        )));
    }

    Ok(config)
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

fn write_config(path: &Path, config: &SyncConfig) -> SyncResult<()> {
    let data = serde_json::to_string_pretty(config).map_err(|error| {
        SyncError::InvalidConfig(format!("failed to serialize config: {error}"))
    })?;
    std::fs::write(path, data).map_err(|error| {
        SyncError::InvalidConfig(format!("failed to write {}: {error}", path.display()))
    })?;
    Ok(())
}
