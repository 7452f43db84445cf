use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{SyncError, SyncResult};

/// Record of one list having been processed today.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedList {
    pub processed_at: String,
    pub count: usize,
}

/// Which scheduled lists already ran on a given day, keyed by list key.
///
/// Persisted as one JSON file per calendar day so a scheduled list captures
/// at most once per day across repeated invocations.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayState(BTreeMap<String, ProcessedList>);

impl DayState {
    /// Load the state for `date`, treating a missing or unreadable file as
    /// empty.
    pub fn load(state_dir: &Path, date: NaiveDate) -> Self {
        let path = state_file_path(state_dir, date);
        let Ok(data) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        serde_json::from_str(&data).unwrap_or_else(|error| {
            tracing::warn!("ignoring corrupt day state {}: {error}", path.display());
            Self::default()
        })
    }

    pub fn save(&self, state_dir: &Path, date: NaiveDate) -> SyncResult<()> {
        std::fs::create_dir_all(state_dir).map_err(|error| {
            SyncError::WriteFailed(format!(
                "failed to create state directory {}: {error}",
                state_dir.display()
            ))
        })?;
        let path = state_file_path(state_dir, date);
        let data = serde_json::to_string_pretty(self).map_err(|error| {
            SyncError::WriteFailed(format!("failed to serialize day state: {error}"))
        })?;
        std::fs::write(&path, data).map_err(|error| {
            SyncError::WriteFailed(format!("failed to write {}: {error}", path.display()))
        })?;
        Ok(())
    }

    pub fn is_processed(&self, list_key: &str) -> bool {
        self.0.contains_key(list_key)
    }

    pub fn mark_processed(&mut self, list_key: &str, count: usize, now: DateTime<Local>) {
        self.0.insert(
            list_key.to_string(),
            ProcessedList {
                processed_at: now.to_rfc3339(),
                count,
            },
        );
    }
}

pub fn state_file_path(state_dir: &Path, date: NaiveDate) -> PathBuf {
    state_dir.join(format!("{}.json", date.format("%Y-%m-%d")))
}

/// Remove state files left over from previous days. Best effort; failures
/// are logged and skipped.
pub fn cleanup_stale(state_dir: &Path, today: NaiveDate) {
    let Ok(entries) = std::fs::read_dir(state_dir) else {
        return;
    };
    let keep = state_file_path(state_dir, today);
    for entry in entries.flatten() {
        let path = entry.path();
        if path == keep || path.extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }
        if let Err(error) = std::fs::remove_file(&path) {
            tracing::debug!("could not remove stale state {}: {error}", path.display());
        }
    }
}
