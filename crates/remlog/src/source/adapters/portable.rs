use crate::error::{SyncError, SyncResult};
use crate::source::types::Reminder;

use super::ReminderSource;

/// Fallback source for platforms without a Reminders scripting bridge.
#[derive(Debug, Default)]
pub struct PortableSource;

impl PortableSource {
    pub fn new() -> Self {
        Self
    }
}

impl ReminderSource for PortableSource {
    fn fetch_incomplete(&self, _list_name: &str) -> SyncResult<Vec<Reminder>> {
        Err(source_not_supported("fetch_incomplete"))
    }

    fn mark_complete(&self, _reminder: &Reminder) -> SyncResult<()> {
        Err(source_not_supported("mark_complete"))
    }
}

fn source_not_supported(operation: &str) -> SyncError {
    SyncError::SourceUnavailable(format!(
        "reminders are not supported on this platform: {operation}"
    ))
}
