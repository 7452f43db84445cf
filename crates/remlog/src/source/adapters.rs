use std::sync::Arc;

use crate::error::SyncResult;

use super::types::Reminder;

/// Narrow interface over the external reminders service.
///
/// Implementations wrap whatever bridge the platform offers; everything
/// above this trait is bridge-agnostic and testable with a fake.
pub trait ReminderSource: Send + Sync {
    fn id(&self) -> &str {
        "unsupported"
    }

    /// All items in `list_name` that are not yet completed.
    fn fetch_incomplete(&self, list_name: &str) -> SyncResult<Vec<Reminder>>;

    /// Flip a previously fetched item to completed. Irreversible from this
    /// program's perspective.
    fn mark_complete(&self, reminder: &Reminder) -> SyncResult<()>;
}

pub type SharedSource = Arc<dyn ReminderSource>;

#[cfg(target_os = "macos")]
pub mod macos;
#[cfg(any(not(target_os = "macos"), test))]
pub mod portable;
