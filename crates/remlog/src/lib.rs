pub mod config;
pub mod error;
pub mod note;
pub mod run;
pub mod schedule;
pub mod source;
pub mod state;
pub mod sync;

pub use crate::config::{ListConfig, SyncConfig};
pub use crate::error::{SyncError, SyncResult};
pub use crate::run::RunReport;
pub use crate::source::{default_source, Reminder, ReminderSource, SharedSource};
