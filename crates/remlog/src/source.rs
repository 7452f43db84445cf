mod adapters;
pub mod factory;
pub mod types;

pub use adapters::{ReminderSource, SharedSource};
pub use factory::default_source;
pub use types::Reminder;
