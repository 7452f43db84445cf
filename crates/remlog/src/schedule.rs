use chrono::{DateTime, Local, Timelike};
use serde::{Deserialize, Serialize};

/// When a configured list is due to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schedule {
    Morning,
    Evening,
    /// Due on every run.
    #[default]
    Always,
}

const MORNING_HOURS: std::ops::Range<u32> = 5..12;
const EVENING_HOURS: std::ops::Range<u32> = 18..24;

/// Resolve the window the local hour falls in. Outside the morning and
/// evening windows only always-on lists are due.
pub fn current_window(now: DateTime<Local>) -> Schedule {
    let hour = now.hour();
    if MORNING_HOURS.contains(&hour) {
        Schedule::Morning
    } else if EVENING_HOURS.contains(&hour) {
        Schedule::Evening
    } else {
        Schedule::Always
    }
}

impl Schedule {
    /// Whether a list with this schedule runs inside `window`.
    pub fn is_due(self, window: Schedule) -> bool {
        self == Schedule::Always || self == window
    }
}
