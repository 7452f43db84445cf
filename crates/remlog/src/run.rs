use std::path::Path;

use chrono::{DateTime, Local};

use crate::config::SyncConfig;
use crate::schedule::{self, Schedule};
use crate::source::ReminderSource;
use crate::state::{self, DayState};
use crate::sync;

/// Totals for one invocation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Run every list that is due under the current schedule window.
///
/// Lists are isolated from each other: a fatal error in one is counted and
/// the remaining lists still run. Scheduled lists that already captured
/// something today are skipped; always-on lists run every invocation.
pub fn run(
    source: &dyn ReminderSource,
    config: &SyncConfig,
    state_dir: &Path,
    now: DateTime<Local>,
) -> RunReport {
    let window = schedule::current_window(now);
    tracing::info!("current schedule window: {window:?}");

    let today = now.date_naive();
    state::cleanup_stale(state_dir, today);
    let mut day_state = DayState::load(state_dir, today);

    let mut report = RunReport::default();
    for list in &config.lists {
        if !list.schedule.is_due(window) {
            continue;
        }
        if list.schedule != Schedule::Always && day_state.is_processed(&list.key) {
            tracing::info!("skipping {} (already processed today)", list.key);
            report.skipped += 1;
            continue;
        }

        match sync::sync_list(source, list, &config.daily_notes_folder, now) {
            Ok(outcome) => {
                report.succeeded += 1;
                if outcome.written > 0 {
                    tracing::info!("captured {} item(s) from {}", outcome.written, list.key);
                    if list.schedule != Schedule::Always {
                        day_state.mark_processed(&list.key, outcome.written, now);
                        if let Err(error) = day_state.save(state_dir, today) {
                            tracing::warn!("could not record day state: {error}");
                        }
                    }
                }
            }
            Err(error) => {
                tracing::error!("failed to sync {}: {error}", list.key);
                report.failed += 1;
            }
        }
    }
    report
}
