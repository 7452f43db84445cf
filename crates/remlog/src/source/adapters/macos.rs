use std::sync::Once;

use platform_macos::{applescript_escape, run_applescript};

use crate::error::{SyncError, SyncResult};
use crate::source::types::{parse_reminder_lines, Reminder};

use super::ReminderSource;

/// AppleScript-backed reminder source.
///
/// Talks to the Reminders application through `osascript`. The app is woken
/// in the background before the first query; a cold launch otherwise tends
/// to time out the first fetch.
#[derive(Debug)]
pub struct MacosSource {
    woken: Once,
}

impl MacosSource {
    pub fn new() -> Self {
        Self { woken: Once::new() }
    }

    fn wake(&self) {
        self.woken.call_once(|| {
            if let Err(error) = run_applescript(WAKE_SCRIPT) {
                tracing::warn!("could not wake Reminders: {error}");
            }
        });
    }
}

impl Default for MacosSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReminderSource for MacosSource {
    fn id(&self) -> &str {
        "applescript"
    }

    fn fetch_incomplete(&self, list_name: &str) -> SyncResult<Vec<Reminder>> {
        self.wake();
        let output = run_applescript(&fetch_script(list_name)).map_err(|error| {
            SyncError::SourceUnavailable(format!(
                "failed to read reminders list {list_name}: {error}"
            ))
        })?;
        Ok(parse_reminder_lines(&output))
    }

    fn mark_complete(&self, reminder: &Reminder) -> SyncResult<()> {
        run_applescript(&mark_complete_script(&reminder.id))
            .map(|_| ())
            .map_err(|error| {
                SyncError::MutationFailed(format!(
                    "failed to mark reminder {} complete: {error}",
                    reminder.id
                ))
            })
    }
}

const WAKE_SCRIPT: &str = "do shell script \"open -a Reminders -g\"\ndelay 2";

/// Script emitting one `id|YYYY-MM-DDTHH:MM:SSZ|text` line per incomplete
/// reminder. Resolving `list` by name makes a missing list fail the script
/// instead of silently yielding nothing.
fn fetch_script(list_name: &str) -> String {
    let escaped = applescript_escape(list_name);
    format!(
        r#"tell application "Reminders"
	set captureList to list "{escaped}"
	set output to ""
	repeat with r in (reminders of captureList whose completed is false)
		set remCreated to creation date of r
		set y to year of remCreated
		set m to text -2 thru -1 of ("0" & (month of remCreated as integer))
		set d to text -2 thru -1 of ("0" & day of remCreated)
		set h to text -2 thru -1 of ("0" & hours of remCreated)
		set mins to text -2 thru -1 of ("0" & minutes of remCreated)
		set s to text -2 thru -1 of ("0" & seconds of remCreated)
		set stamp to y & "-" & m & "-" & d & "T" & h & ":" & mins & ":" & s & "Z"
		set output to output & (id of r) & "|" & stamp & "|" & (name of r) & linefeed
	end repeat
	return output
end tell"#
    )
}

fn mark_complete_script(reminder_id: &str) -> String {
    let escaped = applescript_escape(reminder_id);
    format!(
        r#"tell application "Reminders"
	set r to first reminder whose id is "{escaped}"
	set completed of r to true
end tell"#
    )
}
