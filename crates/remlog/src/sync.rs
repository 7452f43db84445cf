use std::path::Path;

use chrono::{DateTime, Local};

use crate::config::ListConfig;
use crate::error::SyncResult;
use crate::note;
use crate::source::{Reminder, ReminderSource};

/// Counts reported by one list capture.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SyncOutcome {
    /// Entries written to the daily note.
    pub written: usize,
    /// Entries subsequently marked complete at the source.
    pub marked: usize,
}

/// Capture one list into the daily note for `now`'s date.
///
/// Single pass: fetch, write all entries, then mark each written item
/// complete. An item is never marked before its line has been written; a
/// failed mark leaves that item incomplete for the next run and does not
/// abort the remaining items.
pub fn sync_list(
    source: &dyn ReminderSource,
    list: &ListConfig,
    notes_folder: &Path,
    now: DateTime<Local>,
) -> SyncResult<SyncOutcome> {
    tracing::info!("syncing list {}", list.reminders_list);

    let mut reminders = source.fetch_incomplete(&list.reminders_list)?;
    if reminders.is_empty() {
        tracing::info!("no incomplete reminders in {}", list.reminders_list);
        return Ok(SyncOutcome::default());
    }

    reminders.sort_by(|a, b| a.created_at.cmp(&b.created_at));
    for reminder in &reminders {
        tracing::info!("  - {}", preview(&reminder.text));
    }

    let path = note::daily_note_path(notes_folder, now.date_naive());
    write_entries(&path, list, &reminders)?;

    let mut marked = 0usize;
    for reminder in &reminders {
        match source.mark_complete(reminder) {
            Ok(()) => marked += 1,
            Err(error) => tracing::warn!("leaving reminder incomplete: {error}"),
        }
    }
    if marked < reminders.len() {
        tracing::warn!("marked {marked} of {} reminder(s) complete", reminders.len());
    }

    Ok(SyncOutcome {
        written: reminders.len(),
        marked,
    })
}

fn write_entries(path: &Path, list: &ListConfig, reminders: &[Reminder]) -> SyncResult<()> {
    match &list.marker {
        Some(marker) => {
            let lines: Vec<String> = reminders
                .iter()
                .enumerate()
                .map(|(i, r)| note::format_entry(&r.text, list.format, i + 1))
                .collect();
            let block = format!("{}\n", lines.join("\n"));
            note::insert_entries(path, marker, &block)
        }
        None => {
            let lines: Vec<String> = reminders
                .iter()
                .map(|r| note::timestamped_line(&r.text, r.created_at.with_timezone(&Local)))
                .collect();
            note::append_entries(path, &lines)
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(60).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    use crate::error::SyncError;
    use crate::note::EntryFormat;
    use crate::schedule::Schedule;

    use super::*;

    struct FakeSource {
        reminders: Vec<Reminder>,
        fail_mark: HashSet<String>,
        marked: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn new(reminders: Vec<Reminder>) -> Self {
            Self {
                reminders,
                fail_mark: HashSet::new(),
                marked: Mutex::new(Vec::new()),
            }
        }

        fn failing_mark(mut self, id: &str) -> Self {
            self.fail_mark.insert(id.to_string());
            self
        }

        fn marked_ids(&self) -> Vec<String> {
            self.marked.lock().expect("marked lock").clone()
        }
    }

    impl ReminderSource for FakeSource {
        fn fetch_incomplete(&self, _list_name: &str) -> SyncResult<Vec<Reminder>> {
            Ok(self.reminders.clone())
        }

        fn mark_complete(&self, reminder: &Reminder) -> SyncResult<()> {
            if self.fail_mark.contains(&reminder.id) {
                return Err(SyncError::MutationFailed(format!(
                    "no reminder with id {}",
                    reminder.id
                )));
            }
            self.marked.lock().expect("marked lock").push(reminder.id.clone());
            Ok(())
        }
    }

    fn reminder(id: &str, minute: u32, text: &str) -> Reminder {
        // Build from a local wall-clock time so rendered HH:MM prefixes are
        // stable regardless of the machine's timezone.
        let created_local = Local
            .with_ymd_and_hms(2024, 3, 1, 14, minute, 0)
            .single()
            .expect("valid local time");
        Reminder {
            id: id.to_string(),
            created_at: created_local.with_timezone(&Utc),
            text: text.to_string(),
        }
    }

    fn list(marker: Option<&str>, format: EntryFormat) -> ListConfig {
        ListConfig {
            key: "log".to_string(),
            reminders_list: "Log".to_string(),
            marker: marker.map(|m| m.to_string()),
            format,
            schedule: Schedule::Always,
        }
    }

    fn local_now() -> DateTime<Local> {
        Local
            .with_ymd_and_hms(2024, 3, 1, 14, 10, 0)
            .single()
            .expect("valid local time")
    }

    #[test]
    fn appends_one_timestamped_line_per_reminder() {
        let dir = tempdir().expect("tempdir");
        let source = FakeSource::new(vec![
            reminder("a", 5, "Buy milk"),
            reminder("b", 6, "Call Alice"),
        ]);

        let outcome =
            sync_list(&source, &list(None, EntryFormat::Plain), dir.path(), local_now())
                .expect("sync");

        assert_eq!(outcome, SyncOutcome { written: 2, marked: 2 });
        let content =
            std::fs::read_to_string(dir.path().join("2024-03-01.md")).expect("read note");
        assert_eq!(content, "14:05 Buy milk\n14:06 Call Alice\n");
        assert_eq!(source.marked_ids(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn entries_are_ordered_by_creation_time() {
        let dir = tempdir().expect("tempdir");
        let source = FakeSource::new(vec![
            reminder("late", 30, "Call Alice"),
            reminder("early", 5, "Buy milk"),
        ]);

        sync_list(&source, &list(None, EntryFormat::Plain), dir.path(), local_now())
            .expect("sync");

        let content =
            std::fs::read_to_string(dir.path().join("2024-03-01.md")).expect("read note");
        assert_eq!(content, "14:05 Buy milk\n14:30 Call Alice\n");
    }

    #[test]
    fn empty_list_touches_nothing() {
        let dir = tempdir().expect("tempdir");
        let source = FakeSource::new(Vec::new());

        let outcome =
            sync_list(&source, &list(None, EntryFormat::Plain), dir.path(), local_now())
                .expect("sync");

        assert_eq!(outcome, SyncOutcome::default());
        assert!(!dir.path().join("2024-03-01.md").exists());
    }

    #[test]
    fn mutation_failure_skips_only_that_item() {
        let dir = tempdir().expect("tempdir");
        let source = FakeSource::new(vec![
            reminder("a", 5, "Buy milk"),
            reminder("b", 6, "Call Alice"),
        ])
        .failing_mark("a");

        let outcome =
            sync_list(&source, &list(None, EntryFormat::Plain), dir.path(), local_now())
                .expect("sync");

        assert_eq!(outcome, SyncOutcome { written: 2, marked: 1 });
        // The failed item's line is already durable.
        let content =
            std::fs::read_to_string(dir.path().join("2024-03-01.md")).expect("read note");
        assert!(content.contains("Buy milk"));
        assert_eq!(source.marked_ids(), vec!["b".to_string()]);
    }

    #[test]
    fn write_failure_leaves_reminders_unmarked() {
        let dir = tempdir().expect("tempdir");
        let missing_folder = dir.path().join("missing");
        let source = FakeSource::new(vec![reminder("a", 5, "Buy milk")]);

        let err = sync_list(
            &source,
            &list(None, EntryFormat::Plain),
            &missing_folder,
            local_now(),
        )
        .expect_err("expected write failure");

        assert!(matches!(err, SyncError::WriteFailed(_)));
        assert!(source.marked_ids().is_empty());
    }

    #[test]
    fn fetch_failure_aborts_before_any_write() {
        struct UnreachableSource;
        impl ReminderSource for UnreachableSource {
            fn fetch_incomplete(&self, list_name: &str) -> SyncResult<Vec<Reminder>> {
                Err(SyncError::SourceUnavailable(format!(
                    "no such list: {list_name}"
                )))
            }
            fn mark_complete(&self, _reminder: &Reminder) -> SyncResult<()> {
                unreachable!("nothing was fetched");
            }
        }

        let dir = tempdir().expect("tempdir");
        let err = sync_list(
            &UnreachableSource,
            &list(None, EntryFormat::Plain),
            dir.path(),
            local_now(),
        )
        .expect_err("expected source failure");

        assert!(matches!(err, SyncError::SourceUnavailable(_)));
        assert!(!dir.path().join("2024-03-01.md").exists());
    }

    #[test]
    fn marker_mode_inserts_formatted_entries() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("2024-03-01.md");
        std::fs::write(&path, "**Three Priorities:**\n\n## Next\n").expect("write template");
        let source = FakeSource::new(vec![
            reminder("a", 5, "Ship release"),
            reminder("b", 6, "Review PR"),
        ]);

        let outcome = sync_list(
            &source,
            &list(Some("**Three Priorities:**"), EntryFormat::Checkbox),
            dir.path(),
            local_now(),
        )
        .expect("sync");

        assert_eq!(outcome, SyncOutcome { written: 2, marked: 2 });
        let content = std::fs::read_to_string(&path).expect("read note");
        assert_eq!(
            content,
            "**Three Priorities:**\n1. [ ] Ship release\n2. [ ] Review PR\n\n## Next\n"
        );
    }

    #[test]
    fn marker_mode_fails_without_the_template_note() {
        let dir = tempdir().expect("tempdir");
        let source = FakeSource::new(vec![reminder("a", 5, "Ship release")]);

        let err = sync_list(
            &source,
            &list(Some("**Three Priorities:**"), EntryFormat::Checkbox),
            dir.path(),
            local_now(),
        )
        .expect_err("expected write failure");

        assert!(matches!(err, SyncError::WriteFailed(_)));
        assert!(source.marked_ids().is_empty());
    }
}
