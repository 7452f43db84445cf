use chrono::{DateTime, Utc};

/// One incomplete item as reported by the reminders service.
///
/// remlog holds this only for the duration of a run; the service owns the
/// item and remains the source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    /// Opaque service-assigned identifier.
    pub id: String,
    /// Creation date of the reminder.
    pub created_at: DateTime<Utc>,
    pub text: String,
}

/// Parse the scripting bridge's line output, one reminder per line in the
/// form `id|YYYY-MM-DDTHH:MM:SSZ|text`.
///
/// Malformed lines are logged and skipped; order is preserved.
pub fn parse_reminder_lines(output: &str) -> Vec<Reminder> {
    let mut reminders = Vec::new();
    for line in output.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut parts = line.splitn(3, '|');
        let (Some(id), Some(stamp), Some(text)) = (parts.next(), parts.next(), parts.next())
        else {
            tracing::warn!("skipping malformed reminder line: {line}");
            continue;
        };
        let created_at = match DateTime::parse_from_rfc3339(stamp.trim()) {
            Ok(parsed) => parsed.with_timezone(&Utc),
            Err(error) => {
                tracing::warn!("skipping reminder with bad timestamp {stamp}: {error}");
                continue;
            }
        };
        reminders.push(Reminder {
            id: id.trim().to_string(),
            created_at,
            text: text.trim().to_string(),
        });
    }
    reminders
}
