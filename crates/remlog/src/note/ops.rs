use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, NaiveDate};

use crate::error::{SyncError, SyncResult};

use super::types::EntryFormat;

/// Path of the daily note for `date` inside `notes_folder`.
///
/// Pure function of its inputs; repeated calls within a calendar day resolve
/// to the same file.
pub fn daily_note_path(notes_folder: &Path, date: NaiveDate) -> PathBuf {
    notes_folder.join(format!("{}.md", date.format("%Y-%m-%d")))
}

/// Render one entry according to `format`. `index` is 1-based and only used
/// by the numbered variants.
pub fn format_entry(text: &str, format: EntryFormat, index: usize) -> String {
    match format {
        EntryFormat::Plain => text.to_string(),
        EntryFormat::Blockquote => format!("> {text}"),
        EntryFormat::Bullet => format!("- {text}"),
        EntryFormat::Numbered => format!("{index}. {text}"),
        EntryFormat::Checkbox => format!("{index}. [ ] {text}"),
    }
}

/// Render a capture line for append mode: `HH:MM text`.
pub fn timestamped_line(text: &str, at: DateTime<Local>) -> String {
    format!("{} {text}", at.format("%H:%M"))
}

/// Append one line per entry to the note at `path`, creating the file if it
/// does not exist yet. The handle is released on every exit path.
pub fn append_entries(path: &Path, lines: &[String]) -> SyncResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| {
            SyncError::WriteFailed(format!("failed to open {}: {error}", path.display()))
        })?;
    for line in lines {
        writeln!(file, "{line}").map_err(|error| {
            SyncError::WriteFailed(format!("failed to append to {}: {error}", path.display()))
        })?;
    }
    Ok(())
}

/// Insert `block` after `marker` in the existing note at `path`.
///
/// Unlike [`append_entries`] this never creates the file: marker mode targets
/// a templated daily note that is expected to exist already.
pub fn insert_entries(path: &Path, marker: &str, block: &str) -> SyncResult<()> {
    let content = std::fs::read_to_string(path).map_err(|error| {
        SyncError::WriteFailed(format!("failed to read {}: {error}", path.display()))
    })?;
    let updated = insert_at_marker(&content, marker, block).ok_or_else(|| {
        SyncError::WriteFailed(format!(
            "marker '{marker}' not found in {}",
            path.display()
        ))
    })?;
    std::fs::write(path, updated).map_err(|error| {
        SyncError::WriteFailed(format!("failed to write {}: {error}", path.display()))
    })?;
    Ok(())
}

/// Insert `block` after the line containing `marker`, or `None` when the
/// marker is absent.
///
/// Section-heading markers (`## ...`) place the block at the end of the
/// section: before its trailing `---` divider or the next `## ` heading,
/// whichever comes first. Field markers place it directly after the marker
/// line.
pub fn insert_at_marker(content: &str, marker: &str, block: &str) -> Option<String> {
    let marker_pos = content.find(marker)?;
    let line_end = match content[marker_pos..].find('\n') {
        Some(offset) => marker_pos + offset + 1,
        None => content.len(),
    };

    let insert_pos = if marker.starts_with("##") {
        let rest = &content[line_end..];
        let divider = rest.find("\n---");
        let next_heading = rest.find("\n## ");
        match (divider, next_heading) {
            (Some(d), Some(h)) if d < h => line_end + d + 1,
            (Some(d), None) => line_end + d + 1,
            (_, Some(h)) => line_end + h + 1,
            (None, None) => line_end,
        }
    } else {
        line_end
    };

    let mut updated = String::with_capacity(content.len() + block.len() + 1);
    updated.push_str(&content[..insert_pos]);
    if insert_pos == content.len() && !content.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(block);
    updated.push_str(&content[insert_pos..]);
    Some(updated)
}
