pub mod ops;
pub mod types;


pub use ops::{
    append_entries, daily_note_path, format_entry, insert_at_marker, insert_entries,
    timestamped_line,
};
pub use types::EntryFormat;
