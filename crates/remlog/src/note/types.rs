use serde::{Deserialize, Serialize};

/// How a captured entry is rendered inside the daily note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryFormat {
    /// Just the text.
    #[default]
    Plain,
    /// `> text`
    Blockquote,
    /// `- text`
    Bullet,
    /// `1. text`
    Numbered,
    /// `1. [ ] text`
    Checkbox,
}
