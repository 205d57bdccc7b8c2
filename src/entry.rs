//! Note entries and their on-disk form
//!
//! Every entry is a single Org file inside its slot directory. Text entries
//! carry only a title header; reference entries additionally record the
//! link they point at. Copying a locally-referenced file into the slot
//! directory is a described extension point and is not implemented.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::slot::NoteSlot;

/// File written inside each slot directory
pub const ENTRY_FILENAME: &str = "README.org";

/// Title used when the user does not provide one
pub const DEFAULT_TITLE: &str = "No title provided...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEntry {
    pub slot: NoteSlot,
    pub title: String,
    /// Link a reference entry points at; `None` for plain text entries
    pub reference: Option<String>,
}

impl NoteEntry {
    /// A plain text entry
    pub fn text(slot: NoteSlot, title: Option<String>) -> Self {
        Self {
            slot,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            reference: None,
        }
    }

    /// A reference entry pointing at `link`
    pub fn reference(slot: NoteSlot, link: String, title: Option<String>) -> Self {
        Self {
            slot,
            title: title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            reference: Some(link),
        }
    }

    /// Render the entry file content
    pub fn render(&self) -> String {
        match &self.reference {
            None => format!("#+title: {}\n\n", self.title),
            Some(link) => format!(
                "#+title: {}\n#+ref: {}\n#+filetags: :ref:\n\n<{}>\n",
                self.title, link, link
            ),
        }
    }
}

/// Create the slot directory (recursively) and write the entry file into
/// it. Returns the path of the written file.
pub fn write(notes_root: &Path, entry: &NoteEntry) -> io::Result<PathBuf> {
    let dir = entry.slot.dir(notes_root);
    fs::create_dir_all(&dir)?;

    let path = dir.join(ENTRY_FILENAME);
    fs::write(&path, entry.render())?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn slot_one() -> NoteSlot {
        NoteSlot::new(1)
    }

    #[test]
    fn text_entry_renders_title_header_only() {
        let entry = NoteEntry::text(slot_one(), Some("Hello, world!".to_string()));
        assert_eq!(entry.render(), "#+title: Hello, world!\n\n");
    }

    #[test]
    fn missing_title_falls_back_to_placeholder() {
        let entry = NoteEntry::text(slot_one(), None);
        assert_eq!(entry.title, "No title provided...");
        assert_eq!(entry.render(), "#+title: No title provided...\n\n");
    }

    #[test]
    fn reference_entry_records_its_link() {
        let entry = NoteEntry::reference(
            slot_one(),
            "https://example.com".to_string(),
            Some("Reading".to_string()),
        );
        assert_eq!(
            entry.render(),
            "#+title: Reading\n#+ref: https://example.com\n#+filetags: :ref:\n\n<https://example.com>\n"
        );
    }

    #[test]
    fn write_creates_slot_directory_and_file() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("nested").join("notes");

        let entry = NoteEntry::text(slot_one(), Some("First".to_string()));
        let path = write(&root, &entry).unwrap();

        assert_eq!(path, root.join("1").join(ENTRY_FILENAME));
        assert_eq!(fs::read_to_string(path).unwrap(), "#+title: First\n\n");
    }

    #[test]
    fn write_fails_when_slot_is_occupied_by_a_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("1"), "in the way").unwrap();

        let entry = NoteEntry::text(slot_one(), None);
        assert!(write(dir.path(), &entry).is_err());
    }
}
