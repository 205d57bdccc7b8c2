//! Reference note command
//!
//! A reference entry records a link for other entries to point at. Copying
//! a locally-referenced file into the slot directory is not implemented.

use n::entry::{self, NoteEntry};
use n::{editor, slot, Config};

pub fn run(config: &Config, link: String, title: Option<String>) -> n::Result<()> {
    let slot = slot::next_slot(&config.notes_dir)?;
    let entry = NoteEntry::reference(slot, link, title);

    let path = entry::write(&config.notes_dir, &entry)?;
    editor::open(&config.editor, &path)?;

    println!(
        "Created note at '{}' with the title '{}'",
        slot.dir(&config.notes_dir).display(),
        entry.title
    );
    Ok(())
}
