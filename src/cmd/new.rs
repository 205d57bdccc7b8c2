//! Text note command

use n::entry::{self, NoteEntry};
use n::{editor, slot, Config};

pub fn run(config: &Config, title: Option<String>) -> n::Result<()> {
    let slot = slot::next_slot(&config.notes_dir)?;
    let entry = NoteEntry::text(slot, title);

    let path = entry::write(&config.notes_dir, &entry)?;
    editor::open(&config.editor, &path)?;

    println!(
        "Created note at '{}' with the title '{}'",
        slot.dir(&config.notes_dir).display(),
        entry.title
    );
    Ok(())
}
