//! Note-slot allocation
//!
//! Notes live in directories named after increasing integers under the
//! notes root. The allocator scans from 1 upward on every call and returns
//! the lowest integer whose directory does not exist, so gaps left by
//! deleted notes are reused. There is no lock around the scan; two
//! simultaneous invocations over the same root can pick the same slot.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Identifier of a note directory: an integer >= 1, stringified without
/// padding as the directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoteSlot(u64);

impl NoteSlot {
    /// Slots start at 1; zero is not a valid note directory name.
    ///
    /// # Panics
    ///
    /// Panics if `value` is 0.
    pub fn new(value: u64) -> Self {
        assert!(value >= 1, "note slots start at 1");
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Directory this slot names under the given notes root
    pub fn dir(self, notes_root: &Path) -> PathBuf {
        notes_root.join(self.0.to_string())
    }
}

impl fmt::Display for NoteSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Find the lowest unused slot under `notes_root`.
///
/// A missing notes root yields slot 1; creating the directory tree is the
/// caller's responsibility. A non-directory entry occupying a candidate
/// name counts as unused, and the caller's create fails instead. Existence
/// checks that fail for any reason other than NotFound (e.g. permissions)
/// propagate.
pub fn next_slot(notes_root: &Path) -> io::Result<NoteSlot> {
    let mut candidate = 1u64;
    loop {
        match fs::metadata(notes_root.join(candidate.to_string())) {
            Ok(meta) if meta.is_dir() => candidate += 1,
            Ok(_) => return Ok(NoteSlot(candidate)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(NoteSlot(candidate));
            }
            Err(err) => return Err(err),
        }
    }
}
