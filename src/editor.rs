//! External editor invocation

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::debug;

/// Open `file` in the configured editor and block until it exits.
///
/// The editor's exit status is deliberately not checked; only a failure to
/// spawn the process propagates.
pub fn open(editor: &str, file: &Path) -> io::Result<()> {
    let status = Command::new(editor).arg(file).status()?;
    if !status.success() {
        debug!(editor, %status, "editor exited with non-zero status");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn nonzero_editor_exit_is_ignored() {
        assert!(open("false", Path::new("/dev/null")).is_ok());
    }

    #[test]
    fn missing_editor_binary_is_an_error() {
        assert!(open("n-editor-that-does-not-exist", Path::new("/dev/null")).is_err());
    }
}
