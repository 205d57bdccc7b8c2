//! Configuration resolution
//!
//! Merges three layers into one effective configuration, lowest precedence
//! first: built-in defaults, the YAML config file, CLI overrides. The key
//! set is fixed (`config-file`, `editor`, `notes-dir`); the merge is a
//! right-biased shallow merge over those keys, not a recursive one.
//!
//! A missing, unreadable, or malformed config file never fails resolution:
//! the file layer is simply skipped. Malformed and unreadable files are
//! reported as warnings so a broken config does not go unnoticed, but the
//! observable fallback is identical to the file being absent.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::warn;

use crate::cli::Cli;
use crate::error::{Error, Result};

pub const KEY_CONFIG_FILE: &str = "config-file";
pub const KEY_EDITOR: &str = "editor";
pub const KEY_NOTES_DIR: &str = "notes-dir";

pub const DEFAULT_CONFIG_FILE: &str = "~/.config/n/config.yml";
pub const DEFAULT_EDITOR: &str = "nano";
pub const DEFAULT_NOTES_DIR: &str = "~/Documents/n-data";

/// Built-in default values for the fixed key set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub config_file: String,
    pub editor: String,
    pub notes_dir: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            config_file: DEFAULT_CONFIG_FILE.to_string(),
            editor: DEFAULT_EDITOR.to_string(),
            notes_dir: DEFAULT_NOTES_DIR.to_string(),
        }
    }
}

/// One key's state during the merge: its current value and whether it was
/// explicitly supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opt {
    pub value: String,
    pub from_cli: bool,
}

impl Opt {
    fn new(default: &str, cli_value: Option<&str>) -> Self {
        match cli_value {
            Some(value) => Self { value: value.to_string(), from_cli: true },
            None => Self { value: default.to_string(), from_cli: false },
        }
    }

    /// Merge against the file layer. A CLI override always wins; otherwise
    /// the file value replaces the default.
    fn merge(self, file_value: Option<String>) -> String {
        if self.from_cli {
            self.value
        } else {
            file_value.unwrap_or(self.value)
        }
    }
}

/// CLI-supplied overrides, one optional value per known key.
///
/// Constructed from parsed arguments passed in explicitly; nothing here
/// reads ambient process state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub config_file: Option<String>,
    pub editor: Option<String>,
    pub notes_dir: Option<String>,
}

impl Overrides {
    /// Collect and validate overrides from the parsed command line.
    ///
    /// An override supplied with an empty value (`--editor=`) is a fatal
    /// user-input error.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        for (key, value) in [
            (KEY_CONFIG_FILE, &cli.config_file),
            (KEY_EDITOR, &cli.editor),
            (KEY_NOTES_DIR, &cli.notes_dir),
        ] {
            if matches!(value.as_deref(), Some("")) {
                return Err(Error::MalformedOption(key));
            }
        }

        Ok(Self {
            config_file: cli.config_file.clone(),
            editor: cli.editor.clone(),
            notes_dir: cli.notes_dir.clone(),
        })
    }
}

/// Serde view of the YAML configuration file. All known keys are optional;
/// unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case")]
pub struct FileConfig {
    pub config_file: Option<String>,
    pub editor: Option<String>,
    pub notes_dir: Option<String>,
}

/// Effective configuration, total over the fixed key set. Computed once per
/// invocation and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub config_file: PathBuf,
    pub editor: String,
    /// Always user-expanded and absolute
    pub notes_dir: PathBuf,
}

/// Outcome of reading the file-sourced layer. Absent, unreadable, and
/// malformed all collapse to the same fallback, but stay distinct so the
/// latter two can be reported.
#[derive(Debug)]
enum FileLayer {
    Loaded(FileConfig),
    Absent,
    Unreadable(io::Error),
    Malformed(serde_yaml::Error),
}

fn read_file_layer(path: &Path) -> FileLayer {
    match fs::read_to_string(path) {
        Ok(text) => match serde_yaml::from_str(&text) {
            Ok(file) => FileLayer::Loaded(file),
            Err(err) => FileLayer::Malformed(err),
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => FileLayer::Absent,
        Err(err) => FileLayer::Unreadable(err),
    }
}

/// Resolve the effective configuration from defaults, the config file, and
/// CLI overrides. Never fails; the config-file read is the only I/O.
pub fn resolve(defaults: &Defaults, overrides: &Overrides) -> Config {
    let config_file = Opt::new(&defaults.config_file, overrides.config_file.as_deref());
    let editor = Opt::new(&defaults.editor, overrides.editor.as_deref());
    let notes_dir = Opt::new(&defaults.notes_dir, overrides.notes_dir.as_deref());

    let config_path = expand_user(&config_file.value);
    let file = match read_file_layer(&config_path) {
        FileLayer::Loaded(file) => file,
        FileLayer::Absent => FileConfig::default(),
        FileLayer::Unreadable(err) => {
            warn!(path = %config_path.display(), %err, "config file could not be read; using defaults");
            FileConfig::default()
        }
        FileLayer::Malformed(err) => {
            warn!(path = %config_path.display(), %err, "config file is malformed; using defaults");
            FileConfig::default()
        }
    };

    Config {
        config_file: expand_user(&config_file.merge(file.config_file)),
        editor: editor.merge(file.editor),
        notes_dir: absolutize(expand_user(&notes_dir.merge(file.notes_dir))),
    }
}

/// Expand a leading `~` to the user's home directory
pub fn expand_user(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }

    if let Some(rest) = path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }

    PathBuf::from(path)
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        env::current_dir().map(|cwd| cwd.join(&path)).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    /// Defaults scoped to a temp directory: a config file that does not
    /// exist yet and an absolute notes root.
    fn defaults_in(dir: &TempDir) -> Defaults {
        Defaults {
            config_file: dir.path().join("config.yml").display().to_string(),
            editor: "nano".to_string(),
            notes_dir: dir.path().join("notes").display().to_string(),
        }
    }

    #[test]
    fn missing_file_and_no_overrides_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let defaults = defaults_in(&dir);

        let config = resolve(&defaults, &Overrides::default());

        assert_eq!(config.config_file, PathBuf::from(&defaults.config_file));
        assert_eq!(config.editor, "nano");
        assert_eq!(config.notes_dir, PathBuf::from(&defaults.notes_dir));
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let defaults = defaults_in(&dir);
        fs::write(&defaults.config_file, "").unwrap();

        let config = resolve(&defaults, &Overrides::default());

        assert_eq!(config.editor, "nano");
        assert_eq!(config.notes_dir, PathBuf::from(&defaults.notes_dir));
    }

    #[test]
    fn file_value_beats_default() {
        let dir = TempDir::new().unwrap();
        let defaults = defaults_in(&dir);
        fs::write(&defaults.config_file, "editor: vim\n").unwrap();

        let config = resolve(&defaults, &Overrides::default());

        assert_eq!(config.editor, "vim");
    }

    #[test]
    fn cli_override_beats_file_value() {
        let dir = TempDir::new().unwrap();
        let defaults = defaults_in(&dir);
        fs::write(&defaults.config_file, "editor: vim\n").unwrap();

        let overrides = Overrides { editor: Some("emacs".to_string()), ..Default::default() };
        let config = resolve(&defaults, &overrides);

        assert_eq!(config.editor, "emacs");
    }

    #[test]
    fn malformed_file_behaves_like_missing_file() {
        let dir = TempDir::new().unwrap();
        let defaults = defaults_in(&dir);
        let overrides = Overrides { editor: Some("emacs".to_string()), ..Default::default() };

        let without_file = resolve(&defaults, &overrides);
        fs::write(&defaults.config_file, "editor: [unclosed\n").unwrap();
        let with_malformed_file = resolve(&defaults, &overrides);

        assert_eq!(without_file, with_malformed_file);
    }

    #[test]
    fn resolve_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let defaults = defaults_in(&dir);
        fs::write(&defaults.config_file, "editor: vim\nnotes-dir: /srv/notes\n").unwrap();
        let overrides = Overrides { editor: Some("emacs".to_string()), ..Default::default() };

        let first = resolve(&defaults, &overrides);
        let second = resolve(&defaults, &overrides);

        assert_eq!(first, second);
    }

    #[test]
    fn unknown_file_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let defaults = defaults_in(&dir);
        fs::write(&defaults.config_file, "editor: vim\ntheme: dark\n").unwrap();

        let config = resolve(&defaults, &Overrides::default());

        assert_eq!(config.editor, "vim");
    }

    #[test]
    fn relative_notes_dir_is_made_absolute() {
        let dir = TempDir::new().unwrap();
        let mut defaults = defaults_in(&dir);
        defaults.notes_dir = "relative-notes".to_string();

        let config = resolve(&defaults, &Overrides::default());

        assert!(config.notes_dir.is_absolute());
        assert!(config.notes_dir.ends_with("relative-notes"));
    }

    #[test]
    fn tilde_paths_expand_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_user("~/notes"), home.join("notes"));
            assert_eq!(expand_user("~"), home);
        }
        assert_eq!(expand_user("/absolute/notes"), PathBuf::from("/absolute/notes"));
    }

    #[test]
    fn empty_override_value_is_rejected() {
        let cli = Cli::try_parse_from(["n", "new", "--editor="]).unwrap();
        let err = Overrides::from_cli(&cli).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERROR: incorrect argument formatting for '--editor'"
        );
    }

    #[test]
    fn populated_override_is_kept() {
        let cli = Cli::try_parse_from(["n", "new", "--editor=emacs"]).unwrap();
        let overrides = Overrides::from_cli(&cli).unwrap();
        assert_eq!(overrides.editor.as_deref(), Some("emacs"));
        assert!(overrides.config_file.is_none());
    }
}
