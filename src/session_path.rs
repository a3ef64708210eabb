//! Session file naming and on-disk artifact handling
//!
//! The session itself is a SQLite database owned by grammers; this module
//! only decides where it lives and knows which companion files the storage
//! engine leaves next to it.

use std::env;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::console::{confirm, prompt};
use crate::error::Result;

/// Base name used when the user leaves the name prompt blank.
pub const DEFAULT_SESSION_NAME: &str = "my_telegram_session";

/// Extension the storage engine appends to the base path.
pub const SESSION_EXTENSION: &str = ".session";

/// A resolved session location: target directory plus extension-less base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPath {
    dir: PathBuf,
    name: String,
}

impl SessionPath {
    pub fn new(dir: impl Into<PathBuf>, name: &str) -> Self {
        Self {
            dir: dir.into(),
            name: normalize_name(name),
        }
    }

    /// Path without extension, as handed to the client library.
    pub fn base(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The main `.session` file.
    pub fn session_file(&self) -> PathBuf {
        self.dir.join(format!("{}{}", self.name, SESSION_EXTENSION))
    }

    /// SQLite journal companions (`-shm` and `-wal`) the storage engine may
    /// leave behind next to the main file.
    pub fn journal_files(&self) -> [PathBuf; 2] {
        [
            self.dir
                .join(format!("{}{}-shm", self.name, SESSION_EXTENSION)),
            self.dir
                .join(format!("{}{}-wal", self.name, SESSION_EXTENSION)),
        ]
    }

    /// Create the target directory tree if it does not exist yet.
    pub fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Best-effort removal of the session file and its journal companions.
    ///
    /// Missing files and removal errors are ignored; never fails.
    pub fn cleanup_artifacts(&self) {
        let [shm, wal] = self.journal_files();
        for file in [self.session_file(), shm, wal] {
            if file.exists() {
                match fs::remove_file(&file) {
                    Ok(()) => println!("🗑️  Removed: {}", file.display()),
                    Err(err) => debug!(file = %file.display(), "cleanup failed: {}", err),
                }
            }
        }
    }
}

/// Normalize a user-supplied base name: trim it, drop a trailing `.session`
/// the user may have typed, and fall back to the default when nothing is left.
pub fn normalize_name(raw: &str) -> String {
    let name = raw.trim();
    let name = name.strip_suffix(SESSION_EXTENSION).unwrap_or(name);
    if name.is_empty() {
        DEFAULT_SESSION_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Prompt for the base name and target directory, honoring CLI overrides.
///
/// The directory tree is created before returning, so the caller can hand
/// the path straight to the storage engine.
pub fn resolve_interactive(name: Option<String>, dir: Option<PathBuf>) -> Result<SessionPath> {
    println!();
    // SessionPath::new normalizes, so raw input is fine here
    let name = match name {
        Some(name) => name,
        None => prompt("📝 Session file name (without .session): ")?,
    };

    let current_dir = env::current_dir()?;
    let dir = match dir {
        Some(dir) => dir,
        None => {
            println!("📁 Current directory: {}", current_dir.display());
            if confirm("💾 Save the session here?", true)? {
                current_dir
            } else {
                let answer = prompt("📂 Enter a directory to save to: ")?;
                if answer.is_empty() {
                    current_dir
                } else {
                    PathBuf::from(answer)
                }
            }
        }
    };

    let path = SessionPath::new(dir, &name);
    path.ensure_dir()?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn normalize_strips_session_extension() {
        assert_eq!(normalize_name("foo.session"), "foo");
        assert_eq!(normalize_name("foo"), "foo");
        assert_eq!(normalize_name("  foo.session  "), "foo");
    }

    #[test]
    fn normalize_strips_only_one_extension() {
        assert_eq!(normalize_name("foo.session.session"), "foo.session");
    }

    #[test]
    fn normalize_empty_falls_back_to_default() {
        assert_eq!(normalize_name(""), DEFAULT_SESSION_NAME);
        assert_eq!(normalize_name("   "), DEFAULT_SESSION_NAME);
        assert_eq!(normalize_name(".session"), DEFAULT_SESSION_NAME);
    }

    #[test]
    fn session_path_joins_dir_and_name() {
        let path = SessionPath::new("/tmp/sessions", "work");
        assert_eq!(path.base(), PathBuf::from("/tmp/sessions/work"));
        assert_eq!(
            path.session_file(),
            PathBuf::from("/tmp/sessions/work.session")
        );
    }

    #[test]
    fn session_path_normalizes_name() {
        let path = SessionPath::new("/tmp", "work.session");
        assert_eq!(path.name(), "work");

        let path = SessionPath::new("/tmp", "");
        assert_eq!(path.name(), DEFAULT_SESSION_NAME);
    }

    #[test]
    fn journal_files_follow_sqlite_naming() {
        let path = SessionPath::new("/tmp", "work");
        let [shm, wal] = path.journal_files();
        assert_eq!(shm, PathBuf::from("/tmp/work.session-shm"));
        assert_eq!(wal, PathBuf::from("/tmp/work.session-wal"));
    }

    #[test]
    fn ensure_dir_creates_intermediate_directories() {
        let temp = tempdir().expect("tempdir");
        let nested = temp.path().join("a").join("b").join("c");
        let path = SessionPath::new(&nested, "work");

        path.ensure_dir().expect("create dirs");
        assert!(nested.is_dir());

        // Idempotent on an existing directory
        path.ensure_dir().expect("create dirs again");
    }

    #[test]
    fn cleanup_removes_all_three_artifacts() {
        let temp = tempdir().expect("tempdir");
        let path = SessionPath::new(temp.path(), "work");

        let [shm, wal] = path.journal_files();
        for file in [path.session_file(), shm.clone(), wal.clone()] {
            std::fs::write(&file, b"stub").expect("write artifact");
        }

        path.cleanup_artifacts();

        assert!(!path.session_file().exists());
        assert!(!shm.exists());
        assert!(!wal.exists());
    }

    #[test]
    fn cleanup_is_silent_when_nothing_exists() {
        let temp = tempdir().expect("tempdir");
        let path = SessionPath::new(temp.path().join("missing"), "work");

        // Must not panic even though neither the files nor the dir exist
        path.cleanup_artifacts();
    }

    #[test]
    fn cleanup_leaves_unrelated_files_alone() {
        let temp = tempdir().expect("tempdir");
        let path = SessionPath::new(temp.path(), "work");

        let other = temp.path().join("other.session");
        std::fs::write(&other, b"keep").expect("write other");
        std::fs::write(path.session_file(), b"stub").expect("write session");

        path.cleanup_artifacts();

        assert!(other.exists());
        assert!(!path.session_file().exists());
    }
}
