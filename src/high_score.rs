use log::warn;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What happened to a save request. Failures are absorbed here and never
/// reach the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Skipped,
}

/// Best-effort store for a single integer high score in a flat text file.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored score, or 0 when the file is missing, unreadable or garbled.
    pub fn load(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim().parse().unwrap_or_else(|e| {
                warn!("Ignoring malformed high score in {}: {}", self.path.display(), e);
                0
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => 0,
            Err(e) => {
                warn!("Failed to load high score from {}: {}", self.path.display(), e);
                0
            }
        }
    }

    pub fn save(&self, score: u32) -> SaveOutcome {
        match fs::write(&self.path, score.to_string()) {
            Ok(()) => SaveOutcome::Saved,
            Err(e) => {
                warn!("Failed to save high score to {}: {}", self.path.display(), e);
                SaveOutcome::Skipped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_zero() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("hs.txt"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("hs.txt"));

        assert_eq!(store.save(42), SaveOutcome::Saved);
        assert_eq!(store.load(), 42);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "42");
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("hs.txt"));

        store.save(1234);
        store.save(7);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "7");
    }

    #[test]
    fn test_garbage_loads_zero() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, "lots").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 0);

        fs::write(&path, "-3").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 0);
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hs.txt");
        fs::write(&path, " 19\n").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 19);
    }

    #[test]
    fn test_unwritable_path_is_skipped() {
        let dir = TempDir::new().unwrap();
        let store = HighScoreStore::new(dir.path().join("missing").join("hs.txt"));
        assert_eq!(store.save(5), SaveOutcome::Skipped);
        assert_eq!(store.load(), 0);
    }
}
