//! Plain-text file store: the decimal digits of the score, nothing else.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::HighScoreStore;

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> io::Result<u64> {
        let text = fs::read_to_string(&self.path)?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(0);
        }
        text.parse::<u64>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl HighScoreStore for FileStore {
    fn load(&self) -> u64 {
        match self.read() {
            Ok(value) => {
                log::debug!("Loaded high score {} from {}", value, self.path.display());
                value
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No high score file at {}", self.path.display());
                0
            }
            Err(e) => {
                log::debug!("Ignoring high score file {}: {}", self.path.display(), e);
                0
            }
        }
    }

    fn save(&mut self, value: u64) {
        if let Err(e) = fs::write(&self.path, value.to_string()) {
            log::warn!("Could not save high score to {}: {}", self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("highscore.txt"))
    }

    #[test]
    fn missing_file_loads_zero() {
        let dir = TempDir::new().unwrap();
        assert_eq!(store_in(&dir).load(), 0);
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.save(42);
        assert_eq!(store.load(), 42);
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "42");

        store.save(7);
        assert_eq!(store.load(), 7);
    }

    #[test]
    fn malformed_content_loads_zero() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        for junk in ["abc", "12x", "-5", "1.5"] {
            fs::write(store.path(), junk).unwrap();
            assert_eq!(store.load(), 0, "content {junk:?}");
        }
    }

    #[test]
    fn surrounding_whitespace_and_empty_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "  88\n").unwrap();
        assert_eq!(store.load(), 88);
        fs::write(store.path(), "").unwrap();
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn unwritable_location_is_swallowed() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("missing").join("highscore.txt"));
        store.save(10);
        assert_eq!(store.load(), 0);
    }
}
