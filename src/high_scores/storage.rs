//! Key-value backends for persisted records.

use crate::constants::DATA_DIR_NAME;
use crate::paths::data_dir;
use log::warn;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A minimal string key-value store.
pub trait Storage {
    /// Stored value for `key`, or `None` when missing or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// One JSON file per key inside a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage in the arcade data directory (~/.arcade).
    pub fn new() -> io::Result<Self> {
        Ok(Self::in_dir(data_dir()?))
    }

    /// Storage in `dir`, or in a scratch directory under the OS temp dir when
    /// `dir` could not be resolved. Records then last only as long as the
    /// temp dir does.
    pub fn with_fallback(dir: io::Result<PathBuf>) -> Self {
        match dir {
            Ok(dir) => Self::in_dir(dir),
            Err(e) => {
                let fallback = std::env::temp_dir().join(DATA_DIR_NAME);
                warn!(
                    "no data directory ({}); keeping high scores in {}",
                    e,
                    fallback.display()
                );
                Self::in_dir(fallback)
            }
        }
    }

    /// Storage in an explicit directory. The directory is created on first write.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("could not read {}: {}", path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }
}

/// In-process storage; forgets everything on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
