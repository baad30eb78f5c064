//! Key-value preference storage.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

const FILE_NAME: &str = "preferences.json";

/// Synchronous string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// On-disk layout: a flat JSON object of string values.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct PreferenceFile {
    values: BTreeMap<String, String>,
}

/// Preferences kept as a flat JSON object on disk.
///
/// The whole file is read once on open; every `set` rewrites it.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    file: PreferenceFile,
}

impl FileStore {
    /// Open the store in `dir`, creating the directory if needed.
    /// A missing file starts an empty store.
    pub fn open(dir: &Path) -> Result<Self> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        let path = dir.join(FILE_NAME);
        let file: PreferenceFile = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => PreferenceFile::default(),
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PreferenceFile::default(),
            Err(e) => return Err(e.into()),
        };
        log::debug!("loaded {} preference(s) from {}", file.values.len(), path.display());
        Ok(Self { path, file })
    }

    fn save(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.file)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(data.as_bytes())?;
        file.write_all(b"\n")?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.file.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.file.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory store, used when no config directory is writable and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
