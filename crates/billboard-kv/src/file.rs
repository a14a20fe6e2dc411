//! JSON-file backed store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{KeyValueStore, StoreError};

/// Store persisted as a single JSON object on disk.
///
/// The whole object is kept in memory and rewritten on every mutation. Writes
/// go to a sibling temp file first and are renamed into place, so a crash
/// mid-write leaves the previous state intact.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is treated as an empty store; it is created on the
    /// first write. Values that are not JSON strings are kept as their JSON
    /// text, leaving it to the reader to decide whether they are usable. A
    /// file that is not a JSON object is `Corrupt`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => parse_entries(&path, &content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self { path, entries })
    }

    /// Open the store at `path`, starting empty if the file is corrupt.
    ///
    /// The unreadable file is renamed to `<path>.corrupt` so it is not
    /// overwritten by the next write.
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        match Self::open(&path) {
            Err(StoreError::Corrupt { reason, .. }) => {
                let aside = corrupt_path(&path);
                fs::rename(&path, &aside).map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
                tracing::warn!(
                    path = %path.display(),
                    moved_to = %aside.display(),
                    %reason,
                    "corrupt store moved aside, starting empty"
                );
                Ok(Self {
                    path,
                    entries: BTreeMap::new(),
                })
            }
            other => other,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let content = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, content).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)
    }
}

fn parse_entries(path: &Path, content: &str) -> Result<BTreeMap<String, String>, StoreError> {
    let raw: BTreeMap<String, serde_json::Value> =
        serde_json::from_str(content).map_err(|e| StoreError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    Ok(raw
        .into_iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(text) => (key, text),
            other => {
                tracing::debug!(key = %key, "stored value is not a string, keeping its JSON text");
                (key, other.to_string())
            }
        })
        .collect())
}

fn corrupt_path(path: &Path) -> PathBuf {
    let mut aside = path.as_os_str().to_owned();
    aside.push(".corrupt");
    PathBuf::from(aside)
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("state.json")).unwrap();
        assert!(store.entries.is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let mut store = FileStore::open(&path).unwrap();
        store.save("coffeeBillboard_nextFreeId", "2").unwrap();
        store.save("coffeeBillboard_cart", "[]").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.load("coffeeBillboard_nextFreeId").unwrap().as_deref(),
            Some("2")
        );
        assert_eq!(reopened.entries.len(), 2);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_non_string_values_kept_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"coffeeBillboard_nextFreeId": 3, "flags": [true]}"#).unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(
            store.load("coffeeBillboard_nextFreeId").unwrap().as_deref(),
            Some("3")
        );
        assert_eq!(store.load("flags").unwrap().as_deref(), Some("[true]"));
    }

    #[test]
    fn test_open_or_reset_moves_corrupt_file_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let mut store = FileStore::open_or_reset(&path).unwrap();
        assert!(store.entries.is_empty());
        assert!(!path.exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("state.json.corrupt")).unwrap(),
            "[1, 2, 3]"
        );

        store.save("a", "1").unwrap();
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.load("a").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_open_or_reset_keeps_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, r#"{"a": "1"}"#).unwrap();

        let store = FileStore::open_or_reset(&path).unwrap();
        assert_eq!(store.load("a").unwrap().as_deref(), Some("1"));
        assert!(!dir.path().join("state.json.corrupt").exists());
    }

    #[test]
    fn test_blank_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "\n").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.entries.is_empty());
    }
}
