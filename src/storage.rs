use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use anyhow::Context;

/// Durable string key/value storage — the contract of browser local storage.
/// Values are opaque strings; callers decide the encoding.
pub trait StorageClient: Send + Sync {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;
    fn remove_item(&self, key: &str) -> anyhow::Result<()>;
}

/// File-backed storage: one file per key under a base directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("create storage dir {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl StorageClient for FileStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("read storage key {key}")),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        // temp file + rename, so a crashed write never leaves a torn value
        let tmp = self.dir.join(format!(".{key}.tmp.{}", std::process::id()));
        fs::write(&tmp, value).with_context(|| format!("write storage key {key}"))?;
        fs::rename(&tmp, self.path_for(key))
            .with_context(|| format!("commit storage key {key}"))?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("remove storage key {key}")),
        }
    }
}

/// In-memory storage for tests and embedders that bring their own
/// persistence.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageClient for MemoryStorage {
    fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod storage_tests {
    use super::*;

    #[test]
    fn file_storage_roundtrip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path()).expect("storage");

        assert_eq!(storage.get_item("uroom_user").expect("get"), None);
        storage.set_item("uroom_user", r#"{"a":1}"#).expect("set");
        assert_eq!(
            storage.get_item("uroom_user").expect("get"),
            Some(r#"{"a":1}"#.to_string())
        );

        storage.set_item("uroom_user", "v2").expect("overwrite");
        assert_eq!(storage.get_item("uroom_user").expect("get"), Some("v2".to_string()));

        storage.remove_item("uroom_user").expect("remove");
        assert_eq!(storage.get_item("uroom_user").expect("get"), None);
        // removing an absent key is fine
        storage.remove_item("uroom_user").expect("remove again");
    }

    #[test]
    fn file_storage_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = FileStorage::new(dir.path()).expect("storage");
        storage.set_item("uroom_onboarded", "true").expect("set");

        let names: Vec<String> = fs::read_dir(dir.path())
            .expect("read dir")
            .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["uroom_onboarded".to_string()]);
    }

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        storage.set_item("k", "v").expect("set");
        assert_eq!(storage.get_item("k").expect("get"), Some("v".to_string()));
        storage.remove_item("k").expect("remove");
        assert_eq!(storage.get_item("k").expect("get"), None);
    }
}
