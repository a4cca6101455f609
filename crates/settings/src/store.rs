use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use filedeck_common::FileBrowserError;

/// Flat string key-value persistence behind the settings service.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, FileBrowserError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), FileBrowserError>;
    fn remove_item(&self, key: &str) -> Result<(), FileBrowserError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, FileBrowserError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FileBrowserError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), FileBrowserError> {
        (**self).remove_item(key)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, FileBrowserError> {
        let items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FileBrowserError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), FileBrowserError> {
        let mut items = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        items.remove(key);
        Ok(())
    }
}

/// 每个键一个 `<key>.json` 文件，存放在存储根目录下
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }

    /// 确保存储根目录存在
    fn ensure_root(&self) -> Result<(), FileBrowserError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)
                .map_err(|e| FileBrowserError::from_io(e, &self.root.display().to_string()))?;
        }
        Ok(())
    }

    fn item_path(&self, key: &str) -> Result<PathBuf, FileBrowserError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.contains('\0');
        if !valid {
            return Err(FileBrowserError::InvalidPath(format!("invalid storage key: {key:?}")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, FileBrowserError> {
        let path = self.item_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| FileBrowserError::from_io(e, &path.display().to_string()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), FileBrowserError> {
        let path = self.item_path(key)?;
        self.ensure_root()?;
        fs::write(&path, value)
            .map_err(|e| FileBrowserError::from_io(e, &path.display().to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), FileBrowserError> {
        let path = self.item_path(key)?;
        if path.exists() {
            fs::remove_file(&path)
                .map_err(|e| FileBrowserError::from_io(e, &path.display().to_string()))?;
        }
        Ok(())
    }
}
