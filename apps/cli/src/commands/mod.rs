pub mod browse;
pub mod manage;
pub mod search;
pub mod settings;
pub mod storage;

use std::path::{Component, Path, PathBuf};

use filedeck_common::AppConfig;
use filedeck_domain::Entry;
use filedeck_scanner::StdFileAccess;
use filedeck_settings::{FileStore, SettingsService};
use serde::Serialize;

/// Everything a command needs: config, the file system and loaded settings.
pub struct Context {
    pub config: AppConfig,
    pub fs: StdFileAccess,
    pub json: bool,
    pub settings: SettingsService<FileStore>,
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl Context {
    pub fn new(root: Option<PathBuf>, json: bool, parallel: bool) -> Result<Self, String> {
        let mut config = AppConfig::from_env().map_err(|e| e.to_string())?;
        if let Some(root) = root {
            config.root_dir = root;
        }
        config.parallel |= parallel;

        let fs = StdFileAccess::new(&config.root_dir);
        let mut settings = SettingsService::new(FileStore::new(&config.storage_dir));
        settings.load();

        Ok(Self {
            config,
            fs,
            json,
            settings,
        })
    }

    pub fn root(&self) -> String {
        path_string(&self.config.root_dir)
    }

    /// Absolute paths pass through; relative ones hang off the root.
    pub fn resolve(&self, path: Option<&str>) -> String {
        match path {
            None => self.root(),
            Some(p) if Path::new(p).is_absolute() => p.to_string(),
            Some(p) => path_string(&self.config.root_dir.join(p)),
        }
    }

    /// Dot-files are hidden unless showHiddenFiles is on.
    pub fn visible(&self, entry: &Entry) -> bool {
        self.settings.get().show_hidden_files || !entry.name.starts_with('.')
    }

    /// 同时隐藏 root 下隐藏目录里的内容
    pub fn visible_under(&self, root: &str, entry: &Entry) -> bool {
        self.settings.get().show_hidden_files || !is_hidden_path(root, &entry.path)
    }

    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<(), String> {
        let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
        println!("{text}");
        Ok(())
    }
}

/// 路径在 root 之下的任一段以 `.` 开头即视为隐藏
pub fn is_hidden_path(root: &str, path: &str) -> bool {
    let relative = Path::new(path)
        .strip_prefix(root)
        .unwrap_or_else(|_| Path::new(path));
    relative.components().any(|part| match part {
        Component::Normal(name) => name.to_string_lossy().starts_with('.'),
        _ => false,
    })
}

pub fn outcome(ok: bool, failure: &str) -> Result<(), String> {
    if ok {
        Ok(())
    } else {
        Err(failure.to_string())
    }
}
