use std::path::PathBuf;

use crate::FileBrowserError;

pub const ENV_ROOT: &str = "FILEDECK_ROOT";
pub const ENV_STORAGE_DIR: &str = "FILEDECK_STORAGE_DIR";
pub const ENV_PARALLEL: &str = "FILEDECK_PARALLEL";

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory browsing, search and the storage breakdown start from.
    pub root_dir: PathBuf,
    /// Where the settings backend keeps its files.
    pub storage_dir: PathBuf,
    /// Aggregate subtrees on the rayon pool instead of one at a time.
    pub parallel: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            root_dir: home.join("Documents"),
            storage_dir: home.join(".filedeck"),
            parallel: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, FileBrowserError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 默认配置 + `FILEDECK_*` 覆盖
    pub fn from_lookup<F>(lookup: F) -> Result<Self, FileBrowserError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(root) = non_empty(lookup(ENV_ROOT)) {
            config.root_dir = PathBuf::from(root);
        }
        if let Some(dir) = non_empty(lookup(ENV_STORAGE_DIR)) {
            config.storage_dir = PathBuf::from(dir);
        }
        if let Some(flag) = non_empty(lookup(ENV_PARALLEL)) {
            config.parallel = parse_flag(ENV_PARALLEL, &flag)?;
        }
        log::debug!(
            "config: root={}, storage={}, parallel={}",
            config.root_dir.display(),
            config.storage_dir.display(),
            config.parallel
        );
        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(key: &str, value: &str) -> Result<bool, FileBrowserError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(FileBrowserError::Config(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}
