use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileBrowserError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl FileBrowserError {
    /// 将 io::Error 映射为带路径的权限/不存在错误
    pub fn from_io(err: io::Error, path: &str) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_string()),
            io::ErrorKind::NotFound => Self::NotFound(path.to_string()),
            _ => Self::Io(err),
        }
    }

    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
