use filedeck_common::FileBrowserError;

/// 单个路径的 stat 结果
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStat {
    pub exists: bool,
    pub is_directory: bool,
    /// 文件字节数，目录为 0
    pub size: u64,
    /// Unix 时间戳（秒）
    pub modification_time: i64,
}

pub trait FileAccess {
    /// 直接子项名称（顺序由实现决定）
    fn read_dir_names(&self, path: &str) -> Result<Vec<String>, FileBrowserError>;

    fn stat(&self, path: &str) -> Result<FileStat, FileBrowserError>;

    /// 目录的规范路径，遍历时用于去重
    fn canonicalize(&self, path: &str) -> Result<String, FileBrowserError> {
        Ok(path.trim_end_matches('/').to_string())
    }

    fn create_dir(&self, path: &str, intermediates: bool) -> Result<(), FileBrowserError>;

    /// 删除文件或目录树；`idempotent` 时路径不存在不算错误
    fn delete(&self, path: &str, idempotent: bool) -> Result<(), FileBrowserError>;

    fn copy(&self, from: &str, to: &str) -> Result<(), FileBrowserError>;

    fn move_to(&self, from: &str, to: &str) -> Result<(), FileBrowserError>;

    fn free_disk_space(&self) -> Result<u64, FileBrowserError>;

    fn total_disk_capacity(&self) -> Result<u64, FileBrowserError>;
}
