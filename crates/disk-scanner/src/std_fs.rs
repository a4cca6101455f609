use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use filedeck_common::FileBrowserError;
use walkdir::WalkDir;

use crate::{FileAccess, FileStat};

/// 本地文件系统实现，磁盘空间按 `volume_path` 所在卷统计
#[derive(Debug, Clone)]
pub struct StdFileAccess {
    volume_path: PathBuf,
}

impl StdFileAccess {
    pub fn new(volume_path: impl Into<PathBuf>) -> Self {
        Self {
            volume_path: volume_path.into(),
        }
    }

    fn volume_space(&self) -> Result<(u64, u64), FileBrowserError> {
        volume_space_bytes(&self.volume_path)
    }

    /// rename 只在跨卷时退回到复制后删除；删除失败则撤掉副本
    fn finish_move(
        &self,
        from: &str,
        to: &str,
        renamed: io::Result<()>,
    ) -> Result<(), FileBrowserError> {
        let err = match renamed {
            Ok(()) => return Ok(()),
            Err(e) if crosses_devices(&e) => e,
            Err(e) => return Err(FileBrowserError::from_io(e, from)),
        };
        log::debug!("rename {from} -> {to} crosses devices ({err}), copying instead");
        self.copy(from, to)?;
        if let Err(e) = self.delete(from, false) {
            if let Err(cleanup) = self.delete(to, true) {
                log::warn!("failed to remove copied {to}: {cleanup}");
            }
            return Err(e);
        }
        Ok(())
    }
}

fn already_exists(path: &str) -> FileBrowserError {
    FileBrowserError::Io(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("destination already exists: {path}"),
    ))
}

fn modified_secs(meta: &fs::Metadata) -> i64 {
    meta.modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

/// 目标路径规范化：取最近一个已存在的祖先做 canonicalize，再拼回其余部分
fn resolve_destination(to: &Path) -> PathBuf {
    let mut tail = Vec::new();
    let mut cursor = to;
    loop {
        if let Ok(base) = fs::canonicalize(cursor) {
            return tail.iter().rev().fold(base, |acc, name| acc.join(name));
        }
        match (cursor.parent(), cursor.file_name()) {
            (Some(parent), Some(name)) => {
                tail.push(name.to_os_string());
                cursor = if parent.as_os_str().is_empty() {
                    Path::new(".")
                } else {
                    parent
                };
            }
            _ => return to.to_path_buf(),
        }
    }
}

/// 拒绝把目录复制或移动到它自己里面
fn ensure_outside_source(from: &str, to: &str) -> Result<(), FileBrowserError> {
    let source = fs::canonicalize(from).map_err(|e| FileBrowserError::from_io(e, from))?;
    if resolve_destination(Path::new(to)).starts_with(&source) {
        return Err(FileBrowserError::InvalidPath(format!(
            "cannot place {from} inside itself"
        )));
    }
    Ok(())
}

fn crosses_devices(err: &io::Error) -> bool {
    #[cfg(unix)]
    {
        err.raw_os_error() == Some(libc::EXDEV)
    }
    #[cfg(windows)]
    {
        err.raw_os_error()
            == Some(windows_sys::Win32::Foundation::ERROR_NOT_SAME_DEVICE as i32)
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = err;
        false
    }
}

/// 递归复制目录
fn copy_tree(from: &Path, to: &Path) -> io::Result<()> {
    for entry in WalkDir::new(from) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

impl FileAccess for StdFileAccess {
    fn read_dir_names(&self, path: &str) -> Result<Vec<String>, FileBrowserError> {
        let entries = fs::read_dir(path).map_err(|e| FileBrowserError::from_io(e, path))?;
        Ok(entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect())
    }

    fn stat(&self, path: &str) -> Result<FileStat, FileBrowserError> {
        let meta = fs::metadata(path).map_err(|e| FileBrowserError::from_io(e, path))?;
        let is_directory = meta.is_dir();
        Ok(FileStat {
            exists: true,
            is_directory,
            size: if is_directory { 0 } else { meta.len() },
            modification_time: modified_secs(&meta),
        })
    }

    fn canonicalize(&self, path: &str) -> Result<String, FileBrowserError> {
        fs::canonicalize(path)
            .map(|p| p.to_string_lossy().into_owned())
            .map_err(|e| FileBrowserError::from_io(e, path))
    }

    fn create_dir(&self, path: &str, intermediates: bool) -> Result<(), FileBrowserError> {
        let result = if intermediates {
            fs::create_dir_all(path)
        } else {
            fs::create_dir(path)
        };
        result.map_err(|e| FileBrowserError::from_io(e, path))
    }

    fn delete(&self, path: &str, idempotent: bool) -> Result<(), FileBrowserError> {
        let meta = match fs::symlink_metadata(path) {
            Ok(meta) => meta,
            Err(e) if idempotent && e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(FileBrowserError::from_io(e, path)),
        };
        let result = if meta.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|e| FileBrowserError::from_io(e, path))
    }

    fn copy(&self, from: &str, to: &str) -> Result<(), FileBrowserError> {
        let meta = fs::metadata(from).map_err(|e| FileBrowserError::from_io(e, from))?;
        if Path::new(to).exists() {
            return Err(already_exists(to));
        }
        if !meta.is_dir() {
            return fs::copy(from, to)
                .map(|_| ())
                .map_err(|e| FileBrowserError::from_io(e, to));
        }
        ensure_outside_source(from, to)?;
        copy_tree(Path::new(from), Path::new(to)).map_err(|e| {
            // 复制中途失败，清理已写入的目标
            match fs::remove_dir_all(to) {
                Err(cleanup) if cleanup.kind() != io::ErrorKind::NotFound => {
                    log::warn!("failed to clean up partial copy {to}: {cleanup}");
                }
                _ => {}
            }
            FileBrowserError::from_io(e, to)
        })
    }

    fn move_to(&self, from: &str, to: &str) -> Result<(), FileBrowserError> {
        let meta = fs::symlink_metadata(from).map_err(|e| FileBrowserError::from_io(e, from))?;
        if Path::new(to).exists() {
            return Err(already_exists(to));
        }
        if meta.is_dir() {
            ensure_outside_source(from, to)?;
        }
        self.finish_move(from, to, fs::rename(from, to))
    }

    fn free_disk_space(&self) -> Result<u64, FileBrowserError> {
        self.volume_space().map(|(_, free)| free)
    }

    fn total_disk_capacity(&self) -> Result<u64, FileBrowserError> {
        self.volume_space().map(|(total, _)| total)
    }
}

/// 卷总容量与当前用户可用空间（字节）
#[cfg(unix)]
fn volume_space_bytes(path: &Path) -> Result<(u64, u64), FileBrowserError> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let display = path.display().to_string();
    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| FileBrowserError::InvalidPath(display.clone()))?;
    let mut stats: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stats) };
    if rc != 0 {
        return Err(FileBrowserError::from_io(io::Error::last_os_error(), &display));
    }
    let block = stats.f_frsize as u64;
    let total = (stats.f_blocks as u64).saturating_mul(block);
    let free = (stats.f_bavail as u64).saturating_mul(block);
    Ok((total, free))
}

/// 通过 GetDiskFreeSpaceExW 获取卷总容量与剩余空间（字节）
#[cfg(windows)]
fn volume_space_bytes(path: &Path) -> Result<(u64, u64), FileBrowserError> {
    use std::os::windows::ffi::OsStrExt;

    let wide: Vec<u16> = path.as_os_str().encode_wide().chain(Some(0)).collect();
    let mut available = 0u64;
    let mut total = 0u64;
    let ok = unsafe {
        windows_sys::Win32::Storage::FileSystem::GetDiskFreeSpaceExW(
            wide.as_ptr(),
            &mut available,
            &mut total,
            std::ptr::null_mut(),
        )
    };
    if ok == 0 {
        return Err(FileBrowserError::from_io(
            io::Error::last_os_error(),
            &path.display().to_string(),
        ));
    }
    Ok((total, available))
}

#[cfg(not(any(unix, windows)))]
fn volume_space_bytes(_path: &Path) -> Result<(u64, u64), FileBrowserError> {
    Err(FileBrowserError::Unsupported(
        "disk space is not available on this platform".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn path_str(p: &Path) -> String {
        p.to_string_lossy().into_owned()
    }

    #[test]
    fn test_stat_file_and_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        File::create(&file).unwrap().write_all(b"hello").unwrap();
        let fs_access = StdFileAccess::new(dir.path());

        let file_stat = fs_access.stat(&path_str(&file)).unwrap();
        assert!(file_stat.exists);
        assert!(!file_stat.is_directory);
        assert_eq!(file_stat.size, 5);
        assert!(file_stat.modification_time > 0);

        let dir_stat = fs_access.stat(&path_str(dir.path())).unwrap();
        assert!(dir_stat.is_directory);
        assert_eq!(dir_stat.size, 0);
    }

    #[test]
    fn test_missing_path_errors() {
        let dir = tempfile::tempdir().unwrap();
        let fs_access = StdFileAccess::new(dir.path());
        let missing = path_str(&dir.path().join("missing"));
        assert!(fs_access.stat(&missing).unwrap_err().is_not_found());
        assert!(fs_access.read_dir_names(&missing).is_err());
        assert!(fs_access.delete(&missing, true).is_ok());
        assert!(fs_access.delete(&missing, false).is_err());
    }

    #[test]
    fn test_copy_tree_and_move() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("nested/b.mp3"), vec![0u8; 2048]).unwrap();
        fs::write(src.join("a.jpg"), vec![0u8; 1024]).unwrap();
        let fs_access = StdFileAccess::new(dir.path());

        let copy = dir.path().join("copy");
        fs_access.copy(&path_str(&src), &path_str(&copy)).unwrap();
        assert_eq!(fs::metadata(copy.join("nested/b.mp3")).unwrap().len(), 2048);
        assert!(src.join("a.jpg").exists());

        // 目标已存在时拒绝覆盖
        assert!(fs_access.copy(&path_str(&src), &path_str(&copy)).is_err());

        let moved = dir.path().join("moved");
        fs_access.move_to(&path_str(&src), &path_str(&moved)).unwrap();
        assert!(!src.exists());
        assert!(moved.join("a.jpg").exists());
    }

    fn sorted_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_copy_into_itself_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        fs::create_dir_all(&a).unwrap();
        fs::write(a.join("f.txt"), b"data").unwrap();
        let fs_access = StdFileAccess::new(dir.path());

        for target in ["sub", "x/y"] {
            let err = fs_access
                .copy(&path_str(&a), &path_str(&a.join(target)))
                .unwrap_err();
            assert!(matches!(err, FileBrowserError::InvalidPath(_)), "{err}");
        }
        let err = fs_access
            .move_to(&path_str(&a), &path_str(&a.join("sub2")))
            .unwrap_err();
        assert!(matches!(err, FileBrowserError::InvalidPath(_)), "{err}");

        assert_eq!(sorted_names(&a), vec!["f.txt"]);

        // 同名前缀的兄弟目录不算在源目录内
        let sibling = dir.path().join("ab");
        fs_access.copy(&path_str(&a), &path_str(&sibling)).unwrap();
        assert!(sibling.join("f.txt").is_file());
    }

    #[test]
    fn test_failed_rename_does_not_copy() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src.txt");
        let dest = dir.path().join("dest.txt");
        fs::write(&src, b"x").unwrap();
        let fs_access = StdFileAccess::new(dir.path());

        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert!(fs_access
            .finish_move(&path_str(&src), &path_str(&dest), Err(denied))
            .is_err());
        assert!(src.exists());
        assert!(!dest.exists());
    }

    #[test]
    #[cfg(unix)]
    fn test_cross_device_rename_copies_then_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("nested")).unwrap();
        fs::write(src.join("nested/a.txt"), b"abc").unwrap();
        let dest = dir.path().join("dest");
        let fs_access = StdFileAccess::new(dir.path());

        let exdev = io::Error::from_raw_os_error(libc::EXDEV);
        fs_access
            .finish_move(&path_str(&src), &path_str(&dest), Err(exdev))
            .unwrap();
        assert!(!src.exists());
        assert_eq!(fs::read(dest.join("nested/a.txt")).unwrap(), b"abc");
    }

    #[test]
    fn test_create_dir_intermediates() {
        let dir = tempfile::tempdir().unwrap();
        let fs_access = StdFileAccess::new(dir.path());
        let deep = path_str(&dir.path().join("x/y/z"));
        assert!(fs_access.create_dir(&deep, false).is_err());
        fs_access.create_dir(&deep, true).unwrap();
        assert!(Path::new(&deep).is_dir());
    }

    #[test]
    #[cfg(any(unix, windows))]
    fn test_volume_space() {
        let dir = tempfile::tempdir().unwrap();
        let fs_access = StdFileAccess::new(dir.path());
        let total = fs_access.total_disk_capacity().unwrap();
        let free = fs_access.free_disk_space().unwrap();
        assert!(total > 0);
        assert!(free <= total);
    }
}
