use filedeck_scanner::FileAccess;

use crate::outcome::report;

/// 删除文件或整个目录；已不存在视为成功
#[must_use]
pub fn delete_item<F>(fs: &F, path: &str) -> bool
where
    F: FileAccess + ?Sized,
{
    report(fs.delete(path, true), &format!("delete {path}"))
}
