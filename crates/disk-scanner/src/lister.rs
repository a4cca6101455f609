use std::cmp::Ordering;

use filedeck_common::FileBrowserError;
use filedeck_domain::Entry;

use crate::paths::join_path;
use crate::FileAccess;

/// 名称排序：先忽略大小写比较，相同时小写在前，最后按码点
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Folders first, then [`compare_names`].
pub fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_directory
        .cmp(&a.is_directory)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// 列出直接子项；目录本身读取失败时返回错误，stat 失败的子项跳过
pub fn try_list_directory<F>(fs: &F, path: &str) -> Result<Vec<Entry>, FileBrowserError>
where
    F: FileAccess + ?Sized,
{
    let names = fs.read_dir_names(path)?;
    let mut entries = Vec::with_capacity(names.len());

    for name in names {
        let child_path = join_path(path, &name);
        match fs.stat(&child_path) {
            Ok(stat) if stat.exists => entries.push(Entry {
                name,
                path: child_path,
                is_directory: stat.is_directory,
                size: stat.size,
                modification_time: stat.modification_time,
            }),
            Ok(_) => log::warn!("skipping {child_path}: no longer exists"),
            Err(e) => log::warn!("failed to get info for {child_path}: {e}"),
        }
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

/// 列出直接子项；目录不可读时返回空列表
pub fn list_directory<F>(fs: &F, path: &str) -> Vec<Entry>
where
    F: FileAccess + ?Sized,
{
    try_list_directory(fs, path).unwrap_or_else(|e| {
        log::warn!("failed to list directory {path}: {e}");
        Vec::new()
    })
}
