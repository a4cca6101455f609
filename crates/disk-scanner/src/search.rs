use filedeck_domain::Entry;

use crate::lister::list_directory;
use crate::walk::VisitedDirs;
use crate::FileAccess;

/// Shortest query callers should run a search for.
pub const MIN_QUERY_LEN: usize = 2;

pub fn is_searchable_query(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// 递归按名称搜索（忽略大小写，先序：目录先于其内容，匹配的目录同样继续搜索）
pub fn search<F>(fs: &F, root: &str, query: &str) -> Vec<Entry>
where
    F: FileAccess + ?Sized,
{
    let needle = query.to_lowercase();
    let visited = VisitedDirs::new();
    let mut results = Vec::new();
    collect_matches(fs, root, &needle, &visited, &mut results);
    log::debug!("search {query:?} under {root}: {} matches", results.len());
    results
}

fn collect_matches<F>(
    fs: &F,
    path: &str,
    needle: &str,
    visited: &VisitedDirs,
    results: &mut Vec<Entry>,
) where
    F: FileAccess + ?Sized,
{
    if !visited.enter(fs, path) {
        return;
    }
    for entry in list_directory(fs, path) {
        let is_directory = entry.is_directory;
        let child_path = entry.path.clone();
        if entry.name.to_lowercase().contains(needle) {
            results.push(entry);
        }
        if is_directory {
            collect_matches(fs, &child_path, needle, visited, results);
        }
    }
}
