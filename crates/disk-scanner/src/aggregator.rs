use filedeck_domain::{classify, CategoryTotals, Entry};
use rayon::prelude::*;

use crate::lister::list_directory;
use crate::walk::VisitedDirs;
use crate::FileAccess;

/// 按分类统计 `path` 下所有文件的字节数（不可读目录计为空）
pub fn aggregate_by_category<F>(fs: &F, path: &str) -> CategoryTotals
where
    F: FileAccess + ?Sized,
{
    let visited = VisitedDirs::new();
    let mut totals = CategoryTotals::default();
    accumulate(fs, path, &visited, &mut totals);
    log::debug!("aggregated {path}: {} bytes", totals.total());
    totals
}

fn accumulate<F>(fs: &F, path: &str, visited: &VisitedDirs, totals: &mut CategoryTotals)
where
    F: FileAccess + ?Sized,
{
    if !visited.enter(fs, path) {
        return;
    }
    for entry in list_directory(fs, path) {
        if entry.is_directory {
            accumulate(fs, &entry.path, visited, totals);
        } else {
            totals.record(classify(&entry.name), entry.size);
        }
    }
}

/// 并行版本：兄弟子树在 rayon 线程池上统计后合并
pub fn aggregate_by_category_par<F>(fs: &F, path: &str) -> CategoryTotals
where
    F: FileAccess + Sync + ?Sized,
{
    let visited = VisitedDirs::new();
    let totals = subtree_totals(fs, path, &visited);
    log::debug!("aggregated {path} in parallel: {} bytes", totals.total());
    totals
}

fn subtree_totals<F>(fs: &F, path: &str, visited: &VisitedDirs) -> CategoryTotals
where
    F: FileAccess + Sync + ?Sized,
{
    if !visited.enter(fs, path) {
        return CategoryTotals::default();
    }
    // 并行处理子项
    list_directory(fs, path)
        .par_iter()
        .map(|entry| entry_totals(fs, entry, visited))
        .reduce(CategoryTotals::default, |a, b| a + b)
}

fn entry_totals<F>(fs: &F, entry: &Entry, visited: &VisitedDirs) -> CategoryTotals
where
    F: FileAccess + Sync + ?Sized,
{
    if entry.is_directory {
        return subtree_totals(fs, &entry.path, visited);
    }
    let mut totals = CategoryTotals::default();
    totals.record(classify(&entry.name), entry.size);
    totals
}
