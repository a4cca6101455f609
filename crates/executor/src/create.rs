use filedeck_scanner::FileAccess;

use crate::outcome::report;

/// Creates `path` and any missing parents.
#[must_use]
pub fn create_folder<F>(fs: &F, path: &str) -> bool
where
    F: FileAccess + ?Sized,
{
    report(fs.create_dir(path, true), &format!("create folder {path}"))
}
