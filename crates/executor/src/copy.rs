use filedeck_scanner::FileAccess;

use crate::outcome::report;

/// Copies a file or a whole folder to `destination`, which must not exist.
#[must_use]
pub fn copy_item<F>(fs: &F, source: &str, destination: &str) -> bool
where
    F: FileAccess + ?Sized,
{
    report(
        fs.copy(source, destination),
        &format!("copy {source} -> {destination}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use filedeck_scanner::MemoryFileAccess;

    #[test]
    fn test_copy_item() {
        let fs = MemoryFileAccess::new()
            .with_file("/docs/a.txt", 3)
            .with_dir("/backup");
        assert!(copy_item(&fs, "/docs/a.txt", "/backup/a.txt"));
        assert!(fs.exists("/docs/a.txt"));
        assert!(fs.exists("/backup/a.txt"));
        assert!(!copy_item(&fs, "/docs/a.txt", "/backup/a.txt"));
        assert!(!copy_item(&fs, "/docs/missing.txt", "/backup/missing.txt"));
    }
}
