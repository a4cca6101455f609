use filedeck_scanner::FileAccess;

use crate::outcome::report;

/// Moves or renames a file or folder.
#[must_use]
pub fn move_item<F>(fs: &F, source: &str, destination: &str) -> bool
where
    F: FileAccess + ?Sized,
{
    report(
        fs.move_to(source, destination),
        &format!("move {source} -> {destination}"),
    )
}
