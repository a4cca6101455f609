use filedeck_domain::{ClipboardItem, FileAction};
use filedeck_scanner::{file_name, join_path, FileAccess};

use crate::apply;

/// Where pasting `item` into `dest_dir` puts it: the same name, in `dest_dir`.
pub fn paste_destination(item: &ClipboardItem, dest_dir: &str) -> String {
    join_path(dest_dir, file_name(&item.path))
}

/// Copies or moves the clipboard item into `dest_dir`.
#[must_use]
pub fn paste<F>(fs: &F, item: &ClipboardItem, dest_dir: &str) -> bool
where
    F: FileAccess + ?Sized,
{
    let action: FileAction = item.to_action(paste_destination(item, dest_dir));
    apply(fs, &action)
}
