use filedeck_domain::FileAction;
use filedeck_scanner::FileAccess;

use crate::{copy_item, create_folder, delete_item, move_item};

/// Runs one [`FileAction`] against `fs`.
#[must_use]
pub fn apply<F>(fs: &F, action: &FileAction) -> bool
where
    F: FileAccess + ?Sized,
{
    match action {
        FileAction::CreateFolder { path } => create_folder(fs, path),
        FileAction::Delete { path } => delete_item(fs, path),
        FileAction::Copy { from, to } => copy_item(fs, from, to),
        FileAction::Move { from, to } => move_item(fs, from, to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use filedeck_scanner::MemoryFileAccess;

    #[test]
    fn test_apply_sequence() {
        let fs = MemoryFileAccess::new().with_file("/docs/a.txt", 4);
        let actions = [
            FileAction::CreateFolder { path: "/docs/keep".into() },
            FileAction::Copy { from: "/docs/a.txt".into(), to: "/docs/keep/a.txt".into() },
            FileAction::Move { from: "/docs/a.txt".into(), to: "/docs/b.txt".into() },
            FileAction::Delete { path: "/docs/b.txt".into() },
        ];
        assert!(actions.iter().all(|a| apply(&fs, a)));
        assert!(fs.exists("/docs/keep/a.txt"));
        assert!(!fs.exists("/docs/a.txt"));
        assert!(!fs.exists("/docs/b.txt"));
    }
}
