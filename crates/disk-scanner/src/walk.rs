use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use crate::FileAccess;

/// Directories already entered by one traversal, keyed by canonical path.
#[derive(Debug, Default)]
pub(crate) struct VisitedDirs {
    seen: Mutex<HashSet<String>>,
}

impl VisitedDirs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records `path` and returns whether the walk should descend into it.
    pub(crate) fn enter<F>(&self, fs: &F, path: &str) -> bool
    where
        F: FileAccess + ?Sized,
    {
        let key = fs
            .canonicalize(path)
            .unwrap_or_else(|_| path.trim_end_matches('/').to_string());
        let first_visit = self
            .seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key);
        if !first_visit {
            log::debug!("skipping {path}: directory already visited");
        }
        first_visit
    }
}
