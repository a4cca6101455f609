use std::collections::{BTreeMap, HashSet};
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use filedeck_common::FileBrowserError;

use crate::paths::{file_name, parent_path};
use crate::{FileAccess, FileStat};

const MAX_LINK_HOPS: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Node {
    Dir { modified: i64 },
    File { size: u64, modified: i64 },
}

#[derive(Debug, Default)]
struct Tree {
    nodes: BTreeMap<String, Node>,
    /// 目录别名（类似符号链接）：链接路径 -> 目标路径
    links: BTreeMap<String, String>,
}

/// 内存文件系统，可注入不可读目录、stat 失败与目录别名
#[derive(Debug)]
pub struct MemoryFileAccess {
    tree: Mutex<Tree>,
    unreadable: HashSet<String>,
    broken_stats: HashSet<String>,
    vanished: HashSet<String>,
    total_capacity: u64,
    free_space: u64,
}

impl Default for MemoryFileAccess {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

fn is_within(path: &str, root: &str) -> bool {
    path == root || root == "/" || path.starts_with(&format!("{root}/"))
}

fn io_error(kind: io::ErrorKind, msg: String) -> FileBrowserError {
    FileBrowserError::Io(io::Error::new(kind, msg))
}

impl Tree {
    /// Follows directory links until the path no longer starts with one.
    fn resolve(&self, path: &str) -> String {
        let mut current = normalize(path);
        for _ in 0..MAX_LINK_HOPS {
            let hop = self
                .links
                .iter()
                .find(|(link, _)| is_within(&current, link))
                .map(|(link, target)| format!("{target}{}", &current[link.len()..]));
            match hop {
                Some(next) => current = normalize(&next),
                None => break,
            }
        }
        current
    }

    fn ensure_ancestors(&mut self, path: &str, modified: i64) {
        let mut pending = Vec::new();
        let mut cursor = parent_path(path);
        while let Some(dir) = cursor {
            if self.nodes.contains_key(dir) {
                break;
            }
            pending.push(dir.to_string());
            cursor = parent_path(dir);
        }
        for dir in pending {
            self.nodes.insert(dir, Node::Dir { modified });
        }
    }

    fn subtree(&self, root: &str) -> Vec<(String, Node)> {
        self.nodes
            .iter()
            .filter(|(path, _)| is_within(path, root))
            .map(|(path, node)| (path.clone(), *node))
            .collect()
    }
}

impl MemoryFileAccess {
    pub fn new() -> Self {
        let mut tree = Tree::default();
        tree.nodes.insert("/".to_string(), Node::Dir { modified: 0 });
        Self {
            tree: Mutex::new(tree),
            unreadable: HashSet::new(),
            broken_stats: HashSet::new(),
            vanished: HashSet::new(),
            total_capacity: 0,
            free_space: 0,
        }
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.insert(path, Node::Dir { modified: 0 });
        self
    }

    pub fn with_file(self, path: &str, size: u64) -> Self {
        self.with_file_at(path, size, 0)
    }

    pub fn with_file_at(self, path: &str, size: u64, modified: i64) -> Self {
        self.insert(path, Node::File { size, modified });
        self
    }

    /// `read_dir_names` on this directory fails with permission denied.
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(normalize(path));
        self
    }

    /// `stat` on this path fails.
    pub fn with_broken_stat(mut self, path: &str) -> Self {
        self.broken_stats.insert(normalize(path));
        self
    }

    /// `stat` on this path succeeds but reports `exists: false`.
    pub fn with_vanished(mut self, path: &str) -> Self {
        self.vanished.insert(normalize(path));
        self
    }

    /// Makes `link` an alias of the directory `target`.
    pub fn with_link(self, link: &str, target: &str) -> Self {
        {
            let mut tree = self.lock();
            let link = normalize(link);
            tree.ensure_ancestors(&link, 0);
            tree.links.insert(link, normalize(target));
        }
        self
    }

    pub fn with_capacity(mut self, total: u64, free: u64) -> Self {
        self.total_capacity = total;
        self.free_space = free;
        self
    }

    pub fn exists(&self, path: &str) -> bool {
        let tree = self.lock();
        let resolved = tree.resolve(path);
        tree.nodes.contains_key(&resolved)
    }

    fn lock(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(&self, path: &str, node: Node) {
        let mut tree = self.lock();
        let path = normalize(path);
        tree.ensure_ancestors(&path, 0);
        tree.nodes.insert(path, node);
    }

    /// Checks shared by copy and move; returns the resolved source and destination.
    fn transfer_paths(&self, tree: &Tree, from: &str, to: &str) -> Result<(String, String), FileBrowserError> {
        let source = tree.resolve(from);
        if !tree.nodes.contains_key(&source) {
            return Err(FileBrowserError::NotFound(from.to_string()));
        }
        let dest = tree.resolve(to);
        if tree.nodes.contains_key(&dest) {
            return Err(io_error(
                io::ErrorKind::AlreadyExists,
                format!("destination already exists: {to}"),
            ));
        }
        if is_within(&dest, &source) {
            return Err(FileBrowserError::InvalidPath(format!(
                "cannot place {from} inside itself"
            )));
        }
        match parent_path(&dest).map(|p| tree.nodes.get(p)) {
            Some(Some(Node::Dir { .. })) => Ok((source, dest)),
            _ => Err(FileBrowserError::NotFound(to.to_string())),
        }
    }

    fn copy_subtree(tree: &mut Tree, source: &str, dest: &str) {
        for (path, node) in tree.subtree(source) {
            let target = format!("{dest}{}", &path[source.len()..]);
            tree.nodes.insert(target, node);
        }
    }
}

impl FileAccess for MemoryFileAccess {
    fn read_dir_names(&self, path: &str) -> Result<Vec<String>, FileBrowserError> {
        let tree = self.lock();
        let resolved = tree.resolve(path);
        if self.unreadable.contains(&resolved) {
            return Err(FileBrowserError::PermissionDenied(path.to_string()));
        }
        match tree.nodes.get(&resolved) {
            Some(Node::Dir { .. }) => {}
            Some(Node::File { .. }) => {
                return Err(FileBrowserError::InvalidPath(format!("not a directory: {path}")))
            }
            None => return Err(FileBrowserError::NotFound(path.to_string())),
        }

        let children = tree
            .nodes
            .keys()
            .chain(tree.links.keys())
            .filter(|child| child.as_str() != resolved && parent_path(child) == Some(resolved.as_str()))
            .map(|child| file_name(child).to_string())
            .collect();
        Ok(children)
    }

    fn stat(&self, path: &str) -> Result<FileStat, FileBrowserError> {
        let tree = self.lock();
        if self.broken_stats.contains(&normalize(path)) {
            return Err(io_error(io::ErrorKind::Other, format!("stat failed: {path}")));
        }
        if self.vanished.contains(&normalize(path)) {
            return Ok(FileStat::default());
        }
        let resolved = tree.resolve(path);
        match tree.nodes.get(&resolved) {
            Some(Node::Dir { modified }) => Ok(FileStat {
                exists: true,
                is_directory: true,
                size: 0,
                modification_time: *modified,
            }),
            Some(Node::File { size, modified }) => Ok(FileStat {
                exists: true,
                is_directory: false,
                size: *size,
                modification_time: *modified,
            }),
            None => Err(FileBrowserError::NotFound(path.to_string())),
        }
    }

    fn canonicalize(&self, path: &str) -> Result<String, FileBrowserError> {
        Ok(self.lock().resolve(path))
    }

    fn create_dir(&self, path: &str, intermediates: bool) -> Result<(), FileBrowserError> {
        let mut tree = self.lock();
        let resolved = tree.resolve(path);
        match tree.nodes.get(&resolved) {
            Some(Node::Dir { .. }) if intermediates => return Ok(()),
            Some(_) => {
                return Err(io_error(
                    io::ErrorKind::AlreadyExists,
                    format!("already exists: {path}"),
                ))
            }
            None => {}
        }
        let now = now_secs();
        if intermediates {
            tree.ensure_ancestors(&resolved, now);
        } else if !matches!(
            parent_path(&resolved).and_then(|p| tree.nodes.get(p)),
            Some(Node::Dir { .. })
        ) {
            return Err(FileBrowserError::NotFound(path.to_string()));
        }
        tree.nodes.insert(resolved, Node::Dir { modified: now });
        Ok(())
    }

    fn delete(&self, path: &str, idempotent: bool) -> Result<(), FileBrowserError> {
        let mut tree = self.lock();
        let target = normalize(path);
        if tree.links.remove(&target).is_some() {
            return Ok(());
        }
        let resolved = tree.resolve(&target);
        if !tree.nodes.contains_key(&resolved) {
            return if idempotent {
                Ok(())
            } else {
                Err(FileBrowserError::NotFound(path.to_string()))
            };
        }
        if resolved == "/" {
            return Err(FileBrowserError::InvalidPath("cannot delete /".to_string()));
        }
        tree.nodes.retain(|p, _| !is_within(p, &resolved));
        Ok(())
    }

    fn copy(&self, from: &str, to: &str) -> Result<(), FileBrowserError> {
        let mut tree = self.lock();
        let (source, dest) = self.transfer_paths(&tree, from, to)?;
        Self::copy_subtree(&mut tree, &source, &dest);
        Ok(())
    }

    fn move_to(&self, from: &str, to: &str) -> Result<(), FileBrowserError> {
        let mut tree = self.lock();
        let (source, dest) = self.transfer_paths(&tree, from, to)?;
        Self::copy_subtree(&mut tree, &source, &dest);
        tree.nodes.retain(|p, _| !is_within(p, &source));
        Ok(())
    }

    fn free_disk_space(&self) -> Result<u64, FileBrowserError> {
        Ok(self.free_space)
    }

    fn total_disk_capacity(&self) -> Result<u64, FileBrowserError> {
        Ok(self.total_capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryFileAccess {
        MemoryFileAccess::new()
            .with_file("/root/a.jpg", 1024)
            .with_file("/root/sub/b.mp3", 2048)
            .with_dir("/root/empty")
    }

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    #[test]
    fn test_read_dir_and_stat() {
        let fs = sample();
        assert_eq!(
            sorted(fs.read_dir_names("/root").unwrap()),
            vec!["a.jpg", "empty", "sub"]
        );
        assert_eq!(fs.read_dir_names("/").unwrap(), vec!["root"]);
        let stat = fs.stat("/root/sub/b.mp3").unwrap();
        assert_eq!(stat.size, 2048);
        assert!(!stat.is_directory);
        assert!(fs.stat("/root/sub").unwrap().is_directory);
        assert!(fs.stat("/root/nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_injected_failures() {
        let fs = sample()
            .with_unreadable("/root/sub")
            .with_broken_stat("/root/a.jpg")
            .with_vanished("/root/empty");
        assert!(matches!(
            fs.read_dir_names("/root/sub"),
            Err(FileBrowserError::PermissionDenied(_))
        ));
        assert!(fs.stat("/root/a.jpg").is_err());
        assert!(!fs.stat("/root/empty").unwrap().exists);
    }

    #[test]
    fn test_links_resolve() {
        let fs = sample().with_link("/root/sub/back", "/root");
        assert!(fs.read_dir_names("/root/sub").unwrap().contains(&"back".to_string()));
        assert!(fs.stat("/root/sub/back").unwrap().is_directory);
        assert_eq!(fs.canonicalize("/root/sub/back/sub").unwrap(), "/root/sub");
        assert!(fs.exists("/root/sub/back/a.jpg"));
    }

    #[test]
    fn test_mutations() {
        let fs = sample();
        fs.create_dir("/root/x/y", true).unwrap();
        assert!(fs.exists("/root/x"));
        assert!(fs.create_dir("/root/q/r", false).is_err());

        fs.copy("/root/sub", "/root/x/sub").unwrap();
        assert_eq!(fs.stat("/root/x/sub/b.mp3").unwrap().size, 2048);
        assert!(fs.copy("/root/sub", "/root/x/sub").is_err());
        assert!(fs.copy("/root/sub", "/root/sub/inner").is_err());

        fs.move_to("/root/a.jpg", "/root/empty/a.jpg").unwrap();
        assert!(!fs.exists("/root/a.jpg"));
        assert!(fs.exists("/root/empty/a.jpg"));

        fs.delete("/root/x", false).unwrap();
        assert!(!fs.exists("/root/x/sub/b.mp3"));
        assert!(fs.delete("/root/x", true).is_ok());
        assert!(fs.delete("/root/x", false).is_err());
    }
}
