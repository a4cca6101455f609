use std::fs;
use std::path::Path;

use filedeck_scanner::{
    aggregate_by_category, aggregate_by_category_par, list_directory, search, CategoryTotals,
    MemoryFileAccess, StdFileAccess,
};

fn path_str(p: &Path) -> String {
    p.to_string_lossy().into_owned()
}

fn write(root: &Path, relative: &str, size: usize) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; size]).unwrap();
}

/// 构造一棵包含各类文件的目录树，返回所有文件大小之和
fn create_test_tree(root: &Path) -> u64 {
    let files: &[(&str, usize)] = &[
        ("a.jpg", 1024),
        ("sub/b.mp3", 2048),
        ("sub/deeper/clip.MOV", 300),
        ("sub/deeper/report.pdf", 120),
        ("docs/notes.txt", 42),
        ("docs/backup.tar.gz", 77),
        ("docs/README", 9),
        ("empty.bin", 0),
    ];
    for (relative, size) in files {
        write(root, relative, *size);
    }
    fs::create_dir_all(root.join("nothing/here")).unwrap();
    files.iter().map(|(_, size)| *size as u64).sum()
}

#[test]
fn test_end_to_end_scenario_on_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "a.jpg", 1024);
    write(dir.path(), "sub/b.mp3", 2048);
    let fs_access = StdFileAccess::new(dir.path());

    let totals = aggregate_by_category(&fs_access, &path_str(dir.path()));
    assert_eq!(
        totals,
        CategoryTotals {
            images: 1024,
            videos: 0,
            audio: 2048,
            documents: 0,
            archives: 0,
            other: 0,
        }
    );
}

#[test]
fn test_totals_match_file_sizes() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let expected = create_test_tree(dir.path());
    let fs_access = StdFileAccess::new(dir.path());
    let root = path_str(dir.path());

    let sequential = aggregate_by_category(&fs_access, &root);
    assert_eq!(sequential.total(), expected);
    assert_eq!(sequential.videos, 300);
    assert_eq!(sequential.documents, 162);
    assert_eq!(sequential.archives, 77);
    assert_eq!(sequential.other, 9);

    assert_eq!(aggregate_by_category_par(&fs_access, &root), sequential);
}

#[test]
fn test_listing_on_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    create_test_tree(dir.path());
    let fs_access = StdFileAccess::new(dir.path());

    let entries = list_directory(&fs_access, &path_str(dir.path()));
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["docs", "nothing", "sub", "a.jpg", "empty.bin"]);
    assert_eq!(entries[3].size, 1024);
    assert!(entries[3].modification_time > 0);
}

#[test]
fn test_search_on_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "cat.txt", 1);
    write(dir.path(), "dog.txt", 1);
    write(dir.path(), "category/tomcat.png", 1);
    let fs_access = StdFileAccess::new(dir.path());

    let results = search(&fs_access, &path_str(dir.path()), "Cat");
    let names: Vec<&str> = results.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["category", "tomcat.png", "cat.txt"]);
}

#[test]
fn test_unreadable_subdirectory_reads_as_empty() {
    let broken = MemoryFileAccess::new()
        .with_file("/root/a.jpg", 1024)
        .with_file("/root/locked/secret.mp4", 999)
        .with_file("/root/locked/cat.doc", 5)
        .with_unreadable("/root/locked");
    let emptied = MemoryFileAccess::new()
        .with_file("/root/a.jpg", 1024)
        .with_dir("/root/locked");

    assert_eq!(
        aggregate_by_category(&broken, "/root"),
        aggregate_by_category(&emptied, "/root")
    );
    assert_eq!(search(&broken, "/root", "ca"), search(&emptied, "/root", "ca"));
    assert_eq!(search(&broken, "/root", "lock"), search(&emptied, "/root", "lock"));
}

#[test]
#[cfg(unix)]
fn test_symlink_cycle_on_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), "a.jpg", 10);
    write(dir.path(), "sub/b.mp3", 20);
    std::os::unix::fs::symlink(dir.path(), dir.path().join("sub/loop")).unwrap();
    let fs_access = StdFileAccess::new(dir.path());
    let root = path_str(dir.path());

    assert_eq!(aggregate_by_category(&fs_access, &root).total(), 30);
    let results = search(&fs_access, &root, "b.mp3");
    assert_eq!(results.len(), 1);
}
