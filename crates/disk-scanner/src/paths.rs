/// `dir + "/" + name`, without doubling a trailing separator.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// Last path segment, `"item"` when there is none.
pub fn file_name(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .unwrap_or("item")
}

/// Parent directory, `None` at `/` or for a bare name.
pub fn parent_path(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rsplit_once('/') {
        Some(("", _)) => Some("/"),
        Some((parent, _)) => Some(parent),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/docs", "a.txt"), "/docs/a.txt");
        assert_eq!(join_path("/docs/", "a.txt"), "/docs/a.txt");
        assert_eq!(join_path("/", "docs"), "/docs");
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/docs/a.txt"), "a.txt");
        assert_eq!(file_name("/docs/photos/"), "photos");
        assert_eq!(file_name("plain"), "plain");
        assert_eq!(file_name("/"), "item");
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path("/docs/photos"), Some("/docs"));
        assert_eq!(parent_path("/docs/photos/"), Some("/docs"));
        assert_eq!(parent_path("/docs"), Some("/"));
        assert_eq!(parent_path("/"), None);
        assert_eq!(parent_path("docs"), None);
        assert_eq!(parent_path("docs/a"), Some("docs"));
    }
}
