//! Lexical path normalization.
//!
//! Nothing here touches the filesystem: `.` and `..` segments are resolved
//! textually, so symlinks are not taken into account.

use std::path::{Component, Path, PathBuf};

/// Normalize a path string.
///
/// Backslashes become forward slashes, repeated separators collapse, `.`
/// segments are dropped and `..` removes the preceding segment. A trailing
/// separator is preserved. The empty string normalizes to `.`.
///
/// ```rust
/// use rosetil::normalize;
///
/// assert_eq!(normalize("a/./b/../c"), "a/c");
/// assert_eq!(normalize("a\\b\\c"), "a/b/c");
/// assert_eq!(normalize(""), ".");
/// ```
pub fn normalize(id: &str) -> String {
    let id = id.replace('\\', "/");

    if id.is_empty() {
        return ".".to_string();
    }

    let is_absolute = id.starts_with('/');
    let trailing_separator = id.ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in id.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                // `..` above an absolute root stays at the root
                _ if is_absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join("/");

    if is_absolute {
        normalized.insert(0, '/');
    } else if normalized.is_empty() {
        normalized.push('.');
    }

    if trailing_separator && !normalized.ends_with('/') {
        normalized.push('/');
    }

    normalized
}

/// Lexically clean a path using `std::path` components.
///
/// Used to put a search's starting directory into canonical textual form so
/// that walking up with [`Path::parent`] visits every ancestor exactly once.
pub fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }

    if cleaned.as_os_str().is_empty() {
        cleaned.push(".");
    }

    cleaned
}
