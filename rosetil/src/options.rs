//! Input options for directory searches.
//!
//! [`FindOptions`] is what callers build; every optional field is filled in
//! later by [`FindConfig::resolve`](crate::find::FindConfig::resolve).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Directory excluded from every search unless the caller overrides `exclude`.
pub const DEFAULT_EXCLUDE: &str = "**/node_modules/**";

/// Direction(s) to search the directory tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Traversal {
    /// Walk toward the filesystem root
    #[default]
    Up,
    /// Walk into subdirectories
    Down,
    /// Up first, then down
    Both,
    /// Only the starting directory
    None,
}

impl Traversal {
    /// True if the upward pass runs.
    pub fn goes_up(self) -> bool {
        matches!(self, Traversal::Up | Traversal::Both)
    }

    /// True if the downward pass runs.
    pub fn goes_down(self) -> bool {
        matches!(self, Traversal::Down | Traversal::Both)
    }
}

impl FromStr for Traversal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Traversal::Up),
            "down" => Ok(Traversal::Down),
            "both" => Ok(Traversal::Both),
            "none" => Ok(Traversal::None),
            _ => Err(format!("Unknown traversal: {}", s)),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Traversal::Up => "up",
            Traversal::Down => "down",
            Traversal::Both => "both",
            Traversal::None => "none",
        };
        f.write_str(name)
    }
}

/// One value or a list of values, for fields like `name` and `extension`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneOrMany(pub Vec<String>);

impl OneOrMany {
    /// Consume into the underlying list.
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for OneOrMany {
    fn from(value: &str) -> Self {
        Self(vec![value.to_string()])
    }
}

impl From<String> for OneOrMany {
    fn from(value: String) -> Self {
        Self(vec![value])
    }
}

impl From<Vec<String>> for OneOrMany {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

impl From<Vec<&str>> for OneOrMany {
    fn from(values: Vec<&str>) -> Self {
        Self(values.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for OneOrMany {
    fn from(values: &[&str]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany {
    fn from(values: [&str; N]) -> Self {
        Self(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Options for finding files.
///
/// Candidate filenames are composed as `prefix.name.suffix.extension`, with
/// empty parts left out.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// Base filenames to look for, in priority order
    pub name: Vec<String>,
    /// Directory to start from (default: current directory)
    pub cwd: Option<PathBuf>,
    /// Direction(s) to search
    pub traversal: Traversal,
    /// Maximum directory levels to move away from `cwd` (None = unlimited)
    pub depth: Option<usize>,
    /// Prefix joined before the name with a `.`
    pub prefix: String,
    /// Suffix joined after the name with a `.`
    pub suffix: String,
    /// Extensions, with or without a leading `.`
    pub extension: Vec<String>,
    /// Directories eligible for searching (empty = all)
    pub include: Vec<Pattern>,
    /// Directories never searched (None = [`DEFAULT_EXCLUDE`])
    pub exclude: Option<Vec<Pattern>>,
    /// Descend into symlinked directories during downward traversal
    pub follow_symlinks: bool,
}

impl FindOptions {
    /// Create options searching for one or more names.
    pub fn new(name: impl Into<OneOrMany>) -> Self {
        Self {
            name: name.into().into_vec(),
            ..Self::default()
        }
    }

    /// Set the starting directory.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the traversal direction.
    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Limit how many directory levels are traversed.
    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Set the filename prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the filename suffix.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Set one or more extensions.
    pub fn extension(mut self, extension: impl Into<OneOrMany>) -> Self {
        self.extension = extension.into().into_vec();
        self
    }

    /// Add a directory include pattern.
    pub fn include(mut self, pattern: Pattern) -> Self {
        self.include.push(pattern);
        self
    }

    /// Add a directory exclude pattern.
    ///
    /// The first call replaces the default `node_modules` exclusion.
    pub fn exclude(mut self, pattern: Pattern) -> Self {
        self.exclude.get_or_insert_with(Vec::new).push(pattern);
        self
    }

    /// Replace the exclude list; an empty list disables exclusion.
    pub fn exclude_all(mut self, patterns: Vec<Pattern>) -> Self {
        self.exclude = Some(patterns);
        self
    }

    /// Descend into symlinked directories.
    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traversal_default() {
        assert_eq!(Traversal::default(), Traversal::Up);
    }

    #[test]
    fn test_traversal_directions() {
        assert!(Traversal::Up.goes_up());
        assert!(!Traversal::Up.goes_down());
        assert!(Traversal::Both.goes_up());
        assert!(Traversal::Both.goes_down());
        assert!(!Traversal::None.goes_up());
        assert!(!Traversal::None.goes_down());
    }

    #[test]
    fn test_traversal_from_str() {
        assert_eq!(Traversal::from_str("up").unwrap(), Traversal::Up);
        assert_eq!(Traversal::from_str("DOWN").unwrap(), Traversal::Down);
        assert_eq!(Traversal::from_str("both").unwrap(), Traversal::Both);
        assert_eq!(Traversal::from_str("none").unwrap(), Traversal::None);
        assert!(Traversal::from_str("sideways").is_err());
    }

    #[test]
    fn test_traversal_serde() {
        let json = serde_json::to_string(&Traversal::Both).unwrap();
        assert_eq!(json, "\"both\"");

        let parsed: Traversal = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(parsed, Traversal::Down);
        assert_eq!(parsed.to_string(), "down");
    }

    #[test]
    fn test_one_or_many() {
        assert_eq!(OneOrMany::from("a").into_vec(), vec!["a"]);
        assert_eq!(OneOrMany::from(["a", "b"]).into_vec(), vec!["a", "b"]);
        assert_eq!(
            OneOrMany::from(vec!["x".to_string()]).into_vec(),
            vec!["x"]
        );
    }

    #[test]
    fn test_find_options_builder() {
        let options = FindOptions::new(["a", "b"])
            .cwd("/tmp")
            .traversal(Traversal::Down)
            .depth(2)
            .prefix("my")
            .suffix("config")
            .extension(["json", ".yaml"]);

        assert_eq!(options.name, vec!["a", "b"]);
        assert_eq!(options.cwd, Some(PathBuf::from("/tmp")));
        assert_eq!(options.traversal, Traversal::Down);
        assert_eq!(options.depth, Some(2));
        assert_eq!(options.prefix, "my");
        assert_eq!(options.suffix, "config");
        assert_eq!(options.extension, vec!["json", ".yaml"]);
        assert!(options.exclude.is_none());
    }

    #[test]
    fn test_exclude_replaces_default() {
        let options = FindOptions::new("a").exclude(Pattern::glob("**/target/**").unwrap());
        assert_eq!(options.exclude.as_ref().map(Vec::len), Some(1));

        let options = FindOptions::new("a").exclude_all(vec![]);
        assert_eq!(options.exclude.as_ref().map(Vec::len), Some(0));
    }
}
