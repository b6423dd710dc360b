//! Glob and regular expression matching.
//!
//! The walker only needs "does this string match": [`Matcher`] is that
//! capability, and [`Pattern`] provides the glob and regex implementations
//! plus an escape hatch for custom matchers.

use std::fmt;
use std::sync::Arc;

use glob::MatchOptions;
use regex::Regex;

use crate::error::RosetilError;
use crate::Result;

/// Decides whether a string matches.
pub trait Matcher: fmt::Debug + Send + Sync {
    /// Return true if `value` matches.
    fn is_match(&self, value: &str) -> bool;
}

/// Glob options: `*` stays within one path component, `**` spans components.
///
/// A glob ending in `/**` also matches the directory it is anchored on, so
/// `**/node_modules/**` matches `/app/node_modules` as well as its contents.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// A compiled pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Shell-style glob (`*`, `**`, `?`, `[...]`)
    Glob(glob::Pattern),
    /// Regular expression, matched anywhere in the value
    Regex(Regex),
    /// Caller-supplied matcher
    Custom(Arc<dyn Matcher>),
}

impl Pattern {
    /// Compile a glob pattern.
    pub fn glob(pattern: &str) -> Result<Self> {
        glob::Pattern::new(pattern)
            .map(Pattern::Glob)
            .map_err(|e| RosetilError::InvalidGlob {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Compile a regular expression.
    pub fn regex(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(Pattern::Regex)
            .map_err(|e| RosetilError::InvalidRegex {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    /// Wrap a custom matcher.
    pub fn custom(matcher: impl Matcher + 'static) -> Self {
        Pattern::Custom(Arc::new(matcher))
    }
}

impl Matcher for Pattern {
    fn is_match(&self, value: &str) -> bool {
        match self {
            Pattern::Glob(glob) => {
                if glob.matches_with(value, GLOB_OPTIONS) {
                    return true;
                }
                // `dir/**` also covers `dir` itself.
                glob.as_str().ends_with("/**")
                    && !value.ends_with('/')
                    && glob.matches_with(&format!("{value}/"), GLOB_OPTIONS)
            }
            Pattern::Regex(regex) => regex.is_match(value),
            Pattern::Custom(matcher) => matcher.is_match(value),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Glob(glob) => write!(f, "{}", glob.as_str()),
            Pattern::Regex(regex) => write!(f, "/{}/", regex.as_str()),
            Pattern::Custom(matcher) => write!(f, "{:?}", matcher),
        }
    }
}

impl From<glob::Pattern> for Pattern {
    fn from(pattern: glob::Pattern) -> Self {
        Pattern::Glob(pattern)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern::Regex(regex)
    }
}

/// Check if `value` matches any of `patterns`.
///
/// An empty pattern list matches nothing.
pub fn matches(value: &str, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Suffix(&'static str);

    impl Matcher for Suffix {
        fn is_match(&self, value: &str) -> bool {
            value.ends_with(self.0)
        }
    }

    #[test]
    fn test_match_literal() {
        let pattern = Pattern::glob("foo").unwrap();
        assert!(pattern.is_match("foo"));
        assert!(!pattern.is_match("bar"));
    }

    #[test]
    fn test_match_glob() {
        let pattern = Pattern::glob("*.js").unwrap();
        assert!(!pattern.is_match("foo"));
        assert!(pattern.is_match("foo.js"));
        assert!(!pattern.is_match("foo.ts"));
    }

    #[test]
    fn test_glob_star_stays_in_component() {
        let pattern = Pattern::glob("*.js").unwrap();
        assert!(!pattern.is_match("src/foo.js"));

        let pattern = Pattern::glob("**/*.js").unwrap();
        assert!(pattern.is_match("src/foo.js"));
        assert!(pattern.is_match("src/deep/foo.js"));
    }

    #[test]
    fn test_glob_recursive_directory() {
        let pattern = Pattern::glob("**/node_modules/**").unwrap();
        assert!(pattern.is_match("/project/node_modules/left-pad"));
        assert!(pattern.is_match("project/node_modules/a/b"));
        assert!(!pattern.is_match("/project/src"));
    }

    #[test]
    fn test_glob_trailing_globstar_matches_directory_itself() {
        let pattern = Pattern::glob("**/node_modules/**").unwrap();
        assert!(pattern.is_match("/project/node_modules"));
        assert!(!pattern.is_match("/project/node_modules_old"));

        let pattern = Pattern::glob("**/target").unwrap();
        assert!(pattern.is_match("/project/target"));
        assert!(!pattern.is_match("/project/target/debug"));
    }

    #[test]
    fn test_regex_sees_raw_value() {
        let pattern = Pattern::regex("^/r(/keep)?$").unwrap();
        assert!(pattern.is_match("/r"));
        assert!(pattern.is_match("/r/keep"));
        assert!(!pattern.is_match("/r/keep/"));
    }

    #[test]
    fn test_match_regex() {
        assert!(Pattern::regex("foo").unwrap().is_match("foo"));
        assert!(!Pattern::regex("bar").unwrap().is_match("foo"));
        assert!(Pattern::regex(r"^/srv/.*\.d$").unwrap().is_match("/srv/conf.d"));
    }

    #[test]
    fn test_match_custom() {
        let pattern = Pattern::custom(Suffix(".lock"));
        assert!(pattern.is_match("Cargo.lock"));
        assert!(!pattern.is_match("Cargo.toml"));
    }

    #[test]
    fn test_matches_any() {
        let patterns = vec![
            Pattern::glob("*.ts").unwrap(),
            Pattern::regex("^foo").unwrap(),
        ];
        assert!(matches("foo.js", &patterns));
        assert!(matches("bar.ts", &patterns));
        assert!(!matches("bar.js", &patterns));
    }

    #[test]
    fn test_matches_empty_list() {
        assert!(!matches("foo", &[]));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = Pattern::glob("[invalid");

        if let Err(RosetilError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }

    #[test]
    fn test_invalid_regex_pattern() {
        let result = Pattern::regex("(unclosed");

        if let Err(RosetilError::InvalidRegex { pattern, .. }) = result {
            assert_eq!(pattern, "(unclosed");
        } else {
            panic!("Expected InvalidRegex error");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Pattern::glob("**/x").unwrap().to_string(), "**/x");
        assert_eq!(Pattern::regex("a+").unwrap().to_string(), "/a+/");
    }
}
