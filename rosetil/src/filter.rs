//! Include/exclude filtering with glob and regex pattern support.
//!
//! A [`FilterConfig`] describes the policy; [`FilterConfig::build`] freezes it
//! into a [`Filter`] predicate that the directory walker consults before
//! searching each directory.

use std::ffi::OsStr;
use std::path::Path;

use crate::path::normalize;
use crate::pattern::{matches, Pattern};
use crate::Result;

/// Configuration for string/path filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Patterns to include (if empty, everything passes this stage)
    pub include: Vec<Pattern>,
    /// Patterns to exclude
    pub exclude: Vec<Pattern>,
    /// Reject values containing a NUL character
    pub no_null_char: bool,
    /// Reject the empty string
    pub no_empty_string: bool,
    /// Normalize values before matching
    pub normalize: bool,
}

impl FilterConfig {
    /// Create a new empty filter config (everything passes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include glob pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(Pattern::glob(pattern)?);
        Ok(self)
    }

    /// Add an exclude glob pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(Pattern::glob(pattern)?);
        Ok(self)
    }

    /// Add an include regex.
    pub fn include_regex(mut self, pattern: &str) -> Result<Self> {
        self.include.push(Pattern::regex(pattern)?);
        Ok(self)
    }

    /// Add an exclude regex.
    pub fn exclude_regex(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(Pattern::regex(pattern)?);
        Ok(self)
    }

    /// Add an already compiled include pattern.
    pub fn include_pattern(mut self, pattern: Pattern) -> Self {
        self.include.push(pattern);
        self
    }

    /// Add an already compiled exclude pattern.
    pub fn exclude_pattern(mut self, pattern: Pattern) -> Self {
        self.exclude.push(pattern);
        self
    }

    /// Add multiple include glob patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude glob patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Builder: reject values containing a NUL character
    pub fn with_no_null_char(mut self, enabled: bool) -> Self {
        self.no_null_char = enabled;
        self
    }

    /// Builder: reject the empty string
    pub fn with_no_empty_string(mut self, enabled: bool) -> Self {
        self.no_empty_string = enabled;
        self
    }

    /// Builder: normalize values before matching
    pub fn with_normalize(mut self, enabled: bool) -> Self {
        self.normalize = enabled;
        self
    }

    /// Freeze the configuration into a predicate.
    pub fn build(self) -> Filter {
        Filter { config: self }
    }
}

/// A compiled filter predicate.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    config: FilterConfig,
}

impl Filter {
    /// Check if a value passes the filter.
    ///
    /// Checks run in a fixed order:
    /// 1. The value must be valid UTF-8
    /// 2. NUL and empty-string checks (when enabled)
    /// 3. Normalization (when enabled)
    /// 4. It matches at least one include pattern (or include is empty)
    /// 5. It doesn't match any exclude pattern
    pub fn test(&self, candidate: impl AsRef<OsStr>) -> bool {
        let Some(id) = candidate.as_ref().to_str() else {
            return false;
        };

        if self.config.no_null_char && id.contains('\0') {
            return false;
        }

        if self.config.no_empty_string && id.is_empty() {
            return false;
        }

        let normalized;
        let id = if self.config.normalize {
            normalized = normalize(id);
            normalized.as_str()
        } else {
            id
        };

        if !self.config.include.is_empty() && !matches(id, &self.config.include) {
            return false;
        }

        !matches(id, &self.config.exclude)
    }

    /// Check if a path passes the filter.
    pub fn test_path(&self, path: &Path) -> bool {
        self.test(path.as_os_str())
    }

    /// The configuration this filter was built from.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosetilError;

    #[test]
    fn test_empty_filter_passes_everything() {
        let filter = FilterConfig::new().build();
        assert!(filter.test("foo"));
        assert!(filter.test(""));
    }

    #[cfg(unix)]
    #[test]
    fn test_rejects_non_utf8() {
        use std::os::unix::ffi::OsStrExt;

        let filter = FilterConfig::new().build();
        assert!(!filter.test(OsStr::from_bytes(&[0x66, 0x6f, 0xff])));
    }

    #[test]
    fn test_no_empty_string() {
        let filter = FilterConfig::new().with_no_empty_string(true).build();
        assert!(!filter.test(""));

        let filter = FilterConfig::new().with_no_empty_string(false).build();
        assert!(filter.test(""));
    }

    #[test]
    fn test_no_null_char() {
        let filter = FilterConfig::new().with_no_null_char(true).build();
        assert!(!filter.test("foo\0bar"));

        let filter = FilterConfig::new().with_no_null_char(false).build();
        assert!(filter.test("foo\0bar"));
    }

    #[test]
    fn test_normalize_before_matching() {
        let filter = FilterConfig::new()
            .include("foo/bar")
            .unwrap()
            .with_normalize(true)
            .build();
        assert!(filter.test("foo\\bar"));
        assert!(filter.test("foo/./baz/../bar"));

        let filter = FilterConfig::new()
            .include("foo/bar")
            .unwrap()
            .with_normalize(false)
            .build();
        assert!(!filter.test("foo\\bar"));
    }

    #[test]
    fn test_include_glob() {
        let filter = FilterConfig::new().include("*.js").unwrap().build();
        assert!(filter.test("foo.js"));
        assert!(!filter.test("bar.ts"));
    }

    #[test]
    fn test_exclude_glob() {
        let filter = FilterConfig::new().exclude("*.ts").unwrap().build();
        assert!(filter.test("foo.js"));
        assert!(!filter.test("bar.ts"));
    }

    #[test]
    fn test_include_regex() {
        let filter = FilterConfig::new().include_regex("foo.js").unwrap().build();
        assert!(filter.test("foo.js"));
        assert!(!filter.test("bar.ts"));
    }

    #[test]
    fn test_exclude_regex() {
        let filter = FilterConfig::new().exclude_regex("bar.ts").unwrap().build();
        assert!(filter.test("foo.js"));
        assert!(!filter.test("bar.ts"));
    }

    #[test]
    fn test_include_is_any_of() {
        let filter = FilterConfig::new()
            .include_many(&["**/src/**", "**/tests/**"])
            .unwrap()
            .build();
        assert!(filter.test("project/src/main.rs"));
        assert!(filter.test("project/tests/it.rs"));
        assert!(!filter.test("project/benches/b.rs"));
    }

    #[test]
    fn test_exclude_overrides_include() {
        let filter = FilterConfig::new()
            .include("**/src/**")
            .unwrap()
            .exclude_many(&["**/generated/**"])
            .unwrap()
            .build();
        assert!(filter.test("project/src/lib.rs"));
        assert!(!filter.test("project/src/generated/out.rs"));
    }

    #[test]
    fn test_null_check_runs_before_normalize() {
        let filter = FilterConfig::new()
            .with_no_null_char(true)
            .with_normalize(true)
            .build();
        assert!(!filter.test("a/\0/.."));
    }

    #[test]
    fn test_test_path() {
        let filter = FilterConfig::new()
            .exclude("**/node_modules/**")
            .unwrap()
            .build();
        assert!(filter.test_path(Path::new("/project/src/")));
        assert!(!filter.test_path(Path::new("/project/node_modules/")));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().include("[invalid");

        assert!(matches!(result, Err(RosetilError::InvalidGlob { .. })));
    }
}
