//! Upward and downward directory traversal, generic over [`WalkerFs`].
//!
//! Both directions are explicit loops rather than recursion. Depth starts at
//! zero in the starting directory and grows by one per level moved; a
//! directory past the depth limit, or rejected by the filter, is not
//! searched and ends that branch of the walk.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::RosetilError;
use crate::filter::Filter;
use crate::fs::WalkerFs;
use crate::Result;

/// Whether a walk stops at the first match or collects all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collect {
    /// Stop as soon as one match is recorded
    First,
    /// Record every match
    All,
}

/// Traversal state shared by the upward and downward passes of one search.
pub struct Walker<'a, F: WalkerFs> {
    fs: &'a F,
    filter: &'a Filter,
    max_depth: Option<usize>,
    follow_symlinks: bool,
}

impl<'a, F: WalkerFs> Walker<'a, F> {
    /// Create a walker over `fs`, consulting `filter` for every directory.
    pub fn new(
        fs: &'a F,
        filter: &'a Filter,
        max_depth: Option<usize>,
        follow_symlinks: bool,
    ) -> Self {
        Self {
            fs,
            filter,
            max_depth,
            follow_symlinks,
        }
    }

    fn within_depth(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max)
    }

    fn allows(&self, dir: &Path) -> bool {
        self.filter.test_path(dir)
    }

    /// Check for `filename` directly inside `dir`.
    pub async fn check(&self, dir: &Path, filename: &str) -> Option<PathBuf> {
        let candidate = if filename.is_empty() {
            dir.to_path_buf()
        } else {
            dir.join(filename)
        };

        if self.fs.exists(&candidate).await {
            trace!(path = %candidate.display(), "found candidate");
            Some(candidate)
        } else {
            None
        }
    }

    /// Walk from `start` toward the filesystem root, nearest directory first.
    pub async fn up(
        &self,
        filename: &str,
        start: &Path,
        collect: Collect,
        found: &mut Vec<PathBuf>,
    ) {
        let mut current = start.to_path_buf();
        let mut depth = 0;

        loop {
            if !self.within_depth(depth) {
                return;
            }

            if !self.allows(&current) {
                trace!(dir = %current.display(), "directory filtered out");
                return;
            }

            trace!(dir = %current.display(), depth, "searching upward");

            if let Some(path) = self.check(&current, filename).await {
                found.push(path);
                if collect == Collect::First {
                    return;
                }
            }

            // The root is its own parent; `Path::parent` reports that as None.
            let parent = match current.parent() {
                Some(parent) if !parent.as_os_str().is_empty() && parent != current => {
                    parent.to_path_buf()
                }
                _ => return,
            };
            current = parent;
            depth += 1;
        }
    }

    /// Walk from `start` into its subdirectories, depth-first in listing order.
    ///
    /// With `skip_start_check` the existence check in `start` itself is left
    /// out; subdirectories are still searched. Only a failure to list `start`
    /// is an error, unreadable directories below it count as empty.
    pub async fn down(
        &self,
        filename: &str,
        start: &Path,
        collect: Collect,
        skip_start_check: bool,
        found: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let mut visited: HashSet<PathBuf> = HashSet::new();
        if self.follow_symlinks {
            visited.insert(self.fs.canonicalize(start).await);
        }

        let mut stack: Vec<(PathBuf, usize)> = vec![(start.to_path_buf(), 0)];

        while let Some((dir, depth)) = stack.pop() {
            if !self.within_depth(depth) {
                continue;
            }

            if !self.allows(&dir) {
                trace!(dir = %dir.display(), "directory filtered out");
                continue;
            }

            trace!(dir = %dir.display(), depth, "searching downward");

            if !(skip_start_check && depth == 0) {
                if let Some(path) = self.check(&dir, filename).await {
                    found.push(path);
                    if collect == Collect::First {
                        return Ok(());
                    }
                }
            }

            // Children would be past the limit. The start directory is still
            // listed so that an unreadable `start` is reported.
            let at_limit = self.max_depth == Some(depth);
            if at_limit && depth > 0 {
                continue;
            }

            let entries = match self.fs.list_dir(&dir).await {
                Ok(entries) => entries,
                Err(source) if depth == 0 => {
                    return Err(RosetilError::ReadDir { path: dir, source });
                }
                Err(err) => {
                    debug!(dir = %dir.display(), error = %err, "skipping unreadable directory");
                    continue;
                }
            };

            if at_limit {
                continue;
            }

            let mut children = Vec::new();
            for entry in entries {
                let path = dir.join(&entry.name);

                let descend = entry.is_dir
                    || (self.follow_symlinks
                        && entry.is_symlink
                        && self.fs.is_dir(&path).await.unwrap_or(false));
                if !descend {
                    continue;
                }

                if self.follow_symlinks {
                    let real = self.fs.canonicalize(&path).await;
                    if !visited.insert(real) {
                        debug!(dir = %path.display(), "skipping already visited directory");
                        continue;
                    }
                }

                children.push((path, depth + 1));
            }

            // Reversed so the first listed child is popped first.
            stack.extend(children.into_iter().rev());
        }

        Ok(())
    }
}
