//! High-level search API.
//!
//! Every search goes through the same steps: options are resolved into a
//! [`FindConfig`], candidate filenames are composed, a directory filter is
//! built, and the walker runs once per candidate filename. The variants only
//! differ in whether they stop at the first match and in whether filesystem
//! calls block ([`StdFs`]) or suspend ([`TokioFs`]).

use std::path::{Path, PathBuf};

use futures::executor::block_on;
use tracing::debug;

use crate::error::RosetilError;
use crate::filename::resolve_filenames;
use crate::filter::{Filter, FilterConfig};
use crate::fs::{StdFs, TokioFs, WalkerFs};
use crate::options::{FindOptions, Traversal, DEFAULT_EXCLUDE};
use crate::path::clean;
use crate::pattern::Pattern;
use crate::walker::{Collect, Walker};
use crate::Result;

/// Fully resolved search configuration: every default applied.
#[derive(Debug, Clone)]
pub struct FindConfig {
    /// Absolute, lexically cleaned starting directory
    pub cwd: PathBuf,
    /// Direction(s) to search
    pub traversal: Traversal,
    /// Maximum depth (None = unlimited)
    pub depth: Option<usize>,
    /// Candidate filenames in priority order
    pub filenames: Vec<String>,
    /// Predicate applied to every directory before it is searched
    pub filter: Filter,
    /// Descend into symlinked directories
    pub follow_symlinks: bool,
}

impl FindConfig {
    /// Resolve options into a configuration.
    ///
    /// A missing or relative `cwd` is resolved against the process working
    /// directory, and a missing `exclude` becomes [`DEFAULT_EXCLUDE`].
    pub fn resolve(options: FindOptions) -> Result<Self> {
        let cwd = match options.cwd {
            Some(cwd) if cwd.is_absolute() => cwd,
            Some(cwd) => std::env::current_dir()
                .map_err(RosetilError::CurrentDir)?
                .join(cwd),
            None => std::env::current_dir().map_err(RosetilError::CurrentDir)?,
        };

        let exclude = match options.exclude {
            Some(exclude) => exclude,
            None => vec![Pattern::glob(DEFAULT_EXCLUDE)?],
        };

        let filter = FilterConfig {
            include: options.include,
            exclude,
            no_null_char: true,
            no_empty_string: false,
            normalize: true,
        }
        .build();

        let filenames = resolve_filenames(
            &options.name,
            &options.prefix,
            &options.suffix,
            &options.extension,
        );

        Ok(Self {
            cwd: clean(&cwd),
            traversal: options.traversal,
            depth: options.depth,
            filenames,
            filter,
            follow_symlinks: options.follow_symlinks,
        })
    }
}

/// A resolved search bound to a filesystem.
///
/// # Example
///
/// ```rust,ignore
/// use rosetil::{Finder, FindOptions, Traversal};
///
/// let finder = Finder::new(FindOptions::new("Cargo.toml").traversal(Traversal::Up))?;
/// let manifest = finder.first().await?;
/// ```
#[derive(Debug)]
pub struct Finder<F: WalkerFs> {
    config: FindConfig,
    fs: F,
}

impl Finder<TokioFs> {
    /// Create a finder using suspending `tokio::fs` access.
    ///
    /// Searches must run inside a tokio runtime.
    pub fn new(options: FindOptions) -> Result<Self> {
        Self::with_fs(options, TokioFs)
    }
}

impl Finder<StdFs> {
    /// Create a finder using blocking `std::fs` access.
    pub fn blocking(options: FindOptions) -> Result<Self> {
        Self::with_fs(options, StdFs)
    }

    /// Blocking form of [`Finder::first`].
    pub fn first_sync(&self) -> Result<Option<PathBuf>> {
        block_on(self.first())
    }

    /// Blocking form of [`Finder::all`].
    pub fn all_sync(&self) -> Result<Vec<PathBuf>> {
        block_on(self.all())
    }

    /// Blocking form of [`Finder::directory`].
    pub fn directory_sync(&self) -> Result<Option<PathBuf>> {
        block_on(self.directory())
    }
}

impl<F: WalkerFs> Finder<F> {
    /// Create a finder over a custom filesystem.
    pub fn with_fs(options: FindOptions, fs: F) -> Result<Self> {
        Ok(Self::from_config(FindConfig::resolve(options)?, fs))
    }

    /// Create a finder from an already resolved configuration.
    pub fn from_config(config: FindConfig, fs: F) -> Self {
        Self { config, fs }
    }

    /// The resolved configuration.
    pub fn config(&self) -> &FindConfig {
        &self.config
    }

    /// Find the first match.
    ///
    /// Candidates are tried in order; for each one the upward pass runs
    /// before the downward pass.
    pub async fn first(&self) -> Result<Option<PathBuf>> {
        Ok(self.run(Collect::First).await?.into_iter().next())
    }

    /// Find every match, grouped by candidate filename, upward matches
    /// (nearest first) before downward matches.
    pub async fn all(&self) -> Result<Vec<PathBuf>> {
        self.run(Collect::All).await
    }

    /// Find the directory containing the first match.
    ///
    /// A match that is itself a directory is returned unchanged.
    pub async fn directory(&self) -> Result<Option<PathBuf>> {
        let Some(found) = self.first().await? else {
            return Ok(None);
        };

        let is_dir = self
            .fs
            .is_dir(&found)
            .await
            .map_err(|source| RosetilError::Metadata {
                path: found.clone(),
                source,
            })?;

        if is_dir {
            return Ok(Some(found));
        }

        Ok(Some(found.parent().map(Path::to_path_buf).unwrap_or(found)))
    }

    async fn run(&self, collect: Collect) -> Result<Vec<PathBuf>> {
        let config = &self.config;

        debug!(
            cwd = %config.cwd.display(),
            traversal = %config.traversal,
            depth = ?config.depth,
            candidates = config.filenames.len(),
            "starting search"
        );

        let walker = Walker::new(
            &self.fs,
            &config.filter,
            config.depth,
            config.follow_symlinks,
        );
        let mut found = Vec::new();

        for filename in &config.filenames {
            if config.traversal == Traversal::None {
                if let Some(path) = walker.check(&config.cwd, filename).await {
                    found.push(path);
                }
            } else {
                if config.traversal.goes_up() {
                    walker.up(filename, &config.cwd, collect, &mut found).await;
                }

                if collect == Collect::First && !found.is_empty() {
                    break;
                }

                if config.traversal.goes_down() {
                    // The upward pass already checked `cwd` itself.
                    let skip_start_check = config.traversal.goes_up();
                    walker
                        .down(filename, &config.cwd, collect, skip_start_check, &mut found)
                        .await?;
                }
            }

            if collect == Collect::First && !found.is_empty() {
                break;
            }
        }

        debug!(matches = found.len(), "search finished");

        Ok(found)
    }
}

/// Find the first matching path, suspending on filesystem access.
pub async fn find(options: FindOptions) -> Result<Option<PathBuf>> {
    Finder::new(options)?.first().await
}

/// Find the first matching path, blocking on filesystem access.
///
/// ```rust,no_run
/// use rosetil::{find_sync, FindOptions};
///
/// let manifest = find_sync(FindOptions::new("Cargo.toml")).unwrap();
/// ```
pub fn find_sync(options: FindOptions) -> Result<Option<PathBuf>> {
    Finder::blocking(options)?.first_sync()
}

/// Find every matching path, suspending on filesystem access.
pub async fn find_all(options: FindOptions) -> Result<Vec<PathBuf>> {
    Finder::new(options)?.all().await
}

/// Find every matching path, blocking on filesystem access.
pub fn find_all_sync(options: FindOptions) -> Result<Vec<PathBuf>> {
    Finder::blocking(options)?.all_sync()
}

/// Find the directory containing the first match, suspending on filesystem access.
pub async fn find_dir(options: FindOptions) -> Result<Option<PathBuf>> {
    Finder::new(options)?.directory().await
}

/// Find the directory containing the first match, blocking on filesystem access.
pub fn find_dir_sync(options: FindOptions) -> Result<Option<PathBuf>> {
    Finder::blocking(options)?.directory_sync()
}
