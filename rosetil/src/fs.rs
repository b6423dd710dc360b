//! Filesystem access used by the directory walker.
//!
//! The walker is written once, against the async [`WalkerFs`] trait.
//! [`TokioFs`] suspends on every call; [`StdFs`] does its work synchronously
//! inside each future, so blocking searches simply drive the same walker to
//! completion on the calling thread.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

/// A single entry returned by [`WalkerFs::list_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Entry name (not the full path)
    pub name: OsString,
    /// True if the entry itself is a directory (symlinks are not)
    pub is_dir: bool,
    /// True if the entry is a symbolic link
    pub is_symlink: bool,
}

/// Minimal read-only filesystem abstraction for the walker.
#[async_trait]
pub trait WalkerFs: Send + Sync {
    /// Check if a path exists, following symlinks. Errors count as "does not exist".
    async fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory, following symlinks.
    async fn is_dir(&self, path: &Path) -> io::Result<bool>;

    /// List the entries of a directory in the order the filesystem reports them.
    async fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Resolve a path to its real location.
    ///
    /// Used for symlink cycle detection. The default returns the path unchanged.
    async fn canonicalize(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}

/// Blocking filesystem access through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

#[async_trait]
impl WalkerFs for StdFs {
    async fn exists(&self, path: &Path) -> bool {
        std::fs::metadata(path).is_ok()
    }

    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(std::fs::metadata(path)?.is_dir())
    }

    async fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            entries.push(DirEntry {
                name: entry.file_name(),
                is_dir: file_type.is_dir(),
                is_symlink: file_type.is_symlink(),
            });
        }
        Ok(entries)
    }

    async fn canonicalize(&self, path: &Path) -> PathBuf {
        std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    }
}

/// Suspending filesystem access through `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait]
impl WalkerFs for TokioFs {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }

    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        Ok(tokio::fs::metadata(path).await?.is_dir())
    }

    async fn list_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        let mut read_dir = tokio::fs::read_dir(path).await?;
        while let Some(entry) = read_dir.next_entry().await? {
            let file_type = entry.file_type().await?;
            entries.push(DirEntry {
                name: entry.file_name(),
                is_dir: file_type.is_dir(),
                is_symlink: file_type.is_symlink(),
            });
        }
        Ok(entries)
    }

    async fn canonicalize(&self, path: &Path) -> PathBuf {
        tokio::fs::canonicalize(path)
            .await
            .unwrap_or_else(|_| path.to_path_buf())
    }
}
