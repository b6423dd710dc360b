//! # rosetil
//!
//! Small filesystem and data-shape utilities, centred on a configurable
//! directory search.
//!
//! ## Overview
//!
//! - **Find**: locate named files by walking up toward the filesystem root,
//!   down into subdirectories, or both, with depth limits and directory
//!   include/exclude filters. Every search comes in a suspending (`tokio`)
//!   and a blocking flavour, sharing one traversal algorithm.
//! - **Filter**: include/exclude predicates over glob and regex patterns.
//! - **Path**: lexical path normalization.
//! - **Merge**: deep merge of `serde_json` values.
//!
//! ## Example
//!
//! ```rust
//! use rosetil::{find_all_sync, find_sync, FindOptions, Traversal};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::create_dir_all(dir.path().join("app/src")).unwrap();
//! fs::write(dir.path().join("app/package.json"), "{}").unwrap();
//! fs::write(dir.path().join("app/src/package.json"), "{}").unwrap();
//!
//! // Walk up from a nested directory
//! let found = find_sync(FindOptions::new("package.json").cwd(dir.path().join("app/src"))).unwrap();
//! assert_eq!(found, Some(dir.path().join("app/src/package.json")));
//!
//! // Collect every match below a directory
//! let all = find_all_sync(
//!     FindOptions::new("package.json")
//!         .cwd(dir.path().join("app"))
//!         .traversal(Traversal::Down),
//! )
//! .unwrap();
//! assert_eq!(all.len(), 2);
//! ```

pub mod error;
pub mod filename;
pub mod filter;
pub mod find;
pub mod fs;
pub mod merge;
pub mod options;
pub mod path;
pub mod pattern;
pub mod walker;

pub use error::RosetilError;
pub use filename::resolve_filenames;
pub use filter::{Filter, FilterConfig};
pub use find::{
    find, find_all, find_all_sync, find_dir, find_dir_sync, find_sync, FindConfig, Finder,
};
pub use fs::{DirEntry, StdFs, TokioFs, WalkerFs};
pub use merge::{merge, merge_into};
pub use options::{FindOptions, OneOrMany, Traversal, DEFAULT_EXCLUDE};
pub use path::{clean, normalize};
pub use pattern::{matches, Matcher, Pattern};

/// Result type for rosetil operations
pub type Result<T> = std::result::Result<T, RosetilError>;
