//! Age-based on-disk artifact cache.
//!
//! Callers write named blobs under a namespaced directory and later delete
//! blobs whose modification time has fallen outside a configured retention
//! window. There is no index and no cross-process coordination: the
//! filesystem tree itself is the only persisted state.
//!
//! ## On-disk layout
//!
//! Cached entries live under `<cache_root>/<context>/<subdir>/`:
//! - `<context>` is the caller's application context identifier, lowercased,
//!   with dot-namespacing expanded into path components
//!   (`Report.Archive` → `report/archive`)
//! - `<subdir>` is an optional caller-supplied relative path
//! - entries are named `<prefix>.<suffix>`; a missing prefix defaults to a
//!   filename-safe UTC timestamp
//!
//! [`CacheDir::resolve`] derives the directory (pure, no I/O),
//! [`CacheDir::write`] stores a blob, and [`CacheDir::prune`] deletes every
//! immediate child strictly older than the retention cutoff.

mod cache_dir;
mod config;
mod error;
mod prune;
mod util;
mod write;

pub use cache_dir::CacheDir;
pub use config::{cache_root, CacheConfig, DEFAULT_RETENTION_DAYS};
pub use error::{CacheError, Result};
pub use prune::PruneReport;
pub use util::now_unix_secs;
