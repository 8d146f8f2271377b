use crate::cache_dir::{validate_under_root, CacheDir};
use crate::error::{CacheError, Result};
use crate::util::{modified_secs, now_unix_secs, remove_entry};
use serde::Serialize;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Result summary from a prune run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PruneReport {
    /// Number of immediate children deleted.
    pub deleted_entries: usize,
    /// Number of immediate children left in place.
    pub retained_entries: usize,
    /// Paths of the deleted children.
    pub deleted: Vec<PathBuf>,
}

impl CacheDir {
    /// Delete every immediate child of this cache directory whose
    /// modification time is strictly older than `now - retention`.
    ///
    /// Directories are removed recursively; a child with `mtime >= cutoff`
    /// is kept. A directory that does not exist yet is a valid empty cache:
    /// the call succeeds without creating it.
    ///
    /// An entry that vanishes between listing and deletion (a concurrent
    /// prune, typically) is tolerated; any other failure aborts the run and
    /// leaves the remaining stale entries for the next call.
    pub fn prune(&self, retention: Duration) -> Result<PruneReport> {
        // This operation is destructive, so the resolver's guards are
        // re-checked here rather than trusted from construction time.
        if self.path() == self.root() {
            return Err(CacheError::ForbiddenCacheDir {
                path: self.path().to_path_buf(),
                root: self.root().to_path_buf(),
            });
        }
        validate_under_root(self.root(), self.path())?;

        let entries = match std::fs::read_dir(self.path()) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(PruneReport::default())
            }
            Err(err) => return Err(err.into()),
        };

        let cutoff = now_unix_secs().saturating_sub(retention.as_secs());
        let mut report = PruneReport::default();

        for entry in entries {
            let path = entry?.path();
            let Some(mtime) = modified_secs(&path)? else {
                // Vanished since listing; nothing left to delete.
                continue;
            };

            if is_stale(mtime, cutoff) {
                remove_entry(&path)?;
                report.deleted_entries += 1;
                report.deleted.push(path);
            } else {
                report.retained_entries += 1;
            }
        }

        tracing::debug!(
            target = "relic.cache",
            path = %self.path().display(),
            deleted = report.deleted_entries,
            retained = report.retained_entries,
            "pruned cache directory"
        );
        Ok(report)
    }
}

/// Strict comparison: an entry whose mtime equals the cutoff is kept.
fn is_stale(mtime_secs: u64, cutoff_secs: u64) -> bool {
    mtime_secs < cutoff_secs
}
