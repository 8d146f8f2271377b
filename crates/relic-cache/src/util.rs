use std::io;
use std::path::Path;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn now_unix_secs() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs(),
        Err(err) => {
            // This should be extremely rare (system clock set before 1970).
            // Avoid spamming logs in any hot call sites by logging at most once.
            static REPORTED: OnceLock<()> = OnceLock::new();
            if REPORTED.set(()).is_ok() {
                tracing::debug!(
                    target = "relic.cache",
                    error = %err,
                    "system time is before unix epoch; using 0 for now_unix_secs"
                );
            }
            0
        }
    }
}

/// Modification time of `path` in unix seconds, without following symlinks.
///
/// `Ok(None)` means the entry vanished between listing and stat; any other
/// stat failure propagates.
pub(crate) fn modified_secs(path: &Path) -> io::Result<Option<u64>> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err),
    };

    let modified = meta.modified()?;
    match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => Ok(Some(d.as_secs())),
        Err(err) => {
            tracing::debug!(
                target = "relic.cache",
                path = %path.display(),
                error = %err,
                "entry modified time predates unix epoch"
            );
            Ok(Some(0))
        }
    }
}

/// Remove a cache entry of any type: a file, a symlink (never followed), or a
/// directory (removed recursively). An entry that has already vanished is
/// treated as removed.
pub(crate) fn remove_entry(path: &Path) -> io::Result<()> {
    let meta = match std::fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };

    if meta.is_dir() && !meta.file_type().is_symlink() {
        match remove_dir_all_nofollow(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    } else {
        remove_file_tolerant(path)
    }
}

fn remove_dir_all_nofollow(path: &Path) -> io::Result<()> {
    for entry in walkdir::WalkDir::new(path)
        .follow_links(false)
        .contents_first(true)
    {
        let entry = entry.map_err(io::Error::other)?;
        let ty = entry.file_type();
        if ty.is_dir() {
            std::fs::remove_dir(entry.path())?;
        } else {
            match std::fs::remove_file(entry.path()) {
                Ok(()) => {}
                Err(err) if err.kind() == io::ErrorKind::IsADirectory => {
                    std::fs::remove_dir(entry.path())?
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => return Err(err),
            }
        }
    }
    Ok(())
}

fn remove_file_tolerant(path: &Path) -> io::Result<()> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::IsADirectory => std::fs::remove_dir(path),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err),
    }
}
