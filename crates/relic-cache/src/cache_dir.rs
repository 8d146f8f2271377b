use crate::error::{CacheError, Result};
use std::path::{Component, Path, PathBuf};

/// Base directory names we refuse to use as a cache root.
///
/// The pruner deletes everything stale under the root, so a root that points
/// at a source tree (a misconfigured relative path, typically) must be
/// rejected before any mutation happens.
const FORBIDDEN_ROOT_NAMES: &[&str] = &["src", "lib", "bin", "tests", "target", "node_modules"];

/// A resolved cache directory: the configured cache root plus the
/// context/subdirectory segments appended to it.
///
/// Resolution is pure; nothing is created on disk until [`CacheDir::write`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CacheDir {
    root: PathBuf,
    path: PathBuf,
}

impl CacheDir {
    /// Resolve the cache directory for `context` (and an optional relative
    /// `subdir`) under `root`.
    ///
    /// `context` is an opaque namespace identifier: it is lowercased and its
    /// dot-separated words become path components, so `Report.Archive`
    /// resolves to `<root>/report/archive`.
    ///
    /// Fails with [`CacheError::ForbiddenBasePath`] when `root` names a
    /// disallowed location, and with [`CacheError::ForbiddenCacheDir`] when
    /// the resolved path is `root` itself (empty context and subdir), since
    /// pruning that path would delete unrelated caches.
    pub fn resolve(
        root: impl AsRef<Path>,
        context: &str,
        subdir: Option<&Path>,
    ) -> Result<Self> {
        let root = root.as_ref();
        if is_forbidden_root(root) {
            return Err(CacheError::ForbiddenBasePath {
                path: root.to_path_buf(),
            });
        }

        let mut path = root.join(context_segment(context));
        if let Some(subdir) = subdir {
            path.push(subdir);
        }

        if path == root {
            return Err(CacheError::ForbiddenCacheDir {
                path,
                root: root.to_path_buf(),
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
            path,
        })
    }

    /// The configured cache root this directory was resolved under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The resolved cache directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn is_forbidden_root(root: &Path) -> bool {
    // A root without a final normal component (`/`, a trailing `..`) cannot
    // be a deliberate cache location.
    let Some(name) = root.file_name().and_then(|name| name.to_str()) else {
        return true;
    };
    FORBIDDEN_ROOT_NAMES.contains(&name)
}

/// Expand a context identifier into relative path components: lowercase, with
/// dot-namespacing split into nested directories.
fn context_segment(context: &str) -> PathBuf {
    let mut segment = PathBuf::new();
    for word in context.split('.') {
        let word = word.trim();
        if word.is_empty() {
            continue;
        }
        segment.push(word.to_lowercase());
    }
    segment
}

/// Lexical containment check; does not touch the filesystem or follow
/// symlinks. Used as a last line of defense before destructive operations.
pub(crate) fn validate_under_root(root: &Path, path: &Path) -> Result<()> {
    let relative = path
        .strip_prefix(root)
        .map_err(|_| CacheError::PathNotUnderCacheRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;
    if relative
        .components()
        .any(|component| matches!(component, Component::ParentDir))
    {
        return Err(CacheError::PathNotUnderCacheRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        });
    }
    Ok(())
}
