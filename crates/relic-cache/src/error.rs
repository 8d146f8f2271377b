use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CacheError>;

/// Errors produced by cache path resolution, writes, and pruning.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("failed to determine home directory for default cache root")]
    MissingHomeDir,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache root {path} is a disallowed location")]
    ForbiddenBasePath { path: PathBuf },

    #[error("cache directory {path} resolves to the cache root {root}; refusing to operate on it")]
    ForbiddenCacheDir { path: PathBuf, root: PathBuf },

    #[error("path {path} is not under cache root {root}")]
    PathNotUnderCacheRoot { path: PathBuf, root: PathBuf },
}
