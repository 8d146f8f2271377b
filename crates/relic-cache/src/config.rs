use crate::error::{CacheError, Result};
use std::path::PathBuf;
use std::time::Duration;

/// Default retention window applied when no override is configured.
pub const DEFAULT_RETENTION_DAYS: u64 = 7;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Configuration for selecting the on-disk cache root and retention window.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Override the cache root directory.
    pub cache_root_override: Option<PathBuf>,
    /// How long cached entries survive before [`CacheDir::prune`] removes them.
    ///
    /// [`CacheDir::prune`]: crate::CacheDir::prune
    pub retention_days: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            cache_root_override: None,
            retention_days: DEFAULT_RETENTION_DAYS,
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            cache_root_override: std::env::var_os("RELIC_CACHE_DIR").map(PathBuf::from),
            retention_days: std::env::var("RELIC_CACHE_RETENTION_DAYS")
                .ok()
                .map_or(DEFAULT_RETENTION_DAYS, |raw| parse_retention_days(&raw)),
        }
    }

    /// The configured retention window as a [`Duration`].
    pub fn retention(&self) -> Duration {
        Duration::from_secs(self.retention_days.saturating_mul(SECONDS_PER_DAY))
    }
}

/// Returns the cache root honoring `CacheConfig` / `RELIC_CACHE_DIR`.
pub fn cache_root(config: &CacheConfig) -> Result<PathBuf> {
    Ok(match &config.cache_root_override {
        Some(root) => root.clone(),
        None => default_cache_root()?,
    })
}

fn parse_retention_days(raw: &str) -> u64 {
    match raw.parse::<u64>() {
        Ok(days) => days,
        Err(err) => {
            tracing::debug!(
                target = "relic.cache",
                value = %raw,
                error = %err,
                "ignoring unparsable RELIC_CACHE_RETENTION_DAYS; using default"
            );
            DEFAULT_RETENTION_DAYS
        }
    }
}

pub(crate) fn default_cache_root() -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .ok_or(CacheError::MissingHomeDir)?;

    Ok(home.join(".relic").join("cache"))
}
