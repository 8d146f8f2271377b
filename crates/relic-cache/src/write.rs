use crate::cache_dir::CacheDir;
use crate::error::Result;
use std::io;
use std::path::PathBuf;
use time::format_description::FormatItem;
use time::macros::format_description;

/// UTC timestamp with only digits and hyphens, safe in filenames on every
/// platform (no colons or periods).
const FILENAME_TIMESTAMP: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]-[hour]-[minute]-[second]-[subsecond digits:6]"
);

impl CacheDir {
    /// Write `contents` into this cache directory as `{prefix}.{suffix}`,
    /// creating intermediate directories as needed and overwriting any
    /// existing file of the same name.
    ///
    /// When `prefix` is `None` a timestamp prefix is generated, so repeated
    /// writes produce distinct entries. Returns the path of the written file.
    pub fn write(&self, contents: &[u8], suffix: &str, prefix: Option<&str>) -> Result<PathBuf> {
        let prefix = match prefix {
            Some(prefix) => prefix.to_string(),
            None => timestamp_prefix()?,
        };
        let dest = self.path().join(format!("{prefix}.{suffix}"));

        std::fs::create_dir_all(self.path())?;
        std::fs::write(&dest, contents)?;

        tracing::debug!(
            target = "relic.cache",
            path = %dest.display(),
            bytes = contents.len(),
            "wrote cache entry"
        );
        Ok(dest)
    }
}

fn timestamp_prefix() -> Result<String> {
    let prefix = time::OffsetDateTime::now_utc()
        .format(FILENAME_TIMESTAMP)
        .map_err(io::Error::other)?;
    Ok(prefix)
}
