//! On-disk cache for downloaded icons.
//!
//! Icons live at `<cache>/icons/<font>/<colour>/<name>.png`. A cache hit
//! never touches the network, so repeated listings with the same colour are
//! instant; the first listing with a new colour downloads as it goes.

use std::fs;
use std::path::{Path, PathBuf};

use bundlekit_core::colour::Colour;

use crate::client::{IconClient, Result};

/// Subdirectory of the workflow cache that holds icons.
const ICONS_SUBDIR: &str = "icons";

/// Aggregate numbers for `cache info`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: u64,
    pub total_bytes: u64,
}

/// Download-on-miss icon cache backed by the workflow cache directory.
pub struct IconCache {
    root: PathBuf,
    client: IconClient,
}

impl IconCache {
    /// Create a cache rooted in the given workflow cache directory.
    pub fn new(cache_dir: &Path, client: IconClient) -> Self {
        Self {
            root: cache_dir.join(ICONS_SUBDIR),
            client,
        }
    }

    /// Where a glyph is (or would be) cached.
    pub fn path_for(&self, font: &str, name: &str, colour: &Colour) -> PathBuf {
        self.root
            .join(font)
            .join(colour.as_str())
            .join(format!("{name}.png"))
    }

    /// Return the local path for a glyph, downloading it on a cache miss.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::IconError`] from the download or from writing the
    /// cached file. A failed download leaves no partial file behind.
    pub fn icon_path(&self, font: &str, name: &str, colour: &Colour) -> Result<PathBuf> {
        let path = self.path_for(font, name, colour);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "icon cache hit");
            return Ok(path);
        }

        let bytes = self.client.fetch(font, name, colour)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &bytes)?;
        tracing::debug!(path = %path.display(), size = bytes.len(), "icon cached");
        Ok(path)
    }

    /// Count cached icons and their total size.
    ///
    /// A missing cache directory counts as empty.
    pub fn stats(&self) -> Result<CacheStats> {
        let mut stats = CacheStats::default();
        if !self.root.is_dir() {
            return Ok(stats);
        }
        visit_files(&self.root, &mut |meta| {
            stats.entries += 1;
            stats.total_bytes += meta.len();
        })?;
        Ok(stats)
    }

    /// Delete all cached icons.
    pub fn clear(&self) -> Result<()> {
        if self.root.is_dir() {
            fs::remove_dir_all(&self.root)?;
        }
        Ok(())
    }
}

/// Apply `f` to the metadata of every regular file under `dir`, recursively.
fn visit_files(dir: &Path, f: &mut impl FnMut(&fs::Metadata)) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let meta = entry.metadata()?;
        if meta.is_dir() {
            visit_files(&entry.path(), f)?;
        } else if meta.is_file() {
            f(&meta);
        }
    }
    Ok(())
}
