//! Documents stored as files under a base directory.
//!
//! A stored document named `name` lives at `<base_dir>/<name>.json`.

use std::fs;
use std::path::{Path, PathBuf};

use data_io_path::ResolveOptions;
use serde::Deserialize;

use crate::document::Document;
use crate::DataIoError;

/// Suffix of every stored document file.
pub const STORAGE_SUFFIX: &str = ".json";

/// Default cap on the number of names a listing returns.
pub const MAX_ENTRIES: usize = 32;

/// Default budget for the combined size of listed names.
pub const NAME_BUFFER_SIZE: usize = 512;

/// Storage settings, usually read from a host application's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageOptions {
    /// Directory stored names are resolved against. Empty means the working
    /// directory.
    pub base_dir: PathBuf,
    /// Most names a listing returns.
    pub max_entries: usize,
    /// Budget shared by all listed names; each costs its length plus one.
    pub name_buffer_size: usize,
    /// Resolution options given to loaded documents.
    pub resolve: ResolveOptions,
}

impl Default for StorageOptions {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::new(),
            max_entries: MAX_ENTRIES,
            name_buffer_size: NAME_BUFFER_SIZE,
            resolve: ResolveOptions::default(),
        }
    }
}

/// Names found by [`Storage::list_entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageListing {
    /// Stored names, suffix stripped, in name order.
    pub names: Vec<String>,
    /// Matching entries left out because a cap was reached.
    pub skipped: usize,
}

impl StorageListing {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether some matching entries did not fit.
    pub fn is_truncated(&self) -> bool {
        self.skipped > 0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }
}

impl IntoIterator for StorageListing {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

/// Loads stored documents and lists what is stored.
#[derive(Debug, Clone, Default)]
pub struct Storage {
    options: StorageOptions,
}

impl Storage {
    pub fn new(options: StorageOptions) -> Self {
        Self { options }
    }

    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self::new(StorageOptions {
            base_dir: base_dir.into(),
            ..StorageOptions::default()
        })
    }

    pub fn options(&self) -> &StorageOptions {
        &self.options
    }

    pub fn base_dir(&self) -> &Path {
        &self.options.base_dir
    }

    pub fn set_base_dir(&mut self, base_dir: impl Into<PathBuf>) {
        self.options.base_dir = base_dir.into();
    }

    /// File path of the stored document `name`.
    ///
    /// The result always lies under the base directory: leading separators
    /// in `name` are dropped rather than making it absolute.
    pub fn entry_path(&self, name: &str) -> PathBuf {
        let name = name.trim_start_matches(std::path::is_separator);
        self.options.base_dir.join(format!("{name}{STORAGE_SUFFIX}"))
    }

    /// Read and parse the stored document `name`.
    ///
    /// # Errors
    ///
    /// [`DataIoError::Io`] if the file cannot be read, [`DataIoError::Parse`]
    /// if its content is not valid JSON.
    pub fn load(&self, name: &str) -> Result<Document, DataIoError> {
        let path = self.entry_path(name);
        let text = fs::read_to_string(&path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "could not open stored document");
            DataIoError::Io {
                path: path.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded stored document");
        Ok(Document::load_str(&text)?.with_options(self.options.resolve))
    }

    /// List stored names in `dir`.
    ///
    /// Only regular files ending in [`STORAGE_SUFFIX`] count; a name merely
    /// containing it, such as `a.json.bak`, is not listed. Names are
    /// returned in order until `max_entries` or `name_buffer_size` runs out;
    /// the rest are counted in [`StorageListing::skipped`]. A directory that
    /// cannot be read gives an empty listing.
    pub fn list_entries(&self, dir: impl AsRef<Path>) -> StorageListing {
        let dir = dir.as_ref();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(dir = %dir.display(), %error, "could not read storage directory");
                return StorageListing::default();
            }
        };

        let mut names: Vec<String> = entries
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_ok_and(|t| t.is_file()))
            .filter_map(|entry| {
                let file_name = entry.file_name().into_string().ok()?;
                let name = file_name.strip_suffix(STORAGE_SUFFIX)?;
                (!name.is_empty()).then(|| name.to_string())
            })
            .collect();
        names.sort();

        let mut listing = StorageListing::default();
        let mut used = 0;
        for name in names {
            let cost = name.len() + 1;
            if listing.names.len() < self.options.max_entries
                && used + cost < self.options.name_buffer_size
            {
                used += cost;
                listing.names.push(name);
            } else {
                listing.skipped += 1;
            }
        }
        if listing.is_truncated() {
            tracing::debug!(
                dir = %dir.display(),
                kept = listing.len(),
                skipped = listing.skipped,
                "storage listing truncated"
            );
        }
        listing
    }

    /// List stored names in the base directory.
    pub fn list_stored(&self) -> StorageListing {
        if self.options.base_dir.as_os_str().is_empty() {
            return self.list_entries(".");
        }
        self.list_entries(&self.options.base_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_path() {
        assert_eq!(
            Storage::default().entry_path("robot"),
            PathBuf::from("robot.json")
        );
        assert_eq!(
            Storage::with_base_dir("config").entry_path("robot"),
            Path::new("config").join("robot.json")
        );
    }

    #[test]
    fn test_entry_path_stays_under_base_dir() {
        let storage = Storage::with_base_dir("/srv/config");
        let path = storage.entry_path("/etc/passwd");
        assert!(path.starts_with("/srv/config"));
        assert_eq!(path, Path::new("/srv/config/etc/passwd.json"));
        assert_eq!(
            Storage::default().entry_path("//robot"),
            PathBuf::from("robot.json")
        );
    }

    #[test]
    fn test_set_base_dir() {
        let mut storage = Storage::default();
        storage.set_base_dir("/tmp/data");
        assert_eq!(storage.base_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn test_default_options() {
        let options = StorageOptions::default();
        assert_eq!(options.max_entries, MAX_ENTRIES);
        assert_eq!(options.name_buffer_size, NAME_BUFFER_SIZE);
        assert!(options.base_dir.as_os_str().is_empty());
    }

    #[test]
    fn test_listing_truncation_flag() {
        let listing = StorageListing {
            names: vec!["a".into()],
            skipped: 2,
        };
        assert!(listing.is_truncated());
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.into_iter().collect::<Vec<_>>(), vec!["a"]);
    }
}
