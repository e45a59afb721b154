//! JSON file-backed state store.
//!
//! Three flat files under one data directory:
//!
//! - `quotes.json` - cached catalog copy (staleness by modification time)
//! - `used_quote_ids.json` - ids shown in the current no-repeat cycle
//! - `last_quote.json` - same-day selection cache
//!
//! Every write replaces the whole file via write-to-temp-then-rename, and a
//! mutex serializes writers within the process, so concurrent invocations
//! see either the old record or the new one, never an interleaving.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::domain::{Catalog, LastShown, QuoteId};
use crate::error::{Result, StoreError};
use crate::port::store::{CachedCatalog, StateStore};

const CATALOG_FILE: &str = "quotes.json";
const USED_IDS_FILE: &str = "used_quote_ids.json";
const LAST_SHOWN_FILE: &str = "last_quote.json";

pub struct FileStateStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStateStore {
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            write_lock: Mutex::new(()),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Read one record. A missing file is `Ok(None)`; corrupt JSON is an
    /// error the caller decides how to degrade.
    fn read_json<T: DeserializeOwned>(&self, name: &'static str) -> Result<Option<T>> {
        let path = self.path(name);
        if !path.exists() {
            return Ok(None);
        }
        let content =
            fs::read_to_string(&path).map_err(|source| StoreError::Read { name, source })?;
        let value =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt { name, source })?;
        Ok(Some(value))
    }

    /// Replace one record atomically.
    fn write_json<T: Serialize>(&self, name: &'static str, value: &T) -> Result<()> {
        let _guard = self.write_lock.lock();

        fs::create_dir_all(&self.dir).map_err(|source| StoreError::Write { name, source })?;
        let json = serde_json::to_string(value)?;

        let path = self.path(name);
        let temp_path = path.with_extension("tmp");
        write_atomic(&path, &temp_path, json.as_bytes())
            .map_err(|source| StoreError::Write { name, source })?;
        Ok(())
    }
}

/// Write to a temp file, sync, then rename over the target.
fn write_atomic(path: &Path, temp_path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(temp_path)?;

    let cleanup_and_err = |e| {
        let _ = fs::remove_file(temp_path);
        e
    };

    file.write_all(bytes).map_err(cleanup_and_err)?;
    file.sync_all().map_err(cleanup_and_err)?;
    fs::rename(temp_path, path).map_err(cleanup_and_err)?;
    Ok(())
}

impl StateStore for FileStateStore {
    fn load_used_ids(&self) -> Result<Vec<QuoteId>> {
        Ok(self.read_json(USED_IDS_FILE)?.unwrap_or_default())
    }

    fn save_used_ids(&self, ids: &[QuoteId]) -> Result<()> {
        self.write_json(USED_IDS_FILE, &ids)
    }

    fn load_last_shown(&self) -> Result<Option<LastShown>> {
        self.read_json(LAST_SHOWN_FILE)
    }

    fn save_last_shown(&self, last: &LastShown) -> Result<()> {
        self.write_json(LAST_SHOWN_FILE, last)
    }

    fn load_cached_catalog(&self) -> Result<Option<CachedCatalog>> {
        let Some(catalog) = self.read_json::<Catalog>(CATALOG_FILE)? else {
            return Ok(None);
        };

        let age = fs::metadata(self.path(CATALOG_FILE))
            .and_then(|m| m.modified())
            .map(|modified| {
                SystemTime::now()
                    .duration_since(modified)
                    .unwrap_or(Duration::ZERO)
            })
            .unwrap_or_else(|e| {
                warn!(error = %e, "Catalog cache has no modification time; treating as stale");
                Duration::MAX
            });

        Ok(Some(CachedCatalog { catalog, age }))
    }

    fn save_cached_catalog(&self, catalog: &Catalog) -> Result<()> {
        self.write_json(CATALOG_FILE, catalog)
    }

    fn reset_used_ids(&self) -> Result<usize> {
        let dropped = self.load_used_ids().map(|ids| ids.len()).unwrap_or(0);
        self.save_used_ids(&[])?;
        Ok(dropped)
    }
}
