//! Test doubles for the port traits.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use quotidian::domain::{Catalog, LastShown, Quote, QuoteId};
use quotidian::error::{Error, FetchError, Result, StoreError};
use quotidian::port::store::{CachedCatalog, StateStore};
use quotidian::port::{CatalogSource, RenderTarget};
use quotidian::widget::WidgetModel;

/// Catalog of `n` quotes with ids `1..=n`.
pub fn catalog(n: u32) -> Catalog {
    Catalog::new(
        (1..=n)
            .map(|id| Quote::new(Some(QuoteId::new(id)), format!("quote {id}"), format!("author {id}")))
            .collect(),
    )
}

/// In-memory catalog source that counts fetches and can be told to fail.
pub struct MemorySource {
    catalog: Option<Catalog>,
    pub fetches: AtomicUsize,
}

impl MemorySource {
    pub fn serving(catalog: Catalog) -> Self {
        Self {
            catalog: Some(catalog),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            catalog: None,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl CatalogSource for MemorySource {
    async fn fetch(&self) -> Result<Catalog> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.catalog {
            Some(catalog) => Ok(catalog.clone()),
            None => Err(FetchError::Status { status: 503 }.into()),
        }
    }
}

/// In-memory state store with a settable cache age and failable writes.
#[derive(Default)]
pub struct MemoryStore {
    used_ids: Mutex<Vec<QuoteId>>,
    last_shown: Mutex<Option<LastShown>>,
    cached: Mutex<Option<(Catalog, Duration)>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_used_ids(self, ids: Vec<QuoteId>) -> Self {
        *self.used_ids.lock() = ids;
        self
    }

    pub fn with_cached_catalog(self, catalog: Catalog, age: Duration) -> Self {
        *self.cached.lock() = Some((catalog, age));
        self
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn used_ids(&self) -> Vec<QuoteId> {
        self.used_ids.lock().clone()
    }

    pub fn last_shown(&self) -> Option<LastShown> {
        self.last_shown.lock().clone()
    }

    pub fn cached_catalog(&self) -> Option<Catalog> {
        self.cached.lock().as_ref().map(|(c, _)| c.clone())
    }

    fn write_guard(&self, name: &'static str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Error::Store(StoreError::Write {
                name,
                source: std::io::Error::other("disk full"),
            }));
        }
        Ok(())
    }
}

impl StateStore for MemoryStore {
    fn load_used_ids(&self) -> Result<Vec<QuoteId>> {
        Ok(self.used_ids.lock().clone())
    }

    fn save_used_ids(&self, ids: &[QuoteId]) -> Result<()> {
        self.write_guard("used_quote_ids.json")?;
        *self.used_ids.lock() = ids.to_vec();
        Ok(())
    }

    fn load_last_shown(&self) -> Result<Option<LastShown>> {
        Ok(self.last_shown.lock().clone())
    }

    fn save_last_shown(&self, last: &LastShown) -> Result<()> {
        self.write_guard("last_quote.json")?;
        *self.last_shown.lock() = Some(last.clone());
        Ok(())
    }

    fn load_cached_catalog(&self) -> Result<Option<CachedCatalog>> {
        Ok(self
            .cached
            .lock()
            .as_ref()
            .map(|(catalog, age)| CachedCatalog {
                catalog: catalog.clone(),
                age: *age,
            }))
    }

    fn save_cached_catalog(&self, catalog: &Catalog) -> Result<()> {
        self.write_guard("quotes.json")?;
        *self.cached.lock() = Some((catalog.clone(), Duration::ZERO));
        Ok(())
    }

    fn reset_used_ids(&self) -> Result<usize> {
        self.write_guard("used_quote_ids.json")?;
        let mut ids = self.used_ids.lock();
        let dropped = ids.len();
        ids.clear();
        Ok(dropped)
    }
}

/// Render target that captures the composed widget models.
#[derive(Default)]
pub struct CaptureRender {
    models: Mutex<Vec<WidgetModel>>,
}

impl CaptureRender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rendered(&self) -> Vec<WidgetModel> {
        self.models.lock().clone()
    }
}

impl RenderTarget for CaptureRender {
    fn render(&self, model: &WidgetModel) -> Result<()> {
        self.models.lock().push(model.clone());
        Ok(())
    }
}
