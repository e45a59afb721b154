//! State store port for the persisted JSON records.
//!
//! Three logical records back the widget: the catalog cache, the used-id
//! list, and the last-shown quote. Each is replaced wholesale on write.
//!
//! # Implementation Notes
//!
//! - Implementations must be thread-safe (`Send + Sync`)
//! - Reads degrade: corrupt or missing data surfaces as `Ok(empty)` at the
//!   call sites that opt into degradation, never as a panic
//! - Writers must not interleave; a store serializes its own writes

use std::time::Duration;

use crate::domain::{Catalog, LastShown, QuoteId};
use crate::error::Result;

/// A cached catalog copy together with its age.
#[derive(Debug, Clone)]
pub struct CachedCatalog {
    pub catalog: Catalog,
    pub age: Duration,
}

/// Persistence for the rotation state and the catalog cache.
pub trait StateStore: Send + Sync {
    /// Load the used-id list. Missing file means an empty list.
    fn load_used_ids(&self) -> Result<Vec<QuoteId>>;

    /// Replace the used-id list.
    fn save_used_ids(&self, ids: &[QuoteId]) -> Result<()>;

    /// Load the last-shown record, if any.
    fn load_last_shown(&self) -> Result<Option<LastShown>>;

    /// Replace the last-shown record.
    fn save_last_shown(&self, last: &LastShown) -> Result<()>;

    /// Load the cached catalog copy with its age, if one exists.
    fn load_cached_catalog(&self) -> Result<Option<CachedCatalog>>;

    /// Replace the cached catalog copy.
    fn save_cached_catalog(&self, catalog: &Catalog) -> Result<()>;

    /// Clear the used-id list. Returns the number of ids dropped.
    fn reset_used_ids(&self) -> Result<usize>;
}
