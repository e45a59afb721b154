//! Catalog source port.

use std::future::Future;

use crate::domain::Catalog;
use crate::error::Result;

/// Remote origin of the quote catalog.
///
/// A fetch failure is never fatal: the caller degrades to the cached
/// catalog copy, then to the placeholder quote.
pub trait CatalogSource: Send + Sync {
    /// Fetch the whole catalog from the origin.
    fn fetch(&self) -> impl Future<Output = Result<Catalog>> + Send;
}
