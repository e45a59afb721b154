//! Quote and catalog types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Quote identifier - newtype for type safety.
///
/// The inner integer is private so that all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(u32);

impl QuoteId {
    /// Create a new `QuoteId`.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuoteId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// A single catalog entry.
///
/// `id` is optional because not every catalog source assigns stable ids.
/// Entries without an id never participate in id-based usage tracking;
/// deterministic policies can still reach them positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuoteId>,
    pub quote: String,
    pub attribution: String,
}

impl Quote {
    pub fn new(id: Option<QuoteId>, quote: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            id,
            quote: quote.into(),
            attribution: attribution.into(),
        }
    }

    /// The quote shown when both the remote source and the local cache fail.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new(Some(QuoteId::new(1)), "Stay hungry, stay foolish.", "Steve Jobs")
    }
}

/// The full ordered list of available quotes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<Quote>,
}

impl Catalog {
    #[must_use]
    pub fn new(entries: Vec<Quote>) -> Self {
        Self { entries }
    }

    /// Catalog holding only the placeholder quote. Used as the last-resort
    /// fallback so the render path always has something to show.
    #[must_use]
    pub fn fallback() -> Self {
        Self::new(vec![Quote::placeholder()])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn entries(&self) -> &[Quote] {
        &self.entries
    }

    /// Ids of all entries that declare one, in catalog order.
    #[must_use]
    pub fn ids(&self) -> Vec<QuoteId> {
        self.entries.iter().filter_map(|q| q.id).collect()
    }

    #[must_use]
    pub fn by_id(&self, id: QuoteId) -> Option<&Quote> {
        self.entries.iter().find(|q| q.id == Some(id))
    }

    #[must_use]
    pub fn by_index(&self, index: usize) -> Option<&Quote> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Quote> {
        self.entries.first()
    }
}
