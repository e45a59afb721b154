//! Usage statistics over the catalog and the used-id set.

use crate::domain::quote::{Catalog, QuoteId};

/// Aggregate counts for the usage reporter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageSummary {
    pub total: usize,
    pub used: usize,
    pub remaining: usize,
}

impl UsageSummary {
    /// Compute the summary against the ids the catalog currently declares.
    ///
    /// Used ids that no longer resolve to a catalog entry are not counted;
    /// the reporter lists them separately as orphans.
    #[must_use]
    pub fn compute(catalog: &Catalog, used_ids: &[QuoteId]) -> Self {
        let all_ids = catalog.ids();
        let used = used_ids.iter().filter(|id| all_ids.contains(id)).count();
        Self {
            total: all_ids.len(),
            used,
            remaining: all_ids.len() - used,
        }
    }

    /// Share of the catalog already shown, formatted to one decimal.
    #[must_use]
    pub fn percent_used(&self) -> String {
        if self.total == 0 {
            return "0.0%".to_string();
        }
        format!("{:.1}%", self.used as f64 / self.total as f64 * 100.0)
    }
}
