//! App orchestration module.
//!
//! Wires the catalog source, the state store, and the rotation engine
//! together. Every failure on the refresh path degrades rather than
//! aborts: the widget always renders something, down to the built-in
//! placeholder quote.

use std::time::Duration;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::domain::{Catalog, Quote, QuoteId, Rotation, RotationState, SelectionPolicy, UsageSummary};
use crate::error::Result;
use crate::port::{CatalogSource, RenderTarget, StateStore};
use crate::widget::{WidgetModel, WidgetStyle};

/// Usage data the reporter presents.
#[derive(Debug, Clone)]
pub struct UsageReport {
    pub summary: UsageSummary,
    /// Used ids with their quotes, sorted by id. `None` marks an orphaned
    /// id whose quote left the catalog.
    pub used: Vec<(QuoteId, Option<Quote>)>,
    /// Not-yet-shown ids with their quotes, sorted by id.
    pub remaining: Vec<(QuoteId, Quote)>,
}

/// Main application struct.
pub struct App<S, T> {
    source: S,
    store: T,
    policy: SelectionPolicy,
    style: WidgetStyle,
    cache_ttl: Duration,
}

impl<S: CatalogSource, T: StateStore> App<S, T> {
    pub fn new(source: S, store: T, policy: SelectionPolicy, style: WidgetStyle, cache_ttl: Duration) -> Self {
        Self {
            source,
            store,
            policy,
            style,
            cache_ttl,
        }
    }

    /// The catalog source this app fetches from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The state store this app persists to.
    pub fn store(&self) -> &T {
        &self.store
    }

    /// Run one widget refresh: acquire a catalog, rotate, persist, render.
    ///
    /// Returns the quote that was rendered.
    pub async fn refresh(
        &self,
        force: bool,
        now: DateTime<Local>,
        render: &impl RenderTarget,
    ) -> Result<Quote> {
        let catalog = self.acquire_catalog(force).await;
        let state = self.load_state();

        let rotation = match self.policy.rotate(&catalog, state, now, force, &mut rand::thread_rng()) {
            Ok(rotation) => rotation,
            Err(e) => {
                // Only reachable with an empty catalog; substitute the
                // fallback so the render path still produces a widget.
                warn!(error = %e, "Rotation failed; rendering the placeholder");
                self.policy
                    .rotate(&Catalog::fallback(), RotationState::default(), now, force, &mut rand::thread_rng())?
            }
        };

        if rotation.dirty {
            self.persist_state(&rotation);
        }

        info!(
            id = ?rotation.quote.id,
            attribution = %rotation.quote.attribution,
            "Selected today's quote"
        );

        let model = WidgetModel::compose(&rotation.quote, &self.style, now);
        render.render(&model)?;
        Ok(rotation.quote)
    }

    /// Catalog acquisition ladder: fresh cache, remote fetch, stale cache,
    /// built-in placeholder. Never fails.
    async fn acquire_catalog(&self, force: bool) -> Catalog {
        let cached = match self.store.load_cached_catalog() {
            Ok(cached) => cached,
            Err(e) => {
                warn!(error = %e, "Catalog cache unreadable; ignoring it");
                None
            }
        };

        if !force {
            if let Some(cached) = &cached {
                if cached.age < self.cache_ttl && !cached.catalog.is_empty() {
                    return cached.catalog.clone();
                }
            }
        }

        match self.source.fetch().await {
            Ok(catalog) if !catalog.is_empty() => {
                if let Err(e) = self.store.save_cached_catalog(&catalog) {
                    warn!(error = %e, "Failed to persist catalog cache");
                }
                catalog
            }
            Ok(_) => {
                warn!("Catalog source returned an empty array");
                stale_or_fallback(cached)
            }
            Err(e) => {
                warn!(error = %e, "Catalog fetch failed");
                stale_or_fallback(cached)
            }
        }
    }

    fn load_state(&self) -> RotationState {
        let used_ids = self.store.load_used_ids().unwrap_or_else(|e| {
            warn!(error = %e, "Used-id list unreadable; starting a fresh cycle");
            Vec::new()
        });
        let last_shown = self.store.load_last_shown().unwrap_or_else(|e| {
            warn!(error = %e, "Last-shown record unreadable; ignoring it");
            None
        });
        RotationState { used_ids, last_shown }
    }

    /// Persist the updated state. Write failures are logged, never fatal:
    /// the in-memory selection is still rendered.
    fn persist_state(&self, rotation: &Rotation) {
        if let Err(e) = self.store.save_used_ids(&rotation.state.used_ids) {
            warn!(error = %e, "Failed to persist used ids");
        }
        if let Some(last) = &rotation.state.last_shown {
            if let Err(e) = self.store.save_last_shown(last) {
                warn!(error = %e, "Failed to persist last-shown record");
            }
        }
    }

    /// Aggregate usage data for the reporter. All reads degrade to empty.
    pub fn usage_report(&self) -> UsageReport {
        let catalog = match self.store.load_cached_catalog() {
            Ok(Some(cached)) => cached.catalog,
            Ok(None) => {
                warn!("No catalog cache on disk yet");
                Catalog::default()
            }
            Err(e) => {
                warn!(error = %e, "Catalog cache unreadable");
                Catalog::default()
            }
        };
        let used_ids = self.store.load_used_ids().unwrap_or_else(|e| {
            warn!(error = %e, "Used-id list unreadable");
            Vec::new()
        });

        let summary = UsageSummary::compute(&catalog, &used_ids);

        let mut used: Vec<(QuoteId, Option<Quote>)> = used_ids
            .iter()
            .map(|&id| (id, catalog.by_id(id).cloned()))
            .collect();
        used.sort_by_key(|(id, _)| *id);

        let mut remaining: Vec<(QuoteId, Quote)> = catalog
            .ids()
            .into_iter()
            .filter(|id| !used_ids.contains(id))
            .filter_map(|id| catalog.by_id(id).map(|q| (id, q.clone())))
            .collect();
        remaining.sort_by_key(|(id, _)| *id);

        UsageReport { summary, used, remaining }
    }

    /// Clear the used-id list, restarting the no-repeat cycle.
    pub fn reset_used_ids(&self) -> Result<usize> {
        let dropped = self.store.reset_used_ids()?;
        info!(dropped, "Used-id list reset");
        Ok(dropped)
    }
}

fn stale_or_fallback(cached: Option<crate::port::store::CachedCatalog>) -> Catalog {
    match cached {
        Some(cached) if !cached.catalog.is_empty() => {
            info!("Serving the stale catalog cache");
            cached.catalog
        }
        _ => Catalog::fallback(),
    }
}
