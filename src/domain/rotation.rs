//! Quote rotation engine.
//!
//! The engine is a pure function of (catalog, persisted state, clock, rng):
//! it never touches the filesystem, the network, or the widget host, so the
//! selection rules can be tested without any of the adapters.
//!
//! Three mutually exclusive selection policies are supported:
//!
//! - `NoRepeatRandom` - uniform random over not-yet-shown ids, with a
//!   same-day cache and a cycle reset once every id has been shown
//! - `DayIndexed` - deterministic positional rotation derived from the
//!   number of days since a fixed epoch
//! - `SeededRandom` - deterministic pick from a date-seeded generator,
//!   better distributed than the linear day index

use chrono::{DateTime, Datelike, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::quote::{Catalog, Quote, QuoteId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("cannot rotate over an empty catalog")]
    EmptyCatalog,
}

/// The quote most recently selected, with its selection timestamp.
///
/// Persisted so that widget refreshes within one calendar day re-show
/// the same quote instead of re-rolling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastShown {
    pub quote: Quote,
    pub date: DateTime<Local>,
}

/// Persisted usage state threaded through the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RotationState {
    /// Ids already shown in the current no-repeat cycle, insertion order.
    pub used_ids: Vec<QuoteId>,
    /// Same-day selection cache.
    pub last_shown: Option<LastShown>,
}

/// Result of one rotation decision.
#[derive(Debug, Clone)]
pub struct Rotation {
    pub quote: Quote,
    pub state: RotationState,
    /// Whether `state` differs from the input and needs persisting.
    pub dirty: bool,
}

/// The rule that decides which quote is shown each day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Random without repetition until the catalog is exhausted, plus a
    /// same-day cache. The only policy that persists state.
    NoRepeatRandom,
    /// `(days_since_epoch * multiplier) mod catalog_len`. Stateless and
    /// reproducible across devices, but tied to catalog order.
    DayIndexed { epoch: NaiveDate, multiplier: u32 },
    /// First sample of a generator seeded with the date as `YYYYMMDD`.
    /// Stateless, with better distribution than the linear index.
    SeededRandom,
}

impl SelectionPolicy {
    /// Decide today's quote.
    ///
    /// `force` bypasses the same-day cache for `NoRepeatRandom`; the
    /// deterministic policies ignore it since they are pure functions of
    /// the date. `rng` is only consulted by `NoRepeatRandom`.
    pub fn rotate(
        &self,
        catalog: &Catalog,
        state: RotationState,
        now: DateTime<Local>,
        force: bool,
        rng: &mut impl Rng,
    ) -> Result<Rotation, RotationError> {
        if catalog.is_empty() {
            return Err(RotationError::EmptyCatalog);
        }

        match self {
            Self::NoRepeatRandom => Ok(no_repeat_random(catalog, state, now, force, rng)),
            Self::DayIndexed { epoch, multiplier } => {
                let days = (now.date_naive() - *epoch).num_days();
                let index = (days * i64::from(*multiplier)).rem_euclid(catalog.len() as i64);
                let quote = catalog
                    .by_index(index as usize)
                    .ok_or(RotationError::EmptyCatalog)?
                    .clone();
                Ok(Rotation { quote, state, dirty: false })
            }
            Self::SeededRandom => {
                let mut seeded = StdRng::seed_from_u64(date_seed(now.date_naive()));
                let index = seeded.gen_range(0..catalog.len());
                let quote = catalog
                    .by_index(index)
                    .ok_or(RotationError::EmptyCatalog)?
                    .clone();
                Ok(Rotation { quote, state, dirty: false })
            }
        }
    }
}

/// Date as a `YYYYMMDD` integer, e.g. 2026-08-31 -> 20260831.
fn date_seed(date: NaiveDate) -> u64 {
    date.year() as u64 * 10_000 + u64::from(date.month()) * 100 + u64::from(date.day())
}

fn no_repeat_random(
    catalog: &Catalog,
    state: RotationState,
    now: DateTime<Local>,
    force: bool,
    rng: &mut impl Rng,
) -> Rotation {
    // Same-day cache: a repeat invocation within one calendar day re-reads
    // the cached quote without touching the used-id set.
    if !force {
        if let Some(last) = &state.last_shown {
            if last.date.date_naive() == now.date_naive() {
                let quote = last.quote.clone();
                return Rotation { quote, state, dirty: false };
            }
        }
    }

    let all_ids = catalog.ids();

    // Drop references to quotes that no longer exist in the catalog.
    let mut used_ids: Vec<QuoteId> = state
        .used_ids
        .into_iter()
        .filter(|id| all_ids.contains(id))
        .collect();

    // Full cycle completed: restart so every quote is shown again.
    if used_ids.len() >= all_ids.len() {
        used_ids.clear();
    }

    let unused: Vec<QuoteId> = all_ids
        .iter()
        .copied()
        .filter(|id| !used_ids.contains(id))
        .collect();

    let quote = if unused.is_empty() {
        // Catalog has no id-bearing entries. Fall back to the first entry
        // and track its id when it declares one.
        let first = catalog
            .first()
            .expect("catalog checked non-empty before dispatch")
            .clone();
        used_ids = first.id.into_iter().collect();
        first
    } else {
        let selected = unused[rng.gen_range(0..unused.len())];
        used_ids.push(selected);
        catalog
            .by_id(selected)
            .expect("unused ids are drawn from the catalog")
            .clone()
    };

    let state = RotationState {
        used_ids,
        last_shown: Some(LastShown { quote: quote.clone(), date: now }),
    };
    Rotation { quote, state, dirty: true }
}
