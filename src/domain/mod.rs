//! Core domain types: quotes, the rotation engine, and usage summaries.
//!
//! Everything here is pure. I/O lives in the adapters behind the `port`
//! traits.

pub mod quote;
pub mod rotation;
pub mod usage;

pub use quote::{Catalog, Quote, QuoteId};
pub use rotation::{LastShown, Rotation, RotationError, RotationState, SelectionPolicy};
pub use usage::UsageSummary;
