//! Quotidian - a daily quote widget.
//!
//! Fetches a remote quote catalog, selects one quote per day under a
//! configurable rotation policy, tracks which quotes have already been
//! shown, and renders the result as a widget model.
//!
//! # Architecture
//!
//! The rotation engine is pure; everything ambient sits behind ports:
//!
//! - **`domain::rotation`** - The selection policies
//!   - `NoRepeatRandom` - random without repetition, same-day cache,
//!     cycle reset on exhaustion
//!   - `DayIndexed` - deterministic rotation by days since a fixed epoch
//!   - `SeededRandom` - deterministic pick from a date-seeded generator
//!
//! - **`port`** - Capability traits: catalog source, state store, render
//!   target, confirmation surface
//! - **`adapter`** - HTTP source, JSON file store, terminal render,
//!   dialoguer prompts
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Quotes, the rotation engine, usage summaries
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions for host capabilities
//! - [`adapter`] - Concrete port implementations
//! - [`widget`] - The composed widget model
//! - [`app`] - Application orchestration
//!
//! # Example
//!
//! ```
//! use quotidian::domain::{Catalog, Quote, QuoteId, RotationState, SelectionPolicy};
//!
//! let catalog = Catalog::new(vec![
//!     Quote::new(Some(QuoteId::new(1)), "Stay hungry, stay foolish.", "Steve Jobs"),
//! ]);
//! let rotation = SelectionPolicy::NoRepeatRandom
//!     .rotate(
//!         &catalog,
//!         RotationState::default(),
//!         chrono::Local::now(),
//!         true,
//!         &mut rand::thread_rng(),
//!     )
//!     .unwrap();
//! assert_eq!(rotation.quote.attribution, "Steve Jobs");
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod widget;
