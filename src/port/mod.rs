//! Capability traits the orchestration layer depends on.
//!
//! The rotation engine itself is pure; these ports isolate the ambient
//! host services (network, filesystem, widget surface, dialogs) so each
//! can be swapped for a test double.

pub mod prompt;
pub mod render;
pub mod source;
pub mod store;

pub use prompt::ConfirmSurface;
pub use render::RenderTarget;
pub use source::CatalogSource;
pub use store::StateStore;
