//! Concrete implementations of the `port` traits.

pub mod file;
pub mod http;
pub mod prompt;
pub mod terminal;

pub use file::FileStateStore;
pub use http::HttpCatalogSource;
pub use prompt::DialoguerConfirm;
pub use terminal::TerminalRender;
