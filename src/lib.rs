//! Cardsift - substring search over a fixed catalog of listing cards.
//!
//! A [`SearchEngine`](engine::SearchEngine) holds an immutable catalog and
//! answers case-insensitive substring queries against each item's title,
//! description and tags, keeping catalog order. [`SearchSession`](session::SearchSession)
//! layers the interactive search box on top: live-search gating, explicit
//! submit and cancel, and a transient result-count notification.

pub mod types;
pub mod error;
pub mod catalog;
pub mod matcher;
pub mod engine;
pub mod extension;
pub mod trigger;
pub mod notify;
pub mod config;
pub mod session;

pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::types::*;
    pub use crate::error::CatalogError;
    pub use crate::catalog::*;
    pub use crate::matcher::*;
    pub use crate::engine::*;
    pub use crate::extension::*;
    pub use crate::trigger::*;
    pub use crate::notify::*;
    pub use crate::config::*;
    pub use crate::session::*;
}
