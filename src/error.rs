//! Error types for catalog construction.

use thiserror::Error;

/// Errors raised while building a [`Catalog`](crate::catalog::Catalog).
///
/// Searching itself is total: every query string produces a result, so this
/// is the only error type in the crate.
#[derive(Debug, Error)]
pub enum CatalogError {
  /// Two items share the same identifier.
  #[error("duplicate item id {id:?} at positions {first} and {second}")]
  DuplicateId {
    /// The repeated identifier.
    id: String,
    /// Position of the first occurrence in the catalog.
    first: usize,
    /// Position of the repeated occurrence.
    second: usize,
  },

  /// The catalog source could not be parsed.
  #[cfg(feature = "serde")]
  #[error("catalog parse error: {0}")]
  Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
  /// The offending identifier, if the error is about a specific item.
  pub fn item_id(&self) -> Option<&str> {
    match self {
      CatalogError::DuplicateId { id, .. } => Some(id),
      #[cfg(feature = "serde")]
      CatalogError::Parse(_) => None,
    }
  }
}
