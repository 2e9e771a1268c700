//! Defines the extension hooks of the search engine.

use crate::types::SearchResult;

/// A trait for extensions that hook into each search.
///
/// Extensions can rewrite the raw query before it is normalized and observe
/// the finished result. They cannot alter results: the engine stays a pure
/// function of catalog and query as long as `before_query` is deterministic.
///
/// # Examples
///
/// Expanding a short alias into the full game name:
///
/// ```rust
/// use cardsift::prelude::*;
///
/// struct AliasExtension;
///
/// impl SearchExtension for AliasExtension {
///     fn before_query(&self, query: &mut String) {
///         if query.trim().eq_ignore_ascii_case("hs") {
///             *query = "hearthstone".to_string();
///         }
///     }
/// }
/// ```
pub trait SearchExtension: Send + Sync {
  /// Called with the raw query before normalization.
  fn before_query(&self, _query: &mut String) {}

  /// Called with every finished result.
  ///
  /// Useful for analytics or logging. The result is read-only.
  fn after_search(&self, _result: &SearchResult<'_>) {}
}
