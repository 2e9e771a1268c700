//! The search engine that filters a catalog by a query string.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::extension::SearchExtension;
use crate::matcher::normalize_query;
use crate::types::{ItemId, SearchResult, SearchableItem};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Filters an immutable catalog by case-insensitive substring queries.
///
/// The engine holds no mutable state. Each call to [`search`](Self::search)
/// is a pure scan of the catalog: the same query always yields the same
/// result, and results borrow the catalog's items instead of copying them.
///
/// # Examples
///
/// ```rust
/// use cardsift::prelude::*;
///
/// let engine = SearchEngine::new(vec![
///     SearchableItem::new("1", "Apex Legends", "battle royale shooter").tags(["fps", "shooter"]),
///     SearchableItem::new("2", "Hearthstone", "card strategy game").tags(["strategy", "cards"]),
/// ])
/// .unwrap();
///
/// let result = engine.search("STRATEGY");
/// assert_eq!(result.match_count, 1);
/// assert_eq!(result.ids(), vec!["2"]);
///
/// // An empty query shows everything.
/// assert_eq!(engine.search("   ").match_count, 2);
/// ```
pub struct SearchEngine {
  /// The items being searched.
  catalog: Catalog,
  /// Registered hooks, run in registration order.
  extensions: Vec<Box<dyn SearchExtension>>,
}

impl SearchEngine {
  /// Validates `items` and creates an engine over them.
  ///
  /// # Errors
  ///
  /// Fails with [`CatalogError::DuplicateId`](crate::error::CatalogError::DuplicateId)
  /// if two items share an id.
  pub fn new(items: Vec<SearchableItem>) -> Result<Self> {
    Ok(Self::from_catalog(Catalog::new(items)?))
  }

  /// Creates an engine over an already validated catalog.
  pub fn from_catalog(catalog: Catalog) -> Self {
    Self {
      catalog,
      extensions: Vec::new(),
    }
  }

  /// Creates a new `SearchEngineBuilder`.
  pub fn builder() -> SearchEngineBuilder {
    SearchEngineBuilder::new()
  }

  /// The catalog this engine searches.
  pub fn catalog(&self) -> &Catalog {
    &self.catalog
  }

  /// Searches the catalog.
  ///
  /// ## Steps
  ///
  /// 1. **`before_query` hooks** may rewrite the raw query.
  /// 2. **Normalization**: the query is trimmed and lowercased.
  /// 3. **Empty query**: the whole catalog is returned in order.
  /// 4. **Scan**: an item matches if its title, its description or any of its
  ///    tags contains the normalized query. Matches keep catalog order; there
  ///    is no ranking.
  /// 5. **`after_search` hooks** observe the result.
  ///
  /// Any string is a valid query, so this never fails.
  pub fn search(&self, query: &str) -> SearchResult<'_> {
    let normalized = self.prepare(query);

    let matches: Vec<&SearchableItem> = if normalized.is_empty() {
      self.catalog.iter().collect()
    } else {
      self.scan(&normalized)
    };

    let result = SearchResult::new(normalized, matches);
    debug!(query = %result.query, matches = result.match_count, "search finished");

    for ext in &self.extensions {
      ext.after_search(&result);
    }

    result
  }

  /// Searches and returns only the ids of the matches, in order.
  pub fn search_ids(&self, query: &str) -> Vec<ItemId> {
    self
      .search(query)
      .matches
      .into_iter()
      .map(|item| item.id.clone())
      .collect()
  }

  fn prepare(&self, query: &str) -> String {
    if self.extensions.is_empty() {
      return normalize_query(query);
    }

    let mut query = query.to_string();
    for ext in &self.extensions {
      ext.before_query(&mut query);
    }
    normalize_query(&query)
  }

  #[cfg(not(feature = "parallel"))]
  fn scan(&self, needle: &str) -> Vec<&SearchableItem> {
    self
      .catalog
      .entries()
      .filter(|(_, folded)| folded.first_match(needle).is_some())
      .map(|(item, _)| item)
      .collect()
  }

  // Indexed collect keeps catalog order.
  #[cfg(feature = "parallel")]
  fn scan(&self, needle: &str) -> Vec<&SearchableItem> {
    self
      .catalog
      .as_slice()
      .par_iter()
      .zip(self.catalog.folded().par_iter())
      .filter(|(_, folded)| folded.first_match(needle).is_some())
      .map(|(item, _)| item)
      .collect()
  }
}

/// A builder for creating `SearchEngine` instances.
///
/// ```
/// use cardsift::prelude::*;
///
/// let engine = SearchEngine::builder()
///     .item(SearchableItem::new("tft", "Teamfight Tactics", "auto battler").tag("strategy"))
///     .item(SearchableItem::new("clash", "Clash Royale", "real-time card battles").tag("strategy"))
///     .build()
///     .unwrap();
///
/// assert_eq!(engine.search("battle").ids(), vec!["tft", "clash"]);
/// ```
#[derive(Default)]
pub struct SearchEngineBuilder {
  catalog: Option<Catalog>,
  items: Vec<SearchableItem>,
  extensions: Vec<Box<dyn SearchExtension>>,
}

impl SearchEngineBuilder {
  /// Creates a new, empty `SearchEngineBuilder`.
  pub fn new() -> Self {
    Self::default()
  }

  /// Uses an already validated catalog. Items added with
  /// [`item`](Self::item) are appended after it.
  pub fn catalog(mut self, catalog: Catalog) -> Self {
    self.catalog = Some(catalog);
    self
  }

  /// Adds one item to the catalog.
  pub fn item(mut self, item: SearchableItem) -> Self {
    self.items.push(item);
    self
  }

  /// Adds several items to the catalog, keeping their order.
  pub fn items(mut self, items: impl IntoIterator<Item = SearchableItem>) -> Self {
    self.items.extend(items);
    self
  }

  /// Adds an extension to the engine.
  pub fn with_extension(mut self, extension: Box<dyn SearchExtension>) -> Self {
    self.extensions.push(extension);
    self
  }

  /// Builds the engine, validating the catalog.
  ///
  /// # Errors
  ///
  /// Fails if the combined items contain a duplicate id.
  pub fn build(self) -> Result<SearchEngine> {
    let catalog = match (self.catalog, self.items.is_empty()) {
      (Some(catalog), true) => catalog,
      (Some(catalog), false) => {
        let mut items = catalog.as_slice().to_vec();
        items.extend(self.items);
        Catalog::new(items)?
      }
      (None, _) => Catalog::new(self.items)?,
    };

    Ok(SearchEngine {
      catalog,
      extensions: self.extensions,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::CatalogError;

  fn engine() -> SearchEngine {
    SearchEngine::new(vec![
      SearchableItem::new("1", "Apex Legends", "battle royale shooter").tags(["fps", "shooter"]),
      SearchableItem::new("2", "Hearthstone", "card strategy game").tags(["strategy", "cards"]),
    ])
    .unwrap()
  }

  #[test]
  fn test_scenario() {
    let engine = engine();

    let result = engine.search("shooter");
    assert_eq!(result.ids(), vec!["1"]);
    assert_eq!(result.match_count, 1);

    assert_eq!(engine.search("STRATEGY").ids(), vec!["2"]);
    assert_eq!(engine.search("").ids(), vec!["1", "2"]);
    assert_eq!(engine.search("xyz").match_count, 0);
    assert_eq!(engine.search("e").ids(), vec!["1", "2"]);
  }

  #[test]
  fn test_result_carries_normalized_query() {
    let engine = engine();
    let result = engine.search("  HeArTh ");
    assert_eq!(result.query, "hearth");
    assert_eq!(result.ids(), vec!["2"]);
    assert!(!result.is_everything());

    let blank = engine.search(" ");
    assert!(blank.is_everything());
    assert_eq!(blank.match_count, 2);
  }

  #[test]
  fn test_search_ids() {
    assert_eq!(engine().search_ids("cards"), vec!["2".to_string()]);
  }

  #[test]
  fn test_builder_rejects_duplicates_across_catalog_and_items() {
    let catalog = Catalog::new(vec![SearchableItem::new("a", "Alpha", "")]).unwrap();
    let err = SearchEngine::builder()
      .catalog(catalog)
      .item(SearchableItem::new("a", "Again", ""))
      .build()
      .err()
      .unwrap();
    assert_eq!(err.item_id(), Some("a"));
    assert!(matches!(err, CatalogError::DuplicateId { first: 0, second: 1, .. }));
  }

  #[test]
  fn test_builder_without_items_is_empty() {
    let engine = SearchEngine::builder().build().unwrap();
    assert!(engine.catalog().is_empty());
    assert!(engine.search("anything").is_empty());
    assert!(engine.search("").is_empty());
  }
}
