//! Core data types for the cardsift engine.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Type alias for item identifiers.
///
/// Identifiers are opaque strings and must be unique within a catalog.
pub type ItemId = String;

/// One entry of a catalog, typically a game or news card on the page.
///
/// Title, description and every tag are matched against the query. The
/// identifier is never matched; it only names the card for the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchableItem {
  /// Stable identifier, unique within the catalog.
  pub id: ItemId,
  /// Display name of the card.
  pub title: String,
  /// Free text shown under the title.
  #[cfg_attr(feature = "serde", serde(default))]
  pub description: String,
  /// Ordered labels attached to the card.
  #[cfg_attr(feature = "serde", serde(default))]
  pub tags: Vec<String>,
}

impl SearchableItem {
  /// Creates an item without tags.
  pub fn new(
    id: impl Into<ItemId>,
    title: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      title: title.into(),
      description: description.into(),
      tags: Vec::new(),
    }
  }

  /// Appends a single tag.
  pub fn tag(mut self, tag: impl Into<String>) -> Self {
    self.tags.push(tag.into());
    self
  }

  /// Appends several tags, keeping their order.
  pub fn tags<I, S>(mut self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.tags.extend(tags.into_iter().map(Into::into));
    self
  }
}

/// The outcome of a single search.
///
/// `matches` is a subsequence of the catalog in catalog order, borrowed from
/// the engine that produced it. `match_count` always equals `matches.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SearchResult<'a> {
  /// The normalized query (trimmed and lowercased) this result answers.
  pub query: String,
  /// Matching items in catalog order.
  pub matches: Vec<&'a SearchableItem>,
  /// Number of matching items.
  pub match_count: usize,
}

impl<'a> SearchResult<'a> {
  pub(crate) fn new(query: String, matches: Vec<&'a SearchableItem>) -> Self {
    let match_count = matches.len();
    Self {
      query,
      matches,
      match_count,
    }
  }

  /// Returns `true` when nothing matched.
  pub fn is_empty(&self) -> bool {
    self.matches.is_empty()
  }

  /// Returns `true` when the result came from an empty query, i.e. it is the
  /// "show everything" result.
  pub fn is_everything(&self) -> bool {
    self.query.is_empty()
  }

  /// Identifiers of the matches, in order.
  pub fn ids(&self) -> Vec<&'a str> {
    self.matches.iter().map(|item| item.id.as_str()).collect()
  }

  /// Returns `true` if the item with the given id is part of the result.
  pub fn contains(&self, id: &str) -> bool {
    self.matches.iter().any(|item| item.id == id)
  }

  /// Copies the matches out of the catalog.
  pub fn to_owned_items(&self) -> Vec<SearchableItem> {
    self.matches.iter().map(|item| (*item).clone()).collect()
  }
}
