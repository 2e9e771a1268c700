//! Query normalization and per-item substring matching.

use crate::types::SearchableItem;

/// Normalizes a raw query: trims surrounding whitespace, then lowercases.
///
/// Lowercasing uses [`str::to_lowercase`], which is locale-invariant.
pub fn normalize_query(raw: &str) -> String {
  raw.trim().to_lowercase()
}

/// The field of an item that satisfied a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
  /// The item title contains the query.
  Title,
  /// The description contains the query.
  Description,
  /// The tag at this position contains the query.
  Tag(usize),
}

/// Case-folded copy of the matchable text of an item.
///
/// Built once per catalog entry so that searching never re-folds catalog
/// text.
#[derive(Debug, Clone)]
pub(crate) struct FoldedItem {
  title: String,
  description: String,
  tags: Vec<String>,
}

impl FoldedItem {
  pub(crate) fn new(item: &SearchableItem) -> Self {
    Self {
      title: item.title.to_lowercase(),
      description: item.description.to_lowercase(),
      tags: item.tags.iter().map(|t| t.to_lowercase()).collect(),
    }
  }

  /// Checks fields in order title, description, tags. `needle` must already
  /// be normalized.
  pub(crate) fn first_match(&self, needle: &str) -> Option<MatchField> {
    if self.title.contains(needle) {
      return Some(MatchField::Title);
    }
    if self.description.contains(needle) {
      return Some(MatchField::Description);
    }
    self
      .tags
      .iter()
      .position(|tag| tag.contains(needle))
      .map(MatchField::Tag)
  }
}

/// Reports which field of `item` first contains `normalized`, if any.
///
/// An empty `normalized` query matches every item and reports
/// [`MatchField::Title`].
pub fn first_match(item: &SearchableItem, normalized: &str) -> Option<MatchField> {
  FoldedItem::new(item).first_match(normalized)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn apex() -> SearchableItem {
    SearchableItem::new("apex", "Apex Legends", "battle royale shooter").tags(["FPS", "Shooter"])
  }

  #[test]
  fn test_normalize_query() {
    assert_eq!(normalize_query("  Apex  "), "apex");
    assert_eq!(normalize_query("\tSTRATEGY\n"), "strategy");
    assert_eq!(normalize_query("   "), "");
    assert_eq!(normalize_query(""), "");
  }

  #[test]
  fn test_normalize_keeps_inner_whitespace() {
    assert_eq!(normalize_query(" Battle  Royale "), "battle  royale");
  }

  #[test]
  fn test_first_match_order() {
    let item = apex();
    assert_eq!(first_match(&item, "apex"), Some(MatchField::Title));
    assert_eq!(first_match(&item, "royale"), Some(MatchField::Description));
    assert_eq!(first_match(&item, "fps"), Some(MatchField::Tag(0)));
    // "shooter" is in the description, which is checked before the tags
    assert_eq!(first_match(&item, "shooter"), Some(MatchField::Description));
    assert_eq!(first_match(&item, "moba"), None);
  }

  #[test]
  fn test_empty_query_matches_title() {
    assert_eq!(first_match(&apex(), ""), Some(MatchField::Title));
  }

  #[test]
  fn test_unicode_fold() {
    let item = SearchableItem::new("yanyun", "燕云十六声", "Open world wuxia").tag("MMO");
    assert_eq!(first_match(&item, "燕云"), Some(MatchField::Title));
    assert_eq!(first_match(&item, &normalize_query("WUXIA")), Some(MatchField::Description));
  }
}
