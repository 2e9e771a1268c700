//! The validated, immutable collection of searchable items.

use crate::error::{CatalogError, Result};
use crate::matcher::FoldedItem;
use crate::types::{ItemId, SearchableItem};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// An ordered, immutable set of items with unique identifiers.
///
/// Cloning a `Catalog` is cheap: the items live behind an [`Arc`] and are
/// never mutated after construction, so several engines can share one
/// catalog without copying it.
#[derive(Debug, Clone)]
pub struct Catalog {
  inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
  items: Vec<SearchableItem>,
  folded: Vec<FoldedItem>,
  positions: HashMap<ItemId, usize>,
}

impl Catalog {
  /// Validates `items` and builds a catalog.
  ///
  /// # Errors
  ///
  /// Returns [`CatalogError::DuplicateId`] if two items share an id. The
  /// error names the id and both positions.
  pub fn new(items: Vec<SearchableItem>) -> Result<Self> {
    let mut positions = HashMap::with_capacity(items.len());

    for (index, item) in items.iter().enumerate() {
      if let Some(&first) = positions.get(&item.id) {
        warn!(id = %item.id, first, second = index, "rejecting catalog with duplicate id");
        return Err(CatalogError::DuplicateId {
          id: item.id.clone(),
          first,
          second: index,
        });
      }
      positions.insert(item.id.clone(), index);
    }

    let folded = items.iter().map(FoldedItem::new).collect();

    Ok(Self {
      inner: Arc::new(CatalogInner {
        items,
        folded,
        positions,
      }),
    })
  }

  /// Parses a JSON array of items and validates it.
  ///
  /// `description` and `tags` may be omitted in the source and default to
  /// empty.
  ///
  /// # Errors
  ///
  /// Returns [`CatalogError::Parse`] for malformed JSON and
  /// [`CatalogError::DuplicateId`] for repeated ids.
  #[cfg(feature = "serde")]
  pub fn from_json(source: &str) -> Result<Self> {
    let items: Vec<SearchableItem> = serde_json::from_str(source)?;
    Self::new(items)
  }

  /// Number of items.
  pub fn len(&self) -> usize {
    self.inner.items.len()
  }

  /// Returns `true` if the catalog holds no items.
  pub fn is_empty(&self) -> bool {
    self.inner.items.is_empty()
  }

  /// The items in catalog order.
  pub fn as_slice(&self) -> &[SearchableItem] {
    &self.inner.items
  }

  /// Iterates the items in catalog order.
  pub fn iter(&self) -> std::slice::Iter<'_, SearchableItem> {
    self.inner.items.iter()
  }

  /// Looks up an item by id.
  pub fn get(&self, id: &str) -> Option<&SearchableItem> {
    self.position(id).map(|index| &self.inner.items[index])
  }

  /// Position of the item with the given id.
  pub fn position(&self, id: &str) -> Option<usize> {
    self.inner.positions.get(id).copied()
  }

  #[cfg(not(feature = "parallel"))]
  pub(crate) fn entries(&self) -> impl Iterator<Item = (&SearchableItem, &FoldedItem)> {
    self.inner.items.iter().zip(self.inner.folded.iter())
  }

  #[cfg(feature = "parallel")]
  pub(crate) fn folded(&self) -> &[FoldedItem] {
    &self.inner.folded
  }
}

impl<'a> IntoIterator for &'a Catalog {
  type Item = &'a SearchableItem;
  type IntoIter = std::slice::Iter<'a, SearchableItem>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

impl TryFrom<Vec<SearchableItem>> for Catalog {
  type Error = CatalogError;

  fn try_from(items: Vec<SearchableItem>) -> Result<Self> {
    Self::new(items)
  }
}
