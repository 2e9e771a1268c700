use cardsift::prelude::*;

fn catalog() -> Vec<SearchableItem> {
  vec![
    SearchableItem::new("1", "Apex Legends", "battle royale shooter").tags(["fps", "shooter"]),
    SearchableItem::new("2", "Hearthstone", "card strategy game").tags(["strategy", "cards"]),
  ]
}

#[test]
fn test_listing_scenario() {
  let items = catalog();
  let engine = SearchEngine::new(items.clone()).unwrap();

  let shooter = engine.search("shooter");
  assert_eq!(shooter.to_owned_items(), vec![items[0].clone()]);
  assert_eq!(shooter.match_count, 1);

  let strategy = engine.search("STRATEGY");
  assert_eq!(strategy.to_owned_items(), vec![items[1].clone()]);
  assert_eq!(strategy.match_count, 1);

  let all = engine.search("");
  assert_eq!(all.to_owned_items(), items);
  assert_eq!(all.match_count, 2);

  let none = engine.search("xyz");
  assert!(none.is_empty());
  assert_eq!(none.match_count, 0);

  let e = engine.search("e");
  assert_eq!(e.ids(), vec!["1", "2"]);
  assert_eq!(e.match_count, 2);
}

#[test]
fn test_symbols_and_whitespace_are_valid_queries() {
  let engine = SearchEngine::new(catalog()).unwrap();
  assert_eq!(engine.search("!!@@").match_count, 0);
  assert_eq!(engine.search("\n\t ").match_count, 2);
  assert_eq!(engine.search("battle royale").ids(), vec!["1"]);
  assert_eq!(engine.search("游戏").match_count, 0);
}

#[test]
fn test_duplicate_ids_rejected() {
  let items = vec![
    SearchableItem::new("a", "First", ""),
    SearchableItem::new("a", "Second", ""),
  ];
  let err = SearchEngine::new(items).err().unwrap();
  assert!(matches!(err, CatalogError::DuplicateId { ref id, first: 0, second: 1 } if id == "a"));
  assert_eq!(err.to_string(), "duplicate item id \"a\" at positions 0 and 1");
}

fn build_and_search(items: Vec<SearchableItem>, query: &str) -> Result<usize, CatalogError> {
  let engine = SearchEngine::new(items)?;
  Ok(engine.search(query).match_count)
}

#[test]
fn test_catalog_error_propagates_to_caller() {
  assert_eq!(build_and_search(catalog(), "card").unwrap(), 1);

  let mut items = catalog();
  items.push(SearchableItem::new("2", "Clash Royale", "real-time card battles"));
  let err = build_and_search(items, "card").unwrap_err();
  assert_eq!(err.item_id(), Some("2"));
}

#[test]
fn test_engines_share_one_catalog() {
  let catalog = Catalog::new(catalog()).unwrap();
  let first = SearchEngine::from_catalog(catalog.clone());
  let second = SearchEngine::from_catalog(catalog);

  let a = first.search("card");
  let b = second.search("card");
  assert_eq!(a, b);
  assert!(std::ptr::eq(a.matches[0], b.matches[0]));
}

#[cfg(feature = "serde")]
#[test]
fn test_catalog_from_json_and_result_serialization() {
  let catalog = Catalog::from_json(
    r#"[
      {"id": "1", "title": "Apex Legends", "description": "battle royale shooter", "tags": ["fps", "shooter"]},
      {"id": "2", "title": "Hearthstone", "description": "card strategy game", "tags": ["strategy", "cards"]}
    ]"#,
  )
  .unwrap();
  let engine = SearchEngine::from_catalog(catalog);

  let json = serde_json::to_value(engine.search("FPS")).unwrap();
  assert_eq!(json["query"], "fps");
  assert_eq!(json["match_count"], 1);
  assert_eq!(json["matches"][0]["id"], "1");
}

#[cfg(feature = "serde")]
#[test]
fn test_catalog_from_json_rejects_duplicates() {
  let err = Catalog::from_json(r#"[{"id": "x", "title": "A"}, {"id": "x", "title": "B"}]"#).unwrap_err();
  assert_eq!(err.item_id(), Some("x"));
}
