//! Walks a typing session over the game news page's cards.

use cardsift::prelude::*;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// The cards shown on the listing page, grouped by section.
fn page_cards() -> Vec<SearchableItem> {
  vec![
    SearchableItem::new("cf", "CrossFire", "Classic tactical shooter with fast matches").tags(["FPS", "Shooter"]),
    SearchableItem::new("apex", "Apex Legends", "Battle royale shooter").tags(["FPS", "Shooter"]),
    SearchableItem::new("valorant", "Valorant", "5v5 character-based tactical shooter").tags(["FPS", "Tactical"]),
    SearchableItem::new("yanyun", "Where Winds Meet", "Open world wuxia adventure").tags(["MMO", "RPG"]),
    SearchableItem::new("blade3", "Blade & Soul", "Martial arts MMORPG").tags(["MMO", "Action"]),
    SearchableItem::new("tianlong", "Tian Long Ba Bu", "Classic wuxia MMORPG").tags(["MMO", "RPG"]),
    SearchableItem::new("tft", "Teamfight Tactics", "Auto battler in the League universe").tags(["Strategy", "Auto Chess"]),
    SearchableItem::new("clash", "Clash Royale", "Real-time card battles").tags(["Strategy", "Cards"]),
    SearchableItem::new("hearthstone", "Hearthstone", "Card strategy game").tags(["Strategy", "Cards"]),
  ]
}

fn show(label: &str, session: &SearchSession<'_>, now: Instant) {
  let notice = session
    .notification(now)
    .map(|n| n.message())
    .unwrap_or_else(|| "-".to_string());
  println!(
    "{label:<22} input={:<10?} shown={:?} notice={notice}",
    session.input_text(),
    session.displayed().ids(),
  );
}

fn main() -> Result<(), CatalogError> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let engine = SearchEngine::new(page_cards())?;

  let mut session = SearchSession::new(&engine);
  let start = Instant::now();

  show("initial", &session, start);

  for (i, text) in ["s", "st", "str", "stra", "st"].into_iter().enumerate() {
    let now = start + Duration::from_millis(200 * i as u64);
    session.input(text, now);
    show(&format!("typed {text:?}"), &session, now);
  }

  let now = start + Duration::from_secs(1);
  session.submit(now);
  show("submitted", &session, now);

  let later = now + Duration::from_secs(4);
  show("after 4s", &session, later);

  session.input("wuxia", later);
  show("typed \"wuxia\"", &session, later);

  session.cancel(later);
  show("escape", &session, later);

  Ok(())
}
