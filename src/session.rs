//! The interactive search box state that a page layer drives.

use crate::config::SearchConfig;
use crate::engine::SearchEngine;
use crate::notify::{Notification, Notifier};
use crate::trigger::{TriggerDecision, TriggerEvent, TriggerPolicy};
use crate::types::SearchResult;
use std::time::Instant;

/// Tracks the search input, the displayed result and the notification.
///
/// The session starts out showing the whole catalog. Each event is gated by
/// the [`TriggerPolicy`]; skipped events leave the last result on screen.
pub struct SearchSession<'e> {
  engine: &'e SearchEngine,
  policy: TriggerPolicy,
  notifier: Notifier,
  input: String,
  displayed: SearchResult<'e>,
}

impl<'e> SearchSession<'e> {
  /// Creates a session with default settings.
  pub fn new(engine: &'e SearchEngine) -> Self {
    Self::with_config(engine, &SearchConfig::default())
  }

  /// Creates a session with the given settings.
  pub fn with_config(engine: &'e SearchEngine, config: &SearchConfig) -> Self {
    Self {
      engine,
      policy: config.trigger_policy(),
      notifier: config.notifier(),
      input: String::new(),
      displayed: engine.search(""),
    }
  }

  /// The text currently in the search box.
  pub fn input_text(&self) -> &str {
    &self.input
  }

  /// The result currently on screen.
  pub fn displayed(&self) -> &SearchResult<'e> {
    &self.displayed
  }

  /// Returns `true` if the card with this id is shown.
  pub fn is_visible(&self, id: &str) -> bool {
    self.displayed.contains(id)
  }

  /// The visible notification at `now`, if any.
  pub fn notification(&self, now: Instant) -> Option<&Notification> {
    self.notifier.current(now)
  }

  /// The search box text changed.
  pub fn input(&mut self, text: impl Into<String>, now: Instant) -> &SearchResult<'e> {
    self.input = text.into();
    self.dispatch(TriggerEvent::Input, now)
  }

  /// The user submitted the current text.
  pub fn submit(&mut self, now: Instant) -> &SearchResult<'e> {
    self.dispatch(TriggerEvent::Submit, now)
  }

  /// The user cancelled: clears the input and restores the full catalog.
  pub fn cancel(&mut self, now: Instant) -> &SearchResult<'e> {
    self.input.clear();
    self.dispatch(TriggerEvent::Cancel, now)
  }

  fn dispatch(&mut self, event: TriggerEvent, now: Instant) -> &SearchResult<'e> {
    match self.policy.decide(event, &self.input) {
      TriggerDecision::Search(query) => {
        self.displayed = self.engine.search(&query);
        self
          .notifier
          .show(self.displayed.match_count, self.displayed.query.clone(), now);
      }
      TriggerDecision::ShowAll => {
        self.displayed = self.engine.search("");
        self.notifier.hide();
      }
      TriggerDecision::Skip => {}
    }
    &self.displayed
  }
}
