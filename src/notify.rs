//! Transient "N results" notification with a fixed display time.

use std::time::{Duration, Instant};

/// Default time a notification stays visible.
pub const DEFAULT_DISPLAY_MS: u64 = 3000;

/// A result-count announcement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
  /// Number of matches announced.
  pub count: usize,
  /// The normalized query the count belongs to.
  pub query: String,
  /// When the notification was shown.
  pub shown_at: Instant,
}

impl Notification {
  /// Renders the text shown to the user.
  pub fn message(&self) -> String {
    format!("{} results for \"{}\"", self.count, self.query)
  }
}

/// Holds at most one notification and expires it after `display_for`.
///
/// Showing a new notification replaces the pending one, and expiry is always
/// measured from the latest `show`, so an older notification's timeout can
/// never hide a newer one. Time is passed in by the caller.
#[derive(Debug, Clone)]
pub struct Notifier {
  display_for: Duration,
  current: Option<Notification>,
}

impl Default for Notifier {
  fn default() -> Self {
    Self::new(Duration::from_millis(DEFAULT_DISPLAY_MS))
  }
}

impl Notifier {
  /// Creates a notifier with the given display time.
  pub fn new(display_for: Duration) -> Self {
    Self {
      display_for,
      current: None,
    }
  }

  /// How long a notification stays visible.
  pub fn display_for(&self) -> Duration {
    self.display_for
  }

  /// Shows a notification, replacing any pending one.
  pub fn show(&mut self, count: usize, query: impl Into<String>, now: Instant) {
    self.current = Some(Notification {
      count,
      query: query.into(),
      shown_at: now,
    });
  }

  /// Hides the notification immediately.
  pub fn hide(&mut self) {
    self.current = None;
  }

  /// The visible notification at `now`, if any.
  pub fn current(&self, now: Instant) -> Option<&Notification> {
    self
      .current
      .as_ref()
      .filter(|n| now.saturating_duration_since(n.shown_at) < self.display_for)
  }
}
