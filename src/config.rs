//! Tunables for the interactive search layer.

use crate::notify::{Notifier, DEFAULT_DISPLAY_MS};
use crate::trigger::{TriggerPolicy, DEFAULT_LIVE_MIN_CHARS};
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings that control when live search fires and how long the result
/// notification stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
  /// Minimum raw input length, in characters, before typing triggers a
  /// search.
  #[cfg_attr(feature = "serde", serde(default = "default_live_min_chars"))]
  pub live_min_chars: usize,
  /// How long the "N results" notification is shown, in milliseconds.
  #[cfg_attr(feature = "serde", serde(default = "default_notification_ms"))]
  pub notification_ms: u64,
}

fn default_live_min_chars() -> usize {
  DEFAULT_LIVE_MIN_CHARS
}

fn default_notification_ms() -> u64 {
  DEFAULT_DISPLAY_MS
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      live_min_chars: default_live_min_chars(),
      notification_ms: default_notification_ms(),
    }
  }
}

impl SearchConfig {
  /// Parses a JSON object. Missing keys take their defaults.
  #[cfg(feature = "serde")]
  pub fn from_json(source: &str) -> serde_json::Result<Self> {
    serde_json::from_str(source)
  }

  /// Sets the live-search threshold.
  pub fn live_min_chars(mut self, live_min_chars: usize) -> Self {
    self.live_min_chars = live_min_chars;
    self
  }

  /// Sets the notification display time in milliseconds.
  pub fn notification_ms(mut self, notification_ms: u64) -> Self {
    self.notification_ms = notification_ms;
    self
  }

  /// Builds the live-search gate from these settings.
  pub fn trigger_policy(&self) -> TriggerPolicy {
    TriggerPolicy::new(self.live_min_chars)
  }

  /// Builds an empty notifier with the configured display time.
  pub fn notifier(&self) -> Notifier {
    Notifier::new(Duration::from_millis(self.notification_ms))
  }
}
