//! Gating rules that decide when a UI event should run a search.

use tracing::trace;

/// Default number of characters live input needs before it searches.
pub const DEFAULT_LIVE_MIN_CHARS: usize = 3;

/// A user interaction on the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEvent {
  /// The text changed while typing.
  Input,
  /// Explicit submission, e.g. the search button or the enter key.
  Submit,
  /// The cancel action, e.g. the escape key.
  Cancel,
}

/// What the caller should do in response to an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerDecision {
  /// Run a search with this raw query.
  Search(String),
  /// Restore the whole catalog without announcing a result count.
  ShowAll,
  /// Keep displaying the previous result.
  Skip,
}

/// Decides whether an event triggers a search.
///
/// Submissions always search. Live input searches only once it is at least
/// `live_min_chars` characters long, and an emptied input restores the full
/// catalog. Anything in between is skipped so short prefixes do not flicker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerPolicy {
  /// Minimum raw input length, in characters, for live search.
  pub live_min_chars: usize,
}

impl Default for TriggerPolicy {
  fn default() -> Self {
    Self {
      live_min_chars: DEFAULT_LIVE_MIN_CHARS,
    }
  }
}

impl TriggerPolicy {
  /// Creates a policy with a custom live-search threshold.
  pub fn new(live_min_chars: usize) -> Self {
    Self { live_min_chars }
  }

  /// Maps an event and the current raw input to a decision.
  ///
  /// Length is measured on the raw, un-trimmed input.
  pub fn decide(&self, event: TriggerEvent, raw: &str) -> TriggerDecision {
    let len = raw.chars().count();
    let decision = match event {
      TriggerEvent::Submit => TriggerDecision::Search(raw.to_string()),
      TriggerEvent::Cancel => TriggerDecision::ShowAll,
      TriggerEvent::Input => {
        if len == 0 {
          TriggerDecision::ShowAll
        } else if len >= self.live_min_chars {
          TriggerDecision::Search(raw.to_string())
        } else {
          TriggerDecision::Skip
        }
      }
    };
    trace!(?event, len, ?decision, "trigger decision");
    decision
  }
}
