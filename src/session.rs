//! In-memory per-visitor session storage.
//!
//! Holds the named slots the quiz core needs across requests, keyed by a
//! session id carried in a cookie. Entries auto-expire after a period of
//! inactivity. Callers read the state before a transition and write it
//! back after; overlapping requests from the same visitor are
//! last-write-wins. That race is accepted: session storage is not shared
//! or lockable across processes, so the core does not try to coordinate it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use crate::config;
use crate::domain::{LastFeedback, QuizSession};
use crate::quiz::AreaScore;

/// Everything the application remembers about one visitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisitorState {
  /// The in-progress (or just-finished) quiz.
  pub quiz: Option<QuizSession>,
  /// Feedback for the last answered question; practice mode only.
  pub last_feedback: Option<LastFeedback>,
  /// Ids answered incorrectly in the most recent result, for review.
  pub wrong_ids: Vec<u32>,
  /// Per-area breakdown of the most recent result.
  pub last_per_area: Vec<AreaScore>,
  /// One-shot message consumed by the next start-page render.
  pub notice: Option<String>,
}

/// Visitor entry with last access time for expiration
struct SessionEntry {
  state: VisitorState,
  last_access: DateTime<Utc>,
}

/// Global session store
static SESSIONS: LazyLock<Mutex<HashMap<String, SessionEntry>>> =
  LazyLock::new(|| Mutex::new(HashMap::new()));

/// Get the state for the given visitor, creating an empty one if absent.
pub fn get_state(session_id: &str) -> VisitorState {
  let mut sessions = SESSIONS.lock().expect("Session store lock poisoned");

  // Clean up expired sessions occasionally (~10% chance)
  if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
    cleanup_expired(&mut sessions);
  }

  if let Some(entry) = sessions.get_mut(session_id) {
    entry.last_access = Utc::now();
    entry.state.clone()
  } else {
    let state = VisitorState::default();
    sessions.insert(
      session_id.to_string(),
      SessionEntry {
        state: state.clone(),
        last_access: Utc::now(),
      },
    );
    state
  }
}

/// Write a visitor's state back after a transition.
pub fn update_state(session_id: &str, state: VisitorState) {
  let mut sessions = SESSIONS.lock().expect("Session store lock poisoned");
  sessions.insert(
    session_id.to_string(),
    SessionEntry {
      state,
      last_access: Utc::now(),
    },
  );
}

/// Drop every slot for a visitor (the explicit reset transition).
pub fn clear_state(session_id: &str) {
  let mut sessions = SESSIONS.lock().expect("Session store lock poisoned");
  sessions.remove(session_id);
}

/// Clean up expired sessions
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>) {
  let expiry = Utc::now() - Duration::hours(config::SESSION_EXPIRY_HOURS);
  sessions.retain(|_, entry| entry.last_access > expiry);
}

/// Generate a new session id
pub fn generate_session_id() -> String {
  use rand::distr::Alphanumeric;
  use rand::Rng;
  rand::rng()
    .sample_iter(&Alphanumeric)
    .take(32)
    .map(char::from)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_state_creates_empty_entry() {
    let state = get_state("test-visitor-fresh");
    assert_eq!(state, VisitorState::default());
  }

  #[test]
  fn test_update_then_get_roundtrip() {
    let id = "test-visitor-roundtrip";
    let mut state = get_state(id);
    state.wrong_ids = vec![3, 7];
    state.notice = Some("hello".to_string());
    update_state(id, state.clone());

    assert_eq!(get_state(id), state);
  }

  #[test]
  fn test_clear_state_drops_all_slots() {
    let id = "test-visitor-clear";
    let mut state = get_state(id);
    state.wrong_ids = vec![1];
    state.notice = Some("pending".to_string());
    update_state(id, state);

    clear_state(id);
    assert_eq!(get_state(id), VisitorState::default());
  }

  #[test]
  fn test_generate_session_id_shape() {
    let a = generate_session_id();
    let b = generate_session_id();
    assert_eq!(a.len(), 32);
    assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(a, b);
  }
}
