//! Quiz session value objects.
//!
//! A `QuizSession` is owned by one visitor and passed by value into and out
//! of every engine operation; the session store is the only place that
//! persists it between requests.

use serde::{Deserialize, Serialize};

/// One recorded answer. `chosen` is -1 when the submitted value was missing
/// or not a number, which can never match a valid answer index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
  pub question_id: u32,
  pub chosen: i32,
  pub correct: i32,
  pub was_correct: bool,
}

/// Feedback for the most recently answered question, surfaced in practice
/// mode only. Overwritten or cleared on the next transition; never part of
/// the session itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastFeedback {
  pub question_id: u32,
  pub was_correct: bool,
  pub explanation: String,
}

/// One visitor's quiz attempt: a fixed list of question ids plus a cursor,
/// a running score, and the answer log.
///
/// Invariants held by the engine transitions:
/// - `size == items.len()` and `items` contains no duplicate ids
/// - `position` increases by exactly 1 per recorded answer
/// - `score <= position` and `answered.len() == position`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
  /// Area label, or the synthetic review label for review sessions.
  pub area: String,
  /// "practice" or "timed" have defined effects; any other value is
  /// carried through untouched.
  pub mode: String,
  pub size: usize,
  pub items: Vec<u32>,
  pub position: usize,
  pub score: usize,
  pub answered: Vec<AnswerRecord>,
}

impl QuizSession {
  /// True once every item has been answered. Terminal is absorbing: the
  /// engine treats further answer submissions as no-ops.
  pub fn is_finished(&self) -> bool {
    self.position >= self.size
  }

  /// Id of the question at the cursor, or None when terminal.
  pub fn current_question_id(&self) -> Option<u32> {
    self.items.get(self.position).copied()
  }
}
