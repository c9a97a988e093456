//! The quiz session engine: sampling, answer transitions, results.
//!
//! Every function here is stateless over an injected `QuestionBank`;
//! sessions go in and come out as values, and only the session store
//! persists them between requests.

pub mod results;

pub use results::{build_result, build_review, AreaScore, QuestionDetail, ResultSummary};

use rand::seq::{IndexedRandom, SliceRandom};

use crate::bank::QuestionBank;
use crate::domain::{AnswerRecord, LastFeedback, QuizSession};

/// Recoverable engine failures. None of these should ever crash a request;
/// callers redirect to the start screen with a notice.
#[derive(Debug, PartialEq, Eq)]
pub enum QuizError {
  /// A session item references a question the bank no longer knows.
  CorruptSession(u32),
  /// Review was requested without any prior mistakes.
  NothingToReview,
}

impl std::fmt::Display for QuizError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::CorruptSession(id) => {
        write!(f, "session references unknown question {}", id)
      }
      Self::NothingToReview => write!(f, "no mistakes to review"),
    }
  }
}

impl std::error::Error for QuizError {}

/// Build a fresh session for `area`: draw `min(requested, pool)` questions
/// uniformly at random without replacement, in uniformly random order. An
/// unknown area or an empty pool yields an empty session the caller treats
/// as "no questions available".
///
/// Pure apart from randomness; the caller persists the result.
pub fn build_quiz(bank: &QuestionBank, area: &str, mode: &str, requested: usize) -> QuizSession {
  let area = area.trim();
  let pool = bank.find_by_area(area);
  let n = requested.min(pool.len());

  let mut rng = rand::rng();
  // choose_multiple picks an unbiased subset but not an unbiased order,
  // so shuffle the draw afterwards.
  let mut items: Vec<u32> = pool.choose_multiple(&mut rng, n).map(|q| q.id).collect();
  items.shuffle(&mut rng);

  QuizSession {
    area: area.to_string(),
    mode: mode.to_string(),
    size: items.len(),
    items,
    position: 0,
    score: 0,
    answered: Vec::new(),
  }
}

/// Record one answer on `session`. `chosen` is the already-coerced choice
/// index (-1 when the input was missing or malformed, which never matches).
///
/// Returns `Ok(None)` when the session is already terminal (the caller
/// routes to the result view), `Err(CorruptSession)` when the current item
/// cannot be resolved, and otherwise the feedback payload for the answered
/// question. The caller persists the feedback only in practice mode.
pub fn record_answer(
  bank: &QuestionBank,
  session: &mut QuizSession,
  chosen: i32,
) -> Result<Option<LastFeedback>, QuizError> {
  let Some(question_id) = session.current_question_id() else {
    return Ok(None);
  };
  let Some(record) = bank.find_by_id(question_id) else {
    return Err(QuizError::CorruptSession(question_id));
  };

  let correct = record.answer as i32;
  let was_correct = chosen == correct;
  if was_correct {
    session.score += 1;
  }
  session.answered.push(AnswerRecord {
    question_id,
    chosen,
    correct,
    was_correct,
  });
  session.position += 1;

  Ok(Some(LastFeedback {
    question_id,
    was_correct,
    explanation: record.explanation.clone(),
  }))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{Area, QuestionRecord};
  use std::collections::HashMap;
  use std::collections::HashSet;

  fn record(id: u32, area: Area) -> QuestionRecord {
    QuestionRecord {
      id,
      area,
      prompt: format!("prompt {}", id),
      options: vec![
        "a".to_string(),
        "b".to_string(),
        "c".to_string(),
        "d".to_string(),
      ],
      // Spread correct answers across indexes
      answer: id as usize % 4,
      explanation: format!("explanation {}", id),
      difficulty: None,
      tags: Vec::new(),
    }
  }

  fn civil_bank(count: u32) -> QuestionBank {
    QuestionBank::new((1..=count).map(|id| record(id, Area::Civil)).collect()).unwrap()
  }

  #[test]
  fn test_build_quiz_full_request() {
    let bank = civil_bank(10);
    let quiz = build_quiz(&bank, "Direito Civil", "practice", 5);
    assert_eq!(quiz.size, 5);
    assert_eq!(quiz.items.len(), 5);
    assert_eq!(quiz.position, 0);
    assert_eq!(quiz.score, 0);
    assert!(quiz.answered.is_empty());
  }

  #[test]
  fn test_build_quiz_clamps_to_pool() {
    // Scenario: 10 questions available, 20 requested
    let bank = civil_bank(10);
    let quiz = build_quiz(&bank, "Direito Civil", "timed", 20);
    assert_eq!(quiz.size, 10);
  }

  #[test]
  fn test_build_quiz_no_duplicates_and_membership() {
    let bank = civil_bank(30);
    for _ in 0..50 {
      let quiz = build_quiz(&bank, "Direito Civil", "practice", 10);
      let unique: HashSet<u32> = quiz.items.iter().copied().collect();
      assert_eq!(unique.len(), quiz.items.len());
      for id in &quiz.items {
        assert!((1..=30).contains(id));
      }
    }
  }

  #[test]
  fn test_build_quiz_unknown_area_is_empty() {
    let bank = civil_bank(10);
    let quiz = build_quiz(&bank, "Direito Espacial", "practice", 10);
    assert_eq!(quiz.size, 0);
    assert!(quiz.items.is_empty());
    assert!(quiz.is_finished());
  }

  #[test]
  fn test_build_quiz_trims_area_and_passes_mode_through() {
    let bank = civil_bank(10);
    let quiz = build_quiz(&bank, "  Direito Civil ", "certification-drill", 3);
    assert_eq!(quiz.area, "Direito Civil");
    assert_eq!(quiz.mode, "certification-drill");
    assert_eq!(quiz.size, 3);
  }

  #[test]
  fn test_sampling_is_uniform() {
    // Each of the 10 questions should appear in a 5-item session about
    // half the time. 2000 trials put the expected count at 1000 with a
    // standard deviation around 22, so 900..1100 is a generous band.
    let bank = civil_bank(10);
    let mut seen: HashMap<u32, u32> = HashMap::new();
    let trials = 2000;
    for _ in 0..trials {
      let quiz = build_quiz(&bank, "Direito Civil", "practice", 5);
      for id in quiz.items {
        *seen.entry(id).or_insert(0) += 1;
      }
    }
    for id in 1..=10 {
      let count = *seen.get(&id).unwrap_or(&0);
      assert!(
        (900..=1100).contains(&count),
        "question {} sampled {} times out of {}",
        id,
        count,
        trials
      );
    }
  }

  #[test]
  fn test_sampling_order_is_uniform() {
    // With a full-pool draw the first slot should be near-uniform across
    // all 5 questions: expected 400 of 2000, sd ~18.
    let bank = civil_bank(5);
    let mut first: HashMap<u32, u32> = HashMap::new();
    for _ in 0..2000 {
      let quiz = build_quiz(&bank, "Direito Civil", "practice", 5);
      *first.entry(quiz.items[0]).or_insert(0) += 1;
    }
    for id in 1..=5 {
      let count = *first.get(&id).unwrap_or(&0);
      assert!(
        (300..=500).contains(&count),
        "question {} led {} sessions",
        id,
        count
      );
    }
  }

  #[test]
  fn test_record_answer_correct_and_wrong() {
    let bank = civil_bank(4);
    let mut quiz = build_quiz(&bank, "Direito Civil", "practice", 4);

    for turn in 0..4 {
      let id = quiz.current_question_id().unwrap();
      let correct = bank.find_by_id(id).unwrap().answer as i32;
      // Alternate right and wrong answers
      let chosen = if turn % 2 == 0 { correct } else { correct + 1 };
      let feedback = record_answer(&bank, &mut quiz, chosen).unwrap().unwrap();
      assert_eq!(feedback.question_id, id);
      assert_eq!(feedback.was_correct, turn % 2 == 0);

      assert_eq!(quiz.position, turn + 1);
      assert_eq!(quiz.answered.len(), quiz.position);
      assert!(quiz.score <= quiz.position);
    }

    assert!(quiz.is_finished());
    assert_eq!(quiz.score, 2);
  }

  #[test]
  fn test_record_answer_sentinel_is_always_wrong() {
    let bank = civil_bank(5);
    let mut quiz = build_quiz(&bank, "Direito Civil", "practice", 5);
    while !quiz.is_finished() {
      let feedback = record_answer(&bank, &mut quiz, -1).unwrap().unwrap();
      assert!(!feedback.was_correct);
    }
    assert_eq!(quiz.score, 0);
    assert!(quiz.answered.iter().all(|a| a.chosen == -1 && !a.was_correct));
  }

  #[test]
  fn test_record_answer_terminal_is_noop() {
    let bank = civil_bank(2);
    let mut quiz = build_quiz(&bank, "Direito Civil", "practice", 2);
    record_answer(&bank, &mut quiz, 0).unwrap();
    record_answer(&bank, &mut quiz, 0).unwrap();

    let before = quiz.clone();
    assert_eq!(record_answer(&bank, &mut quiz, 0), Ok(None));
    assert_eq!(quiz, before);
  }

  #[test]
  fn test_record_answer_missing_question_is_corrupt() {
    let bank = civil_bank(2);
    let mut quiz = build_quiz(&bank, "Direito Civil", "practice", 2);
    quiz.items[0] = 999;

    let err = record_answer(&bank, &mut quiz, 0).unwrap_err();
    assert_eq!(err, QuizError::CorruptSession(999));
    // The failed transition must not advance the session
    assert_eq!(quiz.position, 0);
    assert!(quiz.answered.is_empty());
  }

  #[test]
  fn test_feedback_carries_explanation() {
    let bank = civil_bank(1);
    let mut quiz = build_quiz(&bank, "Direito Civil", "practice", 1);
    let feedback = record_answer(&bank, &mut quiz, -1).unwrap().unwrap();
    assert_eq!(feedback.explanation, "explanation 1");
  }
}
