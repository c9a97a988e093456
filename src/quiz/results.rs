//! Result aggregation and review-of-mistakes sessions.

use serde::{Deserialize, Serialize};

use super::QuizError;
use crate::bank::QuestionBank;
use crate::config;
use crate::domain::QuizSession;

/// One answered question with its record fields resolved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDetail {
  pub question_id: u32,
  pub area: String,
  pub prompt: String,
  pub options: Vec<String>,
  pub chosen: i32,
  pub correct: i32,
  pub was_correct: bool,
  pub explanation: String,
  pub difficulty: Option<String>,
}

/// Score counts for one area, in first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaScore {
  pub area: String,
  pub total: usize,
  pub correct: usize,
}

/// Derived summary of a terminal session. Not stored; recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultSummary {
  pub details: Vec<QuestionDetail>,
  pub per_area: Vec<AreaScore>,
  pub wrong_ids: Vec<u32>,
}

/// Fold a session's answer log into per-question details and a per-area
/// breakdown. An answer whose question has vanished from the bank is
/// skipped in the details but still contributes its id to `wrong_ids`,
/// so review remains possible after a store/session desync.
pub fn build_result(bank: &QuestionBank, session: &QuizSession) -> ResultSummary {
  let mut details = Vec::with_capacity(session.answered.len());
  for answer in &session.answered {
    let Some(record) = bank.find_by_id(answer.question_id) else {
      tracing::warn!(
        "result for {:?} skips unknown question {}",
        session.area,
        answer.question_id
      );
      continue;
    };
    details.push(QuestionDetail {
      question_id: record.id,
      area: record.area.as_str().to_string(),
      prompt: record.prompt.clone(),
      options: record.options.clone(),
      chosen: answer.chosen,
      correct: answer.correct,
      was_correct: answer.was_correct,
      explanation: record.explanation.clone(),
      difficulty: record.difficulty.clone(),
    });
  }

  let mut per_area: Vec<AreaScore> = Vec::new();
  for detail in &details {
    let idx = match per_area.iter().position(|a| a.area == detail.area) {
      Some(idx) => idx,
      None => {
        per_area.push(AreaScore {
          area: detail.area.clone(),
          total: 0,
          correct: 0,
        });
        per_area.len() - 1
      }
    };
    per_area[idx].total += 1;
    if detail.was_correct {
      per_area[idx].correct += 1;
    }
  }

  let wrong_ids = session
    .answered
    .iter()
    .filter(|a| !a.was_correct)
    .map(|a| a.question_id)
    .collect();

  ResultSummary {
    details,
    per_area,
    wrong_ids,
  }
}

/// Build a review session from a prior result's wrong ids: first
/// `REVIEW_CAP` entries in their original order, no re-randomization.
/// Review is always practice mode.
pub fn build_review(wrong_ids: &[u32]) -> Result<QuizSession, QuizError> {
  if wrong_ids.is_empty() {
    return Err(QuizError::NothingToReview);
  }

  let items: Vec<u32> = wrong_ids.iter().take(config::REVIEW_CAP).copied().collect();
  Ok(QuizSession {
    area: config::REVIEW_AREA_LABEL.to_string(),
    mode: config::MODE_PRACTICE.to_string(),
    size: items.len(),
    items,
    position: 0,
    score: 0,
    answered: Vec::new(),
  })
}
