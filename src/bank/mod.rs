//! The in-memory question store.
//!
//! Built once at startup from seed data plus generator output, validated
//! fail-fast, and shared read-only for the lifetime of the process. No
//! mutation API is exposed past construction.

pub mod generator;
pub mod seed;

use std::collections::HashMap;

use crate::domain::{Area, QuestionRecord, AREAS};

/// A malformed bank entry, reported at construction so a bad record fails
/// the process at startup instead of surfacing mid-quiz.
#[derive(Debug, PartialEq, Eq)]
pub enum BankError {
  DuplicateId(u32),
  TooFewOptions(u32),
  AnswerOutOfRange(u32),
}

impl std::fmt::Display for BankError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::DuplicateId(id) => write!(f, "duplicate question id {}", id),
      Self::TooFewOptions(id) => {
        write!(f, "question {} has fewer than 2 options", id)
      }
      Self::AnswerOutOfRange(id) => {
        write!(f, "question {} has an answer index outside its options", id)
      }
    }
  }
}

impl std::error::Error for BankError {}

/// Immutable, process-wide question collection with an id index.
#[derive(Debug)]
pub struct QuestionBank {
  questions: Vec<QuestionRecord>,
  by_id: HashMap<u32, usize>,
}

impl QuestionBank {
  pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, BankError> {
    let mut by_id = HashMap::with_capacity(questions.len());
    for (idx, q) in questions.iter().enumerate() {
      if q.options.len() < 2 {
        return Err(BankError::TooFewOptions(q.id));
      }
      if q.answer >= q.options.len() {
        return Err(BankError::AnswerOutOfRange(q.id));
      }
      if by_id.insert(q.id, idx).is_some() {
        return Err(BankError::DuplicateId(q.id));
      }
    }
    Ok(Self { questions, by_id })
  }

  /// All records belonging to an area. The query is trimmed to tolerate
  /// upstream whitespace; stored labels are canonical by construction.
  pub fn find_by_area(&self, area: &str) -> Vec<&QuestionRecord> {
    let area = area.trim();
    self
      .questions
      .iter()
      .filter(|q| q.area.as_str() == area)
      .collect()
  }

  pub fn find_by_id(&self, id: u32) -> Option<&QuestionRecord> {
    self.by_id.get(&id).map(|&idx| &self.questions[idx])
  }

  pub fn len(&self) -> usize {
    self.questions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.questions.is_empty()
  }

  /// Per-area record counts, in start-page order.
  pub fn area_counts(&self) -> Vec<(Area, usize)> {
    AREAS
      .iter()
      .map(|&area| {
        let count = self.questions.iter().filter(|q| q.area == area).count();
        (area, count)
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(id: u32, area: Area, answer: usize, options: usize) -> QuestionRecord {
    QuestionRecord {
      id,
      area,
      prompt: format!("prompt {}", id),
      options: (0..options).map(|i| format!("option {}", i)).collect(),
      answer,
      explanation: String::new(),
      difficulty: None,
      tags: Vec::new(),
    }
  }

  #[test]
  fn test_new_accepts_valid_bank() {
    let bank = QuestionBank::new(vec![
      record(1, Area::Civil, 0, 4),
      record(2, Area::Penal, 3, 4),
    ]);
    assert!(bank.is_ok());
    assert_eq!(bank.unwrap().len(), 2);
  }

  #[test]
  fn test_new_rejects_duplicate_id() {
    let err = QuestionBank::new(vec![
      record(7, Area::Civil, 0, 4),
      record(7, Area::Penal, 0, 4),
    ])
    .unwrap_err();
    assert_eq!(err, BankError::DuplicateId(7));
  }

  #[test]
  fn test_new_rejects_answer_out_of_range() {
    let err = QuestionBank::new(vec![record(3, Area::Civil, 4, 4)]).unwrap_err();
    assert_eq!(err, BankError::AnswerOutOfRange(3));
  }

  #[test]
  fn test_new_rejects_single_option() {
    let err = QuestionBank::new(vec![record(5, Area::Civil, 0, 1)]).unwrap_err();
    assert_eq!(err, BankError::TooFewOptions(5));
  }

  #[test]
  fn test_find_by_id() {
    let bank = QuestionBank::new(vec![record(1, Area::Civil, 0, 4)]).unwrap();
    assert_eq!(bank.find_by_id(1).map(|q| q.id), Some(1));
    assert!(bank.find_by_id(99).is_none());
  }

  #[test]
  fn test_find_by_area_trims_query() {
    let bank = QuestionBank::new(vec![
      record(1, Area::Civil, 0, 4),
      record(2, Area::Civil, 0, 4),
      record(3, Area::Penal, 0, 4),
    ])
    .unwrap();

    assert_eq!(bank.find_by_area("Direito Civil").len(), 2);
    assert_eq!(bank.find_by_area("  Direito Civil  ").len(), 2);
    assert_eq!(bank.find_by_area("Direito Penal").len(), 1);
    assert!(bank.find_by_area("unknown").is_empty());
  }

  #[test]
  fn test_area_counts_cover_all_areas() {
    let bank = QuestionBank::new(vec![
      record(1, Area::Civil, 0, 4),
      record(2, Area::Etica, 0, 4),
    ])
    .unwrap();

    let counts = bank.area_counts();
    assert_eq!(counts.len(), AREAS.len());
    let total: usize = counts.iter().map(|(_, c)| c).sum();
    assert_eq!(total, bank.len());
    assert_eq!(
      counts.iter().find(|(a, _)| *a == Area::Civil).unwrap().1,
      1
    );
    assert_eq!(
      counts.iter().find(|(a, _)| *a == Area::Penal).unwrap().1,
      0
    );
  }

}
