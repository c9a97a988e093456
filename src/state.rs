//! Application state shared across handlers.

use std::sync::Arc;

use crate::bank::QuestionBank;

/// Application state passed to all handlers. The bank is built once at
/// startup and never mutated afterwards, so it is shared without locking.
#[derive(Clone)]
pub struct AppState {
    pub bank: Arc<QuestionBank>,
}

impl AppState {
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank: Arc::new(bank),
        }
    }
}
