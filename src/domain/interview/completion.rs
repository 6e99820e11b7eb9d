//! CompletionStatus value object - How much of an interview is answered.
//!
//! Always derived from the current answers; never stored, so it cannot go
//! stale after a save.

use serde::Serialize;

use super::{InterviewState, StepRegistry};
use crate::domain::foundation::StepKey;

/// A snapshot of interview completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompletionStatus {
    /// Steps with a non-blank answer.
    pub filled: usize,
    /// Number of steps in the interview.
    pub total: usize,
    /// True when every step is answered.
    pub done: bool,
}

impl CompletionStatus {
    /// Computes completion for a set of answers.
    pub fn of(state: &InterviewState) -> Self {
        let total = StepRegistry::len();
        let filled = StepRegistry::all()
            .iter()
            .filter(|step| state.is_filled(step.key))
            .count();
        Self {
            filled,
            total,
            done: filled == total,
        }
    }

    /// Completion shown when no process is selected.
    pub fn empty() -> Self {
        Self {
            filled: 0,
            total: StepRegistry::len(),
            done: false,
        }
    }

    /// Number of steps still unanswered.
    pub fn remaining(&self) -> usize {
        self.total - self.filled
    }

    /// Returns the first unanswered step in interview order.
    pub fn first_missing(state: &InterviewState) -> Option<StepKey> {
        StepRegistry::all()
            .iter()
            .map(|step| step.key)
            .find(|key| !state.is_filled(*key))
    }
}
