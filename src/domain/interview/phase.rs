//! InterviewPhase - Where the wizard stands for the current selection.
//!
//! ```text
//! NoProcessSelected ──select──► Answering ◄──save──► Complete ──submit──► Submitted
//! ```
//!
//! `Submitted` is reached only through the submission endpoint and has no
//! client-side exits.

use serde::Serialize;

use super::CompletionStatus;
use crate::domain::foundation::StateMachine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewPhase {
    NoProcessSelected,
    Answering,
    Complete,
    Submitted,
}

impl InterviewPhase {
    /// Derives the phase of a selection from its completion.
    pub fn derive(completion: Option<CompletionStatus>) -> Self {
        match completion {
            None => InterviewPhase::NoProcessSelected,
            Some(c) if c.done => InterviewPhase::Complete,
            Some(_) => InterviewPhase::Answering,
        }
    }

    /// Returns true if submission may be attempted from this phase.
    pub fn can_submit(&self) -> bool {
        self.can_transition_to(&InterviewPhase::Submitted)
    }
}

impl StateMachine for InterviewPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use InterviewPhase::*;
        matches!(
            (self, target),
            (NoProcessSelected, Answering)
                | (NoProcessSelected, Complete)
                | (Answering, Complete)
                | (Answering, NoProcessSelected)
                | (Complete, Answering)
                | (Complete, NoProcessSelected)
                | (Complete, Submitted)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use InterviewPhase::*;
        match self {
            NoProcessSelected => vec![Answering, Complete],
            Answering => vec![Complete, NoProcessSelected],
            Complete => vec![Answering, NoProcessSelected, Submitted],
            Submitted => vec![],
        }
    }
}
