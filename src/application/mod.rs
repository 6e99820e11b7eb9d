//! Application layer - Orchestrates the interview over the ports.

pub mod wizard;

pub use wizard::{
    LoadOutcome, ProcessSummary, SaveOutcome, SubmitOutcome, SummaryEntry, WizardController,
    WizardError, WizardView,
};
