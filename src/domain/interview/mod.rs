//! Interview module - The guided business-process interview.
//!
//! - `step` - Fixed registry of the 9 questions
//! - `answers` - Answer map of one process
//! - `process` - Process entity as held by the store
//! - `completion` - Derived completion status
//! - `compiled` - Compiler output rendered as the live summary
//! - `phase` - Interview phase state machine gating submission

mod answers;
mod compiled;
mod completion;
mod phase;
mod process;
mod step;

pub use answers::{is_filled, InterviewState};
pub use compiled::{CompileReport, CompiledEntry, CompiledNode};
pub use completion::CompletionStatus;
pub use phase::InterviewPhase;
pub use process::Process;
pub use step::{StepDescriptor, StepRegistry};

/// Returns the draft text for a step of a process.
///
/// Called whenever the selected process or the active step changes; content
/// changes alone never re-derive the draft.
pub fn derive_draft(process: Option<&Process>, step_index: usize) -> String {
    match process {
        Some(p) => p
            .state
            .answer(StepRegistry::at(step_index).key)
            .to_string(),
        None => String::new(),
    }
}
