//! Owned view model handed to renderers.

use crate::domain::foundation::ProcessId;
use crate::domain::interview::{
    is_filled, CompileReport, CompletionStatus, InterviewPhase, Process, StepDescriptor,
    StepRegistry,
};

/// One row of the process list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessSummary {
    pub id: ProcessId,
    pub name: String,
    pub completion: CompletionStatus,
    pub selected: bool,
}

/// One block of the captured-answers summary; picking it jumps to `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryEntry {
    pub index: usize,
    pub step: &'static StepDescriptor,
    pub value: String,
    pub done: bool,
}

/// Everything a renderer needs, copied out of the controller.
#[derive(Debug, Clone)]
pub struct WizardView {
    pub processes: Vec<ProcessSummary>,
    pub current: Option<Process>,
    pub step_index: usize,
    pub step: &'static StepDescriptor,
    pub placeholder: String,
    pub example: Option<String>,
    pub draft: String,
    pub busy: bool,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub completion: CompletionStatus,
    pub phase: InterviewPhase,
    pub preview: Option<CompileReport>,
}

impl WizardView {
    /// Returns true if the submit trigger should be enabled.
    pub fn can_submit(&self) -> bool {
        self.phase.can_submit() && !self.busy
    }

    /// Summary blocks for the selected process, in step order.
    pub fn summary(&self) -> Vec<SummaryEntry> {
        let Some(process) = &self.current else {
            return Vec::new();
        };
        StepRegistry::all()
            .iter()
            .enumerate()
            .map(|(index, step)| {
                let value = process.state.answer(step.key).to_string();
                SummaryEntry {
                    index,
                    step,
                    done: is_filled(Some(&value)),
                    value,
                }
            })
            .collect()
    }
}
