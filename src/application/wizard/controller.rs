//! WizardController - Drives the guided interview.
//!
//! Holds the client-side cache of processes, the current selection and step,
//! and the draft being typed. Every operation takes `&self`: the state mutex
//! is never held across a network call, so UI events and network completions
//! interleave the way they would on an event loop.
//!
//! # Draft resync
//!
//! The draft is re-derived from the stored answer only when the selected
//! process or the active step changes. A save or a reload that leaves both
//! unchanged does not touch what the user is typing.
//!
//! # Stale loads
//!
//! Each successful create or save bumps a generation counter. A process list
//! that was requested under an older generation is discarded, so a slow
//! initial load cannot erase a newer local change. Preview reports are
//! ordered the same way by request ticket.

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::busy::BusyFlag;
use super::view::{ProcessSummary, WizardView};
use super::WizardError;
use crate::domain::foundation::{ProcessId, ProcessName, StateMachine, StepKey};
use crate::domain::interview::{
    derive_draft, CompileReport, CompletionStatus, InterviewPhase, Process, StepDescriptor,
    StepRegistry,
};
use crate::ports::{ExampleCatalog, OntologyCompiler, ProcessStore, SubmissionConfirmer};

const DEFAULT_PLACEHOLDER: &str = "Type your answer...";
const SUBMITTED_NOTICE: &str = "Interview submitted successfully.";

/// Result of `load_processes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The cache was replaced with this many processes.
    Applied(usize),
    /// A create or save completed while loading; the result was dropped.
    Stale,
}

/// Result of `save_answer`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    NoProcessSelected,
    Saved {
        step: StepKey,
        value: String,
        advanced_to: Option<usize>,
    },
}

/// Result of `submit_interview`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    NoProcessSelected,
    /// The user declined the confirmation.
    Cancelled,
    Submitted(ProcessId),
}

#[derive(Debug, Default)]
struct WizardState {
    processes: Vec<Process>,
    selected: Option<ProcessId>,
    step_index: usize,
    draft: String,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
    preview: Option<CompileReport>,
    examples: Option<ExampleCatalog>,
    generation: u64,
    /// Last preview request issued, and the newest one whose report is shown.
    preview_issued: u64,
    preview_shown: u64,
}

impl WizardState {
    fn current(&self) -> Option<&Process> {
        let id = self.selected.as_ref()?;
        self.processes.iter().find(|p| &p.id == id)
    }

    /// Moves to (selection, step) and re-derives the draft.
    fn focus(&mut self, selected: Option<ProcessId>, step_index: usize) {
        if self.selected != selected {
            self.preview = None;
        }
        self.selected = selected;
        self.step_index = StepRegistry::clamp_index(step_index);
        self.draft = derive_draft(self.current(), self.step_index);
    }

    fn fail(&mut self, err: WizardError) -> WizardError {
        warn!(error = %err, "wizard operation failed");
        self.error = Some(err.to_string());
        err
    }

    fn clear_messages(&mut self) {
        self.error = None;
        self.notice = None;
    }
}

/// Controller for the interview wizard.
pub struct WizardController {
    store: Arc<dyn ProcessStore>,
    compiler: Arc<dyn OntologyCompiler>,
    busy: BusyFlag,
    state: Mutex<WizardState>,
}

impl WizardController {
    pub fn new(store: Arc<dyn ProcessStore>, compiler: Arc<dyn OntologyCompiler>) -> Self {
        Self {
            store,
            compiler,
            busy: BusyFlag::default(),
            state: Mutex::new(WizardState::default()),
        }
    }

    /// Returns true while a create, save or submit is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.is_set()
    }

    /// Replaces the cache with the store's process list.
    ///
    /// Selection is left untouched. On failure the previous cache is kept and
    /// the error is reported even if the load went stale meanwhile.
    pub async fn load_processes(&self) -> Result<LoadOutcome, WizardError> {
        let issued_at = {
            let mut s = self.state.lock().await;
            s.loading = true;
            s.generation
        };

        let result = self.store.list().await;

        let mut s = self.state.lock().await;
        s.loading = false;
        match result {
            Err(e) => Err(s.fail(e.into())),
            Ok(_) if s.generation != issued_at => {
                debug!(issued_at, current = s.generation, "discarding stale process list");
                Ok(LoadOutcome::Stale)
            }
            Ok(processes) => {
                let count = processes.len();
                s.processes = processes;
                s.error = None;
                debug!(count, "process cache replaced");
                Ok(LoadOutcome::Applied(count))
            }
        }
    }

    /// Creates a process and selects it.
    ///
    /// A blank name is ignored: no request is made and `Ok(None)` is returned.
    pub async fn create_process(&self, name: &str) -> Result<Option<Process>, WizardError> {
        let Ok(name) = ProcessName::new(name) else {
            debug!("ignoring create with blank name");
            return Ok(None);
        };
        let _busy = self.busy.acquire()?;
        self.state.lock().await.clear_messages();

        let result = self.store.create(&name).await;

        let mut s = self.state.lock().await;
        match result {
            Ok(process) => {
                info!(process_id = %process.id, name = %process.name, "process created");
                s.processes.push(process.clone());
                s.generation += 1;
                s.focus(Some(process.id.clone()), 0);
                Ok(Some(process))
            }
            Err(e) => Err(s.fail(e.into())),
        }
    }

    /// Selects a process and returns to the first step.
    ///
    /// An id missing from the cache leaves the wizard without a current process.
    pub async fn select_process(&self, id: &ProcessId) {
        let mut s = self.state.lock().await;
        s.focus(Some(id.clone()), 0);
        debug!(process_id = %id, found = s.current().is_some(), "process selected");
    }

    /// Jumps to a step (clamped). Returns false when no process is selected.
    pub async fn go_to_step(&self, index: usize) -> bool {
        let mut s = self.state.lock().await;
        if s.current().is_none() {
            return false;
        }
        let selected = s.selected.clone();
        s.focus(selected, index);
        true
    }

    /// Moves one step forward. Returns false if nothing moved.
    pub async fn next_step(&self) -> bool {
        self.step_by(1).await
    }

    /// Moves one step back. Returns false if nothing moved.
    pub async fn previous_step(&self) -> bool {
        self.step_by(-1).await
    }

    async fn step_by(&self, delta: isize) -> bool {
        if self.is_busy() {
            return false;
        }
        let mut s = self.state.lock().await;
        if s.current().is_none() {
            return false;
        }
        let target = match s.step_index.checked_add_signed(delta) {
            Some(i) if i <= StepRegistry::last_index() => i,
            _ => return false,
        };
        let selected = s.selected.clone();
        s.focus(selected, target);
        true
    }

    /// Replaces the draft text. Ignored when no process is selected.
    pub async fn set_draft(&self, text: impl Into<String>) {
        let mut s = self.state.lock().await;
        if s.current().is_some() {
            s.draft = text.into();
        }
    }

    /// Persists the trimmed draft as the active step's answer.
    ///
    /// On success the cache takes the new answers without re-reading the store,
    /// and the wizard advances unless it is on the last step.
    pub async fn save_answer(&self) -> Result<SaveOutcome, WizardError> {
        let _busy = self.busy.acquire()?;

        let (id, step_index, key, value, updated) = {
            let mut s = self.state.lock().await;
            let Some(process) = s.current() else {
                return Ok(SaveOutcome::NoProcessSelected);
            };
            let step = StepRegistry::at(s.step_index);
            let value = s.draft.trim().to_string();
            let updated = process.state.with_answer(step.key, value.clone());
            let id = process.id.clone();
            let step_index = s.step_index;
            s.clear_messages();
            (id, step_index, step.key, value, updated)
        };

        let result = self.store.update_state(&id, &updated).await;

        let mut s = self.state.lock().await;
        if let Err(e) = result {
            return Err(s.fail(e.into()));
        }

        if let Some(process) = s.processes.iter_mut().find(|p| p.id == id) {
            process.state = updated;
        }
        s.generation += 1;
        info!(process_id = %id, step = %key, "answer saved");

        let still_focused = s.selected.as_ref() == Some(&id) && s.step_index == step_index;
        let advanced_to = if still_focused && !StepRegistry::is_last(step_index) {
            s.focus(Some(id), step_index + 1);
            Some(step_index + 1)
        } else {
            None
        };

        Ok(SaveOutcome::Saved {
            step: key,
            value,
            advanced_to,
        })
    }

    /// Submits the selected interview once it is complete and confirmed.
    ///
    /// Completeness is checked here; an incomplete interview never reaches
    /// the store.
    pub async fn submit_interview(
        &self,
        confirmer: &dyn SubmissionConfirmer,
    ) -> Result<SubmitOutcome, WizardError> {
        let _busy = self.busy.acquire()?;

        let process = {
            let mut s = self.state.lock().await;
            let Some(process) = s.current().cloned() else {
                return Ok(SubmitOutcome::NoProcessSelected);
            };
            let completion = process.completion();
            let phase = InterviewPhase::derive(Some(completion));
            if phase.transition_to(InterviewPhase::Submitted).is_err() {
                return Err(s.fail(WizardError::Incomplete {
                    remaining: completion.remaining(),
                }));
            }
            process
        };

        if !confirmer.confirm(&process).await {
            debug!(process_id = %process.id, "submission cancelled by user");
            return Ok(SubmitOutcome::Cancelled);
        }

        self.state.lock().await.clear_messages();
        let result = self.store.submit(&process.id).await;

        let mut s = self.state.lock().await;
        match result {
            Ok(()) => {
                info!(process_id = %process.id, "interview submitted");
                s.notice = Some(SUBMITTED_NOTICE.to_string());
                Ok(SubmitOutcome::Submitted(process.id))
            }
            Err(e) => Err(s.fail(e.into())),
        }
    }

    /// Recompiles the selected process and keeps the report for display.
    ///
    /// A report that arrives after the selection changed, or after a report
    /// from a later request, is returned but not kept.
    pub async fn refresh_preview(&self) -> Result<Option<CompileReport>, WizardError> {
        let (id, state, ticket) = {
            let mut s = self.state.lock().await;
            let Some((id, state)) = s.current().map(|p| (p.id.clone(), p.state.clone())) else {
                s.preview = None;
                return Ok(None);
            };
            s.preview_issued += 1;
            (id, state, s.preview_issued)
        };

        let result = self.compiler.compile(&state).await;

        let mut s = self.state.lock().await;
        match result {
            Ok(report) => {
                if s.selected.as_ref() != Some(&id) {
                    debug!(process_id = %id, "dropping preview for deselected process");
                } else if ticket < s.preview_shown {
                    debug!(process_id = %id, ticket, "dropping out-of-order preview");
                } else {
                    s.preview = Some(report.clone());
                    s.preview_shown = ticket;
                }
                Ok(Some(report))
            }
            Err(e) => Err(s.fail(e.into())),
        }
    }

    /// Fetches example answers once. Returns true if this call loaded them.
    pub async fn load_examples(&self) -> Result<bool, WizardError> {
        if self.state.lock().await.examples.is_some() {
            return Ok(false);
        }

        let result = self.compiler.examples().await;

        let mut s = self.state.lock().await;
        match result {
            Ok(examples) => {
                debug!(count = examples.len(), "examples cached");
                s.examples = Some(examples);
                Ok(true)
            }
            Err(e) => Err(s.fail(e.into())),
        }
    }

    /// Placeholder for a step: its own, else the fetched example, else a default.
    pub async fn placeholder_for(&self, step: &StepDescriptor) -> String {
        let s = self.state.lock().await;
        placeholder(step, s.examples.as_ref())
    }

    /// Copies out the current view model.
    pub async fn snapshot(&self) -> WizardView {
        let busy = self.is_busy();
        let s = self.state.lock().await;
        let current = s.current().cloned();
        let completion = current
            .as_ref()
            .map(Process::completion)
            .unwrap_or_else(CompletionStatus::empty);
        let step = StepRegistry::at(s.step_index);

        WizardView {
            processes: s
                .processes
                .iter()
                .map(|p| ProcessSummary {
                    id: p.id.clone(),
                    name: p.name.clone(),
                    completion: p.completion(),
                    selected: s.selected.as_ref() == Some(&p.id),
                })
                .collect(),
            phase: InterviewPhase::derive(current.as_ref().map(Process::completion)),
            current,
            step_index: s.step_index,
            step,
            placeholder: placeholder(step, s.examples.as_ref()),
            example: s
                .examples
                .as_ref()
                .and_then(|e| e.get(step.key.as_str()))
                .cloned(),
            draft: s.draft.clone(),
            busy,
            loading: s.loading,
            error: s.error.clone(),
            notice: s.notice.clone(),
            completion,
            preview: s.preview.clone(),
        }
    }
}

fn placeholder(step: &StepDescriptor, examples: Option<&ExampleCatalog>) -> String {
    step.placeholder
        .map(str::to_string)
        .or_else(|| examples.and_then(|e| e.get(step.key.as_str())).cloned())
        .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProcessStore, RuleBasedCompiler};
    use crate::domain::interview::InterviewState;
    use crate::ports::{ServiceError, ServiceOperation};

    fn pid(s: &str) -> ProcessId {
        ProcessId::new(s).unwrap()
    }

    fn controller_with(processes: Vec<Process>) -> (WizardController, InMemoryProcessStore) {
        let store = InMemoryProcessStore::with_processes(processes);
        let controller =
            WizardController::new(Arc::new(store.clone()), Arc::new(RuleBasedCompiler::new()));
        (controller, store)
    }

    fn process_a() -> Process {
        let mut p = Process::new(pid("a"), "A");
        p.state = InterviewState::new().with_answer(StepKey::Actor, "x");
        p
    }

    #[tokio::test]
    async fn draft_resyncs_on_selection_and_step_change() {
        let (c, _) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();

        c.select_process(&pid("a")).await;
        assert_eq!(c.snapshot().await.draft, "x");

        assert!(c.go_to_step(3).await);
        assert_eq!(c.snapshot().await.draft, "");

        assert!(c.go_to_step(0).await);
        assert_eq!(c.snapshot().await.draft, "x");
    }

    #[tokio::test]
    async fn go_to_step_without_selection_is_noop() {
        let (c, _) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();

        assert!(!c.go_to_step(4).await);
        assert_eq!(c.snapshot().await.step_index, 0);
    }

    #[tokio::test]
    async fn go_to_step_clamps_out_of_range_index() {
        let (c, _) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();
        c.select_process(&pid("a")).await;

        c.go_to_step(99).await;
        assert_eq!(c.snapshot().await.step_index, StepRegistry::last_index());
    }

    #[tokio::test]
    async fn selecting_unknown_id_shows_empty_view() {
        let (c, _) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();

        c.select_process(&pid("nope")).await;
        let view = c.snapshot().await;
        assert!(view.current.is_none());
        assert_eq!(view.phase, InterviewPhase::NoProcessSelected);
        assert_eq!(view.draft, "");
    }

    #[tokio::test]
    async fn reload_does_not_overwrite_typing() {
        let (c, _) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();
        c.select_process(&pid("a")).await;
        c.set_draft("half typed").await;

        c.load_processes().await.unwrap();
        assert_eq!(c.snapshot().await.draft, "half typed");
    }

    #[tokio::test]
    async fn previous_and_next_are_clamped() {
        let (c, _) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();
        c.select_process(&pid("a")).await;

        assert!(!c.previous_step().await);
        assert!(c.next_step().await);
        assert_eq!(c.snapshot().await.step_index, 1);

        c.go_to_step(StepRegistry::last_index()).await;
        assert!(!c.next_step().await);
        assert!(c.previous_step().await);
        assert_eq!(c.snapshot().await.step_index, StepRegistry::last_index() - 1);
    }

    #[tokio::test]
    async fn save_without_selection_is_noop() {
        let (c, store) = controller_with(vec![]);
        assert_eq!(c.save_answer().await.unwrap(), SaveOutcome::NoProcessSelected);
        assert_eq!(store.call_count(ServiceOperation::SaveAnswers).await, 0);
        assert!(!c.is_busy());
    }

    #[tokio::test]
    async fn failed_save_keeps_cache_and_step() {
        let (c, store) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();
        c.select_process(&pid("a")).await;
        c.set_draft("changed").await;
        store
            .fail_next(
                ServiceOperation::SaveAnswers,
                ServiceError::status(ServiceOperation::SaveAnswers, 500, "boom"),
            )
            .await;

        let err = c.save_answer().await.unwrap_err();

        let view = c.snapshot().await;
        assert!(matches!(err, WizardError::Service(_)));
        assert_eq!(view.error.as_deref(), Some("Saving answers failed (500): boom"));
        assert_eq!(view.current.unwrap().state.answer(StepKey::Actor), "x");
        assert_eq!(view.step_index, 0);
        assert_eq!(view.draft, "changed");
        assert!(!view.busy);
    }

    #[tokio::test]
    async fn saving_empty_draft_clears_the_step() {
        let (c, store) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();
        c.select_process(&pid("a")).await;
        c.set_draft("   ").await;

        c.save_answer().await.unwrap();

        let stored = store.get(&pid("a")).await.unwrap();
        assert_eq!(stored.state.get(StepKey::Actor), Some(""));
        assert_eq!(c.snapshot().await.completion.filled, 0);
    }

    #[tokio::test]
    async fn incomplete_submission_sets_error_without_network_call() {
        let (c, store) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();
        c.select_process(&pid("a")).await;

        let confirm = |_: &Process| true;
        let err = c.submit_interview(&confirm).await.unwrap_err();

        assert_eq!(err, WizardError::Incomplete { remaining: 8 });
        assert_eq!(store.call_count(ServiceOperation::SubmitInterview).await, 0);
        assert!(c.snapshot().await.error.unwrap().starts_with("Interview incomplete"));
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_cache() {
        let (c, store) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();
        store
            .fail_next(
                ServiceOperation::ListProcesses,
                ServiceError::transport(ServiceOperation::ListProcesses, "connection refused"),
            )
            .await;

        assert!(c.load_processes().await.is_err());
        let view = c.snapshot().await;
        assert_eq!(view.processes.len(), 1);
        assert_eq!(
            view.error.as_deref(),
            Some("Loading processes failed: connection refused")
        );
    }

    #[tokio::test]
    async fn placeholder_prefers_step_text() {
        let (c, _) = controller_with(vec![]);
        c.load_examples().await.unwrap();
        let step = StepRegistry::descriptor(StepKey::Event);
        assert_eq!(c.placeholder_for(step).await, step.placeholder.unwrap());
    }

    #[test]
    fn placeholder_falls_back_to_example_then_default() {
        let bare = StepDescriptor {
            placeholder: None,
            ..*StepRegistry::descriptor(StepKey::Event)
        };
        let mut examples = ExampleCatalog::new();
        examples.insert("event".to_string(), "e.g. Order created".to_string());

        assert_eq!(placeholder(&bare, Some(&examples)), "e.g. Order created");
        assert_eq!(placeholder(&bare, None), DEFAULT_PLACEHOLDER);
    }

    #[tokio::test]
    async fn examples_are_fetched_once() {
        let (c, _) = controller_with(vec![]);
        assert!(c.load_examples().await.unwrap());
        assert!(!c.load_examples().await.unwrap());
    }

    /// Compiler that answers slowly while the actor step is still empty.
    struct SlowWhileEmptyCompiler;

    #[async_trait::async_trait]
    impl OntologyCompiler for SlowWhileEmptyCompiler {
        async fn compile(
            &self,
            state: &InterviewState,
        ) -> Result<CompileReport, ServiceError> {
            if !state.is_filled(StepKey::Actor) {
                tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            }
            Ok(RuleBasedCompiler::compile_state(state))
        }

        async fn examples(&self) -> Result<ExampleCatalog, ServiceError> {
            Ok(ExampleCatalog::new())
        }
    }

    #[tokio::test]
    async fn late_preview_does_not_replace_newer_one() {
        let store = InMemoryProcessStore::with_processes(vec![Process::new(pid("a"), "A")]);
        let c = WizardController::new(Arc::new(store), Arc::new(SlowWhileEmptyCompiler));
        c.load_processes().await.unwrap();
        c.select_process(&pid("a")).await;

        let (old, new) = tokio::join!(c.refresh_preview(), async {
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            c.set_draft("Customer").await;
            c.save_answer().await.unwrap();
            c.refresh_preview().await
        });

        assert_eq!(old.unwrap().unwrap().missing_step.as_deref(), Some("actor"));
        assert_eq!(new.unwrap().unwrap().missing_step.as_deref(), Some("command"));
        let shown = c.snapshot().await.preview.unwrap();
        assert_eq!(shown.missing_step.as_deref(), Some("command"));
    }

    #[tokio::test]
    async fn preview_follows_selection() {
        let (c, _) = controller_with(vec![process_a()]);
        c.load_processes().await.unwrap();
        assert_eq!(c.refresh_preview().await.unwrap(), None);

        c.select_process(&pid("a")).await;
        let report = c.refresh_preview().await.unwrap().unwrap();
        assert_eq!(report.missing_step.as_deref(), Some("command"));
        assert!(c.snapshot().await.preview.is_some());

        c.select_process(&pid("other")).await;
        assert!(c.snapshot().await.preview.is_none());
    }
}
