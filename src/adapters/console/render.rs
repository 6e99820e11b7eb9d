//! Plain-text rendering of the wizard view.

use std::fmt;

use crate::application::wizard::WizardView;
use crate::domain::interview::{InterviewPhase, StepRegistry};

/// Displays a `WizardView` as a full screen of text.
pub struct Screen<'a>(pub &'a WizardView);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;

        writeln!(f, "Processes:")?;
        if view.processes.is_empty() {
            let hint = if view.loading { "loading..." } else { "none yet, use `new <name>`" };
            writeln!(f, "  ({hint})")?;
        }
        for (i, p) in view.processes.iter().enumerate() {
            let marker = if p.selected { '*' } else { ' ' };
            writeln!(
                f,
                "{marker} {}. {} [{}/{}]  ({})",
                i + 1,
                p.name,
                p.completion.filled,
                p.completion.total,
                p.id
            )?;
        }

        if let Some(process) = &view.current {
            writeln!(f)?;
            writeln!(f, "== {} ==", process.name)?;
            writeln!(
                f,
                "Step {}/{} - {}",
                view.step_index + 1,
                StepRegistry::len(),
                view.step.title
            )?;
            writeln!(f, "{}", view.step.prompt)?;
            if let Some(helper) = view.step.helper {
                writeln!(f, "  {helper}")?;
            }
            if view.draft.is_empty() {
                writeln!(f, "Draft: ({})", view.placeholder)?;
            } else {
                writeln!(f, "Draft: {}", view.draft)?;
            }

            writeln!(f)?;
            writeln!(f, "Summary:")?;
            for entry in view.summary() {
                let status = if entry.done { "OK" } else { "--" };
                let value = if entry.done { entry.value.as_str() } else { "" };
                writeln!(f, "  [{status}] {}. {}: {value}", entry.index + 1, entry.step.title)?;
            }

            match view.phase {
                InterviewPhase::Complete => writeln!(
                    f,
                    "{}/{} answered. Ready to submit.",
                    view.completion.filled, view.completion.total
                )?,
                _ => writeln!(
                    f,
                    "{}/{} answered. Answer every step to submit ({} left).",
                    view.completion.filled,
                    view.completion.total,
                    view.completion.remaining()
                )?,
            }

            if let Some(report) = &view.preview {
                writeln!(f)?;
                writeln!(f, "Compiled ({}):", if report.ok { "ok" } else { "incomplete" })?;
                for node in report.nodes().into_iter().filter(|n| !n.label.is_empty()) {
                    writeln!(f, "  {} {}: {}", node.node_type, node.id, node.label)?;
                }
                if let Some(missing) = &report.missing_step {
                    writeln!(f, "  missing: {missing}")?;
                }
                for hint in &report.hints {
                    writeln!(f, "  hint: {hint}")?;
                }
            }
        } else if !view.processes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Select a process to start the interview.")?;
        }

        if view.busy {
            writeln!(f, "(working...)")?;
        }
        if let Some(error) = &view.error {
            writeln!(f, "Error: {error}")?;
        }
        if let Some(notice) = &view.notice {
            writeln!(f, "{notice}")?;
        }
        Ok(())
    }
}
