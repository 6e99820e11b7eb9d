//! Interactive command loop over a `Console`.

use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::debug;

use super::command::{Command, ProcessSelector, HELP};
use super::render::Screen;
use super::terminal::Console;
use crate::application::wizard::{SaveOutcome, SubmitOutcome, WizardController, WizardError};
use crate::domain::foundation::ProcessId;
use crate::domain::interview::StepRegistry;

/// Runs commands from the console until `quit` or end of input.
///
/// Controller failures are shown through the view's error line; only console
/// I/O errors end the loop early.
pub async fn run<R, W>(controller: &WizardController, console: &Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    console.writeln("Type `help` for commands.").await?;
    render(controller, console).await?;

    while let Some(line) = console.read_line().await? {
        let command = match Command::parse(&line, StepRegistry::len()) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                console.writeln(&e.to_string()).await?;
                continue;
            }
        };

        if let Some(message) = execute(controller, console, command.clone()).await {
            console.writeln(&message).await?;
        }
        match command {
            Command::Quit => break,
            Command::Help => {}
            _ => render(controller, console).await?,
        }
    }
    Ok(())
}

/// Applies one command. Returns a line to print, if any.
async fn execute<R, W>(
    controller: &WizardController,
    console: &Console<R, W>,
    command: Command,
) -> Option<String>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    let changed = match command {
        Command::List | Command::Show | Command::Quit => false,
        Command::Help => return Some(HELP.to_string()),
        Command::Reload => outcome(controller.load_processes().await).is_some(),
        Command::New(name) => outcome(controller.create_process(&name).await)
            .flatten()
            .is_some(),
        Command::Select(selector) => {
            let id = match selector {
                ProcessSelector::Id(raw) => ProcessId::new(raw).ok(),
                ProcessSelector::Position(n) => controller
                    .snapshot()
                    .await
                    .processes
                    .get(n - 1)
                    .map(|p| p.id.clone()),
            };
            let Some(id) = id else {
                return Some("No such process.".to_string());
            };
            controller.select_process(&id).await;
            true
        }
        Command::Step(n) => {
            if !controller.go_to_step(n - 1).await {
                return Some("Select a process first.".to_string());
            }
            false
        }
        Command::Next => {
            controller.next_step().await;
            false
        }
        Command::Prev => {
            controller.previous_step().await;
            false
        }
        Command::Type(text) => {
            controller.set_draft(text).await;
            false
        }
        Command::Save => match outcome(controller.save_answer().await) {
            Some(SaveOutcome::NoProcessSelected) => {
                return Some("Select a process first.".to_string())
            }
            Some(SaveOutcome::Saved { .. }) => true,
            None => false,
        },
        Command::Submit => match outcome(controller.submit_interview(console).await) {
            Some(SubmitOutcome::NoProcessSelected) => {
                return Some("Select a process first.".to_string())
            }
            Some(SubmitOutcome::Cancelled) => return Some("Submission cancelled.".to_string()),
            Some(SubmitOutcome::Submitted(_)) | None => false,
        },
    };

    if changed {
        if let Err(e) = controller.refresh_preview().await {
            debug!(error = %e, "preview refresh failed");
        }
    }
    None
}

/// Drops the error of a controller call; the view already carries it.
fn outcome<T>(result: Result<T, WizardError>) -> Option<T> {
    result
        .map_err(|e| debug!(error = %e, "command failed"))
        .ok()
}

async fn render<R, W>(controller: &WizardController, console: &Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    let view = controller.snapshot().await;
    console.write(&format!("\n{}> ", Screen(&view))).await
}
