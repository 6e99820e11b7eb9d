//! Line-oriented terminal I/O and the y/N submission prompt.

use async_trait::async_trait;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};
use tokio::sync::Mutex;
use tracing::warn;

use crate::domain::interview::Process;
use crate::ports::SubmissionConfirmer;

/// A line reader and a writer shared by the command loop and the
/// confirmation prompt.
pub struct Console<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

/// Console over the process's stdin and stdout.
pub fn stdio() -> Console<BufReader<Stdin>, Stdout> {
    Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    /// Reads one line without its terminator. Returns `None` at end of input.
    pub async fn read_line(&self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.lock().await.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub async fn write(&self, text: &str) -> io::Result<()> {
        let mut out = self.output.lock().await;
        out.write_all(text.as_bytes()).await?;
        out.flush().await
    }

    pub async fn writeln(&self, text: &str) -> io::Result<()> {
        self.write(&format!("{text}\n")).await
    }

    pub fn into_parts(self) -> (R, W) {
        (self.input.into_inner(), self.output.into_inner())
    }
}

#[async_trait]
impl<R, W> SubmissionConfirmer for Console<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn confirm(&self, process: &Process) -> bool {
        let prompt = format!("Submit \"{}\" now? [y/N] ", process.name);
        let answer = match self.write(&prompt).await {
            Ok(()) => self.read_line().await,
            Err(e) => Err(e),
        };
        match answer {
            Ok(Some(line)) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                warn!(error = %e, "confirmation prompt failed");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ProcessId;

    fn console(input: &'static str) -> Console<&'static [u8], Vec<u8>> {
        Console::new(input.as_bytes(), Vec::new())
    }

    fn process() -> Process {
        Process::new(ProcessId::new("p1").unwrap(), "Order Flow")
    }

    #[tokio::test]
    async fn read_line_strips_terminators() {
        let c = console("first\r\nsecond\n");
        assert_eq!(c.read_line().await.unwrap().as_deref(), Some("first"));
        assert_eq!(c.read_line().await.unwrap().as_deref(), Some("second"));
        assert_eq!(c.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn confirm_accepts_yes_only() {
        assert!(console("y\n").confirm(&process()).await);
        assert!(console(" YES \n").confirm(&process()).await);
        assert!(!console("\n").confirm(&process()).await);
        assert!(!console("nope\n").confirm(&process()).await);
        assert!(!console("").confirm(&process()).await);
    }

    #[tokio::test]
    async fn confirm_prompts_with_process_name() {
        let c = console("n\n");
        c.confirm(&process()).await;
        let (_, out) = c.into_parts();
        assert_eq!(String::from_utf8(out).unwrap(), "Submit \"Order Flow\" now? [y/N] ");
    }
}
