//! Line commands understood by the terminal front end.

use thiserror::Error;

/// How `select` names a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessSelector {
    /// 1-based position in the process list.
    Position(usize),
    Id(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    New(String),
    Select(ProcessSelector),
    /// 1-based step number.
    Step(usize),
    Next,
    Prev,
    Type(String),
    Save,
    Submit,
    Show,
    Reload,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("step must be a number between 1 and {max}, got '{given}'")]
    InvalidStep { given: String, max: usize },
}

pub const HELP: &str = "\
Commands:
  list             show processes
  new <name>       create a process and select it
  select <n|id>    select a process by position or id
  step <n>         jump to step n
  next / prev      move between steps
  type <text>      replace the draft (bare text works too; use `type`
                   for an answer that is a single command word)
  save             save the draft and move on
  submit           submit a complete interview
  show             redraw the screen
  reload           reload processes from the store
  help             this text
  quit             leave";

impl Command {
    /// Parses one input line. Blank lines yield `None`.
    ///
    /// Commands without arguments must stand alone on the line; anything else
    /// that does not start with `new`, `select`, `step` or `type` is taken as
    /// draft text, so "Save invoice" is an answer and not a save.
    pub fn parse(line: &str, step_count: usize) -> Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let keyword = word.to_ascii_lowercase();
        let bare = rest.is_empty();
        let command = match keyword.as_str() {
            "list" | "ls" if bare => Command::List,
            "new" => Command::New(rest.to_string()),
            "select" | "sel" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("select <n|id>"));
                }
                match rest.parse::<usize>() {
                    Ok(n) if n > 0 => Command::Select(ProcessSelector::Position(n)),
                    _ => Command::Select(ProcessSelector::Id(rest.to_string())),
                }
            }
            "step" => match rest.parse::<usize>() {
                Ok(n) if (1..=step_count).contains(&n) => Command::Step(n),
                _ if rest.is_empty() => return Err(CommandError::Usage("step <n>")),
                _ => {
                    return Err(CommandError::InvalidStep {
                        given: rest.to_string(),
                        max: step_count,
                    })
                }
            },
            "next" | "n" if bare => Command::Next,
            "prev" | "p" if bare => Command::Prev,
            "type" => Command::Type(rest.to_string()),
            "save" if bare => Command::Save,
            "submit" if bare => Command::Submit,
            "show" if bare => Command::Show,
            "reload" if bare => Command::Reload,
            "help" | "?" if bare => Command::Help,
            "quit" | "exit" | "q" if bare => Command::Quit,
            _ => Command::Type(line.to_string()),
        };
        Ok(Some(command))
    }
}
