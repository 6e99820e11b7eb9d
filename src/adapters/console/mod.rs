//! Console adapter - Terminal front end for the wizard.
//!
//! - `command` - Parsing of input lines
//! - `render` - Text rendering of the view
//! - `terminal` - Line I/O and the y/N confirmation prompt
//! - `session` - The command loop

mod command;
mod render;
mod session;
mod terminal;

pub use command::{Command, CommandError, ProcessSelector, HELP};
pub use render::Screen;
pub use session::run;
pub use terminal::{stdio, Console};
