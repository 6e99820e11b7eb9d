//! Wizard module - The interview wizard controller.
//!
//! - `controller` - Navigation, editing, saving and submission
//! - `view` - Owned view model for renderers
//! - `busy` - Mutual exclusion of mutating operations
//! - `error` - Operation errors

mod busy;
mod controller;
mod error;
mod view;

pub use busy::{BusyFlag, BusyGuard};
pub use controller::{LoadOutcome, SaveOutcome, SubmitOutcome, WizardController};
pub use error::WizardError;
pub use view::{ProcessSummary, SummaryEntry, WizardView};
