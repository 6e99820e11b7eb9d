//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the interview domain.

mod errors;
mod ids;
mod state_machine;
mod step_key;

pub use errors::ValidationError;
pub use ids::{ProcessId, ProcessName};
pub use state_machine::StateMachine;
pub use step_key::StepKey;
