//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, step keys, errors, state machine)
//! - `interview` - Steps, answers, completion and the compiled summary

pub mod foundation;
pub mod interview;
