//! Adapters - Implementations of port interfaces.
//!
//! - `http` - Process store and ontology compiler over the backend API
//! - `memory` - In-process store and rule-based compiler for offline use
//! - `console` - Terminal commands, rendering and confirmation

pub mod console;
pub mod http;
pub mod memory;

pub use http::{BackendClient, BackendClientConfig, HttpOntologyCompiler, HttpProcessStore};
pub use memory::{InMemoryProcessStore, RuleBasedCompiler};
