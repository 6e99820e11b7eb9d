//! In-process adapters for offline use and testing.

mod in_memory_process_store;
mod rule_based_compiler;

pub use in_memory_process_store::InMemoryProcessStore;
pub use rule_based_compiler::RuleBasedCompiler;
