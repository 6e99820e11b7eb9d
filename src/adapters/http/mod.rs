//! HTTP adapters for the interview backend.
//!
//! - `HttpProcessStore` - `/process` CRUD and interview submission
//! - `HttpOntologyCompiler` - `/compile` and `/examples`

mod client;
mod ontology_compiler;
mod process_store;

pub use client::{BackendClient, BackendClientConfig, ClientBuildError};
pub use ontology_compiler::HttpOntologyCompiler;
pub use process_store::{parse_process_list, HttpProcessStore};
