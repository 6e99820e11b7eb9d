//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the interview wizard and the outside world. Adapters implement these ports.
//!
//! - `ProcessStore` - CRUD over processes and interview submission
//! - `OntologyCompiler` - Compiled summary and example placeholders
//! - `SubmissionConfirmer` - User confirmation before submitting

mod ontology_compiler;
mod process_store;
mod service_error;
mod submission_confirmer;

pub use ontology_compiler::{ExampleCatalog, OntologyCompiler};
pub use process_store::ProcessStore;
pub use service_error::{ServiceError, ServiceOperation};
pub use submission_confirmer::SubmissionConfirmer;
