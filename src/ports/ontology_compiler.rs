//! Ontology Compiler Port - Stateless transform from answers to a summary.

use async_trait::async_trait;
use std::collections::BTreeMap;

use super::ServiceError;
use crate::domain::interview::{CompileReport, InterviewState};

/// Example answer per step key, used as input placeholders.
pub type ExampleCatalog = BTreeMap<String, String>;

/// Port for the ontology compiler service.
#[async_trait]
pub trait OntologyCompiler: Send + Sync {
    /// Compiles partial answers (`POST /compile`).
    async fn compile(&self, state: &InterviewState) -> Result<CompileReport, ServiceError>;

    /// Fetches example answers keyed by step (`GET /examples`).
    async fn examples(&self) -> Result<ExampleCatalog, ServiceError>;
}
