//! HTTP Ontology Compiler - `OntologyCompiler` over `/compile` and `/examples`.

use async_trait::async_trait;

use super::BackendClient;
use crate::domain::interview::{CompileReport, InterviewState};
use crate::ports::{ExampleCatalog, OntologyCompiler, ServiceError, ServiceOperation};

/// Remote ontology compiler.
#[derive(Debug, Clone)]
pub struct HttpOntologyCompiler {
    client: BackendClient,
}

impl HttpOntologyCompiler {
    /// Creates a compiler using the given backend client.
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OntologyCompiler for HttpOntologyCompiler {
    async fn compile(&self, state: &InterviewState) -> Result<CompileReport, ServiceError> {
        let op = ServiceOperation::Compile;
        let url = self.client.endpoint(&["compile"]);

        let response = self
            .client
            .send(op, self.client.http().post(url).json(state))
            .await?;
        let report: CompileReport = BackendClient::read_json(op, response).await?;

        tracing::debug!(
            ok = report.ok,
            missing_step = report.missing_step.as_deref().unwrap_or("-"),
            hints = report.hints.len(),
            "ontology compiled"
        );
        Ok(report)
    }

    async fn examples(&self) -> Result<ExampleCatalog, ServiceError> {
        let op = ServiceOperation::LoadExamples;
        let url = self.client.endpoint(&["examples"]);

        let response = self.client.send(op, self.client.http().get(url)).await?;
        let examples: ExampleCatalog = BackendClient::read_json(op, response).await?;

        tracing::debug!(count = examples.len(), "examples loaded");
        Ok(examples)
    }
}
