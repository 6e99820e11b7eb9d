//! HTTP Process Store - `ProcessStore` over the backend REST API.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use super::BackendClient;
use crate::domain::foundation::{ProcessId, ProcessName};
use crate::domain::interview::{InterviewState, Process};
use crate::ports::{ProcessStore, ServiceError, ServiceOperation};

#[derive(Debug, Serialize)]
struct CreateProcessBody<'a> {
    name: &'a str,
}

/// Process store backed by `/process` and `/interview/submit`.
#[derive(Debug, Clone)]
pub struct HttpProcessStore {
    client: BackendClient,
}

impl HttpProcessStore {
    /// Creates a store using the given backend client.
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

/// Decodes a `GET /process` payload.
///
/// Anything other than a JSON array (an error object, `null`...) is read as an
/// empty list.
pub fn parse_process_list(payload: Value) -> Result<Vec<Process>, ServiceError> {
    match payload {
        Value::Array(_) => serde_json::from_value(payload)
            .map_err(|e| ServiceError::parse(ServiceOperation::ListProcesses, e.to_string())),
        other => {
            tracing::warn!(kind = value_kind(&other), "process list payload is not an array");
            Ok(Vec::new())
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl ProcessStore for HttpProcessStore {
    async fn list(&self) -> Result<Vec<Process>, ServiceError> {
        let op = ServiceOperation::ListProcesses;
        let url = self.client.endpoint(&["process"]);
        tracing::debug!(%url, "listing processes");

        let response = self.client.send(op, self.client.http().get(url)).await?;
        let payload: Value = BackendClient::read_json(op, response).await?;
        let processes = parse_process_list(payload)?;

        tracing::debug!(count = processes.len(), "processes loaded");
        Ok(processes)
    }

    async fn create(&self, name: &ProcessName) -> Result<Process, ServiceError> {
        let op = ServiceOperation::CreateProcess;
        let url = self.client.endpoint(&["process"]);
        let body = CreateProcessBody {
            name: name.as_str(),
        };

        let response = self
            .client
            .send(op, self.client.http().post(url).json(&body))
            .await?;
        let process: Process = BackendClient::read_json(op, response).await?;

        tracing::info!(process_id = %process.id, name = %process.name, "process created");
        Ok(process)
    }

    async fn update_state(&self, id: &ProcessId, state: &InterviewState) -> Result<(), ServiceError> {
        let op = ServiceOperation::SaveAnswers;
        let url = self.client.endpoint(&["process", id.as_str()]);

        self.client
            .send(op, self.client.http().put(url).json(state))
            .await?;

        tracing::debug!(process_id = %id, entries = state.len(), "answers saved");
        Ok(())
    }

    async fn submit(&self, id: &ProcessId) -> Result<(), ServiceError> {
        let op = ServiceOperation::SubmitInterview;
        let url = self.client.endpoint(&["interview", "submit"]);
        let request = self
            .client
            .http()
            .post(url)
            .query(&[("process_id", id.as_str())]);

        self.client.send(op, request).await?;

        tracing::info!(process_id = %id, "interview submitted");
        Ok(())
    }
}
