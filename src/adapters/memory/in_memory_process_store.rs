//! In-Memory Process Store
//!
//! Keeps processes in memory. Used by the offline mode of the binary and by
//! tests.
//!
//! # Features
//!
//! - Store-assigned UUID ids
//! - Call counting per operation for verification
//! - One-shot error injection per operation
//! - Simulated latency, to exercise overlapping operations

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::domain::foundation::{ProcessId, ProcessName};
use crate::domain::interview::{InterviewState, Process};
use crate::ports::{ProcessStore, ServiceError, ServiceOperation};

/// In-memory process store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProcessStore {
    processes: Arc<RwLock<Vec<Process>>>,
    submitted: Arc<RwLock<Vec<ProcessId>>>,
    calls: Arc<Mutex<HashMap<ServiceOperation, usize>>>,
    failures: Arc<Mutex<HashMap<ServiceOperation, VecDeque<ServiceError>>>>,
    next_ids: Arc<Mutex<VecDeque<ProcessId>>>,
    delay: Duration,
}

impl InMemoryProcessStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with processes.
    pub fn with_processes(processes: Vec<Process>) -> Self {
        Self {
            processes: Arc::new(RwLock::new(processes)),
            ..Self::default()
        }
    }

    /// Adds simulated latency to every call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Makes the next `create` return this id instead of a random one.
    pub async fn assign_next_id(&self, id: ProcessId) {
        self.next_ids.lock().await.push_back(id);
    }

    /// Makes the next call of `operation` fail with `error`.
    pub async fn fail_next(&self, operation: ServiceOperation, error: ServiceError) {
        self.failures
            .lock()
            .await
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    /// Number of times `operation` was invoked (including failed calls).
    pub async fn call_count(&self, operation: ServiceOperation) -> usize {
        self.calls.lock().await.get(&operation).copied().unwrap_or(0)
    }

    /// Current copy of a stored process.
    pub async fn get(&self, id: &ProcessId) -> Option<Process> {
        self.processes
            .read()
            .await
            .iter()
            .find(|p| &p.id == id)
            .cloned()
    }

    /// Ids submitted so far, in order.
    pub async fn submitted(&self) -> Vec<ProcessId> {
        self.submitted.read().await.clone()
    }

    async fn begin(&self, operation: ServiceOperation) -> Result<(), ServiceError> {
        *self.calls.lock().await.entry(operation).or_insert(0) += 1;
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let injected = self
            .failures
            .lock()
            .await
            .get_mut(&operation)
            .and_then(VecDeque::pop_front);
        match injected {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn allocate_id(&self) -> Result<ProcessId, ServiceError> {
        if let Some(id) = self.next_ids.lock().await.pop_front() {
            return Ok(id);
        }
        ProcessId::new(Uuid::new_v4().to_string())
            .map_err(|e| ServiceError::parse(ServiceOperation::CreateProcess, e.to_string()))
    }
}

fn not_found(operation: ServiceOperation, id: &ProcessId) -> ServiceError {
    ServiceError::status(operation, 404, format!("process '{}' not found", id))
}

#[async_trait]
impl ProcessStore for InMemoryProcessStore {
    async fn list(&self) -> Result<Vec<Process>, ServiceError> {
        self.begin(ServiceOperation::ListProcesses).await?;
        Ok(self.processes.read().await.clone())
    }

    async fn create(&self, name: &ProcessName) -> Result<Process, ServiceError> {
        self.begin(ServiceOperation::CreateProcess).await?;
        let process = Process::new(self.allocate_id().await?, name.as_str());
        self.processes.write().await.push(process.clone());
        Ok(process)
    }

    async fn update_state(&self, id: &ProcessId, state: &InterviewState) -> Result<(), ServiceError> {
        let op = ServiceOperation::SaveAnswers;
        self.begin(op).await?;
        let mut processes = self.processes.write().await;
        let process = processes
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| not_found(op, id))?;
        process.state = state.clone();
        Ok(())
    }

    async fn submit(&self, id: &ProcessId) -> Result<(), ServiceError> {
        let op = ServiceOperation::SubmitInterview;
        self.begin(op).await?;
        if self.get(id).await.is_none() {
            return Err(not_found(op, id));
        }
        self.submitted.write().await.push(id.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::StepKey;

    fn name(s: &str) -> ProcessName {
        ProcessName::new(s).unwrap()
    }

    #[tokio::test]
    async fn create_assigns_id_and_empty_state() {
        let store = InMemoryProcessStore::new();
        let p = store.create(&name("Order Flow")).await.unwrap();

        assert!(!p.id.as_str().is_empty());
        assert_eq!(p.name, "Order Flow");
        assert!(p.state.is_empty());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn assigned_id_is_used_once() {
        let store = InMemoryProcessStore::new();
        store.assign_next_id(ProcessId::new("p1").unwrap()).await;

        let first = store.create(&name("a")).await.unwrap();
        let second = store.create(&name("b")).await.unwrap();

        assert_eq!(first.id.as_str(), "p1");
        assert_ne!(second.id.as_str(), "p1");
    }

    #[tokio::test]
    async fn update_state_replaces_answers() {
        let store = InMemoryProcessStore::new();
        let p = store.create(&name("a")).await.unwrap();
        let state = InterviewState::new().with_answer(StepKey::Actor, "Customer");

        store.update_state(&p.id, &state).await.unwrap();

        assert_eq!(store.get(&p.id).await.unwrap().state, state);
    }

    #[tokio::test]
    async fn update_unknown_process_is_404() {
        let store = InMemoryProcessStore::new();
        let id = ProcessId::new("missing").unwrap();
        let err = store.update_state(&id, &InterviewState::new()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn injected_failure_applies_once() {
        let store = InMemoryProcessStore::new();
        store
            .fail_next(
                ServiceOperation::ListProcesses,
                ServiceError::transport(ServiceOperation::ListProcesses, "offline"),
            )
            .await;

        assert!(store.list().await.is_err());
        assert!(store.list().await.is_ok());
        assert_eq!(store.call_count(ServiceOperation::ListProcesses).await, 2);
    }

    #[tokio::test]
    async fn submit_records_process() {
        let store = InMemoryProcessStore::new();
        let p = store.create(&name("a")).await.unwrap();
        store.submit(&p.id).await.unwrap();
        assert_eq!(store.submitted().await, vec![p.id]);
    }
}
