//! Process Store Port - CRUD over interview processes.
//!
//! The store owns processes and assigns their ids. The client holds a cached
//! copy and pushes the full answer map on every save.

use async_trait::async_trait;

use super::ServiceError;
use crate::domain::foundation::{ProcessId, ProcessName};
use crate::domain::interview::{InterviewState, Process};

/// Port for the remote process store.
#[async_trait]
pub trait ProcessStore: Send + Sync {
    /// Lists every process (`GET /process`).
    ///
    /// A payload that is not a list is reported as an empty list.
    async fn list(&self) -> Result<Vec<Process>, ServiceError>;

    /// Creates a process with no answers (`POST /process`).
    async fn create(&self, name: &ProcessName) -> Result<Process, ServiceError>;

    /// Replaces the answers of a process (`PUT /process/{id}`).
    async fn update_state(&self, id: &ProcessId, state: &InterviewState) -> Result<(), ServiceError>;

    /// Submits a completed interview (`POST /interview/submit?process_id={id}`).
    ///
    /// The store is never relied upon to check completeness.
    async fn submit(&self, id: &ProcessId) -> Result<(), ServiceError>;
}
