//! Process - One business-process interview and its answers.

use serde::{Deserialize, Serialize};

use super::{CompletionStatus, InterviewState};
use crate::domain::foundation::ProcessId;

/// A business-process interview as held by the process store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub id: ProcessId,
    pub name: String,
    #[serde(default)]
    pub state: InterviewState,
}

impl Process {
    /// Creates a process with no answers yet.
    pub fn new(id: ProcessId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            state: InterviewState::new(),
        }
    }

    /// Computes completion from the current answers.
    pub fn completion(&self) -> CompletionStatus {
        CompletionStatus::of(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_store_payload() {
        let p: Process = serde_json::from_value(json!({
            "id": "p1",
            "name": "Order Flow",
            "state": { "actor": "Customer" }
        }))
        .unwrap();
        assert_eq!(p.id.as_str(), "p1");
        assert_eq!(p.completion().filled, 1);
    }

    #[test]
    fn missing_state_defaults_to_empty() {
        let p: Process = serde_json::from_value(json!({ "id": "p1", "name": "x" })).unwrap();
        assert!(p.state.is_empty());
    }

    #[test]
    fn rejects_blank_id() {
        let result: Result<Process, _> =
            serde_json::from_value(json!({ "id": "", "name": "x", "state": {} }));
        assert!(result.is_err());
    }
}
