//! Compiled ontology - Display-ready output of the ontology compiler.
//!
//! The compiler turns partial answers into one node per concept plus a list
//! of clarification hints. The client only renders it; it never feeds back
//! into the answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::StepRegistry;
use crate::domain::foundation::StepKey;

/// One concept produced by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub label: String,
    pub step: String,
}

impl CompiledNode {
    /// Returns the interview step this node was compiled from, if known.
    pub fn step_key(&self) -> Option<StepKey> {
        self.step.parse().ok()
    }

    /// Returns the wizard index to jump to when this node is picked.
    pub fn step_index(&self) -> Option<usize> {
        self.step_key().map(StepRegistry::index_of)
    }
}

/// A value in the compiled map: a node, or anything else the compiler emits
/// (e.g. the still-empty `capabilities` list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompiledEntry {
    Node(CompiledNode),
    Other(serde_json::Value),
}

/// Response of `POST /compile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompileReport {
    pub ok: bool,
    #[serde(default)]
    pub missing_step: Option<String>,
    #[serde(default)]
    pub compiled: BTreeMap<String, CompiledEntry>,
    #[serde(default)]
    pub hints: Vec<String>,
}

impl CompileReport {
    /// Returns the compiled nodes ordered by interview step.
    ///
    /// Nodes whose step is outside the vocabulary are placed last, by key.
    pub fn nodes(&self) -> Vec<&CompiledNode> {
        let mut nodes: Vec<&CompiledNode> = self
            .compiled
            .values()
            .filter_map(|entry| match entry {
                CompiledEntry::Node(node) => Some(node),
                CompiledEntry::Other(_) => None,
            })
            .collect();
        nodes.sort_by_key(|node| (node.step_index().unwrap_or(usize::MAX), node.step.clone()));
        nodes
    }

    /// Returns the missing step parsed into the vocabulary, if any.
    pub fn missing_step_key(&self) -> Option<StepKey> {
        self.missing_step.as_deref().and_then(|s| s.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CompileReport {
        serde_json::from_value(json!({
            "ok": false,
            "missing_step": "event",
            "compiled": {
                "event": { "id": "event_1", "type": "Event", "label": "", "step": "event" },
                "actor": { "id": "actor_1", "type": "Actor", "label": "Customer", "step": "actor" },
                "capabilities": [],
                "signal_candidates": []
            },
            "hints": ["Command: use a verb + object"]
        }))
        .unwrap()
    }

    #[test]
    fn parses_nodes_and_tolerates_other_values() {
        let report = sample();
        assert_eq!(report.compiled.len(), 4);
        assert_eq!(report.nodes().len(), 2);
        assert!(matches!(
            report.compiled.get("capabilities"),
            Some(CompiledEntry::Other(_))
        ));
    }

    #[test]
    fn nodes_are_ordered_by_step() {
        let report = sample();
        let steps: Vec<&str> = report.nodes().iter().map(|n| n.step.as_str()).collect();
        assert_eq!(steps, vec!["actor", "event"]);
    }

    #[test]
    fn node_maps_back_to_wizard_index() {
        let report = sample();
        let event = report.nodes()[1];
        assert_eq!(event.step_index(), Some(4));
    }

    #[test]
    fn missing_step_parses_into_vocabulary() {
        assert_eq!(sample().missing_step_key(), Some(StepKey::Event));
    }

    #[test]
    fn defaults_apply_for_sparse_payload() {
        let report: CompileReport = serde_json::from_value(json!({ "ok": true })).unwrap();
        assert!(report.nodes().is_empty());
        assert!(report.hints.is_empty());
        assert_eq!(report.missing_step, None);
    }
}
