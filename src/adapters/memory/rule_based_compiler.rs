//! Rule-based ontology compiler running in-process.
//!
//! Mirrors what the remote compiler does for the live summary:
//! one node per step, the first unanswered step, and a couple of
//! beginner-friendly phrasing hints. Used for offline mode and tests.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::domain::foundation::StepKey;
use crate::domain::interview::{
    CompileReport, CompiledEntry, CompiledNode, CompletionStatus, InterviewState, StepRegistry,
};
use crate::ports::{ExampleCatalog, OntologyCompiler, ServiceError};

static EXAMPLES: Lazy<ExampleCatalog> = Lazy::new(|| {
    [
        (StepKey::Actor, "e.g. Order manager"),
        (StepKey::Command, "e.g. Create order"),
        (StepKey::BusinessObject, "e.g. Order"),
        (StepKey::ObjectAttributes, "e.g. status, amount, currency"),
        (StepKey::Event, "e.g. Order created"),
        (StepKey::Reaction, "e.g. Stock allocation"),
        (StepKey::Systems, "e.g. ERP SAP / CRM Salesforce / WMS Manhattan"),
        (StepKey::Visibility, "e.g. Logistics - real time"),
        (StepKey::Fragility, "e.g. Delivery depends on order created"),
    ]
    .into_iter()
    .map(|(k, v)| (k.as_str().to_string(), v.to_string()))
    .collect()
});

const COMMAND_HINT: &str = "Command: use a verb + object (e.g. 'Create order').";
const EVENT_HINT: &str = "Event: describe an observable fact (e.g. 'Order created').";

/// Compiler that applies the rules locally.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedCompiler;

impl RuleBasedCompiler {
    pub fn new() -> Self {
        Self
    }

    /// Phrasing hints for the answers given so far.
    pub fn hints(state: &InterviewState) -> Vec<String> {
        let mut hints = Vec::new();
        if is_single_word(state.get(StepKey::Command)) {
            hints.push(COMMAND_HINT.to_string());
        }
        if is_single_word(state.get(StepKey::Event)) {
            hints.push(EVENT_HINT.to_string());
        }
        hints
    }

    /// Builds the report synchronously.
    pub fn compile_state(state: &InterviewState) -> CompileReport {
        let missing = CompletionStatus::first_missing(state);
        let hints = Self::hints(state);

        let mut compiled: BTreeMap<String, CompiledEntry> = StepRegistry::all()
            .iter()
            .map(|step| {
                (
                    step.key.as_str().to_string(),
                    CompiledEntry::Node(node(step.key, state.answer(step.key))),
                )
            })
            .collect();
        for reserved in ["capabilities", "signal_candidates"] {
            compiled.insert(
                reserved.to_string(),
                CompiledEntry::Other(serde_json::Value::Array(Vec::new())),
            );
        }

        CompileReport {
            ok: missing.is_none() && hints.is_empty(),
            missing_step: missing.map(|k| k.as_str().to_string()),
            compiled,
            hints,
        }
    }
}

fn is_single_word(answer: Option<&str>) -> bool {
    match answer {
        Some(v) if !v.is_empty() => !v.trim().contains(' '),
        _ => false,
    }
}

fn node(key: StepKey, label: &str) -> CompiledNode {
    let suffix = Uuid::new_v4().simple().to_string();
    CompiledNode {
        id: format!("{}_{}", key.concept().to_lowercase(), &suffix[..8]),
        node_type: key.concept().to_string(),
        label: label.to_string(),
        step: key.as_str().to_string(),
    }
}

#[async_trait]
impl OntologyCompiler for RuleBasedCompiler {
    async fn compile(&self, state: &InterviewState) -> Result<CompileReport, ServiceError> {
        Ok(Self::compile_state(state))
    }

    async fn examples(&self) -> Result<ExampleCatalog, ServiceError> {
        Ok(EXAMPLES.clone())
    }
}
