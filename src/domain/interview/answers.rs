//! InterviewState - The answers captured so far for one process.
//!
//! Serialized as a flat JSON object mapping step keys to answer text, which is
//! exactly the body sent to `PUT /process/{id}`. Keys the client does not
//! recognise are kept as-is so that a save never drops data written by another
//! client; `null` values coming from the store are treated as unanswered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::StepKey;

/// Returns true if an answer counts as filled (non-empty after trimming).
pub fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

/// Mapping from step key to answer text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Option<String>>",
    into = "BTreeMap<String, String>"
)]
pub struct InterviewState {
    answers: BTreeMap<String, String>,
}

impl InterviewState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored answer for a step, if any.
    pub fn get(&self, key: StepKey) -> Option<&str> {
        self.answers.get(key.as_str()).map(String::as_str)
    }

    /// Returns the stored answer for a step, or "" when unset.
    pub fn answer(&self, key: StepKey) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Returns true if the step has a non-blank answer.
    pub fn is_filled(&self, key: StepKey) -> bool {
        is_filled(self.get(key))
    }

    /// Returns a copy with one step set and every other entry unchanged.
    ///
    /// An empty value is stored as-is, which clears a previously filled step.
    pub fn with_answer(&self, key: StepKey, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.answers.insert(key.as_str().to_string(), value.into());
        next
    }

    /// Looks up an entry by raw key, including keys outside the step vocabulary.
    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }

    /// Number of stored entries (filled or not).
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates over raw entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<BTreeMap<String, Option<String>>> for InterviewState {
    fn from(raw: BTreeMap<String, Option<String>>) -> Self {
        Self {
            answers: raw
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k, v)))
                .collect(),
        }
    }
}

impl From<InterviewState> for BTreeMap<String, String> {
    fn from(state: InterviewState) -> Self {
        state.answers
    }
}

impl FromIterator<(StepKey, String)> for InterviewState {
    fn from_iter<I: IntoIterator<Item = (StepKey, String)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(k, v)| (k.as_str().to_string(), v))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn is_filled_ignores_whitespace() {
        assert!(!is_filled(None));
        assert!(!is_filled(Some("")));
        assert!(!is_filled(Some("  \n\t")));
        assert!(is_filled(Some(" x ")));
    }

    #[test]
    fn with_answer_is_a_shallow_merge() {
        let state = InterviewState::new()
            .with_answer(StepKey::Actor, "Customer")
            .with_answer(StepKey::Command, "Create order");
        let next = state.with_answer(StepKey::Actor, "Clerk");

        assert_eq!(next.answer(StepKey::Actor), "Clerk");
        assert_eq!(next.answer(StepKey::Command), "Create order");
        assert_eq!(state.answer(StepKey::Actor), "Customer");
    }

    #[test]
    fn empty_answer_clears_a_filled_step() {
        let state = InterviewState::new().with_answer(StepKey::Event, "Order created");
        let cleared = state.with_answer(StepKey::Event, "");
        assert!(!cleared.is_filled(StepKey::Event));
        assert_eq!(cleared.get(StepKey::Event), Some(""));
    }

    #[test]
    fn deserializes_flat_object_and_drops_nulls() {
        let state: InterviewState = serde_json::from_value(json!({
            "actor": "Customer",
            "event": null,
            "dependency": "legacy answer"
        }))
        .unwrap();

        assert_eq!(state.answer(StepKey::Actor), "Customer");
        assert_eq!(state.get(StepKey::Event), None);
        assert_eq!(state.get_raw("dependency"), Some("legacy answer"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let state = InterviewState::new().with_answer(StepKey::BusinessObject, "Order");
        assert_eq!(
            serde_json::to_value(&state).unwrap(),
            json!({ "business_object": "Order" })
        );
    }

    #[test]
    fn unknown_keys_survive_a_merge() {
        let state: InterviewState =
            serde_json::from_value(json!({ "dependency": "x" })).unwrap();
        let next = state.with_answer(StepKey::Actor, "y");
        assert_eq!(
            serde_json::to_value(&next).unwrap(),
            json!({ "actor": "y", "dependency": "x" })
        );
    }
}
