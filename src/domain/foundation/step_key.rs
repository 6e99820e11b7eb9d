//! StepKey enum naming the 9 AVA interview questions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// The 9 AVA interview questions, oriented around objects and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKey {
    Actor,
    Command,
    BusinessObject,
    ObjectAttributes,
    Event,
    Reaction,
    Systems,
    Visibility,
    Fragility,
}

impl StepKey {
    /// Returns all step keys in canonical interview order.
    pub fn all() -> &'static [StepKey] {
        &[
            StepKey::Actor,
            StepKey::Command,
            StepKey::BusinessObject,
            StepKey::ObjectAttributes,
            StepKey::Event,
            StepKey::Reaction,
            StepKey::Systems,
            StepKey::Visibility,
            StepKey::Fragility,
        ]
    }

    /// Returns the wire name used in answer maps and compiled nodes.
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKey::Actor => "actor",
            StepKey::Command => "command",
            StepKey::BusinessObject => "business_object",
            StepKey::ObjectAttributes => "object_attributes",
            StepKey::Event => "event",
            StepKey::Reaction => "reaction",
            StepKey::Systems => "systems",
            StepKey::Visibility => "visibility",
            StepKey::Fragility => "fragility",
        }
    }

    /// Returns the concept name used as the compiled node type.
    pub fn concept(&self) -> &'static str {
        match self {
            StepKey::Actor => "Actor",
            StepKey::Command => "Command",
            StepKey::BusinessObject => "BusinessObject",
            StepKey::ObjectAttributes => "ObjectAttributes",
            StepKey::Event => "Event",
            StepKey::Reaction => "Reaction",
            StepKey::Systems => "Systems",
            StepKey::Visibility => "Visibility",
            StepKey::Fragility => "Fragility",
        }
    }

    /// Returns the 0-based index of this step in the canonical order.
    pub fn order_index(&self) -> usize {
        Self::all()
            .iter()
            .position(|k| k == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for StepKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StepKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|k| k.as_str() == s)
            .copied()
            .ok_or_else(|| ValidationError::invalid_format("step_key", format!("unknown step '{s}'")))
    }
}
