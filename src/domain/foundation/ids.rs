//! Strongly-typed identifier and name value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Opaque identifier of a process, assigned by the process store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProcessId(String);

impl ProcessId {
    /// Creates a new ProcessId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("process_id"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProcessId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProcessId> for String {
    fn from(id: ProcessId) -> Self {
        id.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User-supplied process name, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessName(String);

impl ProcessName {
    /// Creates a ProcessName from raw input, trimming surrounding whitespace.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProcessName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_id_rejects_blank() {
        assert!(ProcessId::new("").is_err());
        assert!(ProcessId::new("   ").is_err());
        assert_eq!(ProcessId::new("p1").unwrap().as_str(), "p1");
    }

    #[test]
    fn process_id_serializes_transparently() {
        let id = ProcessId::new("p1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p1\"");
    }

    #[test]
    fn process_id_deserialization_rejects_blank() {
        assert!(serde_json::from_str::<ProcessId>("\"\"").is_err());
        assert_eq!(
            serde_json::from_str::<ProcessId>("\"p1\"").unwrap().as_str(),
            "p1"
        );
    }

    #[test]
    fn process_name_is_trimmed() {
        let name = ProcessName::new("  Order Flow \n").unwrap();
        assert_eq!(name.as_str(), "Order Flow");
    }

    #[test]
    fn process_name_rejects_whitespace_only() {
        let err = ProcessName::new(" \t ").unwrap_err();
        assert_eq!(err.to_string(), "Field 'name' cannot be empty");
    }
}
