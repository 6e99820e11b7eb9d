//! Errors shared by the remote collaborator ports.

use std::fmt;

/// The remote call that failed, used to label error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceOperation {
    ListProcesses,
    CreateProcess,
    SaveAnswers,
    SubmitInterview,
    Compile,
    LoadExamples,
}

impl fmt::Display for ServiceOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceOperation::ListProcesses => "Loading processes",
            ServiceOperation::CreateProcess => "Creating process",
            ServiceOperation::SaveAnswers => "Saving answers",
            ServiceOperation::SubmitInterview => "Submitting interview",
            ServiceOperation::Compile => "Compiling ontology",
            ServiceOperation::LoadExamples => "Loading examples",
        };
        f.write_str(s)
    }
}

/// Failure of a call to the process store or the ontology compiler.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// The service answered with a non-success status.
    #[error("{operation} failed ({status}){}", body_suffix(.body))]
    Status {
        operation: ServiceOperation,
        status: u16,
        body: String,
    },

    /// The request never got a response (DNS, refused connection, timeout...).
    #[error("{operation} failed: {message}")]
    Transport {
        operation: ServiceOperation,
        message: String,
    },

    /// The response could not be decoded.
    #[error("{operation} failed: invalid response: {message}")]
    Parse {
        operation: ServiceOperation,
        message: String,
    },
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

impl ServiceError {
    /// Creates a non-success status error.
    pub fn status(operation: ServiceOperation, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            operation,
            status,
            body: body.into(),
        }
    }

    /// Creates a transport error.
    pub fn transport(operation: ServiceOperation, message: impl Into<String>) -> Self {
        Self::Transport {
            operation,
            message: message.into(),
        }
    }

    /// Creates a parse error.
    pub fn parse(operation: ServiceOperation, message: impl Into<String>) -> Self {
        Self::Parse {
            operation,
            message: message.into(),
        }
    }

    /// Returns the failed operation.
    pub fn operation(&self) -> ServiceOperation {
        match self {
            Self::Status { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Parse { operation, .. } => *operation,
        }
    }

    /// Returns the HTTP status for status errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_includes_code_and_body() {
        let err = ServiceError::status(ServiceOperation::SaveAnswers, 500, "database down");
        assert_eq!(err.to_string(), "Saving answers failed (500): database down");
    }

    #[test]
    fn status_error_omits_blank_body() {
        let err = ServiceError::status(ServiceOperation::ListProcesses, 404, "  ");
        assert_eq!(err.to_string(), "Loading processes failed (404)");
    }

    #[test]
    fn transport_error_wraps_message() {
        let err = ServiceError::transport(ServiceOperation::SubmitInterview, "connection refused");
        assert_eq!(err.to_string(), "Submitting interview failed: connection refused");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.operation(), ServiceOperation::SubmitInterview);
    }
}
