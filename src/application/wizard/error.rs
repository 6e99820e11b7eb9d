//! Errors returned by wizard operations.

use crate::ports::ServiceError;

/// Why a wizard operation did not go through.
///
/// The formatted message is also kept as the controller's last error, except
/// for `Busy`, which the UI prevents by disabling its triggers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    /// Another create/save/submit is still in flight.
    #[error("another operation is already in progress")]
    Busy,

    /// Submission was attempted before every step was answered.
    #[error("Interview incomplete: {remaining} step(s) left. Please answer every step.")]
    Incomplete { remaining: usize },

    /// The process store or the compiler failed.
    #[error(transparent)]
    Service(#[from] ServiceError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ServiceOperation;

    #[test]
    fn incomplete_names_remaining_steps() {
        let err = WizardError::Incomplete { remaining: 3 };
        assert_eq!(
            err.to_string(),
            "Interview incomplete: 3 step(s) left. Please answer every step."
        );
    }

    #[test]
    fn service_errors_keep_their_message() {
        let err: WizardError =
            ServiceError::status(ServiceOperation::CreateProcess, 422, "name required").into();
        assert_eq!(err.to_string(), "Creating process failed (422): name required");
    }
}
