//! One-line status messages for command feedback.

use std::fmt;

use crate::error::{ErrorKind, WorkplanError};

/// Success or failure line shown after a command.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
    pub kind: Option<ErrorKind>,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            kind: None,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            kind: None,
        }
    }
}

impl From<&WorkplanError> for OperationStatus {
    fn from(error: &WorkplanError) -> Self {
        Self {
            message: error.to_string(),
            success: false,
            kind: Some(error.kind()),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.success {
            return writeln!(f, "Success: {}", self.message);
        }
        match self.kind {
            Some(kind) => writeln!(f, "Error ({}): {}", kind.as_str(), self.message),
            None => writeln!(f, "Error: {}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Plan saved");
        assert_eq!(format!("{success}"), "Success: Plan saved\n");

        let failure = OperationStatus::failure("Plan not saved");
        assert!(format!("{failure}").starts_with("Error: "));
    }

    #[test]
    fn test_failure_from_error_names_kind() {
        let status = OperationStatus::from(&WorkplanError::NoActivePlan);
        assert!(!status.success);
        assert!(format!("{status}").starts_with("Error (no_active_plan): No implementation plan found."));
    }
}
