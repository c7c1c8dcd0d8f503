//! Run outcomes that end the process with a non-zero status

use super::SetupError;

/// Creates an aborted run error
pub fn aborted(component: impl Into<String>) -> SetupError {
    SetupError::Aborted {
        component: component.into(),
    }
}

/// Creates a components failed error
pub fn components_failed(names: Vec<String>) -> SetupError {
    SetupError::ComponentsFailed { names }
}

/// Creates a tools failed error
pub fn tools_failed(names: Vec<String>) -> SetupError {
    SetupError::ToolsFailed { names }
}
