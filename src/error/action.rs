//! Errors raised while locating or starting a component action

use super::SetupError;

/// Creates an action not found error
pub fn not_found(component: impl Into<String>, path: impl Into<String>) -> SetupError {
    SetupError::ActionNotFound {
        component: component.into(),
        path: path.into(),
    }
}

/// Creates an action spawn failed error
pub fn spawn_failed(
    component: impl Into<String>,
    command: impl Into<String>,
    reason: impl Into<String>,
) -> SetupError {
    SetupError::ActionSpawnFailed {
        component: component.into(),
        command: command.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SetupError {
    SetupError::IoError {
        message: message.into(),
    }
}
