//! Selection and prompt errors

use super::SetupError;

/// Creates an unknown component error
pub fn unknown_component(id: impl Into<String>) -> SetupError {
    SetupError::UnknownComponent { id: id.into() }
}

/// Creates a not interactive error
pub fn not_interactive() -> SetupError {
    SetupError::NotInteractive
}

/// Creates an unknown shell error
pub fn unknown_shell(shell: impl Into<String>) -> SetupError {
    SetupError::UnknownShell {
        shell: shell.into(),
    }
}

/// Creates a prompt failed error
pub fn prompt_failed(message: impl Into<String>) -> SetupError {
    SetupError::PromptFailed {
        message: message.into(),
    }
}
