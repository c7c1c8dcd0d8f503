//! Component registry integrity errors

use super::SetupError;

/// Creates a duplicate component error
pub fn duplicate(id: impl Into<String>) -> SetupError {
    SetupError::DuplicateComponent { id: id.into() }
}

/// Creates a dependency not found error
pub fn dependency_not_found(name: impl Into<String>, dependent: impl Into<String>) -> SetupError {
    SetupError::DependencyNotFound {
        name: name.into(),
        dependent: dependent.into(),
    }
}

/// Creates a circular dependency error from the chain of ids that closes the cycle
pub fn circular(chain: &[String]) -> SetupError {
    SetupError::CircularDependency {
        chain: chain.join(" -> "),
    }
}

/// Creates an invalid execution order error
pub fn invalid_order(message: impl Into<String>) -> SetupError {
    SetupError::InvalidExecutionOrder {
        message: message.into(),
    }
}

/// Creates a standalone violation error
pub fn standalone_violation(id: impl Into<String>, message: impl Into<String>) -> SetupError {
    SetupError::StandaloneViolation {
        id: id.into(),
        message: message.into(),
    }
}
