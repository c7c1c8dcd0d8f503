//! Error type tests
//!
//! Tests for SetupError enum and its conversions.

#![allow(clippy::expect_used)]

use crate::error::SetupError;
use crate::error::action::{io_error, not_found as action_not_found, spawn_failed};
use crate::error::config::{parse_failed as config_parse_failed, read_failed as config_read_failed};
use crate::error::registry::{
    circular, dependency_not_found, duplicate, invalid_order, standalone_violation,
};
use crate::error::run::{aborted, components_failed, tools_failed};
use crate::error::selection::{prompt_failed, unknown_component, unknown_shell};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = SetupError::UnknownComponent {
        id: "bogus".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown component: bogus");
}

#[test]
fn test_error_code() {
    let err = SetupError::UnknownComponent {
        id: "bogus".to_string(),
    };
    assert_eq!(
        err.code()
            .map(|c: Box<dyn std::fmt::Display>| c.to_string()),
        Some("termux_setup::selection::unknown".to_string())
    );
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SetupError = io_err.into();
    assert!(matches!(err, SetupError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let err: SetupError = parse_result.expect_err("yaml should not parse").into();
    assert!(matches!(err, SetupError::ConfigParseFailed { .. }));
}

#[test]
fn test_inquire_not_tty_maps_to_not_interactive() {
    let err: SetupError = inquire::InquireError::NotTTY.into();
    assert!(matches!(err, SetupError::NotInteractive));
}

#[test]
fn test_inquire_other_maps_to_prompt_failed() {
    let err: SetupError = inquire::InquireError::OperationCanceled.into();
    assert!(matches!(err, SetupError::PromptFailed { .. }));
}

test_error_contains!(
    test_not_interactive_error,
    SetupError::NotInteractive,
    "not supported in this environment"
);

test_error_contains!(
    test_circular_chain,
    circular(&["a".to_string(), "b".to_string(), "a".to_string()]),
    "Circular dependency",
    "a -> b -> a"
);

test_error_contains!(
    test_dependency_not_found,
    dependency_not_found("ghost", "cli-tools"),
    "ghost",
    "cli-tools"
);

test_error_contains!(test_duplicate, duplicate("a"), "defined more than once");

test_error_contains!(
    test_invalid_order,
    invalid_order("'b' runs before its dependency 'a'"),
    "Invalid execution order"
);

test_error_contains!(
    test_standalone,
    standalone_violation("uninstallation", "must not be a dependency of 'verification'"),
    "uninstallation",
    "must not be a dependency"
);

test_error_contains!(
    test_config_read_failed,
    config_read_failed("/tmp/registry.yaml", "permission denied"),
    "Failed to read registry file"
);

test_error_contains!(
    test_config_parse_failed,
    config_parse_failed("/tmp/registry.yaml", "bad indent"),
    "Failed to parse registry file",
    "bad indent"
);

test_error_contains!(test_unknown_component, unknown_component("x"), "Unknown component: x");

test_error_contains!(test_unknown_shell, unknown_shell("tcsh"), "Unknown shell: tcsh");

test_error_contains!(test_prompt_failed, prompt_failed("cancelled"), "Prompt failed");

test_error_contains!(
    test_action_not_found,
    action_not_found("verification", "/scripts/verify-installation.sh"),
    "verification",
    "/scripts/verify-installation.sh"
);

test_error_contains!(
    test_spawn_failed,
    spawn_failed("cli-tools", "node install-cli-suite.js", "No such file"),
    "Failed to start"
);

test_error_contains!(test_io_error, io_error("disk full"), "IO error: disk full");

test_error_contains!(test_aborted, aborted("prerequisites"), "aborted at 'prerequisites'");

test_error_contains!(
    test_components_failed,
    components_failed(vec!["a".to_string(), "b".to_string()]),
    "2 component(s) failed: a, b"
);

test_error_contains!(
    test_tools_failed,
    tools_failed(vec!["droid".to_string()]),
    "1 tool(s) failed to install: droid"
);

#[test]
fn test_error_classification() {
    assert!(circular(&["a".to_string()]).is_configuration());
    assert!(config_read_failed("p", "r").is_configuration());
    assert!(!unknown_component("x").is_configuration());
    assert!(action_not_found("a", "p").is_environment());
    assert!(!aborted("a").is_environment());
}
