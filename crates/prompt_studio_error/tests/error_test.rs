//! Tests for error conversion and display.

use prompt_studio_error::{
    ConfigError, ConfigErrorKind, CreditError, CreditErrorKind, StorageError, StorageErrorKind, StudioError,
    StudioErrorKind, StudioResult,
};

fn fails_with_storage() -> StudioResult<()> {
    Err(StorageError::new(StorageErrorKind::Io("disk full".to_string())).into())
}

#[test]
fn test_concern_errors_convert_into_studio_error() {
    let err = fails_with_storage().unwrap_err();
    assert!(matches!(err.kind(), StudioErrorKind::Storage(_)));
    let text = err.to_string();
    assert!(text.starts_with("Prompt Studio Error: Storage Error: I/O error: disk full"));
}

#[test]
fn test_location_is_recorded() {
    let err = ConfigError::new(ConfigErrorKind::ParseRequest("bad toml".to_string()));
    assert!(err.file.ends_with("error_test.rs"));
    assert!(err.line > 0);
}

#[test]
fn test_config_error_display_names_the_request_path() {
    let err: StudioError = ConfigError::new(ConfigErrorKind::ReadRequest {
        path: "requests/launch.toml".to_string(),
        reason: "No such file or directory".to_string(),
    })
    .into();
    let text = err.to_string();
    assert!(text.starts_with(
        "Prompt Studio Error: Configuration Error: Failed to read request file requests/launch.toml"
    ));
    assert!(matches!(err.kind(), StudioErrorKind::Config(_)));
}

#[test]
fn test_credit_error_display() {
    let err: StudioError = CreditError::new(CreditErrorKind::Insufficient {
        requested: 20,
        available: 5,
    })
    .into();
    let text = err.to_string();
    assert!(text.contains("requested 20"));
    assert!(text.contains("available 5"));
}

#[test]
fn test_invalid_plan_display() {
    let err = CreditError::new(CreditErrorKind::InvalidPlan("gold".to_string()));
    assert!(err.to_string().contains("Unknown plan 'gold'"));
}
