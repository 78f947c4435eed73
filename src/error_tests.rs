use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = LabVerifyError::Config("timeout_secs must be greater than 0".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: timeout_secs must be greater than 0"
    );
}

#[test]
fn error_display_file_access() {
    let err = LabVerifyError::FileAccess {
        path: PathBuf::from(".lab-verify.toml"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains(".lab-verify.toml"));
}

#[test]
fn error_display_unknown_lab() {
    let err = LabVerifyError::UnknownLab("7".to_string());
    assert_eq!(err.to_string(), "Unknown lab: 7");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(LabVerifyError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        LabVerifyError::FileAccess {
            path: PathBuf::from("a"),
            source: std::io::Error::other("boom"),
        }
        .error_type(),
        "FileAccess"
    );
    assert_eq!(
        LabVerifyError::UnknownLab("x".to_string()).error_type(),
        "UnknownLab"
    );
}

#[test]
fn toml_errors_convert_to_config_category() {
    let parse_err = toml::from_str::<toml::Value>("not = [valid").unwrap_err();
    let err = LabVerifyError::from(parse_err);
    assert_eq!(err.error_type(), "Config");
    assert!(err.to_string().starts_with("TOML parse error"));
}

#[test]
fn suggestions_point_at_fixes() {
    assert!(
        LabVerifyError::UnknownLab("9".to_string())
            .suggestion()
            .is_some_and(|s| s.contains("`all`"))
    );
    assert!(
        LabVerifyError::Config("x".to_string())
            .suggestion()
            .is_some_and(|s| s.contains("--no-config"))
    );
    assert!(
        LabVerifyError::FileAccess {
            path: PathBuf::from("a"),
            source: std::io::Error::other("x"),
        }
        .suggestion()
        .is_some()
    );
}
