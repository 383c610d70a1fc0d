//! Tests for configuration loading

use super::*;
use crate::error::ShapeError;
use std::fs;
use tempfile::TempDir;

// ==================== SETTINGS PARSING TESTS ====================

mod parsing_tests {
    use super::*;

    #[test]
    fn test_load_config_from_toml() {
        let toml = r#"
[scanner]
strip_type_arguments = false

[output]
format = "json"
"#;

        let settings: Settings = toml::from_str(toml).unwrap();

        assert!(!settings.scanner.strip_type_arguments);
        assert_eq!(settings.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[output]
format = "json"
"#;

        let settings = Settings::from_toml_str(toml).unwrap();

        assert_eq!(settings.output.format, ReportFormat::Json);
        // Missing section uses default
        assert!(settings.scanner.strip_type_arguments);
    }

    #[test]
    fn test_empty_config_uses_all_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let toml = r#"
[output]
format = "yaml"
"#;

        assert!(Settings::from_toml_str(toml).is_err());
    }
}

// ==================== FILE LOADING TESTS ====================

mod loading_tests {
    use super::*;

    #[test]
    fn test_discover_reads_config_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[scanner]\nstrip_type_arguments = false\n",
        )
        .unwrap();

        let settings = Settings::discover(dir.path()).unwrap();
        assert!(!settings.scanner.strip_type_arguments);
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::discover(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = Settings::load(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ShapeError::Io(_))));
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[scanner\nstrip_type_arguments = ").unwrap();

        let result = Settings::load(&path);
        assert!(matches!(result, Err(ShapeError::Config(_))));
    }
}
