//! Unitconv Core - Shared error types
//!
//! This crate provides the error taxonomy used throughout Unitconv:
//! - `ConvertError`: every failure a lookup, conversion or parse can raise
//! - `ErrorReport`: serializable `{code, message, suggestion}` view
//! - `codes`: stable machine-readable error codes

mod error;

pub use error::{codes, ConvertError, ErrorReport};

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    mod error_tests {
        use super::*;

        #[test]
        fn test_unknown_category_code() {
            let err = ConvertError::unknown_category("Pressure");
            assert_eq!(err.code(), codes::UNKNOWN_CATEGORY);
            assert_eq!(err.to_string(), "unknown category: Pressure");
        }

        #[test]
        fn test_unknown_unit_names_every_offender() {
            let err = ConvertError::unknown_unit("Length", vec!["furlong".to_string()]);
            assert_eq!(err.to_string(), "unknown unit in Length: furlong");

            let err = ConvertError::unknown_unit(
                "Length",
                vec!["furlong".to_string(), "league".to_string()],
            );
            assert_eq!(err.to_string(), "unknown units in Length: furlong, league");
            assert_eq!(err.code(), codes::UNKNOWN_UNIT);
        }

        #[test]
        fn test_unit_not_found_outside_any_category() {
            let err = ConvertError::unit_not_found("furlong");
            assert_eq!(err.to_string(), "unknown unit: furlong");
            assert_eq!(err.code(), codes::UNKNOWN_UNIT);

            let suggestion = err.suggestion().unwrap();
            assert!(suggestion.contains("list_categories"));
            assert!(!suggestion.contains("any category"));
        }

        #[test]
        fn test_invalid_input_has_suggestion() {
            let err = ConvertError::invalid_input("abc", "not a number");
            assert_eq!(err.code(), codes::INVALID_INPUT);
            assert!(err.suggestion().is_some());
        }

        #[test]
        fn test_invalid_catalog_has_no_suggestion() {
            let err = ConvertError::InvalidCatalog("duplicate unit".to_string());
            assert!(err.suggestion().is_none());
        }

        #[test]
        fn test_report_serialization() {
            let report = ConvertError::unknown_category("Pressure").report();
            let json = serde_json::to_value(&report).unwrap();
            assert_eq!(json["code"], "UNKNOWN_CATEGORY");
            assert_eq!(json["message"], "unknown category: Pressure");
            assert!(json["suggestion"].is_string());

            let report = ConvertError::InvalidCatalog("x".to_string()).report();
            let json = serde_json::to_value(&report).unwrap();
            assert!(json.get("suggestion").is_none());
        }

        #[test]
        fn test_report_display() {
            let report = ConvertError::unknown_category("Pressure").report();
            let display = format!("{}", report);
            assert!(display.starts_with("[UNKNOWN_CATEGORY]"));
            assert!(display.contains("suggestion"));
        }
    }
}
