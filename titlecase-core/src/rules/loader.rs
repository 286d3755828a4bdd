//! Style rules loader
//!
//! The built-in APA 7 rules are embedded at compile time and parsed once
//! per process. Rules files on disk are parsed on every call.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use super::{config::StyleConfig, StyleRules};
use crate::error::{Error, Result};

/// Embedded APA 7 rules source
pub const EMBEDDED_APA7: &str = include_str!("../../configs/styles/apa7.toml");

static BUILTIN: OnceLock<std::result::Result<Arc<StyleRules>, String>> = OnceLock::new();

/// Get the built-in APA 7 rules, parsing them on first access
pub fn builtin_rules() -> Result<Arc<StyleRules>> {
    BUILTIN
        .get_or_init(|| {
            log::debug!("Loading built-in APA 7 style rules");
            parse_rules(EMBEDDED_APA7)
                .map(Arc::new)
                .map_err(|e| e.to_string())
        })
        .clone()
        .map_err(Error::embedded_rules)
}

/// Load rules from a TOML file
pub fn load_rules_file(path: &Path) -> Result<StyleRules> {
    log::debug!("Loading style rules from {}", path.display());

    let content =
        std::fs::read_to_string(path).map_err(|e| Error::rules_file(path, e.to_string()))?;

    let config: StyleConfig = toml::from_str(&content)
        .map_err(|e| Error::rules_file(path, format!("failed to parse TOML: {e}")))?;

    StyleRules::from_config(&config)
}

/// Parse rules from a TOML string
pub fn parse_rules(toml_str: &str) -> Result<StyleRules> {
    let config: StyleConfig = toml::from_str(toml_str)
        .map_err(|e| Error::InvalidRules(format!("failed to parse TOML: {e}")))?;

    StyleRules::from_config(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_rules() {
        let rules = builtin_rules().expect("built-in rules should load");
        assert_eq!(rules.code(), "apa7");
        assert_eq!(rules.name(), "APA 7th Edition");
        assert_eq!(rules.minor_words().len(), 18);
    }

    #[test]
    fn test_builtin_rules_are_shared() {
        let first = builtin_rules().unwrap();
        let second = builtin_rules().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_load_rules_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{EMBEDDED_APA7}").unwrap();

        let rules = load_rules_file(file.path()).unwrap();
        assert!(rules.is_minor_word("via"));
    }

    #[test]
    fn test_missing_rules_file() {
        let err = load_rules_file(Path::new("/nonexistent/apa7.toml")).unwrap_err();
        match &err {
            Error::RulesUnavailable { source_name, .. } => {
                assert_eq!(source_name, "/nonexistent/apa7.toml");
            }
            other => panic!("Expected RulesUnavailable, got {other:?}"),
        }
        assert!(err.to_string().contains("generate-rules"));
    }

    #[test]
    fn test_malformed_rules_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[metadata\ncode = ").unwrap();

        let err = load_rules_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::RulesUnavailable { .. }));
        assert!(err.to_string().contains("failed to parse TOML"));
    }

    #[test]
    fn test_parse_rules_rejects_other_styles() {
        let source = EMBEDDED_APA7.replace("code = \"apa7\"", "code = \"chicago\"");
        let err = parse_rules(&source).unwrap_err();
        assert!(matches!(err, Error::InvalidRules(_)));
    }
}
