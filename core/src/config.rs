//! Session-level configuration toggles.

use serde::{Deserialize, Serialize};

/// Configuration consumed by the normalizer and resolver.
///
/// Every field has a default so spec files can set only what they need.
///
/// # Examples
///
/// ```
/// use optline_core::SessionConfig;
///
/// let config = SessionConfig::default();
/// assert!(config.accept_hyphen);
/// assert!(config.accept_slash);
/// assert!(!config.accept_equals_syntax);
/// assert_eq!(config.equals_value_separators, vec![',', ';']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Accept `-a` and `--arg` forms.
    pub accept_hyphen: bool,
    /// Accept `/a` and `/arg` forms.
    pub accept_slash: bool,
    /// Expand grouped short switches (`-abc` into `-a -b -c`).
    pub allow_switch_grouping: bool,
    /// Expand `--name=value` syntax before resolution.
    pub accept_equals_syntax: bool,
    /// Separators splitting a multi-occurrence equals value into parts.
    pub equals_value_separators: Vec<char>,
    /// Keep surrounding double quotes on equals-syntax values.
    pub preserve_value_quotes: bool,
    /// Match argument names case-insensitively.
    pub ignore_case: bool,
    /// Capture the trailing non-option tail instead of rejecting it.
    pub accept_additional_arguments: bool,
    /// Skip unknown option tokens instead of failing the parse.
    pub lenient: bool,
    /// Reserved tokens never treated as switch groups.
    pub usage_triggers: Vec<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            accept_hyphen: true,
            accept_slash: true,
            allow_switch_grouping: true,
            accept_equals_syntax: false,
            equals_value_separators: vec![',', ';'],
            preserve_value_quotes: false,
            ignore_case: false,
            accept_additional_arguments: false,
            lenient: false,
            usage_triggers: vec!["--help".to_string(), "/?".to_string(), "/help".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r#"{"accept_equals_syntax": true, "ignore_case": true}"#).unwrap();

        assert!(config.accept_equals_syntax);
        assert!(config.ignore_case);
        assert!(config.accept_hyphen);
        assert_eq!(config.usage_triggers[0], "--help");
    }
}
