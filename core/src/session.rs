use serde::{Deserialize, Serialize};

use crate::{ArgSpec, Certification, SessionConfig};

/// Serializable description of a complete parse session.
///
/// A session spec groups argument definitions, certifications, and the
/// session configuration, making it suitable for loading from JSON or YAML
/// files and for embedding in tests.
///
/// # Examples
///
/// ```
/// use optline_core::*;
///
/// let spec = SessionSpec::new()
///     .with_arg(ArgSpec::single_value(Some('w'), Some("ws")).allow_multiple())
///     .with_arg(ArgSpec::single_value(Some('x'), Some("wss")).allow_multiple())
///     .with_certification(Certification::at_least_one(&["ws", "wss"]));
///
/// assert_eq!(spec.args.len(), 2);
/// assert_eq!(spec.certifications.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSpec {
    /// Argument definitions, in declaration order.
    #[serde(default)]
    pub args: Vec<ArgSpec>,
    /// Cross-argument constraints evaluated after parsing.
    #[serde(default)]
    pub certifications: Vec<Certification>,
    /// Normalizer/resolver toggles.
    #[serde(default)]
    pub config: SessionConfig,
}

impl SessionSpec {
    /// Creates an empty spec with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an argument definition.
    pub fn with_arg(mut self, arg: ArgSpec) -> Self {
        self.args.push(arg);
        self
    }

    /// Adds a certification.
    pub fn with_certification(mut self, cert: Certification) -> Self {
        self.certifications.push(cert);
        self
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    /// Finds the definition answering to `name`, honoring the configured
    /// case sensitivity.
    pub fn find_arg(&self, name: &str) -> Option<&ArgSpec> {
        self.args
            .iter()
            .find(|arg| arg.matches_name(name, self.config.ignore_case))
    }
}
