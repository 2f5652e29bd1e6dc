//! Argument and certification definitions.
//!
//! This module defines the declarative data model a parse session is built
//! from. The types are designed for serialization with [`serde`] and can
//! round-trip through JSON and YAML spec files.

use serde::{Deserialize, Serialize};

/// How many following tokens an argument consumes.
///
/// # Examples
///
/// ```
/// use optline_core::Arity;
///
/// let arity = Arity::default();
/// assert_eq!(arity, Arity::Switch);
/// assert!(!arity.takes_value());
/// assert!(Arity::SingleValue.takes_value());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// Boolean presence, consumes no value token (the default).
    #[default]
    Switch,
    /// Consumes exactly one following token.
    SingleValue,
    /// Consumes one or more following tokens.
    MultiValue,
}

impl Arity {
    /// Whether this arity consumes value tokens at all.
    pub fn takes_value(self) -> bool {
        !matches!(self, Self::Switch)
    }
}

/// Declarative definition of a single named argument.
///
/// An argument has an optional single-character short name (e.g., `-v`)
/// and/or a multi-character long name (e.g., `--verbose`), optional
/// aliases for both, an [`Arity`], and optionality/multiplicity metadata.
///
/// Use the constructor methods [`switch`](ArgSpec::switch),
/// [`single_value`](ArgSpec::single_value), and
/// [`multi_value`](ArgSpec::multi_value) to create definitions, then chain
/// builder methods like [`with_description`](ArgSpec::with_description).
///
/// # Examples
///
/// ```
/// use optline_core::{ArgSpec, Arity};
///
/// // Optional boolean switch
/// let verbose = ArgSpec::switch(Some('v'), Some("verbose"))
///     .with_description("Enable verbose output");
/// assert_eq!(verbose.arity, Arity::Switch);
/// assert!(verbose.optional);
///
/// // Mandatory single-value argument with an alias
/// let port = ArgSpec::single_value(Some('w'), Some("ws"))
///     .with_long_alias("websocket")
///     .mandatory();
/// assert_eq!(port.display_name(), "ws");
/// assert!(!port.optional);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgSpec {
    /// Short form (e.g., 'v' for `-v`).
    #[serde(default)]
    pub short: Option<char>,
    /// Long form (e.g., "verbose" for `--verbose`).
    #[serde(default)]
    pub long: Option<String>,
    /// Additional single-character names resolving to this argument.
    #[serde(default)]
    pub short_aliases: Vec<char>,
    /// Additional multi-character names resolving to this argument.
    #[serde(default)]
    pub long_aliases: Vec<String>,
    /// How many following tokens this argument consumes.
    #[serde(default)]
    pub arity: Arity,
    /// May this argument legally appear more than once?
    #[serde(default)]
    pub allow_multiple: bool,
    /// Whether absence is acceptable. Non-optional arguments missing from
    /// the command line fail validation.
    #[serde(default = "default_true")]
    pub optional: bool,
    /// Values written back after the parse loop when the argument was
    /// never matched. Empty means no default.
    #[serde(default)]
    pub default_values: Vec<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ArgSpec {
    fn new(short: Option<char>, long: Option<&str>, arity: Arity) -> Self {
        Self {
            short,
            long: long.map(String::from),
            short_aliases: Vec::new(),
            long_aliases: Vec::new(),
            arity,
            allow_multiple: false,
            optional: true,
            default_values: Vec::new(),
            description: None,
        }
    }

    /// Creates a boolean switch (consumes no value).
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::ArgSpec;
    ///
    /// let spec = ArgSpec::switch(Some('v'), Some("verbose"));
    /// assert!(spec.matches_name("v", false));
    /// assert!(spec.matches_name("verbose", false));
    /// ```
    pub fn switch(short: Option<char>, long: Option<&str>) -> Self {
        Self::new(short, long, Arity::Switch)
    }

    /// Creates an argument that consumes exactly one following token.
    pub fn single_value(short: Option<char>, long: Option<&str>) -> Self {
        Self::new(short, long, Arity::SingleValue)
    }

    /// Creates an argument that consumes one or more following tokens.
    pub fn multi_value(short: Option<char>, long: Option<&str>) -> Self {
        Self::new(short, long, Arity::MultiValue)
    }

    /// Adds a description.
    pub fn with_description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Adds a single-character alias.
    pub fn with_short_alias(mut self, alias: char) -> Self {
        self.short_aliases.push(alias);
        self
    }

    /// Adds a multi-character alias.
    pub fn with_long_alias(mut self, alias: &str) -> Self {
        self.long_aliases.push(alias.to_string());
        self
    }

    /// Marks the argument as legal to use more than once.
    pub fn allow_multiple(mut self) -> Self {
        self.allow_multiple = true;
        self
    }

    /// Marks the argument as non-optional; absence becomes a validation
    /// failure.
    pub fn mandatory(mut self) -> Self {
        self.optional = false;
        self
    }

    /// Sets values written back when the argument never appears.
    pub fn with_default_values(mut self, values: &[&str]) -> Self {
        self.default_values = values.iter().map(|v| v.to_string()).collect();
        self
    }

    /// Returns the display name (long form preferred, falls back to short).
    ///
    /// # Examples
    ///
    /// ```
    /// use optline_core::ArgSpec;
    ///
    /// let spec = ArgSpec::switch(Some('v'), Some("verbose"));
    /// assert_eq!(spec.display_name(), "verbose");
    ///
    /// let short_only = ArgSpec::switch(Some('v'), None);
    /// assert_eq!(short_only.display_name(), "v");
    /// ```
    pub fn display_name(&self) -> String {
        self.long
            .clone()
            .or_else(|| self.short.map(String::from))
            .unwrap_or_else(|| "<unnamed>".to_string())
    }

    /// Every name this argument answers to: short form, long form, and all
    /// aliases, as strings.
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        if let Some(short) = self.short {
            names.push(String::from(short));
        }
        for alias in &self.short_aliases {
            names.push(String::from(*alias));
        }
        if let Some(long) = &self.long {
            names.push(long.clone());
        }
        for alias in &self.long_aliases {
            names.push(alias.clone());
        }
        names
    }

    /// Checks whether `name` is one of this argument's names, optionally
    /// folding ASCII case.
    pub fn matches_name(&self, name: &str, ignore_case: bool) -> bool {
        self.names().iter().any(|candidate| {
            if ignore_case {
                candidate.eq_ignore_ascii_case(name)
            } else {
                candidate == name
            }
        })
    }
}

/// Tag identifying a [`Certification`] variant, used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CertificationKind {
    AtLeastOne,
    ExactlyOne,
    AllOrNone,
    MutuallyExclusive,
    RequiredBy,
}

impl std::fmt::Display for CertificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::AtLeastOne => "at-least-one",
            Self::ExactlyOne => "exactly-one",
            Self::AllOrNone => "all-or-none",
            Self::MutuallyExclusive => "mutually-exclusive",
            Self::RequiredBy => "required-by",
        };
        f.write_str(label)
    }
}

/// A declarative constraint over a set of arguments, checked after the
/// mandatory-argument scan against final parsed state.
///
/// Arguments are referenced by any of their names (short, long, or alias).
///
/// # Examples
///
/// ```
/// use optline_core::{Certification, CertificationKind};
///
/// let cert = Certification::exactly_one(&["ws", "wss"]);
/// assert_eq!(cert.kind(), CertificationKind::ExactlyOne);
/// assert_eq!(cert.referenced_names(), vec!["ws", "wss"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Certification {
    /// At least one of `args` must be used.
    AtLeastOne { args: Vec<String> },
    /// Exactly one of `args` must be used.
    ExactlyOne { args: Vec<String> },
    /// All of `args` must be used, or none of them.
    AllOrNone { args: Vec<String> },
    /// No argument of `left` may be used together with any of `right`.
    MutuallyExclusive {
        left: Vec<String>,
        right: Vec<String>,
    },
    /// If `trigger` is used, everything in `required` must be used too.
    RequiredBy {
        trigger: String,
        required: Vec<String>,
    },
}

impl Certification {
    /// At-least-one constraint over `args`.
    pub fn at_least_one(args: &[&str]) -> Self {
        Self::AtLeastOne {
            args: to_owned(args),
        }
    }

    /// Exactly-one constraint over `args`.
    pub fn exactly_one(args: &[&str]) -> Self {
        Self::ExactlyOne {
            args: to_owned(args),
        }
    }

    /// All-or-none constraint over `args`.
    pub fn all_or_none(args: &[&str]) -> Self {
        Self::AllOrNone {
            args: to_owned(args),
        }
    }

    /// Mutual-exclusion constraint between `left` and `right`.
    pub fn mutually_exclusive(left: &[&str], right: &[&str]) -> Self {
        Self::MutuallyExclusive {
            left: to_owned(left),
            right: to_owned(right),
        }
    }

    /// Requirement constraint: using `trigger` requires all of `required`.
    pub fn required_by(trigger: &str, required: &[&str]) -> Self {
        Self::RequiredBy {
            trigger: trigger.to_string(),
            required: to_owned(required),
        }
    }

    /// The variant tag, for diagnostics.
    pub fn kind(&self) -> CertificationKind {
        match self {
            Self::AtLeastOne { .. } => CertificationKind::AtLeastOne,
            Self::ExactlyOne { .. } => CertificationKind::ExactlyOne,
            Self::AllOrNone { .. } => CertificationKind::AllOrNone,
            Self::MutuallyExclusive { .. } => CertificationKind::MutuallyExclusive,
            Self::RequiredBy { .. } => CertificationKind::RequiredBy,
        }
    }

    /// Every argument name this certification refers to, in declaration
    /// order.
    pub fn referenced_names(&self) -> Vec<&str> {
        match self {
            Self::AtLeastOne { args } | Self::ExactlyOne { args } | Self::AllOrNone { args } => {
                args.iter().map(String::as_str).collect()
            }
            Self::MutuallyExclusive { left, right } => {
                left.iter().chain(right.iter()).map(String::as_str).collect()
            }
            Self::RequiredBy { trigger, required } => std::iter::once(trigger.as_str())
                .chain(required.iter().map(String::as_str))
                .collect(),
        }
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arg_spec_builder_chain() {
        let spec = ArgSpec::single_value(Some('o'), Some("output"))
            .with_description("Output file")
            .with_long_alias("out")
            .mandatory();

        assert_eq!(spec.short, Some('o'));
        assert_eq!(spec.long.as_deref(), Some("output"));
        assert_eq!(spec.arity, Arity::SingleValue);
        assert!(!spec.optional);
        assert_eq!(spec.display_name(), "output");
        assert_eq!(spec.names(), vec!["o", "output", "out"]);
    }

    #[test]
    fn test_matches_name_folds_case_only_when_asked() {
        let spec = ArgSpec::switch(Some('v'), Some("Verbose"));

        assert!(spec.matches_name("Verbose", false));
        assert!(!spec.matches_name("verbose", false));
        assert!(spec.matches_name("VERBOSE", true));
    }

    #[test]
    fn test_certification_referenced_names_cover_all_groups() {
        let cert = Certification::mutually_exclusive(&["a", "b"], &["c"]);
        assert_eq!(cert.referenced_names(), vec!["a", "b", "c"]);

        let cert = Certification::required_by("tls", &["cert", "key"]);
        assert_eq!(cert.kind(), CertificationKind::RequiredBy);
        assert_eq!(cert.referenced_names(), vec!["tls", "cert", "key"]);
    }

    #[test]
    fn test_arg_spec_json_round_trip() {
        let spec = ArgSpec::multi_value(Some('x'), Some("wss"))
            .allow_multiple()
            .with_default_values(&["8443"]);

        let json = serde_json::to_string(&spec).unwrap();
        let back: ArgSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_terse_spec_json_uses_defaults() {
        let spec: ArgSpec = serde_json::from_str(r#"{"short": "v"}"#).unwrap();
        assert_eq!(spec.short, Some('v'));
        assert_eq!(spec.arity, Arity::Switch);
        assert!(spec.optional);
        assert!(!spec.allow_multiple);
    }
}
