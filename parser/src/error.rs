//! Parse error taxonomy.
//!
//! Every failure mode of a parse call is a distinct, inspectable variant.
//! A parse either fully succeeds or yields exactly one of these; there is
//! no partial-success result.

use thiserror::Error;

use optline_core::CertificationKind;

/// Malformed option-prefix shapes on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatViolation {
    /// A lone `-` with nothing following it.
    #[error("found '-' not followed by an argument name")]
    BareHyphen,
    /// A lone `/` with nothing following it.
    #[error("found '/' not followed by an argument name")]
    BareSlash,
    /// A token beginning with `//`.
    #[error("invalid '//' sequence on the command line")]
    DoubleSlash,
    /// More than one character after a single `-`.
    #[error("only single-character names may follow '-'; use '--' for {0:?}")]
    LongNameAfterSingleHyphen(String),
    /// Exactly one character after `--`.
    #[error("single-character name {0:?} must use the '-' prefix, not '--'")]
    ShortNameAfterDoubleHyphen(String),
}

/// Errors produced by registry construction, token resolution, and
/// post-parse validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The same name or alias is claimed by two argument definitions,
    /// possibly only after case folding.
    #[error("argument name collision: {0:?} is claimed by more than one argument")]
    NameCollision(String),

    /// A token has a malformed option prefix.
    #[error("malformed command line: {0}")]
    CommandLineFormat(#[from] FormatViolation),

    /// An option-shaped token resolves to no known argument.
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    /// A grouped short-switch token contains a letter bound to a
    /// value-accepting argument.
    #[error("argument '{0}' inside a switch group is not a switch")]
    NonSwitchInGroup(char),

    /// A value-accepting argument was not followed by a value token.
    #[error("argument '{name}' must be followed by a value")]
    MissingValue { name: String },

    /// An argument that disallows repetition appeared again.
    #[error("argument '{0}' cannot be used multiple times")]
    ArgumentUsedTwice(String),

    /// A non-optional argument never appeared on the command line.
    #[error("mandatory argument '{0}' was not found on the command line")]
    MissingMandatoryArgument(String),

    /// A certification evaluated to unsatisfied.
    #[error("{} certification failed over arguments [{}]", .kind, .args.join(", "))]
    CertificationFailed {
        kind: CertificationKind,
        args: Vec<String>,
    },

    /// Trailing non-option tokens were found but the session does not
    /// accept additional arguments.
    #[error("unexpected additional arguments: {}", .tail.join(" "))]
    UnexpectedExtraArguments { tail: Vec<String> },
}

impl ParseError {
    /// Stable snake_case tag for report output and scripting.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NameCollision(_) => "name_collision",
            Self::CommandLineFormat(_) => "command_line_format",
            Self::UnknownArgument(_) => "unknown_argument",
            Self::NonSwitchInGroup(_) => "non_switch_in_group",
            Self::MissingValue { .. } => "missing_value",
            Self::ArgumentUsedTwice(_) => "argument_used_twice",
            Self::MissingMandatoryArgument(_) => "missing_mandatory_argument",
            Self::CertificationFailed { .. } => "certification_failed",
            Self::UnexpectedExtraArguments { .. } => "unexpected_extra_arguments",
        }
    }
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offender() {
        let err = ParseError::NonSwitchInGroup('b');
        assert!(err.to_string().contains('b'));

        let err = ParseError::CertificationFailed {
            kind: CertificationKind::ExactlyOne,
            args: vec!["ws".to_string(), "wss".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "exactly-one certification failed over arguments [ws, wss]"
        );
    }

    #[test]
    fn test_format_violation_wraps_into_parse_error() {
        let err: ParseError = FormatViolation::DoubleSlash.into();
        assert_eq!(err.code(), "command_line_format");
        assert!(matches!(
            err,
            ParseError::CommandLineFormat(FormatViolation::DoubleSlash)
        ));
    }
}
