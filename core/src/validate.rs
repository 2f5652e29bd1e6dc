//! Definition-level validation.
//!
//! Validates structural invariants of a [`SessionSpec`] before any parsing
//! happens: nameless arguments, malformed names, duplicate names, and
//! certifications referencing unknown arguments. Parse-time name collisions
//! are detected again by the engine's registry; this layer exists so bad
//! specs are rejected up front with a definition-shaped diagnostic.
//!
//! # Examples
//!
//! ```
//! use optline_core::*;
//!
//! let spec = SessionSpec::new()
//!     .with_arg(ArgSpec::switch(Some('v'), Some("verbose")));
//! assert!(validate_session(&spec).is_empty());
//!
//! // Invalid: one-character long name
//! let bad = SessionSpec::new().with_arg(ArgSpec::switch(None, Some("v")));
//! assert!(!validate_session(&bad).is_empty());
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Certification, SessionSpec};

/// Structural problems in a session spec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An argument defines neither a short nor a long name.
    #[error("argument must define a short or long name")]
    MissingArgumentName,
    /// A short name or alias is a whitespace character.
    #[error("short name must not be a whitespace character")]
    WhitespaceShortName,
    /// A long name or alias is too short or contains forbidden characters.
    #[error("invalid long name: {0:?}")]
    InvalidLongName(String),
    /// Two arguments claim the same name or alias.
    #[error("duplicate argument name: {0:?}")]
    DuplicateName(String),
    /// Two names collide once case folding is applied.
    #[error("duplicate argument name under case-insensitive matching: {0:?}")]
    DuplicateFoldedName(String),
    /// A certification refers to a name no argument answers to.
    #[error("certification references unknown argument: {0:?}")]
    UnknownCertificationReference(String),
    /// A certification group has no members.
    #[error("certification has an empty argument group")]
    EmptyCertificationGroup,
    /// A mutually-exclusive certification lists a name on both sides.
    #[error("certification lists {0:?} in both exclusion groups")]
    OverlappingCertificationGroups(String),
}

/// Validates a session spec, returning the first structural offense found.
///
/// The result is empty for a valid spec. Checks run in definition order:
/// argument names first, then duplicates, then certifications.
pub fn validate_session(spec: &SessionSpec) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for arg in &spec.args {
        if arg.short.is_none() && arg.long.is_none() {
            errors.push(ValidationError::MissingArgumentName);
            return errors;
        }

        for short in arg.short.iter().chain(arg.short_aliases.iter()) {
            if short.is_whitespace() {
                errors.push(ValidationError::WhitespaceShortName);
                return errors;
            }
        }

        for long in arg.long.iter().chain(arg.long_aliases.iter()) {
            if !is_valid_long_name(long) {
                errors.push(ValidationError::InvalidLongName(long.clone()));
                return errors;
            }
        }
    }

    let mut seen: HashSet<String> = HashSet::new();
    let mut seen_folded: HashSet<String> = HashSet::new();
    for arg in &spec.args {
        for name in arg.names() {
            if !seen.insert(name.clone()) {
                errors.push(ValidationError::DuplicateName(name));
                return errors;
            }
            if spec.config.ignore_case && !seen_folded.insert(name.to_uppercase()) {
                errors.push(ValidationError::DuplicateFoldedName(name));
                return errors;
            }
        }
    }

    for cert in &spec.certifications {
        errors.extend(validate_certification(spec, cert));
        if !errors.is_empty() {
            return errors;
        }
    }

    errors
}

fn validate_certification(spec: &SessionSpec, cert: &Certification) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let has_empty_group = match cert {
        Certification::AtLeastOne { args }
        | Certification::ExactlyOne { args }
        | Certification::AllOrNone { args } => args.is_empty(),
        Certification::MutuallyExclusive { left, right } => left.is_empty() || right.is_empty(),
        Certification::RequiredBy { required, .. } => required.is_empty(),
    };
    if has_empty_group {
        errors.push(ValidationError::EmptyCertificationGroup);
        return errors;
    }

    if let Certification::MutuallyExclusive { left, right } = cert {
        if let Some(shared) = left.iter().find(|name| right.contains(name)) {
            errors.push(ValidationError::OverlappingCertificationGroups(
                shared.clone(),
            ));
            return errors;
        }
    }

    for name in cert.referenced_names() {
        if spec.find_arg(name).is_none() {
            errors.push(ValidationError::UnknownCertificationReference(
                name.to_string(),
            ));
            return errors;
        }
    }

    errors
}

fn is_valid_long_name(name: &str) -> bool {
    name.chars().count() >= 2
        && !name.contains(char::is_whitespace)
        && !name.contains('=')
        && !name.starts_with('-')
        && !name.starts_with('/')
}

#[cfg(test)]
mod tests {
    use crate::{ArgSpec, Certification, SessionConfig};

    use super::*;

    #[test]
    fn test_validate_rejects_nameless_argument() {
        let spec = SessionSpec::new().with_arg(ArgSpec::switch(None, None));
        let errors = validate_session(&spec);
        assert_eq!(errors, vec![ValidationError::MissingArgumentName]);
    }

    #[test]
    fn test_validate_rejects_one_character_long_name() {
        let spec = SessionSpec::new().with_arg(ArgSpec::switch(None, Some("x")));
        let errors = validate_session(&spec);
        assert_eq!(
            errors,
            vec![ValidationError::InvalidLongName("x".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_alias() {
        let spec = SessionSpec::new()
            .with_arg(ArgSpec::switch(Some('v'), Some("verbose")))
            .with_arg(ArgSpec::switch(Some('q'), Some("quiet")).with_long_alias("verbose"));

        let errors = validate_session(&spec);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateName("verbose".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_folded_duplicates_only_when_case_insensitive() {
        let spec = SessionSpec::new()
            .with_arg(ArgSpec::switch(None, Some("output")))
            .with_arg(ArgSpec::switch(None, Some("OUTPUT")));
        assert!(validate_session(&spec).is_empty());

        let spec = spec.with_config(SessionConfig {
            ignore_case: true,
            ..SessionConfig::default()
        });
        let errors = validate_session(&spec);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateFoldedName("OUTPUT".to_string())]
        );
    }

    #[test]
    fn test_validate_rejects_unknown_certification_reference() {
        let spec = SessionSpec::new()
            .with_arg(ArgSpec::switch(Some('a'), None))
            .with_certification(Certification::at_least_one(&["a", "missing"]));

        let errors = validate_session(&spec);
        assert_eq!(
            errors,
            vec![ValidationError::UnknownCertificationReference(
                "missing".to_string()
            )]
        );
    }

    #[test]
    fn test_validate_rejects_overlapping_exclusion_groups() {
        let spec = SessionSpec::new()
            .with_arg(ArgSpec::switch(Some('a'), None))
            .with_arg(ArgSpec::switch(Some('b'), None))
            .with_certification(Certification::mutually_exclusive(&["a"], &["a", "b"]));

        let errors = validate_session(&spec);
        assert_eq!(
            errors,
            vec![ValidationError::OverlappingCertificationGroups(
                "a".to_string()
            )]
        );
    }

    #[test]
    fn test_validate_accepts_complete_spec() {
        let spec = SessionSpec::new()
            .with_arg(ArgSpec::single_value(Some('w'), Some("ws")).allow_multiple())
            .with_arg(ArgSpec::single_value(Some('x'), Some("wss")).allow_multiple())
            .with_certification(Certification::at_least_one(&["ws", "wss"]));

        assert!(validate_session(&spec).is_empty());
    }
}
