//! Post-parse validation: mandatory arguments, then certifications.
//!
//! Both checks are fail-fast: the first offending argument or the first
//! unsatisfied certification aborts validation.

use optline_core::Certification;

use crate::argument::Argument;
use crate::error::{ParseError, Result};
use crate::registry::Registry;

/// Fails on the first non-optional argument that never parsed.
pub(crate) fn check_mandatory(arguments: &[Argument]) -> Result<()> {
    for argument in arguments {
        if !argument.spec().optional && !argument.is_parsed() {
            return Err(ParseError::MissingMandatoryArgument(
                argument.spec().display_name(),
            ));
        }
    }
    Ok(())
}

/// Evaluates certifications in order against final parsed state.
///
/// Referenced names resolve through the registry; a name that fails to
/// resolve evaluates as not-parsed (definition-level validation exists to
/// reject such specs before parsing).
pub(crate) fn check_certifications(
    arguments: &[Argument],
    certifications: &[Certification],
    registry: &Registry,
) -> Result<()> {
    let parsed = |name: &String| {
        registry
            .lookup(name)
            .is_some_and(|index| arguments[index].is_parsed())
    };

    for certification in certifications {
        let satisfied = match certification {
            Certification::AtLeastOne { args } => args.iter().any(parsed),
            Certification::ExactlyOne { args } => args.iter().filter(|name| parsed(name)).count() == 1,
            Certification::AllOrNone { args } => {
                let count = args.iter().filter(|name| parsed(name)).count();
                count == 0 || count == args.len()
            }
            Certification::MutuallyExclusive { left, right } => {
                !(left.iter().any(parsed) && right.iter().any(parsed))
            }
            Certification::RequiredBy { trigger, required } => {
                !parsed(trigger) || required.iter().all(parsed)
            }
        };

        if !satisfied {
            return Err(ParseError::CertificationFailed {
                kind: certification.kind(),
                args: certification
                    .referenced_names()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use optline_core::{ArgSpec, CertificationKind};

    use super::*;

    fn arguments(parsed: &[(&str, bool)]) -> Vec<Argument> {
        parsed
            .iter()
            .map(|(name, parsed)| {
                let mut argument = Argument::new(ArgSpec::switch(None, Some(name)));
                if *parsed {
                    argument.mark_parsed();
                }
                argument
            })
            .collect()
    }

    #[test]
    fn test_mandatory_check_names_first_offender() {
        let args: Vec<Argument> = vec![
            Argument::new(ArgSpec::switch(None, Some("alpha")).mandatory()),
            Argument::new(ArgSpec::switch(None, Some("beta")).mandatory()),
        ];

        let err = check_mandatory(&args).unwrap_err();
        assert_eq!(
            err,
            ParseError::MissingMandatoryArgument("alpha".to_string())
        );
    }

    #[test]
    fn test_exactly_one_fails_in_both_directions() {
        let certs = vec![Certification::exactly_one(&["alpha", "beta"])];

        let none = arguments(&[("alpha", false), ("beta", false)]);
        let registry = Registry::build(&none, false).unwrap();
        assert!(check_certifications(&none, &certs, &registry).is_err());

        let both = arguments(&[("alpha", true), ("beta", true)]);
        let registry = Registry::build(&both, false).unwrap();
        let err = check_certifications(&both, &certs, &registry).unwrap_err();
        assert_eq!(
            err,
            ParseError::CertificationFailed {
                kind: CertificationKind::ExactlyOne,
                args: vec!["alpha".to_string(), "beta".to_string()],
            }
        );

        let one = arguments(&[("alpha", true), ("beta", false)]);
        let registry = Registry::build(&one, false).unwrap();
        assert!(check_certifications(&one, &certs, &registry).is_ok());
    }

    #[test]
    fn test_all_or_none_accepts_only_extremes() {
        let certs = vec![Certification::all_or_none(&["alpha", "beta"])];

        for (a, b, ok) in [(false, false, true), (true, true, true), (true, false, false)] {
            let args = arguments(&[("alpha", a), ("beta", b)]);
            let registry = Registry::build(&args, false).unwrap();
            assert_eq!(check_certifications(&args, &certs, &registry).is_ok(), ok);
        }
    }

    #[test]
    fn test_mutually_exclusive_and_required_by() {
        let args = arguments(&[("tls", true), ("cert", false), ("plain", true)]);
        let registry = Registry::build(&args, false).unwrap();

        let exclusive = vec![Certification::mutually_exclusive(&["tls"], &["plain"])];
        assert!(check_certifications(&args, &exclusive, &registry).is_err());

        let required = vec![Certification::required_by("tls", &["cert"])];
        assert!(check_certifications(&args, &required, &registry).is_err());

        let inactive = vec![Certification::required_by("cert", &["tls"])];
        assert!(check_certifications(&args, &inactive, &registry).is_ok());
    }
}
