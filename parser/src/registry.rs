//! Name-to-argument lookup maps.

use std::collections::HashMap;

use crate::argument::Argument;
use crate::error::{ParseError, Result};

/// Lookup maps from short/long names (and aliases) to argument indices.
///
/// Built fresh at the start of every parse call. Construction fails with
/// [`ParseError::NameCollision`] when any name would be claimed by two
/// arguments — including collisions that only appear once case folding is
/// applied.
///
/// Lookup absence is a normal outcome, not an error: the resolver uses it
/// to decide that a token is not an option at all.
#[derive(Debug, Default)]
pub struct Registry {
    short: HashMap<char, usize>,
    long: HashMap<String, usize>,
    folded: HashMap<String, usize>,
    ignore_case: bool,
}

impl Registry {
    /// Builds the lookup maps over `arguments`, keyed by index.
    pub fn build(arguments: &[Argument], ignore_case: bool) -> Result<Self> {
        let mut registry = Self {
            ignore_case,
            ..Self::default()
        };

        for (index, argument) in arguments.iter().enumerate() {
            let spec = argument.spec();
            for short in spec.short.iter().chain(spec.short_aliases.iter()) {
                if registry.short.insert(*short, index).is_some() {
                    return Err(ParseError::NameCollision(String::from(*short)));
                }
            }
            for long in spec.long.iter().chain(spec.long_aliases.iter()) {
                if registry.long.insert(long.clone(), index).is_some() {
                    return Err(ParseError::NameCollision(long.clone()));
                }
            }
        }

        if ignore_case {
            for (index, argument) in arguments.iter().enumerate() {
                for name in argument.spec().names() {
                    let folded = name.to_uppercase();
                    if registry.folded.insert(folded.clone(), index).is_some() {
                        return Err(ParseError::NameCollision(folded));
                    }
                }
            }
        }

        Ok(registry)
    }

    /// Resolves a bare name: exact single-character match against the
    /// short map, exact multi-character match against the long map, then
    /// the case-folded overlay when enabled.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(short), None) => {
                if let Some(&index) = self.short.get(&short) {
                    return Some(index);
                }
            }
            _ => {
                if let Some(&index) = self.long.get(name) {
                    return Some(index);
                }
            }
        }
        if self.ignore_case {
            self.folded.get(&name.to_uppercase()).copied()
        } else {
            None
        }
    }

    /// Exact short-map lookup, used when validating switch groups.
    pub(crate) fn lookup_short(&self, short: char) -> Option<usize> {
        self.short.get(&short).copied()
    }

    /// Whether `name` is a known long name (exactly, or case-folded when
    /// enabled). Used to keep `/longname` tokens out of group expansion.
    pub(crate) fn is_known_long_name(&self, name: &str) -> bool {
        self.long.contains_key(name)
            || (self.ignore_case && self.folded.contains_key(&name.to_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use optline_core::ArgSpec;

    use super::*;

    fn arguments(specs: Vec<ArgSpec>) -> Vec<Argument> {
        specs.into_iter().map(Argument::new).collect()
    }

    #[test]
    fn test_lookup_covers_names_and_aliases() {
        let args = arguments(vec![
            ArgSpec::switch(Some('v'), Some("verbose")).with_long_alias("chatty"),
            ArgSpec::single_value(Some('o'), Some("output")).with_short_alias('f'),
        ]);
        let registry = Registry::build(&args, false).unwrap();

        assert_eq!(registry.lookup("v"), Some(0));
        assert_eq!(registry.lookup("chatty"), Some(0));
        assert_eq!(registry.lookup("f"), Some(1));
        assert_eq!(registry.lookup("output"), Some(1));
        assert_eq!(registry.lookup("missing"), None);
    }

    #[test]
    fn test_duplicate_short_alias_collides() {
        let args = arguments(vec![
            ArgSpec::switch(Some('v'), None),
            ArgSpec::switch(Some('q'), None).with_short_alias('v'),
        ]);

        let err = Registry::build(&args, false).unwrap_err();
        assert_eq!(err, ParseError::NameCollision("v".to_string()));
    }

    #[test]
    fn test_distinct_names_collide_under_case_folding() {
        let args = arguments(vec![
            ArgSpec::switch(None, Some("output")),
            ArgSpec::switch(None, Some("OUTPUT")),
        ]);

        assert!(Registry::build(&args, false).is_ok());
        let err = Registry::build(&args, true).unwrap_err();
        assert_eq!(err, ParseError::NameCollision("OUTPUT".to_string()));
    }

    #[test]
    fn test_case_insensitive_lookup_uses_folded_overlay() {
        let args = arguments(vec![ArgSpec::switch(Some('v'), Some("verbose"))]);

        let exact = Registry::build(&args, false).unwrap();
        assert_eq!(exact.lookup("VERBOSE"), None);

        let folded = Registry::build(&args, true).unwrap();
        assert_eq!(folded.lookup("VERBOSE"), Some(0));
        assert_eq!(folded.lookup("V"), Some(0));
    }
}
