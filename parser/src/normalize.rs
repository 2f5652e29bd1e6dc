//! Token-stream normalization passes.
//!
//! Two independent rewrites run over the raw token list before resolution,
//! in a fixed order: equals-sign expansion first, then short-switch-group
//! expansion. The order matters because `-x=5` is textually
//! indistinguishable from a switch group until the equals pass has
//! resolved it to its true shape.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use optline_core::{Arity, SessionConfig};

use crate::argument::Argument;
use crate::error::{ParseError, Result};
use crate::registry::Registry;

// SAFETY: These regexes are compile-time constants and are validated by tests.
static NAME_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=]+)=(.*)$").expect("static regex must compile"));
static LETTERS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]+$").expect("static regex must compile"));

/// Rewrites `<name>=<value>` tokens into `(name, value)` token pairs.
///
/// Tokens whose name does not resolve, or resolves to a switch, are left
/// untouched. Inserted tokens are never rescanned, so the pass is
/// idempotent on already-expanded lists.
pub(crate) fn expand_equals_syntax(
    tokens: &mut Vec<String>,
    arguments: &[Argument],
    registry: &Registry,
    config: &SessionConfig,
) {
    if !config.accept_equals_syntax {
        return;
    }

    let mut index = 0;
    while index < tokens.len() {
        match equals_replacement(&tokens[index], arguments, registry, config) {
            Some(replacement) => {
                debug!(token = %tokens[index], parts = replacement.len(), "expanded equals-syntax token");
                let advance = replacement.len();
                tokens.splice(index..=index, replacement);
                index += advance;
            }
            None => index += 1,
        }
    }
}

fn equals_replacement(
    token: &str,
    arguments: &[Argument],
    registry: &Registry,
    config: &SessionConfig,
) -> Option<Vec<String>> {
    let captures = NAME_VALUE.captures(token)?;
    let prefixed_name = captures.get(1).expect("group 1 always captures").as_str();

    let mut bare = prefixed_name;
    while config.accept_hyphen && bare.starts_with('-') {
        bare = &bare[1..];
    }
    while config.accept_slash && bare.starts_with('/') {
        bare = &bare[1..];
    }

    let index = registry.lookup(bare)?;
    let spec = arguments[index].spec();
    if !spec.arity.takes_value() {
        return None;
    }

    let mut value = captures.get(2).expect("group 2 always captures").as_str();
    if !config.preserve_value_quotes {
        value = trim_quote_pair(value);
    }

    if spec.allow_multiple {
        let separators = config.equals_value_separators.as_slice();
        let mut replacement = Vec::new();
        for part in value.split(|ch| separators.contains(&ch)) {
            replacement.push(prefixed_name.to_string());
            if !part.is_empty() {
                replacement.push(part.to_string());
            }
        }
        Some(replacement)
    } else {
        Some(vec![prefixed_name.to_string(), value.to_string()])
    }
}

fn trim_quote_pair(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Rewrites grouped short switches (`-abc`) into one token per letter
/// (`-a -b -c`), preserving the original prefix character.
///
/// A letter bound to a value-accepting argument fails the whole parse
/// with [`ParseError::NonSwitchInGroup`]; all letters are checked before
/// any rewriting, so the token list is never partially mutated.
/// Unregistered letters pass through for the resolver to report.
pub(crate) fn expand_switch_groups(
    tokens: &mut Vec<String>,
    arguments: &[Argument],
    registry: &Registry,
    config: &SessionConfig,
) -> Result<()> {
    if !config.allow_switch_grouping {
        return Ok(());
    }

    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        if token.contains('=') || config.usage_triggers.contains(token) {
            index += 1;
            continue;
        }

        let Some(prefix) = token.chars().next() else {
            index += 1;
            continue;
        };
        let candidate = match prefix {
            '-' => config.accept_hyphen,
            '/' => config.accept_slash && !registry.is_known_long_name(&token[1..]),
            _ => false,
        };
        if !candidate {
            index += 1;
            continue;
        }

        let remainder = &token[1..];
        if remainder.len() < 2 || !LETTERS_ONLY.is_match(remainder) {
            index += 1;
            continue;
        }

        for letter in remainder.chars() {
            if let Some(argument) = registry.lookup_short(letter) {
                if arguments[argument].spec().arity != Arity::Switch {
                    return Err(ParseError::NonSwitchInGroup(letter));
                }
            }
        }

        let replacement: Vec<String> = remainder
            .chars()
            .map(|letter| format!("{prefix}{letter}"))
            .collect();
        debug!(token = %token, switches = replacement.len(), "expanded switch group");
        let advance = replacement.len();
        tokens.splice(index..=index, replacement);
        index += advance;
    }

    Ok(())
}
