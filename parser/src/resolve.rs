//! The resolution loop: token classification and value consumption.

use tracing::{debug, warn};

use optline_core::{Arity, SessionConfig};

use crate::argument::Argument;
use crate::error::{FormatViolation, ParseError, Result};
use crate::registry::Registry;

/// What one token turned out to be.
enum TokenClass<'t> {
    /// An option token carrying this bare name.
    Name(&'t str),
    /// Not an option; resolution ends here.
    NonOption,
}

/// Classifies a token by its prefix style.
///
/// `-x` is a short name, `--name` a long name, `/x` and `/name` resolve by
/// length when slash acceptance is on. Malformed prefixes (a bare `-` or
/// `/`, a leading `//`, a multi-character name after `-`, a one-character
/// name after `--`) are format violations. A token whose prefix style is
/// disabled classifies as a non-option.
fn classify<'t>(token: &'t str, config: &SessionConfig) -> Result<TokenClass<'t>> {
    match token.chars().next() {
        Some('-') if config.accept_hyphen => {
            let rest = &token[1..];
            if rest.is_empty() {
                return Err(FormatViolation::BareHyphen.into());
            }
            if let Some(long) = rest.strip_prefix('-') {
                if long.chars().count() == 1 {
                    return Err(
                        FormatViolation::ShortNameAfterDoubleHyphen(long.to_string()).into(),
                    );
                }
                Ok(TokenClass::Name(long))
            } else {
                if rest.chars().count() != 1 {
                    return Err(FormatViolation::LongNameAfterSingleHyphen(rest.to_string()).into());
                }
                Ok(TokenClass::Name(rest))
            }
        }
        Some('/') if config.accept_slash => {
            let rest = &token[1..];
            if rest.is_empty() {
                return Err(FormatViolation::BareSlash.into());
            }
            if rest.starts_with('/') {
                return Err(FormatViolation::DoubleSlash.into());
            }
            Ok(TokenClass::Name(rest))
        }
        _ => Ok(TokenClass::NonOption),
    }
}

/// Whether a token is option-shaped under the accepted prefix styles.
pub(crate) fn looks_like_option(token: &str, config: &SessionConfig) -> bool {
    (config.accept_hyphen && token.starts_with('-'))
        || (config.accept_slash && token.starts_with('/'))
}

/// Whether a token is option-shaped *and* resolves to a known argument.
fn resolves_as_option(token: &str, registry: &Registry, config: &SessionConfig) -> bool {
    match classify(token, config) {
        Ok(TokenClass::Name(name)) => registry.lookup(name).is_some(),
        _ => false,
    }
}

/// Walks the normalized token list, consuming values into argument state.
///
/// Returns the index where resolution stopped; everything from there on is
/// the candidate additional-arguments tail. In lenient mode an unknown
/// option token is skipped, together with its follower when the follower
/// does not itself look like an option. All other token-level errors stay
/// fatal.
pub(crate) fn run(
    tokens: &[String],
    arguments: &mut [Argument],
    registry: &Registry,
    config: &SessionConfig,
) -> Result<usize> {
    let mut cursor = 0;
    while cursor < tokens.len() {
        let token = &tokens[cursor];
        let name = match classify(token, config)? {
            TokenClass::NonOption => {
                debug!(token = %token, index = cursor, "non-option token ends resolution");
                break;
            }
            TokenClass::Name(name) => name,
        };

        match registry.lookup(name) {
            Some(index) => cursor = consume(tokens, cursor, index, arguments, registry, config)?,
            None if config.lenient => {
                warn!(token = %token, "skipping unknown argument in lenient mode");
                cursor += 1;
                if cursor < tokens.len() && !looks_like_option(&tokens[cursor], config) {
                    cursor += 1;
                }
            }
            None => return Err(ParseError::UnknownArgument(token.clone())),
        }
    }
    Ok(cursor)
}

/// Consumes value tokens for one matched argument and fires its write-back.
fn consume(
    tokens: &[String],
    cursor: usize,
    index: usize,
    arguments: &mut [Argument],
    registry: &Registry,
    config: &SessionConfig,
) -> Result<usize> {
    let spec = arguments[index].spec();
    if arguments[index].is_parsed() && !spec.allow_multiple {
        return Err(ParseError::ArgumentUsedTwice(spec.display_name()));
    }

    let arity = spec.arity;
    let mut next = cursor + 1;
    match arity {
        Arity::Switch => {}
        Arity::SingleValue => match tokens.get(next) {
            Some(value) if !resolves_as_option(value, registry, config) => {
                arguments[index].push_value(value.clone());
                next += 1;
            }
            _ => {
                return Err(ParseError::MissingValue {
                    name: arguments[index].spec().display_name(),
                });
            }
        },
        Arity::MultiValue => {
            let first = next;
            while next < tokens.len() && !looks_like_option(&tokens[next], config) {
                arguments[index].push_value(tokens[next].clone());
                next += 1;
            }
            if next == first {
                return Err(ParseError::MissingValue {
                    name: arguments[index].spec().display_name(),
                });
            }
        }
    }

    arguments[index].mark_parsed();
    arguments[index].write_back();
    debug!(
        name = %arguments[index].spec().display_name(),
        values = arguments[index].values().len(),
        "matched argument"
    );
    Ok(next)
}
