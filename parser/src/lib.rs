//! Declarative command-line argument parsing engine.
//!
//! This crate resolves a raw token list against a set of
//! [`ArgSpec`](optline_core::ArgSpec) definitions in four fixed stages:
//!
//! - **Registry** — short/long/alias lookup maps with collision
//!   detection, rebuilt at the start of every parse call.
//! - **Normalizer** — two rewrite passes in a fixed order: equals-sign
//!   expansion (`--name=value`), then short-switch-group expansion
//!   (`-abc`).
//! - **Resolver** — a cursor-driven loop classifying each token's prefix
//!   style and delegating value consumption to the matched argument's
//!   arity.
//! - **Validator** — the mandatory-argument check, then the certification
//!   list, both fail-fast.
//!
//! The trailing non-option tail is either captured as additional
//! arguments or rejected, per configuration. A parse call either fully
//! succeeds or yields exactly one [`ParseError`].
//!
//! # Main entry points
//!
//! - [`ParseSession`] — build a session from definitions (optionally with
//!   write-back bindings) and call [`parse`](ParseSession::parse).
//! - [`run_session`] / [`run_command_line`] — one-shot parsing of a
//!   [`SessionSpec`](optline_core::SessionSpec) into a serializable
//!   [`ParseReport`]; failures are embedded, never panicked.
//!
//! # Example
//!
//! ```
//! use optline_core::{ArgSpec, Certification};
//! use optline_parser::ParseSession;
//!
//! let mut session = ParseSession::new();
//! session.add(ArgSpec::single_value(Some('w'), Some("ws")).allow_multiple());
//! session.add(ArgSpec::single_value(Some('x'), Some("wss")).allow_multiple());
//! session.certify(Certification::at_least_one(&["ws", "wss"]));
//!
//! session.parse_line("-w 8080 -x 8443").unwrap();
//! assert_eq!(session.values("ws"), ["8080"]);
//! assert_eq!(session.values("wss"), ["8443"]);
//! ```

mod argument;
mod error;
mod normalize;
mod registry;
mod report;
mod resolve;
mod session;
mod tokenize;
mod validate;

pub use argument::{Argument, Binding};
pub use error::{FormatViolation, ParseError, Result};
pub use registry::Registry;
pub use report::{ArgumentReport, ParseReport};
pub use session::ParseSession;
pub use tokenize::{split_command_line, strip_surrounding_quotes};

use optline_core::SessionSpec;

/// Parses a token list against a spec and reports the outcome.
///
/// Builds a fresh [`ParseSession`] from `spec`, parses, and folds any
/// failure into the returned [`ParseReport`] instead of propagating it.
///
/// # Examples
///
/// ```
/// use optline_core::{ArgSpec, SessionSpec};
/// use optline_parser::run_session;
///
/// let spec = SessionSpec::new()
///     .with_arg(ArgSpec::single_value(Some('o'), Some("output")));
///
/// let tokens = vec!["-o".to_string(), "out.txt".to_string()];
/// let report = run_session(&spec, &tokens);
/// assert!(report.succeeded);
/// assert_eq!(report.arguments[0].values, ["out.txt"]);
/// ```
pub fn run_session(spec: &SessionSpec, tokens: &[String]) -> ParseReport {
    let mut session = ParseSession::from_spec(spec.clone());
    let outcome = session.parse(tokens);
    ParseReport::from_outcome(&session, outcome.err().as_ref())
}

/// Tokenizes a raw command-line string and parses it against a spec.
///
/// # Examples
///
/// ```
/// use optline_core::{ArgSpec, SessionSpec};
/// use optline_parser::run_command_line;
///
/// let spec = SessionSpec::new()
///     .with_arg(ArgSpec::switch(Some('v'), Some("verbose")));
///
/// let report = run_command_line(&spec, "-v");
/// assert!(report.succeeded);
/// assert!(report.arguments[0].parsed);
/// ```
pub fn run_command_line(spec: &SessionSpec, line: &str) -> ParseReport {
    run_session(spec, &split_command_line(line))
}
