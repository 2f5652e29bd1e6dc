//! Serializable parse outcome for scripting and the CLI.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::session::ParseSession;

/// Final state of a single argument after a parse call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArgumentReport {
    /// Display name (long form preferred).
    pub name: String,
    /// Whether the argument matched at least once.
    pub parsed: bool,
    /// Accumulated values in order of appearance.
    pub values: Vec<String>,
}

/// Machine-readable summary of one parse call.
///
/// A failed parse carries the error's display string plus a stable
/// snake_case `error_code` so scripts can branch without string matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseReport {
    /// Whether the parse fully succeeded.
    pub succeeded: bool,
    /// Per-argument final state, in definition order.
    pub arguments: Vec<ArgumentReport>,
    /// Captured trailing non-option tokens.
    pub additional_arguments: Vec<String>,
    /// Human-readable failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Stable failure tag (e.g. `missing_value`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl ParseReport {
    /// Builds a report from a session's state and an optional failure.
    pub fn from_outcome(session: &ParseSession, error: Option<&ParseError>) -> Self {
        Self {
            succeeded: error.is_none() && session.succeeded(),
            arguments: session
                .arguments()
                .iter()
                .map(|argument| ArgumentReport {
                    name: argument.spec().display_name(),
                    parsed: argument.is_parsed(),
                    values: argument.values().to_vec(),
                })
                .collect(),
            additional_arguments: session.additional_arguments().to_vec(),
            error: error.map(ToString::to_string),
            error_code: error.map(|err| err.code().to_string()),
        }
    }
}
