//! Reusable parse sessions.

use tracing::debug;

use optline_core::{ArgSpec, Certification, SessionConfig, SessionSpec};

use crate::argument::Argument;
use crate::error::{ParseError, Result};
use crate::normalize;
use crate::registry::Registry;
use crate::resolve;
use crate::tokenize::split_command_line;
use crate::validate;

/// A configured set of arguments and certifications that can parse token
/// lists.
///
/// A session may be reused across multiple parse calls: every call resets
/// each argument's parsed state and rebuilds the lookup maps before
/// resolving tokens, so no state leaks between calls. Parsing is
/// single-threaded and synchronous; a session is safe to reuse
/// sequentially but provides no internal locking for concurrent use.
///
/// # Examples
///
/// ```
/// use optline_core::ArgSpec;
/// use optline_parser::ParseSession;
///
/// let mut session = ParseSession::new();
/// session.add(ArgSpec::single_value(Some('w'), Some("ws")).allow_multiple());
/// session.add(ArgSpec::single_value(Some('x'), Some("wss")).allow_multiple());
///
/// let tokens: Vec<String> = ["-w", "8080", "-x", "8443", "-x", "9443"]
///     .iter()
///     .map(|t| t.to_string())
///     .collect();
/// session.parse(&tokens).unwrap();
///
/// assert_eq!(session.values("ws"), ["8080"]);
/// assert_eq!(session.values("wss"), ["8443", "9443"]);
/// assert!(session.is_parsed("ws"));
/// ```
pub struct ParseSession {
    arguments: Vec<Argument>,
    certifications: Vec<Certification>,
    config: SessionConfig,
    additional: Vec<String>,
    succeeded: bool,
}

impl Default for ParseSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ParseSession {
    /// Creates an empty session with default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Creates an empty session with the given configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            arguments: Vec::new(),
            certifications: Vec::new(),
            config,
            additional: Vec::new(),
            succeeded: false,
        }
    }

    /// Builds a session from a serializable spec (no bindings).
    pub fn from_spec(spec: SessionSpec) -> Self {
        let mut session = Self::with_config(spec.config);
        for arg in spec.args {
            session.add(arg);
        }
        session.certifications = spec.certifications;
        session
    }

    /// Registers an argument definition.
    pub fn add(&mut self, spec: ArgSpec) {
        self.arguments.push(Argument::new(spec));
    }

    /// Registers an argument definition with a write-back binding invoked
    /// immediately after each successful match (and once after the loop
    /// when default values apply).
    pub fn add_bound(&mut self, spec: ArgSpec, binding: impl FnMut(&[String]) + 'static) {
        self.arguments.push(Argument::bound(spec, binding));
    }

    /// Registers a certification evaluated after the mandatory check.
    pub fn certify(&mut self, certification: Certification) {
        self.certifications.push(certification);
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Mutable access to the configuration, for toggling between calls.
    pub fn config_mut(&mut self) -> &mut SessionConfig {
        &mut self.config
    }

    /// Parses a token list.
    ///
    /// Runs the fixed pipeline: reset, registry build, equals-sign
    /// expansion, switch-group expansion, the resolution loop, tail
    /// collection, default write-backs, mandatory check, certifications.
    /// Either every stage succeeds or exactly one [`ParseError`] is
    /// returned.
    pub fn parse(&mut self, tokens: &[String]) -> Result<()> {
        self.succeeded = false;
        self.additional.clear();
        for argument in &mut self.arguments {
            argument.reset();
        }

        debug!(tokens = tokens.len(), "parsing command line");
        let registry = Registry::build(&self.arguments, self.config.ignore_case)?;

        let mut list = tokens.to_vec();
        normalize::expand_equals_syntax(&mut list, &self.arguments, &registry, &self.config);
        normalize::expand_switch_groups(&mut list, &self.arguments, &registry, &self.config)?;

        let tail_start = resolve::run(&list, &mut self.arguments, &registry, &self.config)?;

        let tail = &list[tail_start..];
        if self.config.accept_additional_arguments {
            self.additional.extend(tail.iter().cloned());
        } else if !tail.is_empty() {
            return Err(ParseError::UnexpectedExtraArguments {
                tail: tail.to_vec(),
            });
        }

        for argument in &mut self.arguments {
            argument.apply_default();
        }

        validate::check_mandatory(&self.arguments)?;
        validate::check_certifications(&self.arguments, &self.certifications, &registry)?;

        self.succeeded = true;
        Ok(())
    }

    /// Tokenizes `line` with the quote-aware splitter and parses it.
    pub fn parse_line(&mut self, line: &str) -> Result<()> {
        self.parse(&split_command_line(line))
    }

    /// All registered arguments with their current state.
    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    /// Finds an argument by any of its names, honoring the configured
    /// case sensitivity.
    pub fn argument(&self, name: &str) -> Option<&Argument> {
        self.arguments
            .iter()
            .find(|argument| argument.spec().matches_name(name, self.config.ignore_case))
    }

    /// Whether the named argument matched in the last parse call.
    pub fn is_parsed(&self, name: &str) -> bool {
        self.argument(name).is_some_and(Argument::is_parsed)
    }

    /// Values accumulated for the named argument, empty when it never
    /// matched and carries no default.
    pub fn values(&self, name: &str) -> &[String] {
        self.argument(name).map_or(&[], Argument::values)
    }

    /// The captured trailing non-option tokens from the last parse call.
    pub fn additional_arguments(&self) -> &[String] {
        &self.additional
    }

    /// Whether the last parse call fully succeeded.
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }
}

impl std::fmt::Debug for ParseSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParseSession")
            .field("arguments", &self.arguments)
            .field("certifications", &self.certifications)
            .field("config", &self.config)
            .field("additional", &self.additional)
            .field("succeeded", &self.succeeded)
            .finish()
    }
}
