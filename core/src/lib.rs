//! Core definition types for the optline argument parsing engine.
//!
//! This crate defines the declarative model a parse session is built from:
//!
//! - [`ArgSpec`] — a named argument with short/long forms, aliases, an
//!   [`Arity`], and optionality/multiplicity metadata.
//! - [`Certification`] — a cross-argument constraint (at-least-one,
//!   exactly-one, all-or-none, mutual exclusion, requirement) evaluated
//!   after parsing.
//! - [`SessionConfig`] — the normalizer/resolver toggles (prefix styles,
//!   switch grouping, equals syntax, case folding, lenient mode).
//! - [`SessionSpec`] — a serializable bundle of the three, loadable from
//!   JSON or YAML.
//!
//! Validation ([`validate_session`]) catches structural errors such as
//! nameless arguments, duplicate names, and certifications referencing
//! unknown arguments before a session is ever run.
//!
//! # Example
//!
//! ```
//! use optline_core::*;
//!
//! let spec = SessionSpec::new()
//!     .with_arg(
//!         ArgSpec::single_value(Some('w'), Some("ws"))
//!             .with_description("Plain listener port")
//!             .allow_multiple(),
//!     )
//!     .with_arg(
//!         ArgSpec::single_value(Some('x'), Some("wss"))
//!             .with_description("TLS listener port")
//!             .allow_multiple(),
//!     )
//!     .with_certification(Certification::at_least_one(&["ws", "wss"]));
//!
//! assert!(validate_session(&spec).is_empty());
//! assert!(spec.find_arg("wss").is_some());
//! ```

mod config;
mod session;
mod types;
mod validate;

pub use config::SessionConfig;
pub use session::SessionSpec;
pub use types::{ArgSpec, Arity, Certification, CertificationKind};
pub use validate::{ValidationError, validate_session};
