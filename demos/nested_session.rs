//! Two-level session composition.
//!
//! One outer argument carries a complete nested command line as its value.
//! The outer session extracts the string; the caller strips its wrapping
//! quotes, re-tokenizes it, and parses the tokens with an inner session
//! that has its own argument definitions and configuration.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optline-demos --example nested_session
//! ```

use optline_core::{ArgSpec, Certification};
use optline_parser::{ParseSession, split_command_line, strip_surrounding_quotes};

fn main() {
    let argv: Vec<String> = vec!["--wp".to_string(), "\"-w 80 -x 443\"".to_string()];
    println!("outer tokens: {argv:?}");

    // Outer session: one argument whose value is a nested command line.
    let mut outer = ParseSession::new();
    outer.add(
        ArgSpec::single_value(Some('p'), Some("wp"))
            .with_description("Arguments for the inner component"),
    );

    if let Err(err) = outer.parse(&argv) {
        eprintln!("outer parse failed: {err}");
        return;
    }

    let raw = outer.values("wp")[0].clone();
    let inner_tokens = split_command_line(strip_surrounding_quotes(&raw));
    println!("inner tokens: {inner_tokens:?}");

    // Inner session: independently configured, with its own constraints.
    let mut inner = ParseSession::new();
    inner.add(
        ArgSpec::single_value(Some('w'), Some("ws"))
            .with_description("Plain listener port")
            .allow_multiple(),
    );
    inner.add(
        ArgSpec::single_value(Some('x'), Some("wss"))
            .with_description("TLS listener port")
            .allow_multiple(),
    );
    inner.certify(Certification::at_least_one(&["ws", "wss"]));

    match inner.parse(&inner_tokens) {
        Ok(()) => {
            println!("plain ports: {:?}", inner.values("ws"));
            println!("tls ports:   {:?}", inner.values("wss"));
        }
        Err(err) => eprintln!("inner parse failed: {err}"),
    }
}
