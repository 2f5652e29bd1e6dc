//! Loading a session spec from YAML and reporting the outcome.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optline-demos --example spec_file
//! ```

use optline_core::{SessionSpec, validate_session};
use optline_parser::run_command_line;

const SPEC: &str = "\
args:
  - short: w
    long: ws
    arity: single_value
    allow_multiple: true
  - short: x
    long: wss
    arity: single_value
    allow_multiple: true
  - short: v
    long: verbose
certifications:
  - kind: at_least_one
    args: [ws, wss]
config:
  accept_equals_syntax: true
";

fn main() {
    let spec: SessionSpec = match serde_yaml::from_str(SPEC) {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("spec did not parse: {err}");
            return;
        }
    };

    let errors = validate_session(&spec);
    if !errors.is_empty() {
        for error in errors {
            eprintln!("invalid spec: {error}");
        }
        return;
    }

    let report = run_command_line(&spec, "--ws=8080 -x 8443 -v");
    match serde_json::to_string_pretty(&report) {
        Ok(raw) => println!("{raw}"),
        Err(err) => eprintln!("report did not serialize: {err}"),
    }
}
