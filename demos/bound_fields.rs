//! Write-back bindings into caller-owned state.
//!
//! Each argument can carry an explicit setter closure. The engine calls it
//! immediately after every successful match with the accumulated values;
//! arguments with default values that never matched are written back once
//! after the loop.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p optline-demos --example bound_fields
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use optline_core::ArgSpec;
use optline_parser::ParseSession;

#[derive(Debug, Default)]
struct ListenerConfig {
    plain_ports: Vec<u16>,
    tls_ports: Vec<u16>,
    verbose: bool,
}

fn main() {
    let config = Rc::new(RefCell::new(ListenerConfig::default()));

    let mut session = ParseSession::new();

    let target = Rc::clone(&config);
    session.add_bound(
        ArgSpec::single_value(Some('w'), Some("ws"))
            .allow_multiple()
            .with_default_values(&["8080"]),
        move |values| {
            target.borrow_mut().plain_ports =
                values.iter().filter_map(|v| v.parse().ok()).collect();
        },
    );

    let target = Rc::clone(&config);
    session.add_bound(
        ArgSpec::single_value(Some('x'), Some("wss")).allow_multiple(),
        move |values| {
            target.borrow_mut().tls_ports =
                values.iter().filter_map(|v| v.parse().ok()).collect();
        },
    );

    let target = Rc::clone(&config);
    session.add_bound(ArgSpec::switch(Some('v'), Some("verbose")), move |_| {
        target.borrow_mut().verbose = true;
    });

    match session.parse_line("-x 8443 -x 9443 -v") {
        // ws never matched, so its default port was written back after
        // the loop.
        Ok(()) => println!("bound configuration: {:#?}", config.borrow()),
        Err(err) => eprintln!("parse failed: {err}"),
    }
}
