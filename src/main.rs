//! A small command-line front end for the `canon-json` library.
//!
//! Each file named on the command line (or stdin, when none is given) is
//! parsed and echoed in canonical form. Invalid documents print the error
//! message and location, and make the process exit with a failure status.
//!
//! Usage: `canon-json [--pretty] [FILE...]`
//!
//! Set `RUST_LOG=canon_json=debug` to see why documents are rejected.

use canon_json::{parse, serialize, serialize_pretty};
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut pretty = false;
    let mut paths = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--pretty" | "-p" => pretty = true,
            _ => paths.push(arg),
        }
    }

    let mut failed = false;
    if paths.is_empty() {
        let mut input = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut input) {
            eprintln!("<stdin>: {e}");
            return ExitCode::FAILURE;
        }
        failed |= !check("<stdin>", &input, pretty);
    } else {
        for path in &paths {
            match std::fs::read_to_string(path) {
                Ok(input) => failed |= !check(path, &input, pretty),
                Err(e) => {
                    eprintln!("{path}: {e}");
                    failed = true;
                }
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Parses one document and prints the result. Returns whether it parsed.
#[allow(clippy::print_stdout)]
fn check(name: &str, input: &str, pretty: bool) -> bool {
    tracing::debug!(name, bytes = input.len(), "checking document");
    match parse(input) {
        Ok(value) => {
            let output = if pretty {
                serialize_pretty(&value)
            } else {
                serialize(&value)
            };
            println!("{output}");
            true
        }
        Err(e) => {
            eprintln!("{name}:{}:{}: {e}", e.line, e.column);
            false
        }
    }
}
