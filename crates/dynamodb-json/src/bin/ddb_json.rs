//! `ddb-json` — decode DynamoDB attribute-value JSON (file or stdin) to plain
//! JSON (stdout).
//!
//! Usage:
//!   ddb-json [--pretty] [FILE]
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::io::{self, Read, Write};

use dynamodb_json::{AttributeValueDecoder, Error};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn read_input(path: Option<&str>) -> Result<Vec<u8>, Error> {
    match path {
        Some(path) => Ok(std::fs::read(path)?),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn run(pretty: bool, path: Option<&str>) -> Result<(), Error> {
    let input = read_input(path)?;
    debug!(bytes = input.len(), source = path.unwrap_or("stdin"), "read input");

    let decoded = AttributeValueDecoder::new().decode_slice(&input)?;
    let json = decoded.to_json();
    let mut text = if pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };
    text.push('\n');

    io::stdout().write_all(text.as_bytes())?;
    Ok(())
}

fn main() {
    init_tracing();

    let mut pretty = false;
    let mut path: Option<String> = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--pretty" => pretty = true,
            _ => path = Some(arg),
        }
    }

    if let Err(e) = run(pretty, path.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
