//! Prints canonical signatures and selectors of contract ABI methods.

use abi_sig::{render_output, run, App};
use abi_tracing::{init_tracing_subscriber, println_error, TracingSubscriberOptions};
use anyhow::Result;
use clap::Parser;
use std::io::{stdout, IsTerminal};

fn main() {
    let app = App::parse();
    init_tracing_subscriber(TracingSubscriberOptions {
        verbosity: Some(app.verbose),
        silent: Some(app.silent),
        ..Default::default()
    });
    if let Err(err) = run(app.command, app.hash).and_then(display_output) {
        println_error(&format!("{err:#}"));
        std::process::exit(1);
    }
}

fn display_output(message: serde_json::Value) -> Result<()> {
    print!("{}", render_output(&message, stdout().is_terminal())?);
    Ok(())
}
