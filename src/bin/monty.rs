//!
//! Run a Monty bytecode file.
//!
//! Usage: `monty <file>`

use clap::Parser;
use clap::error::ErrorKind;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use monty::{Error, runtime::VM};

#[derive(Parser, Debug)]
#[command(name = "monty")]
#[command(about = "Interpret a Monty bytecode file")]
struct Args {
    /// Path to the Monty source file
    file: PathBuf,
}

/// Initialize logging to stderr. `RUST_LOG` overrides the default `warn` filter.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Reports the message on stderr and exits with failure status.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{}", message);
    process::exit(1);
}

fn main() {
    init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => err.exit(),
        Err(_) => fail("USAGE: monty file"),
    };

    let file = match File::open(&args.file) {
        Ok(file) => file,
        Err(_) => fail(format!("Error: Can't open file {}", args.file.display())),
    };

    debug!(file = %args.file.display(), "running");
    let stdout = io::stdout();
    let mut vm = VM::new(stdout.lock());
    match vm.run_reader(BufReader::new(file)) {
        Ok(()) => { },
        Err(Error::IoError(_)) => fail(format!("Error: Can't open file {}", args.file.display())),
        Err(err) => fail(err),
    }
}
