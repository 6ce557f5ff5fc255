mod config;
mod error;
mod input;
mod protocol;
mod repl;
mod store;

use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use config::{Config, LogConfig};
use input::{Lines, Prompt};
use repl::Repl;
use store::Store;

/// Interactive in-memory key-value store
///
/// Commands: PUT <KEY> <VALUE>, GET <KEY>, EXIT or QUIT.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Prompt shown in interactive mode
    #[arg(long)]
    prompt: Option<String>,

    /// Log level or filter directive, RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<String>,
}

fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&log.level)
            .with_context(|| format!("invalid log level '{}'", log.level))?,
    };

    // Replies own stdout, so logs go to stderr or a file
    let (writer, ansi) = match &log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        None => (BoxMakeWriter::new(io::stderr), io::stderr().is_terminal()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(prompt) = args.prompt {
        config.prompt = prompt;
    }
    if let Some(level) = args.log_level {
        config.log.level = level;
    }

    init_logging(&config.log)?;

    info!("Starting kvcache - interactive in-memory KV store");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let repl = Repl::new(Arc::new(Store::new()));
    let mut out = io::stdout();

    if io::stdin().is_terminal() {
        let mut prompt = Prompt::new(config.prompt).context("failed to start line editor")?;
        repl.run(&mut prompt, &mut out)?;
    } else {
        info!("Reading commands from non-interactive stdin");
        let mut lines = Lines::new(io::stdin().lock());
        repl.run(&mut lines, &mut out)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
