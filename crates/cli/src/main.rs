use clap::Parser;
use sift_cli::{logging, spawn_reader, Shell};
use sift_database::{Config, Database};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

/// Interactive filter/projection queries over CSV files.
#[derive(Parser, Debug)]
#[command(name = "sift", version, about)]
struct Cli {
    /// Path to the YAML application config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Per-query timeout in milliseconds; overrides the config file.
    #[arg(long)]
    timeout_ms: Option<u64>,
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(ms) = cli.timeout_ms {
        config = config.with_query_timeout(ms);
    }

    logging::init(&config.access_log, &config.error_log)?;
    info!(timeout_ms = ?config.query_timeout, "starting sift");

    let db = Database::new(config);
    let mut shell = Shell::new(&db, io::stdout().lock());

    let interrupt = shell.interrupt_flag();
    let on_sigint = interrupt.clone();
    ctrlc::set_handler(move || on_sigint.cancel())?;
    let lines = spawn_reader(io::BufReader::new(io::stdin()), interrupt)?;

    info!("sift is ready to accept queries");
    shell.run_lines(lines)?;
    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
