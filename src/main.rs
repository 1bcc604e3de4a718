use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use std::io::{BufRead, Write};

mod chunker;
mod cli;
mod parallel;
mod parser;
mod readers;
mod reduce;
mod report;
mod stats;
mod timestamp;

use cli::Cli;
use parallel::WorkerPool;

fn main() {
    let cli = Cli::parse();

    // Reading from a TTY with no logfile is almost always a mistake;
    // print a hint instead of blocking on input.
    if cli.logfile.is_none() && std::io::stdin().is_terminal() {
        println!("Usage: logtally [OPTIONS]");
        println!("Summary statistics for RFC3164 syslog streams");
        println!("Try 'logtally --help' for more information.");
        return;
    }

    if let Err(e) = validate_cli_args(&cli) {
        eprintln!("logtally: error: {}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(&cli) {
        eprintln!("logtally: error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = readers::open_input(cli.logfile.as_deref())?;
    let pool = WorkerPool::new(cli.pool_config());
    let summary = pool.run(input.lines())?;

    let mut output = readers::open_output(cli.output.as_deref())?;
    report::render(&summary, &mut output)?;
    output.flush()?;

    if !cli.quiet {
        if summary.parse_failures > 0 {
            eprintln!(
                "logtally: skipped {} malformed line(s) of {}",
                summary.parse_failures, summary.lines_seen
            );
        }
        if summary.overall.count() == 0 {
            eprintln!("logtally: no records parsed from input");
        }
    }

    Ok(())
}

/// Validate CLI arguments for early error detection
fn validate_cli_args(cli: &Cli) -> Result<()> {
    if let Some(ref path) = cli.logfile {
        if !path.exists() {
            return Err(anyhow::anyhow!("file not found: {}", path.display()));
        }
    }
    if cli.workers == Some(0) {
        return Err(anyhow::anyhow!("worker count must be greater than 0"));
    }
    if cli.batch_size == 0 {
        return Err(anyhow::anyhow!("batch size must be greater than 0"));
    }
    if cli.queue_capacity == 0 {
        return Err(anyhow::anyhow!("queue capacity must be greater than 0"));
    }
    Ok(())
}
