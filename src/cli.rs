// CLI-specific types and structures
// This module contains the command-line interface definitions

use crate::parallel::PoolConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "logtally")]
#[command(about = "Summary statistics for RFC3164 syslog streams")]
#[command(
    long_about = "Summary statistics for RFC3164 syslog streams\n\nReads BSD-style syslog lines and prints a tab-delimited table of\nemergency/alert counts, oldest and newest message timestamps, and the\naverage message length, overall and per originating host.\n\nLines are fanned out to a pool of worker threads in fixed-size batches\nand the per-worker results are merged after the input is exhausted, so\nthe output is identical for any worker count.\n\nCOMMON EXAMPLES:\n  logtally -i messages.log\n  zcat messages.gz | logtally -n 8 -o report.tsv\n  logtally -i messages.log -c 50000 --queue-capacity 1024"
)]
#[command(version)]
pub struct Cli {
    /// Input logfile to analyze (stdin if not specified)
    #[arg(short = 'i', long = "logfile", help_heading = "Input Options")]
    pub logfile: Option<PathBuf>,

    /// Output file for the statistics table (stdout if not specified)
    #[arg(short = 'o', long = "output", help_heading = "Output Options")]
    pub output: Option<PathBuf>,

    /// Number of worker threads (defaults to the number of logical CPUs)
    #[arg(short = 'n', long = "workers", help_heading = "Performance Options")]
    pub workers: Option<usize>,

    /// Number of lines queued per batch
    #[arg(
        short = 'c',
        long = "batch-size",
        default_value_t = 10_000,
        help_heading = "Performance Options"
    )]
    pub batch_size: usize,

    /// Capacity of the bounded work queue, in batches
    #[arg(
        long = "queue-capacity",
        default_value_t = 32_767,
        help_heading = "Performance Options"
    )]
    pub queue_capacity: usize,

    /// Suppress stderr diagnostics (skip summaries and notices)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Pool configuration from the argument surface. The engine only
    /// ever sees these plain values; it reads no environment or global
    /// state itself.
    pub fn pool_config(&self) -> PoolConfig {
        PoolConfig {
            workers: self.workers.unwrap_or_else(num_cpus::get),
            batch_size: self.batch_size,
            queue_capacity: self.queue_capacity,
        }
    }
}
