//! Worker thread for parallel aggregation.

use anyhow::{anyhow, Result};
use crossbeam_channel::{Receiver, Sender};

use super::types::WorkMessage;
use crate::parser::RecordParser;
use crate::stats::ShardStats;

/// Worker loop: drain batches from the shared queue into a private
/// shard until the shutdown marker arrives, then move the shard into
/// the result channel.
///
/// A line that fails to parse is counted and skipped; it never aborts
/// the worker or leaks a partial update into the shard.
pub(crate) fn worker_thread(
    work_receiver: Receiver<WorkMessage>,
    result_sender: Sender<ShardStats>,
) -> Result<()> {
    let parser = RecordParser::new()?;
    let mut shard = ShardStats::new();

    loop {
        match work_receiver.recv() {
            Ok(WorkMessage::Batch(lines)) => {
                for line in &lines {
                    shard.lines_seen += 1;
                    match parser.parse(line) {
                        Ok(record) => shard.absorb(&record),
                        Err(_) => shard.parse_failures += 1,
                    }
                }
            }
            // Shutdown marker, or a queue closed by an aborted producer:
            // report what was aggregated and stop.
            Ok(WorkMessage::Shutdown) | Err(_) => break,
        }
    }

    result_sender
        .send(shard)
        .map_err(|_| anyhow!("result channel closed before shard report"))?;
    Ok(())
}
