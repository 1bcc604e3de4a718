//! Worker pool orchestration.
//!
//! One producer (the calling thread), N workers, one bounded work
//! queue. The producer enqueues every batch, then exactly one shutdown
//! marker per worker; queue FIFO ordering guarantees every batch has
//! been dequeued before any worker observes a marker, so no batch is
//! skipped and every worker shuts down cleanly.

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::bounded;
use std::io;
use std::thread;

use super::types::{PoolConfig, WorkMessage};
use super::worker::worker_thread;
use crate::chunker;
use crate::reduce::{self, Summary};
use crate::stats::ShardStats;

pub struct WorkerPool {
    config: PoolConfig,
}

impl WorkerPool {
    pub fn new(config: PoolConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline over a line sequence and reduce the shards
    /// into the final summary.
    ///
    /// The run either yields a complete, correctly merged summary or
    /// fails: a worker that dies before reporting its shard fails the
    /// whole run rather than silently under-counting.
    pub fn run<I>(&self, lines: I) -> Result<Summary>
    where
        I: Iterator<Item = io::Result<String>>,
    {
        let (work_sender, work_receiver) = bounded::<WorkMessage>(self.config.queue_capacity);
        // One slot per worker: a shard report never blocks.
        let (result_sender, result_receiver) = bounded::<ShardStats>(self.config.workers);

        let mut handles = Vec::with_capacity(self.config.workers);
        for _ in 0..self.config.workers {
            let work_receiver = work_receiver.clone();
            let result_sender = result_sender.clone();
            handles.push(thread::spawn(move || {
                worker_thread(work_receiver, result_sender)
            }));
        }
        drop(work_receiver);
        drop(result_sender);

        // Producer: blocks while the queue is full, so memory stays
        // bounded on inputs far larger than the queue.
        for batch in chunker::chunks(lines, self.config.batch_size) {
            let batch = batch.context("reading input")?;
            work_sender
                .send(WorkMessage::Batch(batch))
                .map_err(|_| anyhow!("work queue closed: all workers exited early"))?;
        }

        for _ in 0..self.config.workers {
            work_sender
                .send(WorkMessage::Shutdown)
                .map_err(|_| anyhow!("work queue closed: all workers exited early"))?;
        }
        drop(work_sender);

        let mut shards = Vec::with_capacity(self.config.workers);
        for _ in 0..self.config.workers {
            let shard = result_receiver
                .recv()
                .map_err(|_| anyhow!("a worker exited without reporting its shard"))?;
            shards.push(shard);
        }

        for handle in handles {
            match handle.join() {
                Ok(result) => result?,
                Err(_) => return Err(anyhow!("a worker thread panicked")),
            }
        }

        Ok(reduce::merge_shards(shards))
    }
}
