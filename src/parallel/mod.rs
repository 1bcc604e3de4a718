//! Parallel aggregation engine.
//!
//! Lines are distributed as fixed-size batches over a bounded queue to
//! N worker threads. Each worker owns its aggregation state
//! exclusively; shards are combined only in the reducer, after every
//! worker has reported.
//!
//! # Module Structure
//!
//! - `types`: pool configuration and work-queue messages
//! - `worker`: the worker thread loop
//! - `pool`: producer, shutdown protocol, and shard collection

mod pool;
mod types;
mod worker;

pub use pool::WorkerPool;
pub use types::PoolConfig;
