//! Pool configuration and work-queue messages.

/// Configuration for the worker pool. The CLI layer owns where these
/// values come from; the pool only consumes them.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    pub workers: usize,
    pub batch_size: usize,
    /// Capacity of the bounded work queue, in batches. Bounds producer
    /// memory on very large inputs.
    pub queue_capacity: usize,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            workers: num_cpus::get(),
            batch_size: 10_000,
            queue_capacity: 32_767,
        }
    }
}

/// Message on the shared work queue. Every worker receives exactly one
/// `Shutdown` marker after the last batch has been enqueued.
#[derive(Debug)]
pub(crate) enum WorkMessage {
    Batch(Vec<String>),
    Shutdown,
}
