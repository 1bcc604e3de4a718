//! Shard merging.
//!
//! Aggregation is commutative and associative per field (sum, min,
//! max), so any distribution of lines across shards reduces to the same
//! result. The only field that is not a plain fold is the average,
//! which is recomputed once from the merged totals.

use crate::stats::{AggregateStats, ShardStats};
use std::collections::HashMap;

/// Final merged result of a run.
#[derive(Debug, PartialEq)]
pub struct Summary {
    pub overall: AggregateStats,
    pub per_host: HashMap<String, AggregateStats>,
    pub lines_seen: u64,
    pub parse_failures: u64,
}

/// Merge shard results into one summary.
///
/// Per-host scopes merge over the union of host keys; a host absent
/// from a shard contributes nothing to that host's merge.
pub fn merge_shards(shards: Vec<ShardStats>) -> Summary {
    let mut overall = AggregateStats::new();
    let mut per_host: HashMap<String, AggregateStats> = HashMap::new();
    let mut lines_seen = 0u64;
    let mut parse_failures = 0u64;

    for shard in shards {
        overall.merge(&shard.overall);
        lines_seen += shard.lines_seen;
        parse_failures += shard.parse_failures;
        for (host, stats) in shard.per_host {
            per_host.entry(host).or_default().merge(&stats);
        }
    }

    Summary {
        overall,
        per_host,
        lines_seen,
        parse_failures,
    }
}
