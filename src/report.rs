//! Tab-delimited report rendering.

use crate::reduce::Summary;
use crate::stats::AggregateStats;
use std::io::{self, Write};

const HEADER: [&str; 5] = [
    "Host",
    "Emergency_Alert",
    "Oldest_Msg",
    "Newest_Msg",
    "Avg_Msg_Length",
];

/// Render the summary table: the header, the `Overall` row, then one
/// row per host. Host rows are sorted by name so equal inputs produce
/// identical bytes regardless of worker count.
pub fn render<W: Write>(summary: &Summary, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", HEADER.join("\t"))?;
    write_row(out, "Overall", &summary.overall)?;

    let mut hosts: Vec<&String> = summary.per_host.keys().collect();
    hosts.sort();
    for host in hosts {
        write_row(out, host, &summary.per_host[host])?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, label: &str, stats: &AggregateStats) -> io::Result<()> {
    match (stats.oldest(), stats.newest(), stats.average_len()) {
        (Some(oldest), Some(newest), Some(avg)) => writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            label,
            stats.alerts(),
            oldest,
            newest,
            format_average(avg)
        ),
        // A scope with no records gets a distinguished no-data row; the
        // sentinel timestamps never reach the output.
        _ => writeln!(out, "{}\t{}\t-\t-\t-", label, stats.alerts()),
    }
}

/// Whole-number averages keep a trailing `.0`; everything else uses the
/// shortest decimal form.
fn format_average(avg: f64) -> String {
    if avg.fract() == 0.0 {
        format!("{:.1}", avg)
    } else {
        format!("{}", avg)
    }
}
