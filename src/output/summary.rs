//! Plain-text run summary.

use crate::aggregator::AggregateStats;

/// Render the statistics of one run as a few lines of text
pub fn format_summary(stats: &AggregateStats, collapsed: bool) -> String {
    let mut out = String::new();

    out.push_str("Trace merge summary\n");
    out.push_str(&format!("  Files:         {}\n", stats.files));
    out.push_str(&format!("  Lines read:    {}\n", stats.total_lines));
    out.push_str(&format!("  Events:        {}\n", stats.events));
    out.push_str(&format!("  Skipped lines: {}\n", stats.skipped_lines));
    out.push_str(&format!(
        "  Threads:       {}\n",
        if collapsed { "collapsed" } else { "unchanged" }
    ));

    out
}
