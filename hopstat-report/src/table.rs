use std::fmt::Write as _;

use crate::format::format_value;
use crate::metric::{MetricName, Stat};
use crate::record::RunRecord;
use crate::summary::ScenarioSummary;

const RUNS_HEADER: [&str; 6] = ["ts", "RTT_p50", "RTT_p99", "RTT_p999", "Ops/sec", "Elapsed(s)"];
const SUMMARY_HEADER: &str = "Metric | p50(ns) | p99(ns) | p99.9(ns)";
const SUMMARY_RULE: &str = "--------------------------------------";

/// Compact per-run table: Total RTT percentiles plus throughput, oldest run first.
#[must_use]
pub fn render_runs_table(runs: &[RunRecord]) -> String {
    if runs.is_empty() {
        return "No runs found.\n".to_string();
    }

    let mut out = String::new();
    let header = RUNS_HEADER.join(" | ");

    out.push_str("\nPer-run (most useful fields)\n");
    writeln!(&mut out, "{header}").ok();
    writeln!(&mut out, "{}", "-".repeat(header.len() + 10)).ok();

    for r in runs {
        let row = [
            r.run_id.clone(),
            format_value(r.stat(MetricName::TotalRtt, Stat::P50)),
            format_value(r.stat(MetricName::TotalRtt, Stat::P99)),
            format_value(r.stat(MetricName::TotalRtt, Stat::P999)),
            format_value(r.ops_sec),
            format_value(r.elapsed_s),
        ];
        writeln!(&mut out, "{}", row.join(" | ")).ok();
    }

    out
}

#[must_use]
pub fn render_summary(summary: &ScenarioSummary) -> String {
    let mut out = String::new();

    writeln!(&mut out, "\nSummary (median of {} runs) - {}", summary.runs, summary.scenario).ok();
    writeln!(&mut out, "{SUMMARY_HEADER}").ok();
    writeln!(&mut out, "{SUMMARY_RULE}").ok();

    for metric in MetricName::ALL {
        let cells: Vec<String> = Stat::PERCENTILES
            .iter()
            .map(|stat| format_value(summary.percentile(metric, *stat)))
            .collect();
        writeln!(&mut out, "{metric} | {}", cells.join(" | ")).ok();
    }

    writeln!(&mut out, "{SUMMARY_RULE}").ok();
    writeln!(&mut out, "Ops/sec (median): {}", format_value(summary.ops_sec)).ok();
    writeln!(&mut out, "Elapsed(s) (median): {}", format_value(summary.elapsed_s)).ok();

    out
}
