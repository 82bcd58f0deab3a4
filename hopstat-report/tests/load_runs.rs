use std::fs;
use std::path::Path;

use anyhow::Context as _;
use hopstat_report::{MetricName, Stat, find_runs, load_runs, summarize};

const REPORT: &str = "\
Elapsed(s): 10.0
Ops/sec   : 1234.5
Metric | Min(ns) | Avg(ns) | Max(ns) | p50 | p99 | p99.9 |
Total RTT | 100 | 150 | 500 | 140 | 480 | 495 |
";

fn write_run(
    root: &Path,
    scenario: &str,
    run_id: &str,
    file: &str,
    body: &str,
) -> anyhow::Result<()> {
    let dir = root.join("results").join(scenario).join(run_id);
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    fs::write(dir.join(file), body).context("write run file")?;
    Ok(())
}

fn run_ids(runs: &[hopstat_report::RunRecord]) -> Vec<&str> {
    runs.iter().map(|r| r.run_id.as_str()).collect()
}

#[test]
fn last_n_runs_are_returned_oldest_first() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    for id in ["20240101_000000", "20240102_000000", "20240103_000000"] {
        write_run(tmp.path(), "s1", id, "report.txt", REPORT)?;
    }

    let runs = load_runs(tmp.path(), "s1", 2);
    assert_eq!(run_ids(&runs), vec!["20240102_000000", "20240103_000000"]);
    assert!(runs.iter().all(|r| r.scenario == "s1"));
    Ok(())
}

#[test]
fn discovery_is_newest_first_and_ignores_files() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    write_run(tmp.path(), "s1", "20240101_000000", "report.txt", REPORT)?;
    write_run(tmp.path(), "s1", "20240105_000000", "report.txt", REPORT)?;
    fs::write(tmp.path().join("results/s1/notes.txt"), "stray file")?;

    let dirs = find_runs(tmp.path(), "s1");
    let names: Vec<String> = dirs
        .iter()
        .filter_map(|d| d.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["20240105_000000", "20240101_000000"]);
    Ok(())
}

#[test]
fn truncation_happens_before_unusable_runs_are_dropped() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    write_run(tmp.path(), "s1", "20240101_000000", "report.txt", REPORT)?;
    write_run(tmp.path(), "s1", "20240102_000000", "report.txt", "no table here\n")?;
    write_run(tmp.path(), "s1", "20240103_000000", "loadgen.log", "raw log\n")?;
    write_run(tmp.path(), "s1", "20240104_000000", "report.txt", REPORT)?;

    // The three newest directories are considered; only one of them is usable.
    let runs = load_runs(tmp.path(), "s1", 3);
    assert_eq!(run_ids(&runs), vec!["20240104_000000"]);

    let runs = load_runs(tmp.path(), "s1", 10);
    assert_eq!(run_ids(&runs), vec!["20240101_000000", "20240104_000000"]);
    Ok(())
}

#[test]
fn missing_scenario_yields_no_runs() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    assert!(find_runs(tmp.path(), "nope").is_empty());
    assert!(load_runs(tmp.path(), "nope", 5).is_empty());
    Ok(())
}

#[test]
fn loaded_record_matches_report_content() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    write_run(tmp.path(), "s2", "20240101_000000", "report.txt", REPORT)?;

    let runs = load_runs(tmp.path(), "s2", 5);
    assert_eq!(runs.len(), 1);

    let run = &runs[0];
    assert_eq!(run.stat(MetricName::TotalRtt, Stat::Min), Some(100.0));
    assert_eq!(run.stat(MetricName::TotalRtt, Stat::P999), Some(495.0));
    assert_eq!(run.ops_sec, Some(1234.5));
    assert_eq!(run.elapsed_s, Some(10.0));

    let summary = summarize("s2", &runs);
    assert_eq!(summary.runs, 1);
    assert_eq!(summary.percentile(MetricName::TotalRtt, Stat::P99), Some(480.0));
    Ok(())
}

#[test]
fn invalid_utf8_report_is_still_parsed() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("results/s1/20240101_000000");
    fs::create_dir_all(&dir)?;

    let mut body = b"\xff\xfe garbage\n".to_vec();
    body.extend_from_slice(REPORT.as_bytes());
    fs::write(dir.join("report.txt"), body)?;

    assert_eq!(load_runs(tmp.path(), "s1", 5).len(), 1);
    Ok(())
}

#[test]
fn hidden_directories_are_not_runs() -> anyhow::Result<()> {
    let tmp = tempfile::tempdir()?;
    write_run(tmp.path(), "s1", "20240101_000000", "report.txt", REPORT)?;
    write_run(tmp.path(), "s1", ".hidden", "report.txt", REPORT)?;
    write_run(tmp.path(), "s1", ".tmp_20240102_000000", "report.txt", REPORT)?;

    assert_eq!(find_runs(tmp.path(), "s1").len(), 1);

    let runs = load_runs(tmp.path(), "s1", 10);
    assert_eq!(run_ids(&runs), vec!["20240101_000000"]);
    Ok(())
}
