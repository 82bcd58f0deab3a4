use std::path::{Path, PathBuf};

use crate::parse::parse_report_file;
use crate::record::RunRecord;

pub const RESULTS_DIR: &str = "results";
pub const REPORT_FILE: &str = "report.txt";
pub const LEGACY_LOG_FILE: &str = "loadgen.log";

/// Run directories of `scenario`, newest first.
///
/// Run directories are timestamp-named (`20260205_123456`), so descending name
/// order is reverse chronological. Dot-prefixed directories are ignored and a
/// missing scenario directory yields no runs.
#[must_use]
pub fn find_runs(root: &Path, scenario: &str) -> Vec<PathBuf> {
    let base = root.join(RESULTS_DIR).join(scenario);

    let entries = match std::fs::read_dir(&base) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!(dir = %base.display(), %err, "scenario directory not readable");
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.is_dir() && !is_hidden(p))
        .collect();

    dirs.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    dirs
}

fn is_hidden(path: &Path) -> bool {
    path.file_name().is_some_and(|n| n.to_string_lossy().starts_with('.'))
}

/// Loads up to `last` most recent runs of `scenario`, returned oldest first.
///
/// Runs without a parsable report are dropped, as are reports that contain no
/// recognized metric rows.
#[must_use]
pub fn load_runs(root: &Path, scenario: &str, last: usize) -> Vec<RunRecord> {
    let mut runs: Vec<RunRecord> = find_runs(root, scenario)
        .into_iter()
        .take(last)
        .filter_map(|dir| load_run(scenario, &dir))
        .collect();

    runs.reverse();
    runs
}

fn load_run(scenario: &str, dir: &Path) -> Option<RunRecord> {
    let run_id = dir.file_name()?.to_string_lossy().into_owned();

    let report_path = dir.join(REPORT_FILE);
    if !report_path.is_file() {
        if dir.join(LEGACY_LOG_FILE).is_file() {
            // Legacy runs only have the raw generator log; there is no parser for it.
            tracing::debug!(scenario, run_id = %run_id, "skipping run with legacy log only");
        } else {
            tracing::debug!(scenario, run_id = %run_id, "skipping run without report");
        }
        return None;
    }

    let report = match parse_report_file(&report_path) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(path = %report_path.display(), %err, "failed to read report");
            return None;
        }
    };

    if report.is_empty() {
        tracing::debug!(scenario, run_id = %run_id, "skipping report without metric rows");
        return None;
    }

    Some(RunRecord::from_report(scenario, &run_id, report))
}
