use std::collections::BTreeMap;

use crate::metric::{MetricName, Stat};

pub type StatMap = BTreeMap<Stat, f64>;
pub type MetricMap = BTreeMap<MetricName, StatMap>;

/// Everything extracted from a single `report.txt`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedReport {
    pub metrics: MetricMap,
    pub ops_sec: Option<f64>,
    pub elapsed_s: Option<f64>,
}

impl ParsedReport {
    /// A report without any recognized metric row does not count as a run.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

/// One completed benchmark execution.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub scenario: String,
    /// Timestamp-named run directory (e.g. `20260205_123456`).
    pub run_id: String,
    pub metrics: MetricMap,
    pub ops_sec: Option<f64>,
    pub elapsed_s: Option<f64>,
}

impl RunRecord {
    #[must_use]
    pub fn from_report(scenario: &str, run_id: &str, report: ParsedReport) -> Self {
        Self {
            scenario: scenario.to_string(),
            run_id: run_id.to_string(),
            metrics: report.metrics,
            ops_sec: report.ops_sec,
            elapsed_s: report.elapsed_s,
        }
    }

    #[must_use]
    pub fn stat(&self, metric: MetricName, stat: Stat) -> Option<f64> {
        self.metrics.get(&metric)?.get(&stat).copied()
    }
}
