use std::collections::BTreeMap;

use crate::metric::{MetricName, Stat};
use crate::record::RunRecord;
use crate::stats::median;

/// Cross-run medians for one scenario.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioSummary {
    pub scenario: String,
    /// Number of runs that were aggregated.
    pub runs: usize,
    /// Only (metric, percentile) pairs with at least one value are present.
    pub percentiles: BTreeMap<(MetricName, Stat), f64>,
    pub ops_sec: Option<f64>,
    pub elapsed_s: Option<f64>,
}

impl ScenarioSummary {
    #[must_use]
    pub fn percentile(&self, metric: MetricName, stat: Stat) -> Option<f64> {
        self.percentiles.get(&(metric, stat)).copied()
    }
}

#[must_use]
pub fn summarize(scenario: &str, runs: &[RunRecord]) -> ScenarioSummary {
    let mut percentiles = BTreeMap::new();

    for metric in MetricName::ALL {
        for stat in Stat::PERCENTILES {
            if let Some(v) = median(runs.iter().filter_map(|r| r.stat(metric, stat))) {
                percentiles.insert((metric, stat), v);
            }
        }
    }

    ScenarioSummary {
        scenario: scenario.to_string(),
        runs: runs.len(),
        percentiles,
        ops_sec: median(runs.iter().filter_map(|r| r.ops_sec)),
        elapsed_s: median(runs.iter().filter_map(|r| r.elapsed_s)),
    }
}
