use std::io;
use std::path::Path;

use crate::metric::{MetricName, Stat};
use crate::record::RunRecord;

#[derive(Debug, Clone, Copy)]
enum Column {
    Scenario,
    RunId,
    Stat(MetricName, Stat),
    OpsSec,
    ElapsedS,
}

impl Column {
    /// Header label, e.g. `RTT_p50` or `Hop2_p999`.
    fn name(self) -> String {
        match self {
            Self::Scenario => "scenario".to_string(),
            Self::RunId => "ts".to_string(),
            Self::Stat(metric, stat) => format!("{}_{stat}", metric.short_label()),
            Self::OpsSec => "ops_sec".to_string(),
            Self::ElapsedS => "elapsed_s".to_string(),
        }
    }
}

/// Export columns, in file order. Independent of which metrics a run has.
const COLUMNS: [Column; 15] = [
    Column::Scenario,
    Column::RunId,
    Column::Stat(MetricName::TotalRtt, Stat::P50),
    Column::Stat(MetricName::TotalRtt, Stat::P99),
    Column::Stat(MetricName::TotalRtt, Stat::P999),
    Column::Stat(MetricName::Hop1, Stat::P99),
    Column::Stat(MetricName::Hop1, Stat::P999),
    Column::Stat(MetricName::Hop2, Stat::P99),
    Column::Stat(MetricName::Hop2, Stat::P999),
    Column::Stat(MetricName::Hop3, Stat::P99),
    Column::Stat(MetricName::Hop3, Stat::P999),
    Column::Stat(MetricName::Hop4, Stat::P99),
    Column::Stat(MetricName::Hop4, Stat::P999),
    Column::OpsSec,
    Column::ElapsedS,
];

/// Header row of the export.
#[must_use]
pub fn csv_columns() -> Vec<String> {
    COLUMNS.iter().map(|c| c.name()).collect()
}

/// Writes one row per run, scenarios in the given order.
pub fn write_csv<W: io::Write>(
    writer: W,
    scenarios: &[(String, Vec<RunRecord>)],
) -> csv::Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    write_rows(&mut w, scenarios)?;
    w.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, scenarios: &[(String, Vec<RunRecord>)]) -> csv::Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    write_rows(&mut w, scenarios)?;
    w.flush()?;
    Ok(())
}

fn write_rows<W: io::Write>(
    w: &mut csv::Writer<W>,
    scenarios: &[(String, Vec<RunRecord>)],
) -> csv::Result<()> {
    w.write_record(csv_columns())?;

    for (scenario, runs) in scenarios {
        for run in runs {
            let row: Vec<String> = COLUMNS
                .iter()
                .map(|column| cell(scenario, run, *column))
                .collect();
            w.write_record(&row)?;
        }
    }

    Ok(())
}

fn cell(scenario: &str, run: &RunRecord, column: Column) -> String {
    match column {
        Column::Scenario => scenario.to_string(),
        Column::RunId => run.run_id.clone(),
        Column::Stat(metric, stat) => number(run.stat(metric, stat)),
        Column::OpsSec => number(run.ops_sec),
        Column::ElapsedS => number(run.elapsed_s),
    }
}

// Absent values are empty cells; `Debug` keeps the decimal point (`140.0`).
fn number(v: Option<f64>) -> String {
    v.map(|v| format!("{v:?}")).unwrap_or_default()
}
