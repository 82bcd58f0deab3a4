//! Parsing and summarizing of historical load generator reports.
//!
//! Layout on disk: `{root}/results/{scenario}/{run_id}/report.txt`.

pub mod export;
pub mod format;
pub mod load;
pub mod metric;
pub mod parse;
pub mod record;
pub mod stats;
pub mod summary;
pub mod table;

pub use export::{csv_columns, write_csv, write_csv_file};
pub use load::{find_runs, load_runs};
pub use metric::{MetricName, Stat, TABLE_COLUMNS};
pub use parse::{parse_report, parse_report_file};
pub use record::{ParsedReport, RunRecord};
pub use summary::{ScenarioSummary, summarize};
pub use table::{render_runs_table, render_summary};
