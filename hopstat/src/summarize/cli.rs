use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "hopstat-summarize",
    version,
    about = "Summarize recent benchmark runs per scenario",
    long_about = "Scans {root}/results/{scenario}/{run}/report.txt, prints a per-run table and the cross-run medians for every scenario, and optionally exports one CSV row per run.",
    after_help = "Examples:\n  hopstat-summarize\n  hopstat-summarize --scenarios s1 s2 --last 10\n  hopstat-summarize --root /data/bench --csv summary.csv"
)]
pub struct Cli {
    /// Project root containing `results/` (defaults to current working directory)
    #[arg(long, env = "HOPSTAT_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Scenarios to summarize, in output order
    #[arg(long, num_args = 1.., default_values = ["s1", "s2", "s3"])]
    pub scenarios: Vec<String>,

    /// How many of the most recent runs to include per scenario
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub last: u64,

    /// Write one row per run (all scenarios) to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,
}
