use anyhow::{Context, Result};
use std::io::Write as _;

use hopstat_report::{
    RunRecord, load_runs, render_runs_table, render_summary, summarize, write_csv_file,
};

use super::cli::Cli;

pub fn run(cli: Cli) -> Result<()> {
    let last = usize::try_from(cli.last).unwrap_or(usize::MAX);

    // Each scenario is loaded once; repeated names still print once per request.
    let mut all_runs: Vec<(String, Vec<RunRecord>)> = Vec::with_capacity(cli.scenarios.len());
    for scenario in &cli.scenarios {
        if all_runs.iter().any(|(s, _)| s == scenario) {
            continue;
        }
        let runs = load_runs(&cli.root, scenario, last);
        tracing::debug!(scenario = %scenario, runs = runs.len(), "loaded runs");
        all_runs.push((scenario.clone(), runs));
    }

    let mut out = std::io::stdout().lock();
    for scenario in &cli.scenarios {
        let runs = all_runs
            .iter()
            .find(|(s, _)| s == scenario)
            .map_or(&[][..], |(_, runs)| runs.as_slice());

        write!(out, "{}", render_runs_table(runs)).context("write stdout")?;
        write!(out, "{}", render_summary(&summarize(scenario, runs))).context("write stdout")?;
    }

    if let Some(path) = &cli.csv {
        write_csv_file(path, &all_runs)
            .with_context(|| format!("write csv {}", path.display()))?;
        writeln!(out, "\nWrote CSV: {}", path.display()).context("write stdout")?;
    }

    out.flush().context("flush stdout")?;
    Ok(())
}
