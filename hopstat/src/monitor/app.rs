use anyhow::{Context, Result};
use std::time::Duration;

use super::cli::Cli;
use super::fetch::MetricsClient;
use super::poller::Poller;
use super::table;

pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Runs until Ctrl-C.
pub async fn run(cli: Cli) -> Result<()> {
    let client = MetricsClient::new(cli.timeout);
    let mut poller = Poller::new(client, cli.targets);

    print!("{}", table::banner(poller.target_count()));

    tokio::select! {
        res = tokio::signal::ctrl_c() => {
            res.context("listen for ctrl-c")?;
            println!("\nStopped.");
        }
        _ = monitor(&mut poller) => {}
    }

    Ok(())
}

async fn monitor(poller: &mut Poller) {
    let mut first_tick = true;

    loop {
        tokio::time::sleep(TICK_INTERVAL).await;
        let now = chrono::Local::now().format("%H:%M:%S").to_string();

        if !first_tick {
            println!("{}", table::tick_separator());
        }

        for row in poller.tick().await {
            println!("{}", table::format_row(&now, &row.name, &row.reading));
        }

        first_tick = false;
    }
}
