use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::time::{Duration, MissedTickBehavior};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut bind_addr: SocketAddr = "127.0.0.1:0".parse()?;
    let mut rate: u64 = 1000;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--bind" => {
                let addr = args.next().ok_or_else(|| {
                    anyhow::anyhow!("--bind requires an address, e.g. 127.0.0.1:9100")
                })?;
                bind_addr = addr.parse()?;
            }
            "--rate" => {
                let v = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--rate requires a number of messages/s"))?;
                rate = v.parse()?;
            }
            "-h" | "--help" => {
                eprintln!(
                    "hopstat-testserver\n\nUSAGE:\n  hopstat-testserver [--bind 127.0.0.1:0] [--rate 1000]\n\nOUTPUT:\n  Prints METRICS_URL=<url> to stdout once ready."
                );
                return Ok(());
            }
            other => {
                return Err(anyhow::anyhow!("unknown argument: {other}"));
            }
        }
    }

    let listener = TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;

    let state = hopstat_testserver::MetricsState::default();
    let app = hopstat_testserver::router(state.clone());

    println!("METRICS_URL=http://{addr}{}", hopstat_testserver::PATH_METRICS);

    // Simulated traffic: tx lags rx slightly, like a relay with in-flight messages.
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(1));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        loop {
            ticker.tick().await;
            state.add(rate, rate.saturating_sub(rate / 100));
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;

    Ok(())
}
