use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::time::{Duration, sleep};

pub const PATH_METRICS: &str = "/metrics";
pub const PATH_PARTIAL: &str = "/metrics/partial";
pub const PATH_SLOW: &str = "/slow";

/// Longer than any monitor fetch timeout.
pub const SLOW_DELAY: Duration = Duration::from_secs(2);

/// Cumulative message counters exposed on `/metrics`.
#[derive(Debug, Clone, Default)]
pub struct MetricsState {
    rx_messages_total: Arc<AtomicU64>,
    tx_messages_total: Arc<AtomicU64>,
    scrapes_total: Arc<AtomicU64>,
}

impl MetricsState {
    pub fn add(&self, rx: u64, tx: u64) {
        self.rx_messages_total.fetch_add(rx, Ordering::Relaxed);
        self.tx_messages_total.fetch_add(tx, Ordering::Relaxed);
    }

    pub fn rx_messages_total(&self) -> u64 {
        self.rx_messages_total.load(Ordering::Relaxed)
    }

    pub fn tx_messages_total(&self) -> u64 {
        self.tx_messages_total.load(Ordering::Relaxed)
    }

    pub fn scrapes_total(&self) -> u64 {
        self.scrapes_total.load(Ordering::Relaxed)
    }

    fn inc_scrapes_total(&self) {
        self.scrapes_total.fetch_add(1, Ordering::Relaxed);
    }
}

#[derive(Debug, Clone)]
pub struct TestServerUrls {
    pub metrics: String,
    pub partial: String,
    pub slow: String,
}

impl TestServerUrls {
    pub fn new(base_url: &str) -> Self {
        Self {
            metrics: format!("{base_url}{PATH_METRICS}"),
            partial: format!("{base_url}{PATH_PARTIAL}"),
            slow: format!("{base_url}{PATH_SLOW}"),
        }
    }
}

async fn handle_metrics(State(state): State<MetricsState>) -> String {
    state.inc_scrapes_total();
    format!(
        "# TYPE rx_messages_total counter\n\
         rx_messages_total {}\n\
         # TYPE tx_messages_total counter\n\
         tx_messages_total {}\n\
         sessions_active 3\n",
        state.rx_messages_total(),
        state.tx_messages_total()
    )
}

async fn handle_partial(State(state): State<MetricsState>) -> String {
    state.inc_scrapes_total();
    format!("rx_messages_total {}\n", state.rx_messages_total())
}

async fn handle_slow(State(state): State<MetricsState>) -> String {
    state.inc_scrapes_total();
    sleep(SLOW_DELAY).await;
    format!(
        "rx_messages_total {}\ntx_messages_total {}\n",
        state.rx_messages_total(),
        state.tx_messages_total()
    )
}

pub fn router(state: MetricsState) -> Router {
    Router::new()
        .route(PATH_METRICS, get(handle_metrics))
        .route(PATH_PARTIAL, get(handle_partial))
        .route(PATH_SLOW, get(handle_slow))
        .with_state(state)
}

pub struct TestServer {
    urls: TestServerUrls,
    state: MetricsState,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl TestServer {
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let state = MetricsState::default();
        let app = router(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = serve.await;
        });

        let urls = TestServerUrls::new(&format!("http://{addr}"));

        Ok(Self {
            urls,
            state,
            shutdown_tx: Some(shutdown_tx),
            task: Some(task),
        })
    }

    pub fn urls(&self) -> &TestServerUrls {
        &self.urls
    }

    pub fn state(&self) -> &MetricsState {
        &self.state
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if self.shutdown_tx.is_some()
            && let Some(task) = self.task.take()
        {
            task.abort();
        }
    }
}
