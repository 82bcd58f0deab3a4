use bytes::Bytes;
use http_body_util::{BodyExt as _, Empty};
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::TokioExecutor;
use std::time::Duration;

use super::counters::{Counters, parse_counters};
use super::error::FetchError;

/// Outcome of one scrape.
#[derive(Debug)]
pub enum Sample {
    Counters(Counters),
    /// Network error, timeout, or a body without the counters.
    Unreachable(FetchError),
}

impl Sample {
    /// Counters as displayed: an unreachable node reads as zero.
    #[must_use]
    pub fn counters_or_zero(&self) -> Counters {
        match self {
            Self::Counters(c) => *c,
            Self::Unreachable(_) => Counters::default(),
        }
    }

    #[must_use]
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Counters(_))
    }
}

#[derive(Debug, Clone)]
pub struct MetricsClient {
    inner: Client<HttpConnector, Empty<Bytes>>,
    timeout: Duration,
}

impl MetricsClient {
    /// `timeout` bounds the whole scrape: connect, response head and body.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(timeout));

        let inner = Client::builder(TokioExecutor::new()).build(connector);

        Self { inner, timeout }
    }

    /// Scrapes `url`. Never fails; problems are reported as [`Sample::Unreachable`].
    pub async fn sample(&self, url: &str) -> Sample {
        let res = self
            .fetch_text(url)
            .await
            .and_then(|body| parse_counters(&body).ok_or(FetchError::MissingCounters));

        match res {
            Ok(counters) => Sample::Counters(counters),
            Err(err) => {
                tracing::debug!(url, %err, "scrape failed");
                Sample::Unreachable(err)
            }
        }
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let uri: hyper::Uri = url
            .parse()
            .map_err(|_| FetchError::InvalidUrl(url.to_string()))?;

        let scrape = async {
            let res = self.inner.get(uri).await?;
            let body = res.into_body().collect().await?.to_bytes();
            Ok::<_, FetchError>(String::from_utf8_lossy(&body).into_owned())
        };

        match tokio::time::timeout(self.timeout, scrape).await {
            Ok(res) => res,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }
}
