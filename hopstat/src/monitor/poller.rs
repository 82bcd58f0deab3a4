use super::fetch::MetricsClient;
use super::tick::{Reading, TargetState, advance};

/// A named node and its metrics endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickRow {
    pub name: String,
    pub reading: Reading,
}

/// Scrapes a fixed set of targets, one after another.
pub struct Poller {
    client: MetricsClient,
    targets: Vec<(Target, TargetState)>,
}

impl Poller {
    #[must_use]
    pub fn new(client: MetricsClient, targets: Vec<Target>) -> Self {
        Self {
            client,
            targets: targets
                .into_iter()
                .map(|t| (t, TargetState::default()))
                .collect(),
        }
    }

    #[must_use]
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Samples every target once, in configuration order.
    ///
    /// A slow target delays the ones after it by at most the client timeout.
    pub async fn tick(&mut self) -> Vec<TickRow> {
        let mut rows = Vec::with_capacity(self.targets.len());

        for (target, state) in &mut self.targets {
            let sample = self.client.sample(&target.url).await;
            let (next, reading) = advance(*state, &sample);
            *state = next;

            rows.push(TickRow {
                name: target.name.clone(),
                reading,
            });
        }

        rows
    }
}
