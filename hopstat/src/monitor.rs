//! Live throughput view over the `rx_messages_total` / `tx_messages_total`
//! counters of running nodes.

pub mod app;
pub mod cli;
pub mod counters;
pub mod error;
pub mod fetch;
pub mod poller;
pub mod table;
pub mod tick;

pub use counters::Counters;
pub use error::FetchError;
pub use fetch::{MetricsClient, Sample};
pub use poller::{Poller, Target, TickRow};
pub use tick::{Reading, TargetState, advance};
