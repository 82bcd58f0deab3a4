/// Latency rows recognized in a benchmark report, in display order.
///
/// The string form is the verbatim row label written by the load generator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
pub enum MetricName {
    #[strum(serialize = "Total RTT")]
    TotalRtt,
    #[strum(serialize = "Hop1(C->F)")]
    Hop1,
    #[strum(serialize = "Hop2(F->M)")]
    Hop2,
    #[strum(serialize = "Hop3(M->F)")]
    Hop3,
    #[strum(serialize = "Hop4(F->C)")]
    Hop4,
}

impl MetricName {
    pub const ALL: [Self; 5] = [Self::TotalRtt, Self::Hop1, Self::Hop2, Self::Hop3, Self::Hop4];

    /// Short column prefix used in exported files.
    #[must_use]
    pub fn short_label(self) -> &'static str {
        match self {
            Self::TotalRtt => "RTT",
            Self::Hop1 => "Hop1",
            Self::Hop2 => "Hop2",
            Self::Hop3 => "Hop3",
            Self::Hop4 => "Hop4",
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
pub enum Stat {
    Min,
    Avg,
    Max,
    P50,
    P99,
    P999,
}

impl Stat {
    pub const PERCENTILES: [Self; 3] = [Self::P50, Self::P99, Self::P999];
}

/// Binding of table columns (after the row label) to statistics.
///
/// Row layout: `name | min | avg | max | p50 | p99 | p99.9 |`.
pub const TABLE_COLUMNS: [Stat; 6] = [
    Stat::Min,
    Stat::Avg,
    Stat::Max,
    Stat::P50,
    Stat::P99,
    Stat::P999,
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr as _;

    #[test]
    fn metric_names_round_trip_through_report_labels() {
        for name in MetricName::ALL {
            let parsed = MetricName::from_str(&name.to_string())
                .unwrap_or_else(|e| panic!("failed to parse {name}: {e}"));
            assert_eq!(parsed, name);
        }
    }

    #[test]
    fn metric_name_match_is_exact() {
        assert!(MetricName::from_str("total rtt").is_err());
        assert!(MetricName::from_str("Total RTT ").is_err());
        assert!(MetricName::from_str("Hop5(C->X)").is_err());
    }

    #[test]
    fn stat_labels_are_snake_case() {
        assert_eq!(Stat::P999.to_string(), "p999");
        assert_eq!(Stat::Avg.to_string(), "avg");
    }
}
