use super::counters::Counters;
use super::fetch::Sample;

/// Per-target memory between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetState {
    /// Counters shown on the previous tick; `None` before the first tick.
    previous: Option<Counters>,
}

/// What one target shows for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub current: Counters,
    pub rx_rate: i64,
    pub tx_rate: i64,
    pub reachable: bool,
}

/// Folds one sample into the target state.
///
/// Rates are the difference to the previous tick and are zero on the first
/// tick. An unreachable target reads as zero counters, and those zeros are what
/// the next tick is compared against.
#[must_use]
pub fn advance(state: TargetState, sample: &Sample) -> (TargetState, Reading) {
    let current = sample.counters_or_zero();

    let (rx_rate, tx_rate) = match state.previous {
        Some(prev) => (delta(current.rx, prev.rx), delta(current.tx, prev.tx)),
        None => (0, 0),
    };

    let next = TargetState {
        previous: Some(current),
    };
    let reading = Reading {
        current,
        rx_rate,
        tx_rate,
        reachable: sample.is_reachable(),
    };

    (next, reading)
}

/// Signed `current - previous`; negative after a counter reset or an outage.
fn delta(current: u64, previous: u64) -> i64 {
    if current >= previous {
        i64::try_from(current - previous).unwrap_or(i64::MAX)
    } else {
        i64::try_from(previous - current).map_or(i64::MIN, |d| -d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::error::FetchError;

    fn ok(rx: u64, tx: u64) -> Sample {
        Sample::Counters(Counters { rx, tx })
    }

    fn down() -> Sample {
        Sample::Unreachable(FetchError::MissingCounters)
    }

    #[test]
    fn first_tick_rates_are_zero() {
        let (state, reading) = advance(TargetState::default(), &ok(9_000_000_000, 42));
        assert_eq!(reading.rx_rate, 0);
        assert_eq!(reading.tx_rate, 0);
        assert_eq!(reading.current, Counters { rx: 9_000_000_000, tx: 42 });
        assert_eq!(state.previous, Some(Counters { rx: 9_000_000_000, tx: 42 }));
    }

    #[test]
    fn later_ticks_report_deltas() {
        let (state, _) = advance(TargetState::default(), &ok(1000, 900));
        let (_, reading) = advance(state, &ok(1500, 1300));
        assert_eq!((reading.rx_rate, reading.tx_rate), (500, 400));
        assert!(reading.reachable);
    }

    #[test]
    fn unreachable_reads_as_zero_and_resets_baseline() {
        let (state, _) = advance(TargetState::default(), &ok(1000, 900));

        let (state, reading) = advance(state, &down());
        assert_eq!(reading.current, Counters::default());
        assert_eq!((reading.rx_rate, reading.tx_rate), (-1000, -900));
        assert!(!reading.reachable);

        let (_, reading) = advance(state, &ok(1100, 950));
        assert_eq!((reading.rx_rate, reading.tx_rate), (1100, 950));
    }

    #[test]
    fn unreachable_on_first_tick_is_zero_zero() {
        let (_, reading) = advance(TargetState::default(), &down());
        assert_eq!(reading.current, Counters::default());
        assert_eq!((reading.rx_rate, reading.tx_rate), (0, 0));
    }

    #[test]
    fn delta_saturates() {
        assert_eq!(delta(u64::MAX, 0), i64::MAX);
        assert_eq!(delta(0, u64::MAX), i64::MIN);
        assert_eq!(delta(5, 7), -2);
    }
}
