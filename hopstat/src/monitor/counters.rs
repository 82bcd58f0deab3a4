pub const RX_FIELD: &str = "rx_messages_total";
pub const TX_FIELD: &str = "tx_messages_total";

/// Cumulative message counters of one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    pub rx: u64,
    pub tx: u64,
}

/// Extracts both counters from a Prometheus-style text body.
///
/// `None` unless both `rx_messages_total <n>` and `tx_messages_total <n>` are present.
#[must_use]
pub fn parse_counters(body: &str) -> Option<Counters> {
    Some(Counters {
        rx: find_counter(body, RX_FIELD)?,
        tx: find_counter(body, TX_FIELD)?,
    })
}

fn find_counter(body: &str, field: &str) -> Option<u64> {
    // First "<field> <digits>" occurrence anywhere in the body.
    body.match_indices(field).find_map(|(idx, _)| {
        let rest = body[idx + field.len()..].strip_prefix(' ')?;
        let len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if len == 0 {
            return None;
        }
        rest[..len].parse().ok()
    })
}
