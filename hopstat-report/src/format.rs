pub const ABSENT: &str = "-";

/// Display form used in text tables.
///
/// Latencies are integral nanoseconds and print as such once they are large;
/// everything else gets three decimals.
#[must_use]
pub fn format_value(v: Option<f64>) -> String {
    match v {
        None => ABSENT.to_string(),
        Some(v) if v.abs() >= 1000.0 && v.fract() == 0.0 => format!("{v:.0}"),
        Some(v) => format!("{v:.3}"),
    }
}
