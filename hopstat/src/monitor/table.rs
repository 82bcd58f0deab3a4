use std::fmt::Write as _;

use super::tick::Reading;

const RULE_WIDTH: usize = 75;

#[must_use]
pub fn banner(targets: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    writeln!(&mut out, "Monitoring System Started... (Targets: {targets})").ok();
    writeln!(&mut out, "{rule}").ok();
    writeln!(
        &mut out,
        "{:<10} | {:<10} | {:<12} | {:<10} | {:<12} | {:<10}",
        "Time", "Node", "Total RX", "RX TPS", "Total TX", "TX TPS"
    )
    .ok();
    writeln!(&mut out, "{rule}").ok();

    out
}

#[must_use]
pub fn tick_separator() -> String {
    "-".repeat(RULE_WIDTH)
}

#[must_use]
pub fn format_row(time: &str, name: &str, reading: &Reading) -> String {
    format!(
        "{:<10} | {:<10} | {:<12} | {:<10} | {:<12} | {:<10}",
        time,
        name,
        group_thousands(i128::from(reading.current.rx)),
        group_thousands(i128::from(reading.rx_rate)),
        group_thousands(i128::from(reading.current.tx)),
        group_thousands(i128::from(reading.tx_rate)),
    )
}

/// `1234567` -> `1,234,567`.
fn group_thousands(v: i128) -> String {
    let digits = v.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if v < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
