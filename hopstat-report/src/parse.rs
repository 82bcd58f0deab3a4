use std::path::Path;
use std::str::FromStr as _;

use crate::metric::{MetricName, TABLE_COLUMNS};
use crate::record::{ParsedReport, StatMap};

const OPS_SEC_TOKEN: &str = "Ops/sec";
const ELAPSED_TOKEN: &str = "Elapsed(s)";
const FIELD_SEPARATOR: char = '|';

/// Row label plus one field per statistic column.
const MIN_TABLE_FIELDS: usize = TABLE_COLUMNS.len() + 1;

/// Parses a load generator report.
///
/// Recognized lines:
/// - `Total RTT | 100 | 150 | 500 | 140 | 480 | 495 |`
/// - `Ops/sec   : 1234.5`
/// - `Elapsed(s): 10.0`
///
/// Everything else is ignored. Unparsable numbers are dropped, never defaulted.
#[must_use]
pub fn parse_report(text: &str) -> ParsedReport {
    let mut report = ParsedReport::default();

    for line in text.lines() {
        if line.contains(OPS_SEC_TOKEN) {
            if let Some(v) = parse_scalar_line(line, OPS_SEC_TOKEN) {
                report.ops_sec = Some(v);
            }
            continue;
        }
        if line.contains(ELAPSED_TOKEN) {
            if let Some(v) = parse_scalar_line(line, ELAPSED_TOKEN) {
                report.elapsed_s = Some(v);
            }
            continue;
        }

        if let Some((name, stats)) = parse_table_row(line) {
            // Duplicate rows: the last one wins.
            report.metrics.insert(name, stats);
        }
    }

    report
}

/// Reads and parses a report file. Invalid UTF-8 is replaced, not rejected.
pub fn parse_report_file(path: &Path) -> std::io::Result<ParsedReport> {
    let bytes = std::fs::read(path)?;
    Ok(parse_report(&String::from_utf8_lossy(&bytes)))
}

fn parse_table_row(line: &str) -> Option<(MetricName, StatMap)> {
    if !line.contains(FIELD_SEPARATOR) {
        return None;
    }

    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
    if parts.len() < MIN_TABLE_FIELDS {
        return None;
    }

    let name = MetricName::from_str(parts[0]).ok()?;

    let stats = TABLE_COLUMNS
        .iter()
        .zip(&parts[1..])
        .filter_map(|(stat, raw)| parse_number(raw).map(|v| (*stat, v)))
        .collect();

    Some((name, stats))
}

fn parse_scalar_line(line: &str, token: &str) -> Option<f64> {
    // Example: "Ops/sec   : 1234.5" -> 1234.5
    line.match_indices(token).find_map(|(idx, _)| {
        let rest = line[idx + token.len()..].trim_start();
        let rest = rest.strip_prefix(':')?.trim_start();
        leading_decimal(rest)?.parse().ok()
    })
}

/// `digits[.digits]` at the start of `s`.
fn leading_decimal(s: &str) -> Option<&str> {
    let int_len = count_digits(s);
    if int_len == 0 {
        return None;
    }

    let mut end = int_len;
    if let Some(after_dot) = s[int_len..].strip_prefix('.') {
        let frac_len = count_digits(after_dot);
        if frac_len > 0 {
            end += 1 + frac_len;
        }
    }

    Some(&s[..end])
}

fn count_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}
