use clap::Parser;
use std::time::Duration;

use super::poller::Target;

/// Upper bound for a single scrape; keeps a tick within its 1s cadence.
pub const MAX_TIMEOUT: Duration = Duration::from_millis(500);

fn parse_target(input: &str) -> Result<Target, String> {
    let (name, url) = input
        .split_once('=')
        .ok_or_else(|| format!("invalid target '{input}' (expected NAME=URL)"))?;

    let name = name.trim();
    if name.is_empty() {
        return Err(format!("invalid target '{input}': name cannot be empty"));
    }

    let parsed =
        url::Url::parse(url.trim()).map_err(|e| format!("invalid target url '{url}': {e}"))?;
    if parsed.scheme() != "http" {
        return Err(format!("only http:// targets are supported: {url}"));
    }
    if parsed.host_str().is_none() {
        return Err(format!("target url has no host: {url}"));
    }

    Ok(Target {
        name: name.to_string(),
        url: parsed.to_string(),
    })
}

fn parse_timeout(input: &str) -> Result<Duration, String> {
    let s = input.trim();

    let number_end = s
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit())
        .map_or(s.len(), |(idx, _)| idx);

    if number_end == 0 {
        return Err(format!("invalid timeout '{s}' (expected e.g. 500ms, 250ms)"));
    }

    let (number_str, unit_str) = s.split_at(number_end);
    let value: u64 = number_str
        .parse()
        .map_err(|_| format!("invalid timeout '{s}' (expected e.g. 500ms, 250ms)"))?;

    let timeout = match unit_str.trim() {
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => Duration::from_millis(value),
        "us" | "usec" | "usecs" | "microsecond" | "microseconds" => Duration::from_micros(value),
        "s" | "sec" | "secs" | "second" | "seconds" => Duration::from_secs(value),
        _ => {
            return Err(format!("invalid timeout '{s}' (expected e.g. 500ms, 250ms)"));
        }
    };

    if timeout.is_zero() {
        return Err("timeout must be greater than zero".to_string());
    }
    if timeout > MAX_TIMEOUT {
        return Err(format!("timeout '{s}' exceeds the maximum of {MAX_TIMEOUT:?}"));
    }

    Ok(timeout)
}

#[derive(Debug, Parser)]
#[command(
    name = "hopstat-monitor",
    version,
    about = "Live rx/tx message throughput of running nodes",
    long_about = "Scrapes each target's metrics endpoint once per second and prints cumulative rx/tx message counters with their per-second deltas.\n\nUnreachable targets read as zero; monitoring continues until interrupted (Ctrl-C).",
    after_help = "Examples:\n  hopstat-monitor\n  hopstat-monitor --target GATEWAY=http://10.0.0.5:9100/metrics --target EXCHANGE=http://10.0.0.6:9102/metrics"
)]
pub struct Cli {
    /// Node to monitor (repeatable, NAME=URL); shown in the given order
    #[arg(
        long = "target",
        value_name = "NAME=URL",
        value_parser = parse_target,
        default_values = [
            "GATEWAY=http://127.0.0.1:9100/metrics",
            "EXCHANGE=http://127.0.0.1:9102/metrics",
        ]
    )]
    pub targets: Vec<Target>,

    /// Per-scrape timeout (at most 500ms)
    #[arg(long, value_parser = parse_timeout, default_value = "500ms")]
    pub timeout: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap_or_else(|err| panic!("failed to parse args: {err}"))
    }

    #[test]
    fn default_targets() {
        let cli = parse(&["hopstat-monitor"]);
        let names: Vec<&str> = cli.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["GATEWAY", "EXCHANGE"]);
        assert_eq!(cli.targets[0].url, "http://127.0.0.1:9100/metrics");
        assert_eq!(cli.timeout, Duration::from_millis(500));
    }

    #[test]
    fn explicit_targets_replace_defaults() {
        let cli = parse(&[
            "hopstat-monitor",
            "--target",
            "B=http://10.0.0.2:9100/metrics",
            "--target",
            "A=http://10.0.0.1:9100/metrics",
            "--timeout",
            "250ms",
        ]);
        let names: Vec<&str> = cli.targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(cli.timeout, Duration::from_millis(250));
    }

    #[test]
    fn target_parsing_rejects_bad_input() {
        assert!(parse_target("no-equals").is_err());
        assert!(parse_target("=http://127.0.0.1:9100/metrics").is_err());
        assert!(parse_target("X=not a url").is_err());
        assert!(parse_target("X=https://127.0.0.1/metrics").is_err());
    }

    #[test]
    fn target_name_is_trimmed() {
        let t = parse_target("GATEWAY =http://127.0.0.1:9100/metrics")
            .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(t.name, "GATEWAY");
    }

    #[test]
    fn timeout_is_bounded() {
        assert_eq!(parse_timeout("100ms"), Ok(Duration::from_millis(100)));
        assert_eq!(parse_timeout("500ms"), Ok(Duration::from_millis(500)));
        assert!(parse_timeout("501ms").is_err());
        assert!(parse_timeout("1s").is_err());
        assert!(parse_timeout("0ms").is_err());
        assert!(parse_timeout("10x").is_err());
        assert!(parse_timeout("").is_err());
    }
}
