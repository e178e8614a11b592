//! Bracket-Metric Line Parser
//!
//! Scans benchmark output line by line for metric lines of the form
//! `[name] value`, where `value` is a decimal number or a single `-` marking
//! a missing measurement. The pattern is a filter over arbitrary text, not a
//! grammar: informational output, warnings, and anything else the benchmark
//! prints are simply ignored.

use regex::Regex;
use std::sync::OnceLock;

/// A single parsed metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// Numeric measurement, rounded half-up at the tenths digit.
    Value(f64),
    /// The benchmark reported `-` for this metric.
    Missing,
}

impl MetricValue {
    /// The numeric value, if present.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            MetricValue::Value(v) => Some(v),
            MetricValue::Missing => None,
        }
    }
}

/// Metrics parsed from one benchmark run, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricRow {
    /// Metric names as encountered.
    pub names: Vec<String>,
    /// One value per name, parallel to `names`.
    pub values: Vec<MetricValue>,
}

impl MetricRow {
    /// Whether the run produced any parseable metric at all.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Value for `name`, using the first occurrence if it repeats.
    pub fn get(&self, name: &str) -> Option<MetricValue> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.values[i])
    }
}

fn metric_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\[\s*([\w\-/:#@]+)\]\s*([\d.]+|-)").expect("metric pattern is valid")
    })
}

/// Round half-up at the tenths digit (so 12.34 -> 12.3, 2.25 -> 2.3).
fn round_tenths(v: f64) -> f64 {
    (v * 10.0 + 0.5).floor() / 10.0
}

/// Parse captured benchmark output into a metric row.
///
/// Lines not matching the bracket pattern are skipped, as are matches whose
/// numeric token fails to parse (e.g. a bare `...`).
pub fn parse_output(text: &str) -> MetricRow {
    let mut row = MetricRow::default();
    for line in text.lines() {
        let Some(caps) = metric_pattern().captures(line) else {
            continue;
        };
        let name = &caps[1];
        let value = match &caps[2] {
            "-" => MetricValue::Missing,
            raw => match raw.parse::<f64>() {
                Ok(v) => MetricValue::Value(round_tenths(v)),
                Err(_) => continue,
            },
        };
        row.names.push(name.to_string());
        row.values.push(value);
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_value_rounded_to_tenths() {
        let row = parse_output("[time] 12.34\n");
        assert_eq!(row.get("time"), Some(MetricValue::Value(12.3)));
    }

    #[test]
    fn test_rounding_is_half_up() {
        let row = parse_output("[a] 2.25\n[b] 2.24\n[c] 7\n");
        assert_eq!(row.get("a"), Some(MetricValue::Value(2.3)));
        assert_eq!(row.get("b"), Some(MetricValue::Value(2.2)));
        assert_eq!(row.get("c"), Some(MetricValue::Value(7.0)));
    }

    #[test]
    fn test_hyphen_records_missing() {
        let row = parse_output("[time] -\n");
        assert_eq!(row.get("time"), Some(MetricValue::Missing));
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let row = parse_output("[sort] 1.0\n[merge] 2.0\n[total] 3.0\n");
        assert_eq!(row.names, vec!["sort", "merge", "total"]);
    }

    #[test]
    fn test_name_charset() {
        let row = parse_output("[radix/lsd-8:v2#x@y] 5.0\n");
        assert_eq!(row.names, vec!["radix/lsd-8:v2#x@y"]);
    }

    #[test]
    fn test_leading_whitespace_inside_brackets() {
        let row = parse_output("[  warm] 1.5\n");
        assert_eq!(row.names, vec!["warm"]);
    }

    #[test]
    fn test_non_metric_lines_ignored() {
        let out = "starting up...\n\
                   [time] 4.0\n\
                   warning: cache cold\n\
                   x [skipped] 9.9\n\
                   [time 4.0\n";
        let row = parse_output(out);
        assert_eq!(row.names, vec!["time"]);
    }

    #[test]
    fn test_unparseable_numeric_token_skipped() {
        // `...` matches the character class but is not a number.
        let row = parse_output("[time] ...\n[ok] 1.0\n");
        assert_eq!(row.names, vec!["ok"]);
    }

    #[test]
    fn test_empty_output() {
        let row = parse_output("");
        assert!(row.is_empty());
    }
}
