//! Streaming Comparison Table
//!
//! Renders one fixed-width row per sweep size as results arrive.
//!
//! The column set is a one-shot latch: the first row with at least one parsed
//! metric fixes the canonical header order, and every later row is reindexed
//! against it — metrics absent from a run render blank, metrics not in the
//! canonical set are silently dropped. Values within 25% of the row's minimum
//! non-missing value render green.

use crate::parse::{MetricRow, MetricValue};
use colored::Colorize;

/// Width of the size column.
const SIZE_WIDTH: usize = 8;
/// Width of a value field inside its cell.
const VALUE_WIDTH: usize = 12;
/// Full cell width including padding (`| ` + value + ` `).
const CELL_WIDTH: usize = VALUE_WIDTH + 2;

/// Values at or below `row minimum * HIGHLIGHT_FACTOR` are highlighted.
pub const HIGHLIGHT_FACTOR: f64 = 1.25;

/// Whether `value` is close enough to the row minimum to highlight.
fn within_highlight(value: f64, row_min: f64) -> bool {
    value <= row_min * HIGHLIGHT_FACTOR
}

enum TableState {
    /// No row with metrics seen yet; the header set is still open.
    AwaitingHeader,
    /// Header set fixed; all further rows reindex against it.
    Streaming { headers: Vec<String> },
}

/// Stateful renderer for the sweep table.
pub struct Table {
    state: TableState,
    color: bool,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// A fresh table awaiting its first row, with highlighting enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// A fresh table; with `color` off, near-minimum cells render plain.
    pub fn with_color(color: bool) -> Self {
        Self {
            state: TableState::AwaitingHeader,
            color,
        }
    }

    /// Canonical header order, once fixed.
    pub fn headers(&self) -> Option<&[String]> {
        match &self.state {
            TableState::AwaitingHeader => None,
            TableState::Streaming { headers } => Some(headers),
        }
    }

    /// Render the row for size `n`, including the header block if this row
    /// fixes the column set. The returned text ends with a newline.
    pub fn render_row(&mut self, n: u64, row: &MetricRow) -> String {
        let mut out = String::new();

        if matches!(self.state, TableState::AwaitingHeader) {
            if row.is_empty() {
                // Nothing parsed and no columns fixed yet: the header stays
                // open for a later run that does produce metrics.
                out.push_str(&format!(" {:<width$} \n", n, width = SIZE_WIDTH));
                return out;
            }
            let headers = row.names.clone();
            out.push_str(&header_block(&headers));
            self.state = TableState::Streaming { headers };
        }

        let TableState::Streaming { headers } = &self.state else {
            unreachable!("header set fixed above");
        };

        // Reindex against the canonical order; unknown metrics drop out here.
        let cells: Vec<MetricValue> = headers
            .iter()
            .map(|h| row.get(h).unwrap_or(MetricValue::Missing))
            .collect();

        let row_min = cells.iter().filter_map(|v| v.as_f64()).reduce(f64::min);

        out.push_str(&format!(" {:<width$} ", n, width = SIZE_WIDTH));
        for cell in cells {
            match cell {
                MetricValue::Missing => {
                    out.push('|');
                    out.push_str(&" ".repeat(CELL_WIDTH));
                }
                MetricValue::Value(v) => {
                    let field =
                        format!(" {:>width$} ", format!("{:.1}", v), width = VALUE_WIDTH);
                    let highlight =
                        self.color && row_min.is_some_and(|m| within_highlight(v, m));
                    out.push('|');
                    if highlight {
                        out.push_str(&field.green().to_string());
                    } else {
                        out.push_str(&field);
                    }
                }
            }
        }
        out.push('\n');
        out
    }

    /// Render the diagnostic row for a size whose invocation failed.
    pub fn render_failure(&self, n: u64, detail: &str) -> String {
        format!(" {:<width$} | {}\n", n, detail, width = SIZE_WIDTH)
    }
}

fn header_block(headers: &[String]) -> String {
    let mut divider = "-".repeat(SIZE_WIDTH + 2);
    for _ in headers {
        divider.push('+');
        divider.push_str(&"-".repeat(CELL_WIDTH));
    }

    let mut out = String::new();
    out.push_str(&divider);
    out.push('\n');
    out.push_str(" n");
    out.push_str(&" ".repeat(SIZE_WIDTH));
    for h in headers {
        out.push_str(&format!("| {:>width$} ", h, width = VALUE_WIDTH));
    }
    out.push('\n');
    out.push_str(&divider);
    out.push('\n');
    out
}
