use std::time::Duration;

use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Diagnostics gathered over one search run.
///
/// Purely observational: nothing in the solver's control flow depends on
/// these counters. The backtrack count is the conventional figure of merit
/// for comparing consistency levels on the same instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search-tree nodes entered.
    pub nodes_visited: u64,
    /// Variables exhausted without a workable value, one per failed branch.
    pub backtracks: u64,
    /// Calls into the consistency engine.
    pub enforce_calls: u64,
    /// Domain values removed by successful enforcement steps.
    pub prunings: u64,
}

/// Renders a comparison table of labelled runs, e.g. the same instance
/// solved at each consistency level.
pub fn render_comparison_table(runs: &[(String, SearchStats, Duration)]) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Run"),
        Cell::new("Nodes"),
        Cell::new("Backtracks"),
        Cell::new("Enforce Calls"),
        Cell::new("Prunings"),
        Cell::new("Time (ms)"),
    ]));

    for (label, stats, elapsed) in runs {
        table.add_row(Row::new(vec![
            Cell::new(label),
            Cell::new(&stats.nodes_visited.to_string()),
            Cell::new(&stats.backtracks.to_string()),
            Cell::new(&stats.enforce_calls.to_string()),
            Cell::new(&stats.prunings.to_string()),
            Cell::new(&format!("{:.2}", elapsed.as_secs_f64() * 1000.0)),
        ]));
    }

    table.to_string()
}
