//! The N-Queens problem as a binary CSP.
//!
//! One variable per row, whose value is the column of that row's queen.
//! Every pair of rows is constrained: two queens may not share a column or
//! a diagonal. Solvable for n = 1 and n >= 4.

use std::{fmt::Write, sync::Arc};

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        graph::{ConstraintGraph, Domains, Neighbours, ProblemSemantics, VariableId},
    },
};

#[derive(Debug, Clone)]
pub struct NQueens;

impl ProblemSemantics for NQueens {
    type Value = i64;

    /// Queens attack along columns and diagonals; rows are distinct by
    /// construction.
    fn admissible(&self, (xi, vi): (VariableId, &i64), (xj, vj): (VariableId, &i64)) -> bool {
        vi != vj && (vi - vj).abs() != (i64::from(xi) - i64::from(xj)).abs()
    }
}

/// Builds the n-queens constraint graph: `domain[i] = {0, .., n-1}`,
/// `neighbours[i]` = every other row.
pub fn graph(n: usize) -> Result<ConstraintGraph<NQueens>> {
    let mut domains = Domains::new();
    let mut neighbours = Neighbours::new();
    for var in 0..n as VariableId {
        domains.insert(var, (0..n as i64).collect());
        neighbours.insert(
            var,
            (0..n as VariableId).filter(|&other| other != var).collect(),
        );
    }
    ConstraintGraph::new(domains, neighbours, Arc::new(NQueens))
}

/// Renders an assignment as a little board, one `X` per queen.
pub fn render(n: usize, assignment: &Assignment<i64>) -> String {
    let rule: String = format!("+{}", "-+".repeat(n));
    let mut board = String::new();
    board.push_str(&rule);
    board.push('\n');
    for row in 0..n as VariableId {
        board.push('|');
        for column in 0..n as i64 {
            let cell = if assignment.get(row) == Some(&column) {
                'X'
            } else {
                ' '
            };
            let _ = write!(board, "{cell}|");
        }
        board.push('\n');
        board.push_str(&rule);
        board.push('\n');
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_rejects_shared_columns_and_diagonals() {
        let queens = NQueens;
        assert!(!queens.admissible((0, &2), (3, &2)), "same column");
        assert!(!queens.admissible((0, &0), (2, &2)), "same diagonal");
        assert!(!queens.admissible((3, &1), (1, &3)), "same anti-diagonal");
        assert!(queens.admissible((0, &0), (1, &2)));
    }

    #[test]
    fn graph_shape_matches_the_board() {
        let graph = graph(5).unwrap();
        assert_eq!(graph.variable_count(), 5);
        for var in 0..5 {
            assert_eq!(graph.domain(var).len(), 5);
            assert_eq!(graph.neighbours(var).len(), 4);
            assert!(!graph.neighbours(var).contains(&var));
        }
    }

    #[test]
    fn renders_queens_on_their_rows() {
        let assignment: Assignment<i64> = [(0, 1), (1, 0)].into_iter().collect();
        let board = render(2, &assignment);
        assert_eq!(board, "+-+-+\n| |X|\n+-+-+\n|X| |\n+-+-+\n");
    }
}
