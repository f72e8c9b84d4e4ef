//! Heuristics for selecting which unassigned variable to branch on next.

use std::cmp::Reverse;

use crate::solver::{
    assignment::Assignment,
    graph::{ConstraintGraph, ProblemSemantics, VariableId},
};

/// A strategy for choosing the next variable to branch on.
///
/// Implementations are pure functions of the current state: they read the
/// graph's domains and the partial assignment, and mutate nothing. A good
/// choice here can change search time by orders of magnitude.
pub trait VariableSelectionHeuristic<S: ProblemSemantics> {
    /// Selects an unassigned variable, or `None` if every variable is bound.
    fn select(
        &self,
        graph: &ConstraintGraph<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId>;
}

/// Degree heuristic at the root, minimum-remaining-values everywhere else.
///
/// With an empty assignment domain sizes are not yet discriminating, so the
/// variable with the largest neighbour set is picked (most constrained
/// first). Afterwards the unassigned variable with the smallest current
/// domain is picked (fail first). Ties break toward the lower
/// [`VariableId`] so traces are reproducible.
pub struct DegreeMrvHeuristic;

impl<S: ProblemSemantics> VariableSelectionHeuristic<S> for DegreeMrvHeuristic {
    fn select(
        &self,
        graph: &ConstraintGraph<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        if assignment.is_empty() {
            return graph
                .variables()
                .min_by_key(|&var| (Reverse(graph.neighbours(var).len()), var));
        }
        graph
            .variables()
            .filter(|&var| !assignment.contains(var))
            .min_by_key(|&var| (graph.domain(var).len(), var))
    }
}

/// Selects the unassigned variable with the lowest id.
///
/// A deterministic baseline, mostly useful in tests and comparisons.
pub struct SelectFirstHeuristic;

impl<S: ProblemSemantics> VariableSelectionHeuristic<S> for SelectFirstHeuristic {
    fn select(
        &self,
        graph: &ConstraintGraph<S>,
        assignment: &Assignment<S::Value>,
    ) -> Option<VariableId> {
        graph
            .variables()
            .filter(|&var| !assignment.contains(var))
            .min()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::solver::graph::{tests::MustDiffer, Domains, Neighbours};

    /// A star graph: 0 is connected to 1, 2 and 3; the leaves only to 0.
    fn star_graph() -> ConstraintGraph<MustDiffer> {
        let mut domains = Domains::new();
        domains.insert(0, [1i64, 2].into_iter().collect());
        domains.insert(1, [1i64, 2, 3].into_iter().collect());
        domains.insert(2, [1i64].into_iter().collect());
        domains.insert(3, [1i64, 2, 3, 4].into_iter().collect());
        let mut neighbours = Neighbours::new();
        neighbours.insert(0, [1, 2, 3].into_iter().collect());
        neighbours.insert(1, [0].into_iter().collect());
        neighbours.insert(2, [0].into_iter().collect());
        neighbours.insert(3, [0].into_iter().collect());
        ConstraintGraph::new(domains, neighbours, Arc::new(MustDiffer)).unwrap()
    }

    #[test]
    fn picks_highest_degree_at_the_root() {
        let graph = star_graph();
        let assignment = Assignment::new();
        assert_eq!(DegreeMrvHeuristic.select(&graph, &assignment), Some(0));
    }

    #[test]
    fn picks_smallest_domain_once_assigned() {
        let graph = star_graph();
        let assignment: Assignment<i64> = [(0, 2)].into_iter().collect();
        // Variable 2 has the one-value domain.
        assert_eq!(DegreeMrvHeuristic.select(&graph, &assignment), Some(2));
    }

    #[test]
    fn skips_assigned_variables_and_reports_exhaustion() {
        let graph = star_graph();
        let mut assignment: Assignment<i64> =
            [(0, 2), (1, 1), (2, 1)].into_iter().collect();
        assert_eq!(DegreeMrvHeuristic.select(&graph, &assignment), Some(3));
        assignment.bind(3, 4);
        assert_eq!(DegreeMrvHeuristic.select(&graph, &assignment), None);
        assert_eq!(SelectFirstHeuristic.select(&graph, &assignment), None);
    }

    #[test]
    fn select_first_is_id_ordered() {
        let graph = star_graph();
        let assignment: Assignment<i64> = [(0, 2)].into_iter().collect();
        assert_eq!(SelectFirstHeuristic.select(&graph, &assignment), Some(1));
    }
}
