//! Heuristics for the order in which a variable's candidate values are tried.

use crate::solver::{
    assignment::Assignment,
    graph::{ConstraintGraph, ProblemSemantics, VariableId},
};

/// A strategy for ordering the candidate values of a variable.
///
/// Implementations read the current domains and mutate nothing. Orderings
/// must be recomputed fresh at every branch point: domains change as the
/// search prunes and restores, so a cached ordering would go stale.
pub trait ValueOrderingHeuristic<S: ProblemSemantics> {
    /// Returns `var`'s current domain values, in the order to try them.
    fn order(
        &self,
        graph: &ConstraintGraph<S>,
        assignment: &Assignment<S::Value>,
        var: VariableId,
    ) -> Vec<S::Value>;
}

/// Least-constraining value: try first the value that conflicts with the
/// fewest candidate values of unassigned neighbours.
///
/// The conflict count of candidate `v` is the number of
/// (neighbour, neighbour-value) pairs the constraint predicate rejects,
/// over the *current* domains of unassigned neighbours. Ties break by the
/// value's `Ord` so runs are reproducible.
pub struct LeastConstrainingValueHeuristic;

impl LeastConstrainingValueHeuristic {
    fn conflicts<S: ProblemSemantics>(
        graph: &ConstraintGraph<S>,
        assignment: &Assignment<S::Value>,
        var: VariableId,
        value: &S::Value,
    ) -> usize {
        graph
            .neighbours(var)
            .iter()
            .filter(|&&other| other != var && !assignment.contains(other))
            .map(|&other| {
                graph
                    .domain(other)
                    .iter()
                    .filter(|&other_value| {
                        !graph.admissible((var, value), (other, other_value))
                    })
                    .count()
            })
            .sum()
    }
}

impl<S: ProblemSemantics> ValueOrderingHeuristic<S> for LeastConstrainingValueHeuristic {
    fn order(
        &self,
        graph: &ConstraintGraph<S>,
        assignment: &Assignment<S::Value>,
        var: VariableId,
    ) -> Vec<S::Value> {
        let mut scored: Vec<(usize, S::Value)> = graph
            .domain(var)
            .iter()
            .map(|value| (Self::conflicts(graph, assignment, var, value), value.clone()))
            .collect();
        scored.sort();
        scored.into_iter().map(|(_, value)| value).collect()
    }
}

/// Tries values in their natural `Ord` order. A deterministic baseline.
pub struct IdentityValueHeuristic;

impl<S: ProblemSemantics> ValueOrderingHeuristic<S> for IdentityValueHeuristic {
    fn order(
        &self,
        graph: &ConstraintGraph<S>,
        _assignment: &Assignment<S::Value>,
        var: VariableId,
    ) -> Vec<S::Value> {
        let mut values: Vec<S::Value> = graph.domain(var).iter().cloned().collect();
        values.sort();
        values
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::solver::graph::{tests::MustDiffer, Domains, Neighbours};

    // 0 neighbours 1 and 2. dom(1) = {1}, dom(2) = {1, 2}, so for variable 0
    // the value 1 conflicts twice, 2 once and 3 never.
    fn graph() -> ConstraintGraph<MustDiffer> {
        let mut domains = Domains::new();
        domains.insert(0, [1i64, 2, 3].into_iter().collect());
        domains.insert(1, [1i64].into_iter().collect());
        domains.insert(2, [1i64, 2].into_iter().collect());
        let mut neighbours = Neighbours::new();
        neighbours.insert(0, [1, 2].into_iter().collect());
        neighbours.insert(1, [0].into_iter().collect());
        neighbours.insert(2, [0].into_iter().collect());
        ConstraintGraph::new(domains, neighbours, Arc::new(MustDiffer)).unwrap()
    }

    #[test]
    fn least_constraining_value_sorts_by_conflict_count() {
        let graph = graph();
        let assignment = Assignment::new();
        let order = LeastConstrainingValueHeuristic.order(&graph, &assignment, 0);
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn assigned_neighbours_do_not_contribute_conflicts() {
        let graph = graph();
        let assignment: Assignment<i64> = [(1, 1)].into_iter().collect();
        // With 1 assigned, only dom(2) counts: value 1 conflicts once,
        // 2 once, 3 never. Ties resolve by value order.
        let order = LeastConstrainingValueHeuristic.order(&graph, &assignment, 0);
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn identity_ordering_is_sorted() {
        let graph = graph();
        let assignment = Assignment::new();
        let order = IdentityValueHeuristic.order(&graph, &assignment, 0);
        assert_eq!(order, vec![1, 2, 3]);
    }
}
