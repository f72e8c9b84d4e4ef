use std::collections::HashMap;

use serde::Serialize;

use crate::solver::{
    graph::{ConstraintGraph, ProblemSemantics, VariableId},
    value::ValueEquality,
};

/// A partial assignment of values to variables, built up during search.
///
/// Starts empty at the root (or pre-seeded when resuming) and gains one
/// binding per committed search step. It is *complete* when every variable
/// of the graph is bound; a complete, constraint-satisfying assignment is
/// the solver's success result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment<V: ValueEquality> {
    values: HashMap<VariableId, V>,
}

impl<V: ValueEquality> Assignment<V> {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    pub fn get(&self, var: VariableId) -> Option<&V> {
        self.values.get(&var)
    }

    pub fn contains(&self, var: VariableId) -> bool {
        self.values.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &V)> + '_ {
        self.values.iter().map(|(&var, val)| (var, val))
    }

    /// Binds `var` to `value`, returning any previous binding.
    pub fn bind(&mut self, var: VariableId, value: V) -> Option<V> {
        self.values.insert(var, value)
    }

    /// Removes the binding for `var`, if any.
    pub fn unbind(&mut self, var: VariableId) -> Option<V> {
        self.values.remove(&var)
    }

    /// True when every variable of `graph` is bound.
    pub fn is_complete<S>(&self, graph: &ConstraintGraph<S>) -> bool
    where
        S: ProblemSemantics<Value = V>,
    {
        self.values.len() == graph.variable_count()
    }

    /// True when every bound neighbour pair satisfies the constraint
    /// predicate. Unbound variables are ignored, so a partial assignment
    /// with no violated constraint is also `true`.
    pub fn satisfies<S>(&self, graph: &ConstraintGraph<S>) -> bool
    where
        S: ProblemSemantics<Value = V>,
    {
        self.values.iter().all(|(&var, val)| {
            graph.neighbours(var).iter().all(|&other| {
                self.values
                    .get(&other)
                    .map(|other_val| graph.admissible((var, val), (other, other_val)))
                    .unwrap_or(true)
            })
        })
    }
}

impl<V: ValueEquality> Default for Assignment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ValueEquality> FromIterator<(VariableId, V)> for Assignment<V> {
    fn from_iter<I: IntoIterator<Item = (VariableId, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::graph::tests::pair_graph;

    #[test]
    fn completeness_tracks_the_variable_set() {
        let graph = pair_graph(&[1, 2], &[1, 2]).unwrap();
        let mut assignment = Assignment::new();
        assert!(!assignment.is_complete(&graph));
        assignment.bind(0, 1);
        assignment.bind(1, 2);
        assert!(assignment.is_complete(&graph));
    }

    #[test]
    fn satisfies_checks_every_neighbour_pair() {
        let graph = pair_graph(&[1, 2], &[1, 2]).unwrap();
        let good: Assignment<i64> = [(0, 1), (1, 2)].into_iter().collect();
        let bad: Assignment<i64> = [(0, 1), (1, 1)].into_iter().collect();
        assert!(good.satisfies(&graph));
        assert!(!bad.satisfies(&graph));
    }

    #[test]
    fn partial_assignments_with_no_violation_satisfy() {
        let graph = pair_graph(&[1, 2], &[1, 2]).unwrap();
        let partial: Assignment<i64> = [(0, 1)].into_iter().collect();
        assert!(partial.satisfies(&graph));
    }
}
