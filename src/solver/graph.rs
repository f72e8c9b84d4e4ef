use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    error::{Error, Result},
    solver::value::ValueOrdering,
};

/// Identifies a variable in a constraint graph.
pub type VariableId = u32;

/// The "frontend" trait a problem collaborator implements to plug a concrete
/// problem (N-Queens, map colouring, ...) into the generic solver.
///
/// A collaborator supplies exactly three things: the value type for its
/// domains, the binary constraint predicate, and (via
/// [`ConstraintGraph::new`]) the initial domains and neighbour sets. The
/// solver never learns anything else about the problem.
pub trait ProblemSemantics: 'static {
    /// The concrete type for a value in a variable's domain.
    ///
    /// For N-Queens this is a column index; for map colouring an enum of
    /// colours. `Ord` is required so candidate values can be tried in a
    /// reproducible order.
    type Value: ValueOrdering;

    /// The binary constraint predicate.
    ///
    /// Decides whether assigning `a.1` to variable `a.0` is jointly
    /// admissible with assigning `b.1` to variable `b.0`. Must be a pure
    /// function of its four inputs; it is called many times per search step.
    fn admissible(
        &self,
        a: (VariableId, &Self::Value),
        b: (VariableId, &Self::Value),
    ) -> bool;
}

pub type Domains<V> = HashMap<VariableId, HashSet<V>>;
pub type Neighbours = HashMap<VariableId, HashSet<VariableId>>;

/// The shared mutable state of a constraint satisfaction problem.
///
/// A `ConstraintGraph` owns the current candidate domain of every variable
/// and the neighbour relation between them. It is created once per problem
/// instance and threaded by `&mut` through the entire search; all mutation
/// goes through the crate-internal reduction operations issued by the
/// consistency engine, each paired with an undo record, so a failed search
/// always leaves domains exactly as it found them.
#[derive(Debug)]
pub struct ConstraintGraph<S: ProblemSemantics> {
    domains: Domains<S::Value>,
    neighbours: Neighbours,
    semantics: Arc<S>,
}

impl<S: ProblemSemantics> ConstraintGraph<S> {
    /// Builds and validates a constraint graph.
    ///
    /// Fails fast on malformed problems: an empty initial domain or a
    /// neighbour set referencing an unknown variable is an [`Error`], never
    /// silently treated as "no constraints". Variables missing from the
    /// neighbour map get an empty neighbour set.
    pub fn new(
        domains: Domains<S::Value>,
        mut neighbours: Neighbours,
        semantics: Arc<S>,
    ) -> Result<Self> {
        for (&var, domain) in &domains {
            if domain.is_empty() {
                return Err(Error::EmptyDomain(var));
            }
        }
        for (&var, _) in &neighbours {
            if !domains.contains_key(&var) {
                return Err(Error::UnknownVariable(var));
            }
        }
        for (&var, set) in &neighbours {
            for &neighbour in set {
                if !domains.contains_key(&neighbour) {
                    return Err(Error::UnknownNeighbour { variable: var, neighbour });
                }
            }
        }
        for &var in domains.keys() {
            neighbours.entry(var).or_default();
        }
        Ok(Self {
            domains,
            neighbours,
            semantics,
        })
    }

    /// Evaluates the binary constraint between `(xa, va)` and `(xb, vb)`.
    pub fn admissible(
        &self,
        a: (VariableId, &S::Value),
        b: (VariableId, &S::Value),
    ) -> bool {
        self.semantics.admissible(a, b)
    }

    pub fn semantics(&self) -> &Arc<S> {
        &self.semantics
    }

    /// Iterates over all variable identifiers.
    pub fn variables(&self) -> impl Iterator<Item = VariableId> + '_ {
        self.domains.keys().copied()
    }

    pub fn variable_count(&self) -> usize {
        self.domains.len()
    }

    pub fn contains_variable(&self, var: VariableId) -> bool {
        self.domains.contains_key(&var)
    }

    /// The current candidate set for `var`.
    ///
    /// # Panics
    ///
    /// Panics if `var` is not a variable of this graph. Variable identifiers
    /// only ever come from the graph itself, so within the solver this is an
    /// invariant, not a reachable error.
    pub fn domain(&self, var: VariableId) -> &HashSet<S::Value> {
        &self.domains[&var]
    }

    /// The neighbour set of `var` (see [`ConstraintGraph::domain`] on panics).
    pub fn neighbours(&self, var: VariableId) -> &HashSet<VariableId> {
        &self.neighbours[&var]
    }

    /// A snapshot of every current domain, for tests and diagnostics.
    pub fn domains_snapshot(&self) -> Domains<S::Value> {
        self.domains.clone()
    }

    /// Removes `value` from `var`'s domain, reporting whether it was present.
    ///
    /// Crate-internal: only the consistency engine prunes, and every prune
    /// it performs is recorded in a [`Reduction`](crate::solver::consistency::Reduction)
    /// so it can be undone.
    pub(crate) fn remove_value(&mut self, var: VariableId, value: &S::Value) -> bool {
        self.domains
            .get_mut(&var)
            .map(|d| d.remove(value))
            .unwrap_or(false)
    }

    /// Unions previously removed values back into `var`'s domain.
    pub(crate) fn restore_values(
        &mut self,
        var: VariableId,
        values: impl IntoIterator<Item = S::Value>,
    ) {
        if let Some(domain) = self.domains.get_mut(&var) {
            domain.extend(values);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use super::*;

    /// Two variables, values must differ.
    #[derive(Debug)]
    pub(crate) struct MustDiffer;

    impl ProblemSemantics for MustDiffer {
        type Value = i64;

        fn admissible(&self, a: (VariableId, &i64), b: (VariableId, &i64)) -> bool {
            a.1 != b.1
        }
    }

    pub(crate) fn pair_graph(
        domain_a: &[i64],
        domain_b: &[i64],
    ) -> Result<ConstraintGraph<MustDiffer>> {
        let mut domains = Domains::new();
        domains.insert(0, domain_a.iter().copied().collect());
        domains.insert(1, domain_b.iter().copied().collect());
        let mut neighbours = Neighbours::new();
        neighbours.insert(0, [1].into_iter().collect());
        neighbours.insert(1, [0].into_iter().collect());
        ConstraintGraph::new(domains, neighbours, Arc::new(MustDiffer))
    }

    #[test]
    fn builds_a_valid_graph() {
        let graph = pair_graph(&[1, 2], &[1, 2]).unwrap();
        assert_eq!(graph.variable_count(), 2);
        assert_eq!(graph.domain(0).len(), 2);
        assert!(graph.neighbours(0).contains(&1));
        assert!(graph.admissible((0, &1), (1, &2)));
        assert!(!graph.admissible((0, &1), (1, &1)));
    }

    #[test]
    fn rejects_empty_initial_domain() {
        let err = pair_graph(&[], &[1]).unwrap_err();
        assert!(matches!(err, Error::EmptyDomain(0)));
    }

    #[test]
    fn rejects_unknown_neighbour() {
        let mut domains = Domains::new();
        domains.insert(0, [1i64].into_iter().collect());
        let mut neighbours = Neighbours::new();
        neighbours.insert(0, [7].into_iter().collect());
        let err = ConstraintGraph::new(domains, neighbours, Arc::new(MustDiffer)).unwrap_err();
        assert!(matches!(
            err,
            Error::UnknownNeighbour { variable: 0, neighbour: 7 }
        ));
    }

    #[test]
    fn missing_neighbour_entries_default_to_empty() {
        let mut domains = Domains::new();
        domains.insert(0, [1i64].into_iter().collect());
        domains.insert(1, [1i64].into_iter().collect());
        let graph = ConstraintGraph::new(domains, Neighbours::new(), Arc::new(MustDiffer)).unwrap();
        assert!(graph.neighbours(0).is_empty());
        assert!(graph.neighbours(1).is_empty());
    }
}
