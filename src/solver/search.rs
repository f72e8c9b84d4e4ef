use tracing::{debug, info};

use crate::{
    error::{Error, Result},
    solver::{
        assignment::Assignment,
        consistency::{enforce, ConsistencyLevel},
        graph::{ConstraintGraph, ProblemSemantics},
        heuristics::{
            value::{LeastConstrainingValueHeuristic, ValueOrderingHeuristic},
            variable::{DegreeMrvHeuristic, VariableSelectionHeuristic},
        },
        stats::SearchStats,
    },
};

/// A complete solving strategy, from problem state to verdict.
///
/// `Ok((Some(assignment), stats))` is a complete, constraint-satisfying
/// assignment; `Ok((None, stats))` means the strategy exhausted the search
/// space, which for the complete [`BacktrackingSearch`] is a proof that no
/// solution exists.
pub trait SearchStrategy<S: ProblemSemantics> {
    fn solve(
        &self,
        graph: &mut ConstraintGraph<S>,
    ) -> Result<(Option<Assignment<S::Value>>, SearchStats)>;
}

/// Recursive depth-first backtracking search.
///
/// At each node the variable heuristic picks an unassigned variable, the
/// value heuristic orders its candidates, and each candidate is pushed
/// through the consistency engine at the configured level. A successful
/// enforcement commits the binding and recurses; a failed branch undoes the
/// enforcement's domain reduction in LIFO order and moves on. The search is
/// complete: a `None` verdict means the problem, as constrained by the
/// initial domains, has no solution.
///
/// Recursion depth is bounded by the variable count, so instances with very
/// many variables need a correspondingly large stack.
pub struct BacktrackingSearch<S: ProblemSemantics> {
    level: ConsistencyLevel,
    trace: bool,
    variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
}

impl<S: ProblemSemantics> BacktrackingSearch<S> {
    /// A search at `level` with the standard heuristics: degree/MRV variable
    /// selection and least-constraining-value ordering.
    pub fn new(level: ConsistencyLevel) -> Self {
        Self::with_heuristics(
            level,
            Box::new(DegreeMrvHeuristic),
            Box::new(LeastConstrainingValueHeuristic),
        )
    }

    pub fn with_heuristics(
        level: ConsistencyLevel,
        variable_heuristic: Box<dyn VariableSelectionHeuristic<S>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<S>>,
    ) -> Self {
        Self {
            level,
            trace: false,
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Reports each committed assignment step at `info` level instead of
    /// `debug`.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Resumes the search from a partial assignment.
    ///
    /// The assignment must bind known variables to values inside their
    /// current domains (anything else is a malformed-problem [`Error`]) and
    /// is assumed consistent; bound variables are simply never branched on.
    pub fn resume(
        &self,
        graph: &mut ConstraintGraph<S>,
        initial: Assignment<S::Value>,
    ) -> Result<(Option<Assignment<S::Value>>, SearchStats)> {
        for (var, value) in initial.iter() {
            if !graph.contains_variable(var) {
                return Err(Error::UnknownVariable(var));
            }
            if !graph.domain(var).contains(value) {
                return Err(Error::ValueOutsideDomain(var));
            }
        }
        let mut assignment = initial;
        let mut stats = SearchStats::default();
        let found = self.search(graph, &mut assignment, &mut stats, 0);
        Ok((found, stats))
    }

    fn search(
        &self,
        graph: &mut ConstraintGraph<S>,
        assignment: &mut Assignment<S::Value>,
        stats: &mut SearchStats,
        depth: usize,
    ) -> Option<Assignment<S::Value>> {
        stats.nodes_visited += 1;

        if assignment.is_complete(graph) {
            // A decoupled copy: the live assignment keeps mutating as the
            // stack unwinds.
            return Some(assignment.clone());
        }

        let var = self.variable_heuristic.select(graph, assignment)?;

        for value in self.value_heuristic.order(graph, assignment, var) {
            stats.enforce_calls += 1;
            let Some(reduction) = enforce(graph, assignment, var, &value, self.level) else {
                continue;
            };
            stats.prunings += reduction.pruned_count() as u64;

            if self.trace {
                info!(depth, var, value = ?value, "assigned");
            } else {
                debug!(depth, var, value = ?value, "assigned");
            }
            assignment.bind(var, value);

            if let Some(found) = self.search(graph, assignment, stats, depth + 1) {
                // Success propagates up immediately; pruning along the
                // successful path stays in place.
                return Some(found);
            }

            assignment.unbind(var);
            reduction.undo(graph);
        }

        stats.backtracks += 1;
        None
    }
}

impl<S: ProblemSemantics> SearchStrategy<S> for BacktrackingSearch<S> {
    /// Searches from the empty assignment; `Ok((None, _))` means no
    /// solution exists.
    fn solve(
        &self,
        graph: &mut ConstraintGraph<S>,
    ) -> Result<(Option<Assignment<S::Value>>, SearchStats)> {
        self.resume(graph, Assignment::new())
    }
}
