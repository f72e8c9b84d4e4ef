use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::solver::{
    assignment::Assignment,
    graph::{ConstraintGraph, ProblemSemantics, VariableId},
    value::ValueEquality,
    work_list::WorkList,
};

/// How much pruning a tentative assignment triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConsistencyLevel {
    /// Level 0: only check the candidate against already-assigned
    /// neighbours; no neighbour domains are touched.
    Assignments,
    /// Level 1: additionally prune incompatible values from the domains of
    /// unassigned neighbours.
    ForwardChecking,
    /// Level 2: additionally propagate prunings through the whole remaining
    /// graph (AC-3) until quiescence.
    ArcConsistency,
}

impl ConsistencyLevel {
    /// Maps the conventional numeric levels 0, 1, 2.
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Assignments),
            1 => Some(Self::ForwardChecking),
            2 => Some(Self::ArcConsistency),
            _ => None,
        }
    }

    pub fn as_level(self) -> u8 {
        match self {
            Self::Assignments => 0,
            Self::ForwardChecking => 1,
            Self::ArcConsistency => 2,
        }
    }
}

impl std::fmt::Display for ConsistencyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Assignments => "assignments",
            Self::ForwardChecking => "forward-checking",
            Self::ArcConsistency => "arc-consistency",
        };
        write!(f, "{name}")
    }
}

/// The undo record for one [`enforce`] call.
///
/// Records, per variable, the set of values that call removed from the
/// variable's domain. [`Reduction::undo`] unions every removed value back,
/// restoring the exact pre-call domain state. The search consumes reductions
/// in strict LIFO order matching its call stack, which is what keeps nested
/// prune/undo pairs sound.
#[derive(Debug)]
pub struct Reduction<V: ValueEquality> {
    removed: HashMap<VariableId, HashSet<V>>,
}

impl<V: ValueEquality> Reduction<V> {
    fn new() -> Self {
        Self {
            removed: HashMap::new(),
        }
    }

    fn record(&mut self, var: VariableId, value: V) {
        self.removed.entry(var).or_default().insert(value);
    }

    /// The values this reduction removed from `var`'s domain.
    pub fn removed(&self, var: VariableId) -> Option<&HashSet<V>> {
        self.removed.get(&var)
    }

    /// Total number of pruned values, across all variables.
    pub fn pruned_count(&self) -> usize {
        self.removed.values().map(HashSet::len).sum()
    }

    /// Adds every removed value back to its variable's current domain.
    pub fn undo<S>(self, graph: &mut ConstraintGraph<S>)
    where
        S: ProblemSemantics<Value = V>,
    {
        for (var, values) in self.removed {
            graph.restore_values(var, values);
        }
    }
}

/// Enforces consistency for the tentative assignment `var = value`.
///
/// On success the graph's domains have been pruned in place (at minimum,
/// `var`'s own domain is collapsed to `{value}`) and the returned
/// [`Reduction`] undoes exactly that pruning. On failure — a conflict with
/// an assigned neighbour, or a domain wipeout during pruning — every
/// mutation made by this call has already been rolled back and `None` is
/// returned, so the caller's domain state is untouched.
pub fn enforce<S: ProblemSemantics>(
    graph: &mut ConstraintGraph<S>,
    assignment: &Assignment<S::Value>,
    var: VariableId,
    value: &S::Value,
    level: ConsistencyLevel,
) -> Option<Reduction<S::Value>> {
    if !graph.domain(var).contains(value) {
        return None;
    }
    for (other, other_value) in assignment.iter() {
        if other != var
            && graph.neighbours(var).contains(&other)
            && !graph.admissible((var, value), (other, other_value))
        {
            return None;
        }
    }

    // Collapse the candidate's own domain to the chosen value. The removals
    // go into the same reduction as any neighbour pruning, so undo restores
    // everything at once.
    let mut reduction = Reduction::new();
    let collapsed: Vec<S::Value> = graph
        .domain(var)
        .iter()
        .filter(|v| *v != value)
        .cloned()
        .collect();
    for v in collapsed {
        graph.remove_value(var, &v);
        reduction.record(var, v);
    }

    match level {
        ConsistencyLevel::Assignments => Some(reduction),
        ConsistencyLevel::ForwardChecking => forward_check(graph, assignment, var, value, reduction),
        ConsistencyLevel::ArcConsistency => propagate(graph, assignment, var, reduction),
    }
}

/// Level 1: prune values incompatible with `(var, value)` from every
/// unassigned neighbour.
fn forward_check<S: ProblemSemantics>(
    graph: &mut ConstraintGraph<S>,
    assignment: &Assignment<S::Value>,
    var: VariableId,
    value: &S::Value,
    mut reduction: Reduction<S::Value>,
) -> Option<Reduction<S::Value>> {
    let neighbours: Vec<VariableId> = graph.neighbours(var).iter().copied().collect();
    for other in neighbours {
        if other == var || assignment.contains(other) {
            continue;
        }
        let incompatible: Vec<S::Value> = graph
            .domain(other)
            .iter()
            .filter(|&v| !graph.admissible((var, value), (other, v)))
            .cloned()
            .collect();
        if incompatible.len() == graph.domain(other).len() {
            reduction.undo(graph);
            return None;
        }
        for v in incompatible {
            graph.remove_value(other, &v);
            reduction.record(other, v);
        }
    }
    Some(reduction)
}

/// Level 2: AC-3 propagation over the remaining graph.
///
/// The worklist starts with the arcs from `var`'s unassigned neighbours back
/// toward `var`; since `var`'s domain is already collapsed, that first pass
/// prunes exactly what forward checking would. Whenever a revision shrinks a
/// variable, all of its unassigned neighbours' arcs toward it are
/// re-enqueued. The worklist deduplicates pending arcs and domains only
/// shrink, so the loop terminates.
fn propagate<S: ProblemSemantics>(
    graph: &mut ConstraintGraph<S>,
    assignment: &Assignment<S::Value>,
    var: VariableId,
    mut reduction: Reduction<S::Value>,
) -> Option<Reduction<S::Value>> {
    let mut worklist = WorkList::new();
    for &neighbour in graph.neighbours(var) {
        if neighbour != var && !assignment.contains(neighbour) {
            worklist.push_back(neighbour, var);
        }
    }

    while let Some((target, support)) = worklist.pop_front() {
        // A target value survives if some support value is admissible with it.
        let unsupported: Vec<S::Value> = graph
            .domain(target)
            .iter()
            .filter(|&tv| {
                !graph
                    .domain(support)
                    .iter()
                    .any(|sv| graph.admissible((target, tv), (support, sv)))
            })
            .cloned()
            .collect();
        if unsupported.is_empty() {
            continue;
        }
        if unsupported.len() == graph.domain(target).len() {
            reduction.undo(graph);
            return None;
        }
        for v in unsupported {
            graph.remove_value(target, &v);
            reduction.record(target, v);
        }
        for &neighbour in graph.neighbours(target) {
            if neighbour != target && !assignment.contains(neighbour) {
                worklist.push_back(neighbour, target);
            }
        }
    }
    Some(reduction)
}
