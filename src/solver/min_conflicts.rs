use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::solver::{
    assignment::Assignment,
    graph::{ConstraintGraph, ProblemSemantics, VariableId},
};

/// Min-conflicts local repair search.
///
/// Starts each attempt from a uniformly random complete assignment and
/// repeatedly moves a random conflicted variable to the value that leaves it
/// with the fewest conflicted neighbours, ties broken uniformly at random.
/// It never touches the graph's domains, only its own working assignment.
///
/// This is an incomplete method: a `None` result means the step and restart
/// budgets ran out, not that the problem is unsolvable. In exchange it
/// scales to large, loosely constrained instances where backtracking search
/// is impractical.
pub struct MinConflicts {
    max_steps: u64,
    max_restarts: u64,
    seed: Option<u64>,
}

impl MinConflicts {
    /// A repair search budgeted at `max_steps` moves per attempt and
    /// `max_restarts` attempts, seeded from entropy.
    pub fn new(max_steps: u64, max_restarts: u64) -> Self {
        Self {
            max_steps,
            max_restarts,
            seed: None,
        }
    }

    /// Fixes the RNG seed so runs are reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs the repair search, returning the first conflict-free complete
    /// assignment found within budget.
    pub fn solve<S: ProblemSemantics>(
        &self,
        graph: &ConstraintGraph<S>,
    ) -> Option<Assignment<S::Value>> {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        for attempt in 0..self.max_restarts {
            if let Some(assignment) = self.attempt(graph, &mut rng) {
                debug!(attempt, "repair search found a solution");
                return Some(assignment);
            }
        }
        None
    }

    fn attempt<S: ProblemSemantics>(
        &self,
        graph: &ConstraintGraph<S>,
        rng: &mut ChaCha8Rng,
    ) -> Option<Assignment<S::Value>> {
        let variables: Vec<VariableId> = {
            let mut vars: Vec<_> = graph.variables().collect();
            vars.sort_unstable();
            vars
        };

        let mut assignment: Assignment<S::Value> = variables
            .iter()
            .map(|&var| (var, random_value(graph, rng, var)))
            .collect();

        for _ in 0..self.max_steps {
            let conflicted: Vec<VariableId> = variables
                .iter()
                .copied()
                .filter(|&var| {
                    let value = assignment.get(var).expect("assignment is complete");
                    conflict_count(graph, &assignment, var, value) > 0
                })
                .collect();
            if conflicted.is_empty() {
                return Some(assignment);
            }

            let &var = conflicted.choose(rng)?;
            let new_value = least_conflicting_value(graph, &assignment, rng, var);
            assignment.bind(var, new_value);
        }
        None
    }
}

fn random_value<S: ProblemSemantics>(
    graph: &ConstraintGraph<S>,
    rng: &mut ChaCha8Rng,
    var: VariableId,
) -> S::Value {
    // Sort for a stable index space; domain iteration order is not.
    let mut values: Vec<&S::Value> = graph.domain(var).iter().collect();
    values.sort();
    values[rng.gen_range(0..values.len())].clone()
}

/// Number of neighbours whose assigned value conflicts with `var = value`.
fn conflict_count<S: ProblemSemantics>(
    graph: &ConstraintGraph<S>,
    assignment: &Assignment<S::Value>,
    var: VariableId,
    value: &S::Value,
) -> usize {
    graph
        .neighbours(var)
        .iter()
        .filter(|&&other| other != var)
        .filter(|&&other| {
            assignment
                .get(other)
                .map(|other_value| !graph.admissible((var, value), (other, other_value)))
                .unwrap_or(false)
        })
        .count()
}

fn least_conflicting_value<S: ProblemSemantics>(
    graph: &ConstraintGraph<S>,
    assignment: &Assignment<S::Value>,
    rng: &mut ChaCha8Rng,
    var: VariableId,
) -> S::Value {
    let mut scored: Vec<(usize, &S::Value)> = graph
        .domain(var)
        .iter()
        .map(|value| (conflict_count(graph, assignment, var, value), value))
        .collect();
    scored.sort();
    let best_score = scored[0].0;
    let best: Vec<&S::Value> = scored
        .into_iter()
        .take_while(|(score, _)| *score == best_score)
        .map(|(_, value)| value)
        .collect();
    (*best.choose(rng).expect("domains are never empty")).clone()
}
