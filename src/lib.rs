//! Ravel is a generic solver for binary constraint satisfaction problems
//! (CSPs): finite variables, finite value domains, and pairwise
//! compatibility constraints between variables.
//!
//! The engine is problem-agnostic. A problem collaborator supplies three
//! things — a domain per variable, a neighbour set per variable, and a
//! binary constraint predicate — and the solver finds an assignment of one
//! value per variable satisfying every constraint, or proves that none
//! exists.
//!
//! # Core concepts
//!
//! - **[`ProblemSemantics`]**: the trait a problem implements; its single
//!   method is the binary constraint predicate.
//! - **[`ConstraintGraph`]**: the shared state — current domains and the
//!   neighbour relation — mutated in place during search, with every prune
//!   paired with an undo record.
//! - **[`ConsistencyLevel`]**: how much pruning each tentative assignment
//!   triggers; level 0 checks assigned neighbours, level 1 forward-checks,
//!   level 2 runs AC-3 arc consistency.
//! - **[`BacktrackingSearch`]**: recursive depth-first search with
//!   degree/MRV variable selection and least-constraining-value ordering.
//! - **[`MinConflicts`]**: a separable local-repair search for large
//!   instances where systematic search is impractical.
//!
//! # Example: a two-variable problem
//!
//! Two variables, each with domain `{1, 2}`, whose values must differ:
//!
//! ```
//! use std::sync::Arc;
//!
//! use ravel::solver::{
//!     consistency::ConsistencyLevel,
//!     graph::{ConstraintGraph, Domains, Neighbours, ProblemSemantics, VariableId},
//!     search::{BacktrackingSearch, SearchStrategy},
//! };
//!
//! #[derive(Debug)]
//! struct MustDiffer;
//!
//! impl ProblemSemantics for MustDiffer {
//!     type Value = i64;
//!
//!     fn admissible(&self, a: (VariableId, &i64), b: (VariableId, &i64)) -> bool {
//!         a.1 != b.1
//!     }
//! }
//!
//! let mut domains = Domains::new();
//! domains.insert(0, [1, 2].into_iter().collect());
//! domains.insert(1, [1, 2].into_iter().collect());
//! let mut neighbours = Neighbours::new();
//! neighbours.insert(0, [1].into_iter().collect());
//! neighbours.insert(1, [0].into_iter().collect());
//!
//! let mut graph = ConstraintGraph::new(domains, neighbours, Arc::new(MustDiffer))?;
//!
//! let search = BacktrackingSearch::new(ConsistencyLevel::ForwardChecking);
//! let (solution, stats) = search.solve(&mut graph)?;
//! let solution = solution.expect("a solution exists");
//!
//! assert_ne!(solution.get(0), solution.get(1));
//! assert_eq!(stats.backtracks, 0);
//! # Ok::<(), ravel::error::Error>(())
//! ```
//!
//! [`ProblemSemantics`]: solver::graph::ProblemSemantics
//! [`ConstraintGraph`]: solver::graph::ConstraintGraph
//! [`ConsistencyLevel`]: solver::consistency::ConsistencyLevel
//! [`BacktrackingSearch`]: solver::search::BacktrackingSearch
//! [`MinConflicts`]: solver::min_conflicts::MinConflicts

pub mod error;
pub mod problems;
pub mod solver;
