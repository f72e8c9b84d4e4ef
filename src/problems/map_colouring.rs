//! Map colouring as a binary CSP: bordering regions take different colours.

use std::sync::Arc;

use crate::{
    error::Result,
    solver::graph::{ConstraintGraph, Domains, Neighbours, ProblemSemantics, VariableId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Green,
    Blue,
    Yellow,
}

#[derive(Debug, Clone)]
pub struct MapColouring;

impl ProblemSemantics for MapColouring {
    type Value = Colour;

    fn admissible(&self, a: (VariableId, &Colour), b: (VariableId, &Colour)) -> bool {
        a.1 != b.1
    }
}

/// Builds a colouring graph over `regions` variables, with the given border
/// pairs (entered once; both directions are recorded) and colour palette.
pub fn graph(
    regions: u32,
    borders: &[(VariableId, VariableId)],
    colours: &[Colour],
) -> Result<ConstraintGraph<MapColouring>> {
    let mut domains = Domains::new();
    let mut neighbours = Neighbours::new();
    for region in 0..regions {
        domains.insert(region, colours.iter().copied().collect());
        neighbours.insert(region, Default::default());
    }
    for &(a, b) in borders {
        neighbours.entry(a).or_default().insert(b);
        neighbours.entry(b).or_default().insert(a);
    }
    ConstraintGraph::new(domains, neighbours, Arc::new(MapColouring))
}

#[cfg(test)]
mod tests {
    use crate::solver::{
        consistency::ConsistencyLevel,
        search::{BacktrackingSearch, SearchStrategy},
    };

    use super::*;

    // Mainland Australia: WA, NT, SA, Q, NSW, V.
    fn australia() -> ConstraintGraph<MapColouring> {
        let borders = [
            (0, 1),
            (0, 2),
            (1, 2),
            (1, 3),
            (2, 3),
            (2, 4),
            (2, 5),
            (3, 4),
            (4, 5),
        ];
        graph(
            6,
            &borders,
            &[Colour::Red, Colour::Green, Colour::Blue],
        )
        .unwrap()
    }

    #[test]
    fn three_colours_suffice_for_australia() {
        let _ = tracing_subscriber::fmt::try_init();

        let mut graph = australia();
        let search = BacktrackingSearch::new(ConsistencyLevel::ArcConsistency);
        let (solution, _) = search.solve(&mut graph).unwrap();
        let solution = solution.expect("three colours suffice");
        assert!(solution.is_complete(&graph));
        assert!(solution.satisfies(&graph));
    }

    #[test]
    fn two_colours_are_proven_insufficient() {
        let borders = [(0, 1), (0, 2), (1, 2)];
        let mut graph = graph(3, &borders, &[Colour::Red, Colour::Green]).unwrap();
        let search = BacktrackingSearch::new(ConsistencyLevel::ForwardChecking);
        let (solution, stats) = search.solve(&mut graph).unwrap();
        assert!(solution.is_none());
        assert!(stats.backtracks > 0);
    }
}
