//! Colours mainland Australia with three colours.

use tracing_subscriber::EnvFilter;

use ravel::{
    problems::map_colouring::{self, Colour},
    solver::{
        consistency::ConsistencyLevel,
        search::{BacktrackingSearch, SearchStrategy},
    },
};

const REGIONS: [&str; 6] = ["WA", "NT", "SA", "Q", "NSW", "V"];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

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
    let mut graph = map_colouring::graph(
        REGIONS.len() as u32,
        &borders,
        &[Colour::Red, Colour::Green, Colour::Blue],
    )
    .expect("well-formed map");

    let search = BacktrackingSearch::new(ConsistencyLevel::ArcConsistency);
    let (solution, stats) = search.solve(&mut graph).expect("search cannot fail");

    match solution {
        Some(assignment) => {
            for (region, name) in REGIONS.iter().enumerate() {
                println!("{name}: {:?}", assignment.get(region as u32).unwrap());
            }
            println!("({} backtracks)", stats.backtracks);
        }
        None => println!("No colouring exists."),
    }
}
