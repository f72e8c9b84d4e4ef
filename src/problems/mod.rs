//! Ready-made problem collaborators: each supplies a domain map, a
//! neighbour map and a binary constraint predicate, and nothing else.

pub mod map_colouring;
pub mod n_queens;
