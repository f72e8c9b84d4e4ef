pub mod assignment;
pub mod consistency;
pub mod graph;
pub mod heuristics;
pub mod min_conflicts;
pub mod search;
pub mod stats;
pub mod value;
pub mod work_list;
