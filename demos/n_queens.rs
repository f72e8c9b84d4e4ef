//! Command-line harness for the N-Queens problem.
//!
//! ```text
//! cargo run --example n_queens -- 8 --level 2 --trace
//! cargo run --example n_queens -- 16 --compare --repeat 5
//! cargo run --example n_queens -- 101 --min-conflicts
//! ```

use std::time::{Duration, Instant};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ravel::{
    problems::n_queens,
    solver::{
        consistency::ConsistencyLevel,
        min_conflicts::MinConflicts,
        search::{BacktrackingSearch, SearchStrategy},
        stats::{render_comparison_table, SearchStats},
    },
};

#[derive(Parser)]
#[command(about = "Solve the N-Queens problem as a binary CSP")]
struct Args {
    /// Board size.
    n: usize,

    /// Consistency level: 0 checks assignments, 1 forward-checks, 2 runs
    /// full arc consistency.
    #[arg(short, long, default_value_t = 1)]
    level: u8,

    /// Report each committed assignment step.
    #[arg(long)]
    trace: bool,

    /// Repeat the search this many times and report the mean time.
    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Run every consistency level and print a comparison table.
    #[arg(long)]
    compare: bool,

    /// Use min-conflicts local repair instead of backtracking search.
    #[arg(long)]
    min_conflicts: bool,

    /// Print the search statistics as JSON.
    #[arg(long)]
    json: bool,
}

fn run_backtracking(
    n: usize,
    level: ConsistencyLevel,
    trace: bool,
    repeat: u32,
) -> (Option<ravel::solver::assignment::Assignment<i64>>, SearchStats, Duration) {
    let mut last = None;
    let mut stats = SearchStats::default();
    let mut total = Duration::ZERO;
    for _ in 0..repeat.max(1) {
        let mut graph = n_queens::graph(n).expect("n-queens is well formed");
        let search = BacktrackingSearch::new(level).with_trace(trace);
        let started = Instant::now();
        let (solution, run_stats) = search.solve(&mut graph).expect("search cannot fail");
        total += started.elapsed();
        last = Some(solution);
        stats = run_stats;
    }
    (last.unwrap_or(None), stats, total / repeat.max(1))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.min_conflicts {
        let graph = n_queens::graph(args.n).expect("n-queens is well formed");
        let started = Instant::now();
        let solution = MinConflicts::new(100 * args.n as u64, 100).solve(&graph);
        let elapsed = started.elapsed();
        match solution {
            Some(assignment) => {
                println!("Repaired in {elapsed:?}");
                print_solution(args.n, &assignment);
            }
            None => println!(
                "No solution found within budget after {elapsed:?} (the instance may still be solvable)"
            ),
        }
        return;
    }

    if args.compare {
        let mut runs = Vec::new();
        for level in [
            ConsistencyLevel::Assignments,
            ConsistencyLevel::ForwardChecking,
            ConsistencyLevel::ArcConsistency,
        ] {
            let (_, stats, elapsed) = run_backtracking(args.n, level, false, args.repeat);
            runs.push((format!("level {} ({level})", level.as_level()), stats, elapsed));
        }
        println!("{}", render_comparison_table(&runs));
        return;
    }

    let Some(level) = ConsistencyLevel::from_level(args.level) else {
        eprintln!("--level must be 0, 1 or 2");
        std::process::exit(2);
    };

    let (solution, stats, elapsed) = run_backtracking(args.n, level, args.trace, args.repeat);

    if args.json {
        println!(
            "{}",
            serde_json::json!({
                "n": args.n,
                "level": level.as_level(),
                "solved": solution.is_some(),
                "stats": stats,
                "mean_time_ms": elapsed.as_secs_f64() * 1000.0,
            })
        );
        return;
    }

    println!(
        "n={} level={} mean time {elapsed:?}, {} backtracks",
        args.n, level, stats.backtracks
    );
    match solution {
        Some(assignment) => print_solution(args.n, &assignment),
        None => println!("No solution exists."),
    }
}

fn print_solution(n: usize, assignment: &ravel::solver::assignment::Assignment<i64>) {
    if n < 20 {
        print!("{}", n_queens::render(n, assignment));
    } else {
        let columns: Vec<i64> = (0..n as u32)
            .map(|row| *assignment.get(row).expect("complete assignment"))
            .collect();
        println!("{columns:?}");
    }
}
