//! Run several algorithms on the same maze and rank them.
//!
//! Usage:
//!   cargo run --bin compare -- --difficulty medium --seed 3
//!   cargo run --bin compare -- --algorithms astar,bfs,dfs --json

use clap::Parser;
use mazepath_demos::{MazeArgs, format_ms, render};
use mazepath_search::{Algorithm, Comparison};

#[derive(Parser, Debug)]
#[command(name = "compare")]
#[command(about = "Compare search algorithms side by side on one maze")]
struct Args {
    #[command(flatten)]
    maze: MazeArgs,

    /// Comma-separated algorithms to compare (at least two)
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "astar,bfs,dfs,ucs,ids"
    )]
    algorithms: Vec<Algorithm>,

    /// Print the ranked results as JSON
    #[arg(long)]
    json: bool,

    /// Draw the maze with the most efficient run's trace and path
    #[arg(long)]
    draw: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let (maze, start, end) = args.maze.load()?;

    let mut cmp = Comparison::new();
    for &algo in &args.algorithms {
        if !cmp.selection().contains(algo) {
            cmp.toggle_algorithm(algo);
        }
    }
    if !cmp.start_comparison(&maze, start, end)? {
        return Err(format!(
            "select at least {} more algorithm(s) to compare",
            cmp.remaining_to_compare()
        )
        .into());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(cmp.results())?);
        return Ok(());
    }

    println!("{:<4} {:<10} {:>12} {:>9} {:>6}", "rank", "algorithm", "time", "explored", "path");
    for (i, r) in cmp.results().iter().enumerate() {
        let path = if r.is_solved() {
            r.stats.path_length.to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{:<4} {:<10} {:>12} {:>9} {:>6}",
            i + 1,
            r.algorithm.name(),
            format_ms(r.stats.solve_time_ms),
            r.stats.nodes_explored,
            path
        );
    }
    println!();

    if let Some(best) = cmp.fastest() {
        println!("Fastest:        {}", best.algorithm.name());
    }
    match cmp.most_efficient() {
        Some(best) => {
            println!(
                "Most efficient: {} ({} cells)",
                best.algorithm.name(),
                best.stats.path_length
            );
            if args.draw {
                println!();
                print!("{}", render(&maze, start, end, &best.visited, &best.path));
            }
        }
        None => println!("Most efficient: none, the goal is unreachable"),
    }
    Ok(())
}
