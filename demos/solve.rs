//! Solve one maze with one algorithm and print the result.
//!
//! Usage:
//!   cargo run --bin solve -- --algorithm astar --difficulty hard --seed 7
//!   cargo run --bin solve -- --file maze.txt --algorithm ids --json

use clap::Parser;
use mazepath_demos::{MazeArgs, format_ms, render};
use mazepath_search::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "solve")]
#[command(about = "Find a path through a maze with a single search algorithm")]
struct Args {
    #[command(flatten)]
    maze: MazeArgs,

    /// Search to run: astar, bfs, dfs, ucs or ids
    #[arg(short, long, default_value = "astar")]
    algorithm: Algorithm,

    /// Print the result as JSON instead of a drawing
    #[arg(long)]
    json: bool,
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
    let result = args.algorithm.solve(&maze, start, end)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print!("{}", render(&maze, start, end, &result.visited, &result.path));
    println!();
    println!("{} ({})", args.algorithm.name(), args.algorithm.description());
    println!("  start:    {start}");
    println!("  end:      {end}");
    println!("  explored: {}", result.stats.nodes_explored);
    if result.is_solved() {
        println!("  path:     {} cells", result.stats.path_length);
    } else {
        println!("  path:     none, the goal is unreachable");
    }
    println!("  time:     {}", format_ms(result.stats.solve_time_ms));
    Ok(())
}
