use std::time::{Duration, Instant};

use clap::Parser;

use mazewalk::{
    error::MazeError,
    generators::get_rng,
    maze::Maze,
    solvers::{Solver, solve},
};

/// Time maze generation and both traversals without a terminal.
#[derive(Debug, Parser)]
#[command(name = "profile")]
struct Args {
    #[arg(short = 'W', long, default_value_t = 255, value_parser = clap::value_parser!(u16).range(1..))]
    width: u16,

    #[arg(short = 'H', long, default_value_t = 255, value_parser = clap::value_parser!(u16).range(1..))]
    height: u16,

    /// Number of mazes to generate and solve
    #[arg(short = 'n', long, default_value_t = 10)]
    iterations: usize,

    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Default)]
struct Timings {
    generate: Duration,
    bfs: Duration,
    dfs: Duration,
}

fn main() -> Result<(), MazeError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let args = Args::parse();
    let mut rng = get_rng(args.seed);
    let mut timings = Timings::default();

    for _ in 0..args.iterations {
        let start = Instant::now();
        let maze = Maze::generate(args.width, args.height, &mut rng)?;
        timings.generate += start.elapsed();

        for solver in [Solver::Bfs, Solver::Dfs] {
            let start = Instant::now();
            solve(&maze, maze.start(), maze.goal(), solver)?;
            let elapsed = start.elapsed();
            match solver {
                Solver::Bfs => timings.bfs += elapsed,
                Solver::Dfs => timings.dfs += elapsed,
            }
        }
    }

    let runs = args.iterations.max(1) as u32;
    println!(
        "{}x{} maze, {} iterations",
        args.width, args.height, args.iterations
    );
    println!("generate: {:?} avg", timings.generate / runs);
    println!("{}: {:?} avg", Solver::Bfs, timings.bfs / runs);
    println!("{}: {:?} avg", Solver::Dfs, timings.dfs / runs);
    Ok(())
}
