//! Queenscan Visualizer
//!
//! Command-line front end for the placement search. Picks up board size,
//! queen count, and solution cap from flags or a TOML file, runs one
//! search, and prints every solution as an ASCII board.

use std::path::PathBuf;

use clap::Parser;
use queenscan::{run_search, ConfigError, Placement, Position, SearchConfig};

/// Searches for ways to place k non-attacking queens on an n x n board.
#[derive(Parser, Debug)]
#[command(name = "visualizer", version, about)]
struct Cli {
    /// Board side length (default 8, clamped to 1..=20)
    #[arg(short = 'n', long)]
    board_size: Option<usize>,

    /// Number of queens to place (default 8, clamped to the cell count)
    #[arg(short = 'k', long)]
    queens: Option<usize>,

    /// Stop after this many solutions (default 1000)
    #[arg(short, long)]
    limit: Option<usize>,

    /// Stop at the first solution
    #[arg(long, conflicts_with = "limit")]
    first: bool,

    /// Read settings from a TOML file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the summary only, without the boards
    #[arg(short, long)]
    quiet: bool,
}

fn build_config(cli: &Cli) -> Result<SearchConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };
    if let Some(board_size) = cli.board_size {
        config.board_size = board_size;
    }
    if let Some(queens) = cli.queens {
        config.queens = queens;
    }
    if let Some(limit) = cli.limit {
        config.solution_limit = limit;
    }
    if cli.first {
        config.solution_limit = 1;
    }
    Ok(config)
}

/// Prints one placement as an ASCII board.
fn print_board(n: usize, placement: &Placement) {
    println!("{}", "-".repeat(n * 2 + 1));
    for row in 0..n {
        print!("|");
        for col in 0..n {
            let queen_here = placement.occupies(Position::of(row, col));
            print!("{}", if queen_here { "Q|" } else { " |" });
        }
        println!();
    }
    println!("{}", "-".repeat(n * 2 + 1));
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match build_config(&cli) {
        Ok(config) => config.clamped(),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    };

    println!(
        "{} queens on a {}x{} board",
        config.queens, config.board_size, config.board_size
    );
    println!("Searching...");

    let result = run_search(&config);

    if result.is_empty() {
        println!("No solution found");
    } else {
        println!(
            "Found {} solution(s) (limit {})",
            result.len(),
            config.solution_limit
        );
        if !cli.quiet {
            for (i, solution) in result.solutions().iter().enumerate() {
                println!("\nSolution {} / {}:", i + 1, result.len());
                print_board(config.board_size, solution);
            }
        }
    }

    let stats = result.stats();
    println!(
        "\nScanned {} cells, placed {} queens in {:?}",
        stats.cells_scanned,
        stats.queens_placed,
        stats.elapsed()
    );
}
