//! Solve a text maze with BFS, Dijkstra and A*.
//!
//! Run: cargo run --bin maze -- path/to/maze.txt
//!
//! The maze marks the start with `S`, the exit with `E` and walls with `#`.
//! Without an argument a random maze is generated from a fixed seed.

use wayfind_demos::{random_maze, solve};
use wayfind_geom::CharGrid;

fn main() {
    let grid = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(text) => match CharGrid::parse(&text) {
                Ok(grid) => grid,
                Err(e) => {
                    eprintln!("Error: {path}: {e}");
                    std::process::exit(1);
                }
            },
            Err(e) => {
                eprintln!("Error: {path}: {e}");
                std::process::exit(1);
            }
        },
        None => random_maze(41, 21, 42),
    };

    match solve(&grid) {
        Ok(report) => print!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
