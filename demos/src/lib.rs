//! Shared maze logic for the `maze` demo.
//!
//! Demonstrates: BFS, Dijkstra and A* over a grid, path reconstruction, and
//! seeded random maze generation.

use std::fmt;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wayfind::distance::manhattan;
use wayfind::{GridEdges, SearchError, astar, bfs, dijkstra};
use wayfind_geom::{CharGrid, Dir, Point};

const WALL: char = '#';
const START: char = 'S';
const EXIT: char = 'E';
const TRAIL: char = 'o';

/// Carve a perfect maze with a randomized depth-first walk.
///
/// Sizes are rounded up to odd numbers of at least 5. The start is the top
/// left open cell and the exit the bottom right one.
pub fn random_maze(width: i32, height: i32, seed: u64) -> CharGrid {
    let width = width.max(5) | 1;
    let height = height.max(5) | 1;
    let mut grid = CharGrid::filled(width, height, WALL);
    let mut rng = StdRng::seed_from_u64(seed);

    let start = Point::new(1, 1);
    grid.set(start, '.');
    let mut stack = vec![start];
    while let Some(&cur) = stack.last() {
        let options: Vec<Point> = Dir::ALL
            .iter()
            .map(|d| cur + d.delta() * 2)
            .filter(|n| n.x > 0 && n.y > 0 && n.x < width - 1 && n.y < height - 1)
            .filter(|&n| grid.at(n) == Some(WALL))
            .collect();
        if options.is_empty() {
            stack.pop();
            continue;
        }
        let next = options[rng.random_range(0..options.len())];
        let between = Point::new((cur.x + next.x) / 2, (cur.y + next.y) / 2);
        grid.set(between, '.');
        grid.set(next, '.');
        stack.push(next);
    }

    grid.set(start, START);
    grid.set(Point::new(width - 2, height - 2), EXIT);
    grid
}

/// Outcome of solving one maze with every algorithm.
#[derive(Debug, Clone)]
pub struct Report {
    pub bfs_steps: u64,
    pub dijkstra_steps: u64,
    pub astar_steps: u64,
    /// Settled vertex counts, in the order bfs, dijkstra, astar.
    pub settled: [usize; 3],
    /// The maze with the A* path drawn in.
    pub overlay: CharGrid,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.overlay)?;
        writeln!(f, "bfs:      {} steps, {} settled", self.bfs_steps, self.settled[0])?;
        writeln!(
            f,
            "dijkstra: {} steps, {} settled",
            self.dijkstra_steps, self.settled[1]
        )?;
        writeln!(f, "astar:    {} steps, {} settled", self.astar_steps, self.settled[2])
    }
}

/// Errors from [`solve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// The maze has no cell with this marker.
    MissingMarker(char),
    Search(SearchError),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMarker(ch) => write!(f, "maze has no \u{201c}{ch}\u{201d} cell"),
            Self::Search(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for DemoError {}

impl From<SearchError> for DemoError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// Find the shortest route from `S` to `E` three ways.
pub fn solve(grid: &CharGrid) -> Result<Report, DemoError> {
    let start = grid.find(START).ok_or(DemoError::MissingMarker(START))?;
    let exit = grid.find(EXIT).ok_or(DemoError::MissingMarker(EXIT))?;
    let edges = GridEdges::cardinal(grid, |ch| ch != WALL);

    let b = bfs([start], &edges, |p| *p == exit);
    let d = dijkstra([start], &edges, |p| *p == exit);
    let a = astar([start], |p| manhattan(*p, exit) as f64, &edges, |p| *p == exit);

    let goal = a.require_goal()?;
    let mut overlay = grid.clone();
    for v in a.path(goal) {
        if v.id != start && v.id != exit {
            overlay.set(v.id, TRAIL);
        }
    }
    log::debug!("maze: exit at {} reached in {} steps", exit, goal.steps());

    Ok(Report {
        bfs_steps: b.require_goal()?.steps(),
        dijkstra_steps: d.require_goal()?.steps(),
        astar_steps: goal.steps(),
        settled: [b.len(), d.len(), a.len()],
        overlay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_small_maze() {
        let grid = CharGrid::parse(
            "\
#######
#S..#.#
#.#.#.#
#.#...#
#.###E#
#######",
        )
        .unwrap();
        let r = solve(&grid).unwrap();
        assert_eq!(r.bfs_steps, 7);
        assert_eq!(r.dijkstra_steps, 7);
        assert_eq!(r.astar_steps, 7);
        assert_eq!(r.overlay.find_all(TRAIL).len(), 6);
    }

    #[test]
    fn walled_off_exit() {
        let grid = CharGrid::parse("#####\n#S#E#\n#####").unwrap();
        let err = solve(&grid).unwrap_err();
        assert_eq!(err, DemoError::Search(SearchError::Unreachable));
    }

    #[test]
    fn missing_marker() {
        let grid = CharGrid::parse("S..").unwrap();
        assert_eq!(solve(&grid).unwrap_err(), DemoError::MissingMarker('E'));
    }

    #[test]
    fn random_mazes_are_solvable() {
        for seed in 0..5 {
            let grid = random_maze(21, 15, seed);
            assert_eq!(grid.width(), 21);
            assert_eq!(grid.height(), 15);
            let r = solve(&grid).unwrap();
            assert_eq!(r.bfs_steps, r.astar_steps);
            assert_eq!(r.dijkstra_steps, r.astar_steps);
            assert!(r.settled[2] <= r.settled[1]);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(random_maze(15, 15, 9), random_maze(15, 15, 9));
    }
}
