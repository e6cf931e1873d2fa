use wayfind_geom::{CharGrid, Point};

use crate::{Edge, EdgeProvider};

/// Unit-weight moves between passable cells of a [`CharGrid`].
///
/// A cell is passable when it lies inside the grid and `passable` returns
/// `true` for its character. Moves are either cardinal (4-way) or all
/// (8-way).
pub struct GridEdges<'a, F> {
    grid: &'a CharGrid,
    passable: F,
    diagonals: bool,
}

impl<'a, F: Fn(char) -> bool> GridEdges<'a, F> {
    /// 4-directional moves.
    pub fn cardinal(grid: &'a CharGrid, passable: F) -> Self {
        Self {
            grid,
            passable,
            diagonals: false,
        }
    }

    /// 8-directional moves, diagonals included.
    pub fn all(grid: &'a CharGrid, passable: F) -> Self {
        Self {
            grid,
            passable,
            diagonals: true,
        }
    }

    #[inline]
    fn keep(&self, p: Point) -> bool {
        self.grid.at(p).is_some_and(&self.passable)
    }
}

impl<F: Fn(char) -> bool> EdgeProvider<Point> for GridEdges<'_, F> {
    fn edges(&self, p: &Point, buf: &mut Vec<Edge<Point>>) {
        if self.diagonals {
            buf.extend(p.neighbors_8().into_iter().filter(|&n| self.keep(n)).map(Edge::unit));
        } else {
            buf.extend(p.neighbors_4().into_iter().filter(|&n| self.keep(n)).map(Edge::unit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(edges: &impl EdgeProvider<Point>, p: Point) -> Vec<Point> {
        let mut buf = Vec::new();
        edges.edges(&p, &mut buf);
        buf.into_iter().map(|e| e.to).collect()
    }

    #[test]
    fn cardinal_skips_walls_and_edges() {
        let grid = CharGrid::parse("#.\n..").unwrap();
        let e = GridEdges::cardinal(&grid, |ch| ch != '#');
        assert_eq!(targets(&e, Point::new(0, 1)), vec![Point::new(1, 1)]);
        assert_eq!(
            targets(&e, Point::new(1, 1)),
            vec![Point::new(1, 0), Point::new(0, 1)]
        );
    }

    #[test]
    fn all_includes_diagonals() {
        let grid = CharGrid::filled(3, 3, '.');
        let e = GridEdges::all(&grid, |_| true);
        assert_eq!(targets(&e, Point::new(1, 1)).len(), 8);
        assert_eq!(targets(&e, Point::new(0, 0)).len(), 3);
    }
}
