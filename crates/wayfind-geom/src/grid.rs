//! Rectangular character grids parsed from text.
//!
//! A [`CharGrid`] is the usual shape of a maze or map given as lines of
//! characters. Cell `(x, y)` is column `x` of line `y`.

use crate::Point;
use std::fmt;

/// A rectangular grid of characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    cells: Vec<char>,
    width: i32,
    height: i32,
}

impl CharGrid {
    /// Parse a grid from text.
    ///
    /// Leading and trailing blank lines are dropped and a trailing `'\r'` is
    /// stripped from each line. Every remaining line must have the same
    /// number of characters.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .trim_matches('\n')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let Some(first) = lines.first() else {
            return Err(GridError::Empty);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * lines.len());
        for (y, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found,
                });
            }
            cells.extend(line.chars());
        }

        Ok(Self {
            cells,
            width: width as i32,
            height: lines.len() as i32,
        })
    }

    /// Create a grid of the given size filled with `fill`.
    pub fn filled(width: i32, height: i32, fill: char) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            cells: vec![fill; (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| (p.y * self.width + p.x) as usize)
    }

    /// Character at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<char> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Overwrite the character at `p`. Returns `false` if `p` is outside.
    pub fn set(&mut self, p: Point, ch: char) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = ch;
                true
            }
            None => false,
        }
    }

    /// All positions in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }

    /// First position (row-major) holding `ch`.
    pub fn find(&self, ch: char) -> Option<Point> {
        self.points().find(|&p| self.at(p) == Some(ch))
    }

    /// Every position holding `ch`, row-major.
    pub fn find_all(&self, ch: char) -> Vec<Point> {
        self.points().filter(|&p| self.at(p) == Some(ch)).collect()
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width.max(1) as usize).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing a [`CharGrid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The text had no non-empty lines.
    Empty,
    /// A line's length differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no content"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid: line {line} has {found} characters, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for GridError {}
