use crate::Point;

/// A cardinal facing. Pairs with a [`Point`] to form `(position, facing)`
/// search states where turning has its own cost.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    /// All four facings, clockwise from north.
    pub const ALL: [Dir; 4] = [Dir::North, Dir::East, Dir::South, Dir::West];

    /// Unit step in this direction (Y grows down).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Dir::North => Point::new(0, -1),
            Dir::East => Point::new(1, 0),
            Dir::South => Point::new(0, 1),
            Dir::West => Point::new(-1, 0),
        }
    }

    /// Rotate 90° clockwise.
    #[inline]
    pub const fn turn_right(self) -> Self {
        match self {
            Dir::North => Dir::East,
            Dir::East => Dir::South,
            Dir::South => Dir::West,
            Dir::West => Dir::North,
        }
    }

    /// Rotate 90° counter-clockwise.
    #[inline]
    pub const fn turn_left(self) -> Self {
        match self {
            Dir::North => Dir::West,
            Dir::West => Dir::South,
            Dir::South => Dir::East,
            Dir::East => Dir::North,
        }
    }

    #[inline]
    pub const fn reverse(self) -> Self {
        self.turn_right().turn_right()
    }

    /// Parse an arrow or compass letter: `^>v<` or `NESW`.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '^' | 'N' => Some(Dir::North),
            '>' | 'E' => Some(Dir::East),
            'v' | 'S' => Some(Dir::South),
            '<' | 'W' => Some(Dir::West),
            _ => None,
        }
    }
}
