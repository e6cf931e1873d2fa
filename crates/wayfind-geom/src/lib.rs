//! **wayfind-geom** — geometry used as vertex ids by the wayfind search engine.
//!
//! Nothing here knows about searching. These are the plain value types that
//! call sites key their searches by: 2D and 3D integer points, a facing
//! [`Dir`] for composite `(position, facing)` states, and [`CharGrid`], a
//! rectangular grid parsed from text.

pub mod dir;
pub mod grid;
pub mod point;

pub use dir::Dir;
pub use grid::{CharGrid, GridError};
pub use point::{Point, Point3};
