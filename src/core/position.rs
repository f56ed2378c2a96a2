//! Grid coordinates.
//!
//! `CellPosition` is a plain `(x, y)` pair with structural equality and
//! hashing. Positions carry no validity information of their own: whether
//! a position is on a board is always a question for that board's bounds
//! (`BoardState::is_inside_bounds`).

use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid.
///
/// Coordinates are signed so that ray walks and push directions can step
/// off an edge and be caught by a bounds check, rather than wrapping.
///
/// ```
/// use push_grid::CellPosition;
///
/// let origin = CellPosition::new(2, 1);
/// assert_eq!(origin.offset(1, 0), CellPosition::new(3, 1));
/// assert_eq!(origin.offset(-3, 0), CellPosition::new(-1, 1));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPosition {
    pub x: i32,
    pub y: i32,
}

impl CellPosition {
    /// Create a position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position `(dx, dy)` away from this one.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The unit direction from this position toward `other`, with each
    /// component clamped to -1, 0, or 1.
    ///
    /// A multi-step request like `(0,0) -> (3,0)` collapses to `(1, 0)`.
    #[must_use]
    pub const fn direction_toward(self, other: Self) -> (i32, i32) {
        ((other.x - self.x).signum(), (other.y - self.y).signum())
    }
}

impl std::fmt::Display for CellPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four orthogonal unit vectors, in the order rays are cast.
pub const ORTHOGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal unit vectors, in the order rays are cast.
pub const DIAGONAL_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];
