//! Integer grid coordinates and map bounds.

use std::fmt;

/// A cell on the simulation map.
///
/// Coordinates are signed so that random displacements can be applied before
/// clamping; an agent inside a running simulation always satisfies
/// `GridBounds::contains`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`, in cells.
    #[inline]
    pub fn distance(self, other: GridPos) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        dx.hypot(dy)
    }

    /// Shift by `(dx, dy)` and clamp the result into `bounds`.
    #[inline]
    pub fn offset_clamped(self, dx: i32, dy: i32, bounds: GridBounds) -> GridPos {
        bounds.clamp(GridPos::new(self.x.saturating_add(dx), self.y.saturating_add(dy)))
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Map dimensions.  Valid cells are `0..width` × `0..height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridBounds {
    pub width:  i32,
    pub height: i32,
}

impl GridBounds {
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(self, pos: GridPos) -> bool {
        (0..self.width).contains(&pos.x) && (0..self.height).contains(&pos.y)
    }

    /// Nearest in-bounds cell.  Requires a non-empty map.
    #[inline]
    pub fn clamp(self, pos: GridPos) -> GridPos {
        GridPos {
            x: pos.x.clamp(0, self.width - 1),
            y: pos.y.clamp(0, self.height - 1),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}
