use crate::datatypes::Dimension;
use crate::geometry::{Coord, CoordBuffer};

/// Winding direction of a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// A polygon boundary.
///
/// Structurally a linestring that is normally closed. The winding direction is derived
/// on demand by [`Orient`][crate::algorithm::native::Orient] and cached here.
#[derive(Debug, Clone, Default)]
pub struct Ring {
    coords: CoordBuffer,
    winding: Option<Winding>,
}

impl Ring {
    pub fn new(dim: Dimension, num_points: usize) -> Self {
        Self {
            coords: CoordBuffer::new(dim, num_points),
            winding: None,
        }
    }

    pub fn from_coords(dim: Dimension, coords: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            coords: CoordBuffer::from_coords(dim, coords),
            winding: None,
        }
    }

    pub fn dim(&self) -> Dimension {
        self.coords.dim()
    }

    pub fn num_points(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &CoordBuffer {
        &self.coords
    }

    /// # Panics
    ///
    /// If `i >= self.num_points()`.
    pub fn point(&self, i: usize) -> Coord {
        self.coords.get(i)
    }

    /// Overwrites vertex `i` and clears the cached winding.
    ///
    /// # Panics
    ///
    /// If `i >= self.num_points()`.
    pub fn set_point(&mut self, i: usize, coord: Coord) {
        self.winding = None;
        self.coords.set(i, coord)
    }

    /// The cached winding, `None` until it has been computed.
    pub fn winding(&self) -> Option<Winding> {
        self.winding
    }

    pub(crate) fn set_winding(&mut self, winding: Winding) {
        self.winding = Some(winding);
    }

    /// Whether the first and last vertex are equal in every ordinate the ring carries.
    ///
    /// An empty ring is not closed.
    pub fn is_closed(&self) -> bool {
        match (self.coords.first(), self.coords.last()) {
            (Some(first), Some(last)) => first.eq_in(&last, self.dim()),
            _ => false,
        }
    }

    pub fn convert(&self, dim: Dimension) -> Ring {
        Self {
            coords: self.coords.convert(dim),
            winding: self.winding,
        }
    }
}

/// Rings compare by their vertices only; the cached winding is ignored.
impl PartialEq for Ring {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl From<CoordBuffer> for Ring {
    fn from(coords: CoordBuffer) -> Self {
        Self {
            coords,
            winding: None,
        }
    }
}
