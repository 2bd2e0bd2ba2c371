use crate::datatypes::Dimension;
use crate::geometry::{Coord, CoordBuffer};

/// An ordered sequence of vertices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString {
    coords: CoordBuffer,
}

impl LineString {
    /// A linestring of `num_points` zero-valued vertices, to be filled with
    /// [`LineString::set_point`].
    pub fn new(dim: Dimension, num_points: usize) -> Self {
        Self {
            coords: CoordBuffer::new(dim, num_points),
        }
    }

    pub fn from_coords(dim: Dimension, coords: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            coords: CoordBuffer::from_coords(dim, coords),
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

    /// # Panics
    ///
    /// If `i >= self.num_points()`.
    pub fn set_point(&mut self, i: usize, coord: Coord) {
        self.coords.set(i, coord)
    }

    /// A linestring is closed when it has at least three vertices and its first and
    /// last vertices share x and y.
    pub fn is_closed(&self) -> bool {
        if self.num_points() < 3 {
            return false;
        }
        self.coords.xy(0) == self.coords.xy(self.num_points() - 1)
    }

    /// Copy this linestring into another dimension.
    pub fn convert(&self, dim: Dimension) -> LineString {
        Self {
            coords: self.coords.convert(dim),
        }
    }
}

impl From<CoordBuffer> for LineString {
    fn from(coords: CoordBuffer) -> Self {
        Self { coords }
    }
}
