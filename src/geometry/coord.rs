use crate::datatypes::Dimension;

/// A single vertex with all four ordinates.
///
/// Ordinates that the owning geometry does not carry read as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl Coord {
    pub fn xy(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            ..Default::default()
        }
    }

    pub fn xym(x: f64, y: f64, m: f64) -> Self {
        Self {
            x,
            y,
            m,
            ..Default::default()
        }
    }

    pub fn xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self { x, y, z, m }
    }

    /// Compare the ordinates present in `dim`, ignoring the others.
    pub fn eq_in(&self, other: &Coord, dim: Dimension) -> bool {
        self.x == other.x
            && self.y == other.y
            && (!dim.has_z() || self.z == other.z)
            && (!dim.has_m() || self.m == other.m)
    }

    /// Drop the ordinates that `dim` does not carry.
    pub fn project(&self, dim: Dimension) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
            z: if dim.has_z() { self.z } else { 0.0 },
            m: if dim.has_m() { self.m } else { 0.0 },
        }
    }
}

impl From<Coord> for geo::Coord {
    fn from(value: Coord) -> Self {
        geo::coord! { x: value.x, y: value.y }
    }
}

impl From<(f64, f64)> for Coord {
    fn from(value: (f64, f64)) -> Self {
        Coord::xy(value.0, value.1)
    }
}

/// A flat buffer of interleaved coordinates.
///
/// The buffer always holds `len() * dim().size()` values. Its size is fixed when it is
/// created; vertices are then written in place with [`CoordBuffer::set`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoordBuffer {
    dim: Dimension,
    coords: Vec<f64>,
}

impl CoordBuffer {
    /// A zero-filled buffer of `num_points` vertices.
    pub fn new(dim: Dimension, num_points: usize) -> Self {
        Self {
            dim,
            coords: vec![0.0; num_points * dim.size()],
        }
    }

    /// Build a buffer from a sequence of coordinates, keeping the ordinates of `dim`.
    pub fn from_coords(dim: Dimension, coords: impl IntoIterator<Item = Coord>) -> Self {
        let mut buffer = Self {
            dim,
            coords: Vec::new(),
        };
        for coord in coords {
            buffer.push_unchecked(coord);
        }
        buffer
    }

    fn push_unchecked(&mut self, coord: Coord) {
        self.coords.push(coord.x);
        self.coords.push(coord.y);
        if self.dim.has_z() {
            self.coords.push(coord.z);
        }
        if self.dim.has_m() {
            self.coords.push(coord.m);
        }
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// The number of vertices.
    pub fn len(&self) -> usize {
        self.coords.len() / self.dim.size()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The raw interleaved values.
    pub fn values(&self) -> &[f64] {
        &self.coords
    }

    /// Read vertex `i`.
    ///
    /// # Panics
    ///
    /// If `i >= self.len()`.
    pub fn get(&self, i: usize) -> Coord {
        let stride = self.dim.size();
        let v = &self.coords[i * stride..(i + 1) * stride];
        match self.dim {
            Dimension::XY => Coord::xy(v[0], v[1]),
            Dimension::XYZ => Coord::xyz(v[0], v[1], v[2]),
            Dimension::XYM => Coord::xym(v[0], v[1], v[2]),
            Dimension::XYZM => Coord::xyzm(v[0], v[1], v[2], v[3]),
        }
    }

    /// Read the x and y ordinates of vertex `i`.
    ///
    /// # Panics
    ///
    /// If `i >= self.len()`.
    pub fn xy(&self, i: usize) -> (f64, f64) {
        let offset = i * self.dim.size();
        (self.coords[offset], self.coords[offset + 1])
    }

    /// Overwrite vertex `i`. Ordinates the buffer does not carry are ignored.
    ///
    /// # Panics
    ///
    /// If `i >= self.len()`.
    pub fn set(&mut self, i: usize, coord: Coord) {
        let stride = self.dim.size();
        let v = &mut self.coords[i * stride..(i + 1) * stride];
        v[0] = coord.x;
        v[1] = coord.y;
        match self.dim {
            Dimension::XY => {}
            Dimension::XYZ => v[2] = coord.z,
            Dimension::XYM => v[2] = coord.m,
            Dimension::XYZM => {
                v[2] = coord.z;
                v[3] = coord.m;
            }
        }
    }

    pub fn first(&self) -> Option<Coord> {
        (!self.is_empty()).then(|| self.get(0))
    }

    pub fn last(&self) -> Option<Coord> {
        self.len().checked_sub(1).map(|i| self.get(i))
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = Coord> + '_ {
        (0..self.len()).map(|i| self.get(i))
    }

    /// Copy into a buffer of another dimension. Missing Z and M become `0.0`.
    pub fn convert(&self, dim: Dimension) -> CoordBuffer {
        if dim == self.dim {
            return self.clone();
        }
        CoordBuffer::from_coords(dim, self.iter())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stride_follows_dimension() {
        for (dim, stride) in [
            (Dimension::XY, 2),
            (Dimension::XYZ, 3),
            (Dimension::XYM, 3),
            (Dimension::XYZM, 4),
        ] {
            let buffer = CoordBuffer::new(dim, 5);
            assert_eq!(buffer.len(), 5);
            assert_eq!(buffer.values().len(), 5 * stride);
        }
    }

    #[test]
    fn set_keeps_only_present_ordinates() {
        let mut buffer = CoordBuffer::new(Dimension::XYM, 2);
        buffer.set(1, Coord::xyzm(1.0, 2.0, 3.0, 4.0));
        assert_eq!(buffer.get(1), Coord::xym(1.0, 2.0, 4.0));
        assert_eq!(buffer.values(), &[0.0, 0.0, 0.0, 1.0, 2.0, 4.0]);
        assert_eq!(buffer.xy(1), (1.0, 2.0));
    }

    #[test]
    fn convert_fills_missing_with_zero() {
        let buffer =
            CoordBuffer::from_coords(Dimension::XY, [Coord::xy(1.0, 2.0), Coord::xy(3.0, 4.0)]);
        let converted = buffer.convert(Dimension::XYZM);
        assert_eq!(converted.get(0), Coord::xyzm(1.0, 2.0, 0.0, 0.0));

        let back = converted.convert(Dimension::XY);
        assert_eq!(back, buffer);
    }

    #[test]
    #[should_panic]
    fn set_out_of_range_panics() {
        let mut buffer = CoordBuffer::new(Dimension::XY, 1);
        buffer.set(1, Coord::xy(0.0, 0.0));
    }

    #[test]
    fn compare_in_dimension() {
        let a = Coord::xyzm(1.0, 1.0, 2.0, 3.0);
        let b = Coord::xyzm(1.0, 1.0, 2.0, 4.0);
        assert!(a.eq_in(&b, Dimension::XYZ));
        assert!(!a.eq_in(&b, Dimension::XYZM));
    }
}
