use crate::datatypes::Dimension;
use crate::geometry::Coord;

/// A single point, tagged with the dimensions it carries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    coord: Coord,
    dim: Dimension,
}

impl Point {
    /// Create a point keeping only the ordinates of `dim`.
    pub fn new(coord: Coord, dim: Dimension) -> Self {
        Self {
            coord: coord.project(dim),
            dim,
        }
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// All four ordinates; absent ones are `0.0`.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn x(&self) -> f64 {
        self.coord.x
    }

    pub fn y(&self) -> f64 {
        self.coord.y
    }

    pub fn z(&self) -> Option<f64> {
        self.dim.has_z().then_some(self.coord.z)
    }

    pub fn m(&self) -> Option<f64> {
        self.dim.has_m().then_some(self.coord.m)
    }

    /// Re-tag the point with another dimension, zero-filling new ordinates.
    pub fn convert(&self, dim: Dimension) -> Point {
        Point::new(self.coord, dim)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn optional_ordinates() {
        let p = Point::new(Coord::xyzm(1.0, 2.0, 3.0, 4.0), Dimension::XYZ);
        assert_eq!(p.z(), Some(3.0));
        assert_eq!(p.m(), None);
        assert_eq!(p.coord().m, 0.0);

        let flat = p.convert(Dimension::XY);
        assert_eq!(flat.z(), None);
        assert_eq!(flat.coord(), Coord::xy(1.0, 2.0));
    }
}
