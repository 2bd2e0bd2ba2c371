use crate::datatypes::Dimension;
use crate::geometry::Ring;

/// One exterior ring plus zero or more holes, all sharing one dimension.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    exterior: Ring,
    interiors: Vec<Ring>,
}

impl Polygon {
    /// A polygon whose exterior holds `exterior_points` zero-valued vertices and which
    /// reserves `num_interiors` empty holes, to be sized with
    /// [`Polygon::add_interior_ring`].
    pub fn new(dim: Dimension, exterior_points: usize, num_interiors: usize) -> Self {
        Self {
            exterior: Ring::new(dim, exterior_points),
            interiors: vec![Ring::new(dim, 0); num_interiors],
        }
    }

    pub fn from_rings(exterior: Ring, interiors: Vec<Ring>) -> Self {
        let dim = exterior.dim();
        let interiors = interiors
            .into_iter()
            .map(|ring| {
                if ring.dim() == dim {
                    ring
                } else {
                    ring.convert(dim)
                }
            })
            .collect();
        Self {
            exterior,
            interiors,
        }
    }

    pub fn dim(&self) -> Dimension {
        self.exterior.dim()
    }

    pub fn exterior(&self) -> &Ring {
        &self.exterior
    }

    pub fn exterior_mut(&mut self) -> &mut Ring {
        &mut self.exterior
    }

    pub fn num_interiors(&self) -> usize {
        self.interiors.len()
    }

    /// # Panics
    ///
    /// If `i >= self.num_interiors()`.
    pub fn interior(&self, i: usize) -> &Ring {
        &self.interiors[i]
    }

    pub fn interiors(&self) -> &[Ring] {
        &self.interiors
    }

    pub fn interiors_mut(&mut self) -> &mut [Ring] {
        &mut self.interiors
    }

    /// Size the reserved hole at `pos` to `num_points` zero-valued vertices and return it.
    ///
    /// # Panics
    ///
    /// If `pos >= self.num_interiors()`.
    pub fn add_interior_ring(&mut self, pos: usize, num_points: usize) -> &mut Ring {
        let dim = self.dim();
        let ring = &mut self.interiors[pos];
        *ring = Ring::new(dim, num_points);
        ring
    }

    /// The exterior followed by every hole.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        std::iter::once(&self.exterior).chain(self.interiors.iter())
    }

    pub fn convert(&self, dim: Dimension) -> Polygon {
        Self {
            exterior: self.exterior.convert(dim),
            interiors: self.interiors.iter().map(|r| r.convert(dim)).collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Coord;

    #[test]
    fn reserve_then_size_holes() {
        let mut polygon = Polygon::new(Dimension::XYZ, 5, 2);
        assert_eq!(polygon.exterior().num_points(), 5);
        assert_eq!(polygon.num_interiors(), 2);
        assert_eq!(polygon.interior(1).num_points(), 0);

        let hole = polygon.add_interior_ring(1, 4);
        hole.set_point(0, Coord::xyz(1.0, 1.0, 1.0));
        assert_eq!(polygon.interior(1).num_points(), 4);
        assert_eq!(polygon.interior(1).dim(), Dimension::XYZ);
        assert_eq!(polygon.rings().count(), 3);
    }

    #[test]
    fn holes_take_exterior_dimension() {
        let exterior = Ring::from_coords(Dimension::XY, [Coord::xy(0.0, 0.0)]);
        let hole = Ring::from_coords(Dimension::XYZ, [Coord::xyz(0.0, 0.0, 1.0)]);
        let polygon = Polygon::from_rings(exterior, vec![hole]);
        assert_eq!(polygon.interior(0).dim(), Dimension::XY);
    }
}
