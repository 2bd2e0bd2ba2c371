use crate::geometry::{GeometryCollection, Polygon, Ring, Winding};

/// Compute and cache ring winding.
pub trait Orient {
    type Output;

    /// Recompute the winding over the closed vertex cycle and store it on every ring.
    fn orient(&mut self) -> Self::Output;
}

/// Twice the signed area of the closed vertex cycle, wrapping from the last vertex
/// back to the first.
fn closed_cycle_area(ring: &Ring) -> f64 {
    let coords = ring.coords();
    let n = coords.len();
    let mut area = 0.;
    for i in 0..n {
        let (x0, y0) = coords.xy(i);
        let (x1, y1) = coords.xy((i + 1) % n);
        area += x0 * y1 - x1 * y0;
    }
    area
}

impl Orient for Ring {
    type Output = Winding;

    /// A non-negative area is counter-clockwise.
    fn orient(&mut self) -> Winding {
        let winding = if closed_cycle_area(self) >= 0. {
            Winding::CounterClockwise
        } else {
            Winding::Clockwise
        };
        self.set_winding(winding);
        winding
    }
}

impl Orient for Polygon {
    type Output = ();

    fn orient(&mut self) {
        self.exterior_mut().orient();
        for ring in self.interiors_mut() {
            ring.orient();
        }
    }
}

impl Orient for GeometryCollection {
    type Output = ();

    fn orient(&mut self) {
        for polygon in self.polygons_mut() {
            polygon.orient();
        }
    }
}

/// Whether a ring winds clockwise, computing and caching the winding if needed.
pub fn is_clockwise(ring: &mut Ring) -> bool {
    let winding = match ring.winding() {
        Some(winding) => winding,
        None => ring.orient(),
    };
    winding == Winding::Clockwise
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::geometry::Coord;
    use crate::test::geometry::{hole_ring, mixed_collection, square_ring};

    #[test]
    fn winding_of_fixtures() {
        let mut ring = square_ring();
        assert_eq!(ring.winding(), None);
        assert_eq!(ring.orient(), Winding::CounterClockwise);
        assert_eq!(ring.winding(), Some(Winding::CounterClockwise));

        let mut hole = hole_ring();
        assert!(is_clockwise(&mut hole));
    }

    #[test]
    fn reversal_flips_winding() {
        for ring in [square_ring(), hole_ring()] {
            let coords: Vec<Coord> = ring.coords().iter().collect();
            let mut forward = Ring::from_coords(ring.dim(), coords.clone());
            let mut backward = Ring::from_coords(ring.dim(), coords.into_iter().rev());
            assert_ne!(forward.orient(), backward.orient());
        }
    }

    #[test]
    fn wraps_unclosed_rings() {
        // Open triangle, clockwise once the implicit closing edge is added.
        let mut ring = Ring::from_coords(
            Dimension::XY,
            [Coord::xy(0., 0.), Coord::xy(0., 1.), Coord::xy(1., 0.)],
        );
        assert_eq!(ring.orient(), Winding::Clockwise);
    }

    #[test]
    fn collection_orients_every_ring() {
        let mut geom = mixed_collection();
        geom.orient();
        let polygon = &geom.polygons()[0];
        assert_eq!(polygon.exterior().winding(), Some(Winding::CounterClockwise));
        assert_eq!(polygon.interior(0).winding(), Some(Winding::Clockwise));
    }
}
