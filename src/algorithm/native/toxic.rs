use std::fmt::Display;

use crate::geometry::{GeometryCollection, Ring};

/// A structural defect that would trip up a downstream topology engine.
///
/// These are findings, not errors: the geometry is still well-formed as far as this
/// crate is concerned. The [`Display`] impl yields the diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toxicity {
    /// The collection has no member at all.
    Empty,
    /// A linestring with fewer than 2 vertices.
    ShortLineString,
    /// A ring with fewer than 4 vertices.
    ShortRing,
    /// A ring whose last vertex differs from its first.
    UnclosedRing,
}

impl Display for Toxicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Toxicity::Empty => write!(f, "detected an empty geometry"),
            Toxicity::ShortLineString => write!(f, "detected a toxic Linestring: < 2 pts"),
            Toxicity::ShortRing => write!(f, "detected a toxic Ring: < 4 pts"),
            Toxicity::UnclosedRing => write!(f, "detected a not-closed Ring"),
        }
    }
}

/// The first vertex-count defect found in `geom`, if any.
pub fn toxicity(geom: &GeometryCollection) -> Option<Toxicity> {
    if geom.is_empty() {
        return Some(Toxicity::Empty);
    }
    if geom.linestrings().iter().any(|line| line.num_points() < 2) {
        return Some(Toxicity::ShortLineString);
    }
    let short_ring = geom
        .polygons()
        .iter()
        .flat_map(|polygon| polygon.rings())
        .any(|ring| ring.num_points() < 4);
    short_ring.then_some(Toxicity::ShortRing)
}

/// Whether `geom` is empty or holds a too-short linestring or ring.
pub fn is_toxic(geom: &GeometryCollection) -> bool {
    toxicity(geom).is_some()
}

/// Ring closure checks, comparing every ordinate the geometry carries.
pub trait IsNotClosed {
    fn is_not_closed(&self) -> bool;
}

impl IsNotClosed for Ring {
    fn is_not_closed(&self) -> bool {
        !self.is_closed()
    }
}

impl IsNotClosed for GeometryCollection {
    fn is_not_closed(&self) -> bool {
        closure_defect(self).is_some()
    }
}

/// [`Toxicity::UnclosedRing`] if any ring of any polygon is open.
pub fn closure_defect(geom: &GeometryCollection) -> Option<Toxicity> {
    geom.polygons()
        .iter()
        .flat_map(|polygon| polygon.rings())
        .any(IsNotClosed::is_not_closed)
        .then_some(Toxicity::UnclosedRing)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::geometry::{Coord, Polygon};
    use crate::test::geometry::{mixed_collection, square_ring};

    #[test]
    fn empty_collection_is_toxic() {
        let geom = GeometryCollection::new_xy();
        assert!(is_toxic(&geom));
        assert_eq!(toxicity(&geom), Some(Toxicity::Empty));
    }

    #[test]
    fn healthy_collection() {
        assert_eq!(toxicity(&mixed_collection()), None);
        assert!(!mixed_collection().is_not_closed());
    }

    #[test]
    fn short_linestrings() {
        for n in 0..2 {
            let mut geom = GeometryCollection::new_xy();
            geom.add_linestring(n);
            assert_eq!(toxicity(&geom), Some(Toxicity::ShortLineString));
        }
    }

    #[test]
    fn short_rings() {
        for n in 0..4 {
            let mut geom = GeometryCollection::new_xyz();
            geom.add_polygon(n, 0);
            assert!(is_toxic(&geom));
            assert_eq!(toxicity(&geom), Some(Toxicity::ShortRing));
        }

        let mut geom = GeometryCollection::new_xy();
        let polygon = geom.add_polygon(4, 1);
        polygon.add_interior_ring(0, 3);
        assert_eq!(toxicity(&geom), Some(Toxicity::ShortRing));
    }

    #[test]
    fn open_hole() {
        let hole = Ring::from_coords(
            Dimension::XYZM,
            [
                Coord::xyzm(1., 1., 0., 0.),
                Coord::xyzm(1., 2., 0., 0.),
                Coord::xyzm(2., 2., 0., 0.),
                Coord::xyzm(1., 1., 0., 1.),
            ],
        );
        assert!(hole.is_not_closed());
        let mut geom = GeometryCollection::new_xyzm();
        geom.push_polygon(&Polygon::from_rings(square_ring().convert(Dimension::XYZM), vec![hole]));
        assert_eq!(closure_defect(&geom), Some(Toxicity::UnclosedRing));
        assert_eq!(
            Toxicity::UnclosedRing.to_string(),
            "detected a not-closed Ring"
        );
    }
}
