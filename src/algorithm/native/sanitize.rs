use crate::datatypes::Dimension;
use crate::geometry::{Coord, GeometryCollection, LineString, Polygon, Ring};

/// Produce a repaired copy of a geometry.
///
/// Consecutive repeated vertices are dropped (comparing x, y and z) and every ring is
/// closed by making its last vertex equal to its first. A member that would fall below
/// its minimum vertex count (2 for linestrings, 4 for rings) is copied through unchanged.
pub trait Sanitize {
    fn sanitize(&self) -> Self;
}

/// Vertices with consecutive duplicates removed, comparing x, y and z.
fn dedup(coords: impl Iterator<Item = Coord>, dim: Dimension) -> Vec<Coord> {
    let compare = Dimension::from_flags(dim.has_z(), false);
    let mut out: Vec<Coord> = Vec::new();
    for coord in coords {
        match out.last() {
            Some(last) if last.eq_in(&coord, compare) => {}
            _ => out.push(coord),
        }
    }
    out
}

impl Sanitize for LineString {
    fn sanitize(&self) -> Self {
        let dim = self.dim();
        let coords = dedup(self.coords().iter(), dim);
        if coords.len() < 2 {
            return self.clone();
        }
        LineString::from_coords(dim, coords)
    }
}

impl Sanitize for Ring {
    fn sanitize(&self) -> Self {
        let dim = self.dim();
        let mut coords = dedup(self.coords().iter(), dim);
        if let Some(&first) = coords.first() {
            let last = coords.len() - 1;
            if coords[last].eq_in(&first, Dimension::from_flags(dim.has_z(), false)) {
                coords[last] = first;
            } else {
                coords.push(first);
            }
        }
        if coords.len() < 4 {
            return self.clone();
        }
        Ring::from_coords(dim, coords)
    }
}

impl Sanitize for Polygon {
    fn sanitize(&self) -> Self {
        Polygon::from_rings(
            self.exterior().sanitize(),
            self.interiors().iter().map(Sanitize::sanitize).collect(),
        )
    }
}

impl Sanitize for GeometryCollection {
    fn sanitize(&self) -> Self {
        let mut result = GeometryCollection::new(self.dim());
        result.set_srid(self.srid());
        result.set_declared_type(self.declared_type());
        for point in self.points() {
            result.push_point(point);
        }
        for line in self.linestrings() {
            result.insert_linestring(line.sanitize());
        }
        for polygon in self.polygons() {
            result.insert_polygon(polygon.sanitize());
        }
        result
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::algorithm::native::IsNotClosed;
    use crate::test::geometry::mixed_collection;

    #[test]
    fn drops_repeated_vertices() {
        let line = LineString::from_coords(
            Dimension::XYZ,
            [
                Coord::xyz(0., 0., 0.),
                Coord::xyz(0., 0., 0.),
                Coord::xyz(1., 1., 0.),
                Coord::xyz(1., 1., 5.),
                Coord::xyz(1., 1., 5.),
            ],
        );
        let clean = line.sanitize();
        assert_eq!(clean.num_points(), 3);
        assert_eq!(clean.point(2), Coord::xyz(1., 1., 5.));
    }

    #[test]
    fn collapsed_linestring_is_kept() {
        let line = LineString::from_coords(Dimension::XY, [Coord::xy(1., 1.), Coord::xy(1., 1.)]);
        assert_eq!(line.sanitize(), line);
    }

    #[test]
    fn closes_open_rings() {
        let ring = Ring::from_coords(
            Dimension::XY,
            [
                Coord::xy(0., 0.),
                Coord::xy(4., 0.),
                Coord::xy(4., 0.),
                Coord::xy(4., 4.),
                Coord::xy(0., 4.),
            ],
        );
        assert!(ring.is_not_closed());
        let clean = ring.sanitize();
        assert_eq!(clean.num_points(), 5);
        assert!(!clean.is_not_closed());
        assert_eq!(clean.point(4), Coord::xy(0., 0.));
    }

    #[test]
    fn overwrites_closing_measure() {
        let ring = Ring::from_coords(
            Dimension::XYM,
            [
                Coord::xym(0., 0., 1.),
                Coord::xym(4., 0., 2.),
                Coord::xym(4., 4., 3.),
                Coord::xym(0., 0., 9.),
            ],
        );
        assert!(ring.is_not_closed());
        let clean = ring.sanitize();
        assert_eq!(clean.num_points(), 4);
        assert!(!clean.is_not_closed());
    }

    #[test]
    fn short_ring_is_kept() {
        let ring = Ring::from_coords(
            Dimension::XY,
            [Coord::xy(0., 0.), Coord::xy(1., 0.), Coord::xy(0., 0.)],
        );
        assert_eq!(ring.sanitize(), ring);
    }

    #[test]
    fn collection_keeps_metadata() {
        let geom = mixed_collection();
        let clean = geom.sanitize();
        assert_eq!(clean, geom);
        assert!(!clean.is_not_closed());
    }
}
