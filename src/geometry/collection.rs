use crate::datatypes::{Dimension, GeometryType};
use crate::geometry::{Coord, LineString, Point, Polygon};

/// The root geometry aggregate.
///
/// Points, linestrings and polygons are kept in three independent lists. Every member
/// shares the collection's [`Dimension`]; members pushed from elsewhere are converted on
/// insertion. The [`GeometryType`] tag records what the collection was declared as.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection {
    srid: Option<i32>,
    dim: Dimension,
    declared_type: GeometryType,
    points: Vec<Point>,
    linestrings: Vec<LineString>,
    polygons: Vec<Polygon>,
}

impl GeometryCollection {
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            ..Default::default()
        }
    }

    pub fn new_xy() -> Self {
        Self::new(Dimension::XY)
    }

    pub fn new_xyz() -> Self {
        Self::new(Dimension::XYZ)
    }

    pub fn new_xym() -> Self {
        Self::new(Dimension::XYM)
    }

    pub fn new_xyzm() -> Self {
        Self::new(Dimension::XYZM)
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    pub fn srid(&self) -> Option<i32> {
        self.srid
    }

    pub fn set_srid(&mut self, srid: Option<i32>) {
        self.srid = srid;
    }

    pub fn declared_type(&self) -> GeometryType {
        self.declared_type
    }

    pub fn set_declared_type(&mut self, declared_type: GeometryType) {
        self.declared_type = declared_type;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn linestrings(&self) -> &[LineString] {
        &self.linestrings
    }

    pub fn linestrings_mut(&mut self) -> &mut [LineString] {
        &mut self.linestrings
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn polygons_mut(&mut self) -> &mut [Polygon] {
        &mut self.polygons
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn num_linestrings(&self) -> usize {
        self.linestrings.len()
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    /// A collection with no point, linestring or polygon.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.linestrings.is_empty() && self.polygons.is_empty()
    }

    /// Append a point carrying the collection's ordinates of `coord`.
    pub fn add_point(&mut self, coord: Coord) {
        self.points.push(Point::new(coord, self.dim));
    }

    /// Append a linestring of `num_points` vertices and return it for filling.
    pub fn add_linestring(&mut self, num_points: usize) -> &mut LineString {
        self.linestrings.push(LineString::new(self.dim, num_points));
        let last = self.linestrings.len() - 1;
        &mut self.linestrings[last]
    }

    /// Append a polygon with `exterior_points` exterior vertices and `num_interiors`
    /// reserved holes, and return it for filling.
    pub fn add_polygon(&mut self, exterior_points: usize, num_interiors: usize) -> &mut Polygon {
        self.polygons
            .push(Polygon::new(self.dim, exterior_points, num_interiors));
        let last = self.polygons.len() - 1;
        &mut self.polygons[last]
    }

    pub fn push_point(&mut self, point: &Point) {
        self.points.push(point.convert(self.dim));
    }

    /// Append a copy of `line`, converted to the collection's dimension.
    pub fn push_linestring(&mut self, line: &LineString) {
        self.linestrings.push(line.convert(self.dim));
    }

    /// Append a copy of `polygon`, converted to the collection's dimension.
    pub fn push_polygon(&mut self, polygon: &Polygon) {
        self.polygons.push(polygon.convert(self.dim));
    }

    /// Append owned members without copying when the dimension already matches.
    pub fn insert_linestring(&mut self, line: LineString) {
        if line.dim() == self.dim {
            self.linestrings.push(line);
        } else {
            self.push_linestring(&line);
        }
    }

    pub fn insert_polygon(&mut self, polygon: Polygon) {
        if polygon.dim() == self.dim {
            self.polygons.push(polygon);
        } else {
            self.push_polygon(&polygon);
        }
    }

    /// Copy every member of `other` into this collection.
    pub fn extend_from(&mut self, other: &GeometryCollection) {
        for point in other.points() {
            self.push_point(point);
        }
        for line in other.linestrings() {
            self.push_linestring(line);
        }
        for polygon in other.polygons() {
            self.push_polygon(polygon);
        }
    }

    /// Topological dimension: 0 for points only, 1 if any linestring, 2 if any
    /// polygon; `None` when empty.
    pub fn geometry_dimension(&self) -> Option<u8> {
        if !self.polygons.is_empty() {
            Some(2)
        } else if !self.linestrings.is_empty() {
            Some(1)
        } else if !self.points.is_empty() {
            Some(0)
        } else {
            None
        }
    }

    /// A copy of this collection with every member cast to `dim`.
    ///
    /// Ordinates added by the cast are `0.0`; dropped ones are discarded.
    pub fn cast(&self, dim: Dimension) -> GeometryCollection {
        let mut result = GeometryCollection::new(dim);
        result.srid = self.srid;
        result.declared_type = self.declared_type;
        result.extend_from(self);
        result
    }

    /// Every vertex of every member.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let points = self.points.iter().map(|p| p.coord());
        let lines = self.linestrings.iter().flat_map(|l| l.coords().iter());
        let rings = self
            .polygons
            .iter()
            .flat_map(|p| p.rings())
            .flat_map(|r| r.coords().iter());
        points.chain(lines).chain(rings)
    }

    /// Minimum and maximum Z over all vertices, `None` when Z is absent or the
    /// collection is empty.
    pub fn z_range(&self) -> Option<(f64, f64)> {
        if !self.dim.has_z() {
            return None;
        }
        min_max(self.coords().map(|c| c.z))
    }

    /// Minimum and maximum M over all vertices, `None` when M is absent or the
    /// collection is empty.
    pub fn m_range(&self) -> Option<(f64, f64)> {
        if !self.dim.has_m() {
            return None;
        }
        min_max(self.coords().map(|c| c.m))
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::geometry::{line_xyz, square_with_hole};

    #[test]
    fn members_share_dimension() {
        let mut geom = GeometryCollection::new_xyz();
        geom.add_point(Coord::xyzm(1.0, 2.0, 3.0, 4.0));
        assert_eq!(geom.points()[0].z(), Some(3.0));
        assert_eq!(geom.points()[0].m(), None);

        let line = geom.add_linestring(2);
        line.set_point(1, Coord::xyz(5.0, 5.0, 5.0));
        assert_eq!(geom.linestrings()[0].dim(), Dimension::XYZ);

        geom.push_polygon(&square_with_hole());
        assert_eq!(geom.polygons()[0].dim(), Dimension::XYZ);
        assert_eq!(geom.polygons()[0].interior(0).dim(), Dimension::XYZ);
    }

    #[test]
    fn empty_collection() {
        let geom = GeometryCollection::new_xy();
        assert!(geom.is_empty());
        assert_eq!(geom.geometry_dimension(), None);
        assert_eq!(geom.srid(), None);
        assert_eq!(geom.declared_type(), GeometryType::Unknown);
    }

    #[test]
    fn topological_dimension() {
        let mut geom = GeometryCollection::new_xy();
        geom.add_point(Coord::xy(0.0, 0.0));
        assert_eq!(geom.geometry_dimension(), Some(0));
        geom.add_linestring(2);
        assert_eq!(geom.geometry_dimension(), Some(1));
        geom.add_polygon(4, 0);
        assert_eq!(geom.geometry_dimension(), Some(2));
    }

    #[test]
    fn cast_and_ranges() {
        let mut geom = GeometryCollection::new_xyz();
        geom.set_srid(Some(4326));
        geom.push_linestring(&line_xyz());
        assert_eq!(geom.z_range(), Some((0.0, 2.0)));
        assert_eq!(geom.m_range(), None);

        let cast = geom.cast(Dimension::XYM);
        assert_eq!(cast.srid(), Some(4326));
        assert_eq!(cast.dim(), Dimension::XYM);
        assert_eq!(cast.m_range(), Some((0.0, 0.0)));
        assert_eq!(cast.z_range(), None);
        assert_eq!(cast.linestrings()[0].point(2), Coord::xym(2.0, 2.0, 0.0));
    }
}
