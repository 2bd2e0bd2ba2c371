use crate::datatypes::GeometryType;
use crate::geometry::GeometryCollection;

fn declared(count: usize, scalar: GeometryType) -> GeometryType {
    if count == 1 {
        scalar
    } else {
        scalar.multi()
    }
}

/// The points of `geom`, or `None` when it has none.
pub fn extract_points(geom: &GeometryCollection) -> Option<GeometryCollection> {
    if geom.num_points() == 0 {
        return None;
    }
    let mut result = GeometryCollection::new(geom.dim());
    result.set_srid(geom.srid());
    for point in geom.points() {
        result.push_point(point);
    }
    result.set_declared_type(declared(result.num_points(), GeometryType::Point));
    Some(result)
}

/// The linestrings of `geom`, or `None` when it has none.
pub fn extract_linestrings(geom: &GeometryCollection) -> Option<GeometryCollection> {
    if geom.num_linestrings() == 0 {
        return None;
    }
    let mut result = GeometryCollection::new(geom.dim());
    result.set_srid(geom.srid());
    for line in geom.linestrings() {
        result.push_linestring(line);
    }
    result.set_declared_type(declared(
        result.num_linestrings(),
        GeometryType::LineString,
    ));
    Some(result)
}

/// The polygons of `geom`, or `None` when it has none.
pub fn extract_polygons(geom: &GeometryCollection) -> Option<GeometryCollection> {
    if geom.num_polygons() == 0 {
        return None;
    }
    let mut result = GeometryCollection::new(geom.dim());
    result.set_srid(geom.srid());
    for polygon in geom.polygons() {
        result.push_polygon(polygon);
    }
    result.set_declared_type(declared(result.num_polygons(), GeometryType::Polygon));
    Some(result)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::Coord;
    use crate::test::geometry::mixed_collection;

    #[test]
    fn filter_mixed_collection() {
        let geom = mixed_collection();

        let points = extract_points(&geom).unwrap();
        assert_eq!(points.num_points(), 1);
        assert!(points.linestrings().is_empty() && points.polygons().is_empty());
        assert_eq!(points.declared_type(), GeometryType::Point);

        let lines = extract_linestrings(&geom).unwrap();
        assert_eq!(lines.num_linestrings(), 1);
        assert_eq!(lines.declared_type(), GeometryType::LineString);
        assert_eq!(lines.srid(), Some(4326));

        let polygons = extract_polygons(&geom).unwrap();
        assert_eq!(polygons.num_polygons(), 1);
        assert_eq!(polygons.polygons()[0], geom.polygons()[0]);
    }

    #[test]
    fn multi_when_several() {
        let mut geom = GeometryCollection::new_xy();
        geom.add_point(Coord::xy(0., 0.));
        geom.add_point(Coord::xy(1., 0.));
        assert_eq!(
            extract_points(&geom).unwrap().declared_type(),
            GeometryType::MultiPoint
        );
        assert!(extract_linestrings(&geom).is_none());
        assert!(extract_polygons(&geom).is_none());
    }
}
