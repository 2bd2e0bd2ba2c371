use crate::datatypes::GeometryType;
use crate::geometry::{CoordBuffer, GeometryCollection, LineString};

/// Turn every polygon ring into a linestring.
///
/// Returns `None` when `geom` holds any point or linestring, or no polygon at all. The
/// result is declared a `MultiLineString` when `force_multi` is set or more than one
/// ring was converted, and a `LineString` otherwise.
pub fn linearize(geom: &GeometryCollection, force_multi: bool) -> Option<GeometryCollection> {
    if geom.num_points() > 0 || geom.num_linestrings() > 0 || geom.num_polygons() == 0 {
        return None;
    }
    let mut result = GeometryCollection::new(geom.dim());
    result.set_srid(geom.srid());
    for ring in geom.polygons().iter().flat_map(|polygon| polygon.rings()) {
        result.insert_linestring(LineString::from(ring.coords().clone()));
    }
    let declared = if force_multi || result.num_linestrings() > 1 {
        GeometryType::MultiLineString
    } else {
        GeometryType::LineString
    };
    result.set_declared_type(declared);
    Some(result)
}

/// Append one 2-point linestring per pair of successive distinct vertices.
fn push_segments(result: &mut GeometryCollection, coords: &CoordBuffer) {
    let dim = coords.dim();
    let mut previous = None;
    for coord in coords.iter() {
        match previous {
            Some(prev) if coord.eq_in(&prev, dim) => continue,
            Some(prev) => {
                let segment = result.add_linestring(2);
                segment.set_point(0, prev);
                segment.set_point(1, coord);
            }
            None => {}
        }
        previous = Some(coord);
    }
}

/// Break every linestring and ring into 2-point segments.
///
/// Points are carried over. Identical successive vertices never form a segment.
/// Returns `None` when nothing is left.
pub fn dissolve_segments(geom: &GeometryCollection) -> Option<GeometryCollection> {
    let mut result = GeometryCollection::new(geom.dim());
    result.set_srid(geom.srid());
    for point in geom.points() {
        result.push_point(point);
    }
    for line in geom.linestrings() {
        push_segments(&mut result, line.coords());
    }
    for ring in geom.polygons().iter().flat_map(|polygon| polygon.rings()) {
        push_segments(&mut result, ring.coords());
    }
    (!result.is_empty()).then_some(result)
}

/// Reduce a geometry to the points at each of its vertices.
///
/// Returns `None` when `geom` is empty.
pub fn dissolve_points(geom: &GeometryCollection) -> Option<GeometryCollection> {
    let mut result = GeometryCollection::new(geom.dim());
    result.set_srid(geom.srid());
    for coord in geom.coords() {
        result.add_point(coord);
    }
    (!result.is_empty()).then_some(result)
}
