use crate::datatypes::GeometryType;
use crate::geometry::{Coord, CoordBuffer, GeometryCollection, LineString, Point, Polygon, Ring};

/// Convert a [`Coord`] to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo(coord: &Coord) -> geo::Coord {
    geo::coord! { x: coord.x, y: coord.y }
}

fn coords_to_geo(coords: &CoordBuffer) -> geo::LineString {
    geo::LineString::new(coords.iter().map(|c| coord_to_geo(&c)).collect())
}

/// Convert a [`Point`] to a [`geo::Point`].
///
/// Only the first two dimensions will be kept.
pub fn point_to_geo(point: &Point) -> geo::Point {
    geo::Point::new(point.x(), point.y())
}

/// Convert a [`LineString`] to a [`geo::LineString`].
///
/// Only the first two dimensions will be kept.
pub fn line_string_to_geo(line_string: &LineString) -> geo::LineString {
    coords_to_geo(line_string.coords())
}

/// Convert a [`Polygon`] to a [`geo::Polygon`].
///
/// Only the first two dimensions will be kept.
pub fn polygon_to_geo(polygon: &Polygon) -> geo::Polygon {
    let exterior = coords_to_geo(polygon.exterior().coords());
    let interiors = polygon
        .interiors()
        .iter()
        .map(|interior| coords_to_geo(interior.coords()))
        .collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert every member of a [`GeometryCollection`] to a [`geo::GeometryCollection`].
///
/// Only the first two dimensions will be kept.
pub fn geometry_collection_to_geo(geom: &GeometryCollection) -> geo::GeometryCollection {
    let points = geom
        .points()
        .iter()
        .map(|p| geo::Geometry::Point(point_to_geo(p)));
    let lines = geom
        .linestrings()
        .iter()
        .map(|l| geo::Geometry::LineString(line_string_to_geo(l)));
    let polygons = geom
        .polygons()
        .iter()
        .map(|p| geo::Geometry::Polygon(polygon_to_geo(p)));
    geo::GeometryCollection::new_from(points.chain(lines).chain(polygons).collect())
}

/// The type a collection should be read as: its declared type, or a classification of
/// its members when it was declared `Unknown`.
fn effective_type(geom: &GeometryCollection) -> GeometryType {
    if geom.declared_type() != GeometryType::Unknown {
        return geom.declared_type();
    }
    match (geom.num_points(), geom.num_linestrings(), geom.num_polygons()) {
        (1, 0, 0) => GeometryType::Point,
        (0, 1, 0) => GeometryType::LineString,
        (0, 0, 1) => GeometryType::Polygon,
        (_, 0, 0) => GeometryType::MultiPoint,
        (0, _, 0) => GeometryType::MultiLineString,
        (0, 0, _) => GeometryType::MultiPolygon,
        _ => GeometryType::GeometryCollection,
    }
}

/// Convert a [`GeometryCollection`] to a [`geo::Geometry`].
///
/// The declared type picks the variant when the members agree with it; anything else
/// becomes a [`geo::GeometryCollection`]. Only the first two dimensions will be kept.
pub fn geometry_to_geo(geom: &GeometryCollection) -> geo::Geometry {
    let shape = (geom.num_points(), geom.num_linestrings(), geom.num_polygons());
    match (effective_type(geom), shape) {
        (GeometryType::Point, (1, 0, 0)) => geo::Geometry::Point(point_to_geo(&geom.points()[0])),
        (GeometryType::LineString, (0, 1, 0)) => {
            geo::Geometry::LineString(line_string_to_geo(&geom.linestrings()[0]))
        }
        (GeometryType::Polygon, (0, 0, 1)) => {
            geo::Geometry::Polygon(polygon_to_geo(&geom.polygons()[0]))
        }
        (GeometryType::MultiPoint, (_, 0, 0)) => geo::Geometry::MultiPoint(
            geom.points().iter().map(point_to_geo).collect::<Vec<_>>().into(),
        ),
        (GeometryType::MultiLineString, (0, _, 0)) => {
            geo::Geometry::MultiLineString(geo::MultiLineString::new(
                geom.linestrings().iter().map(line_string_to_geo).collect(),
            ))
        }
        (GeometryType::MultiPolygon, (0, 0, _)) => geo::Geometry::MultiPolygon(
            geo::MultiPolygon::new(geom.polygons().iter().map(polygon_to_geo).collect()),
        ),
        _ => geo::Geometry::GeometryCollection(geometry_collection_to_geo(geom)),
    }
}

impl From<&LineString> for geo::LineString {
    fn from(value: &LineString) -> Self {
        line_string_to_geo(value)
    }
}

impl From<&Ring> for geo::LineString {
    fn from(value: &Ring) -> Self {
        coords_to_geo(value.coords())
    }
}

impl From<&Polygon> for geo::Polygon {
    fn from(value: &Polygon) -> Self {
        polygon_to_geo(value)
    }
}

impl From<&Point> for geo::Point {
    fn from(value: &Point) -> Self {
        point_to_geo(value)
    }
}

impl From<&GeometryCollection> for geo::Geometry {
    fn from(value: &GeometryCollection) -> Self {
        geometry_to_geo(value)
    }
}
