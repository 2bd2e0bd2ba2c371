use itertools::Itertools;

use crate::geometry::{CoordBuffer, GeometryCollection, LineString, Ring};

/// Planar length of a geometry's linework.
///
/// # Examples
///
/// ```
/// use geogml::algorithm::native::Length;
/// use geogml::datatypes::Dimension;
/// use geogml::geometry::{Coord, LineString};
///
/// let line = LineString::from_coords(
///     Dimension::XY,
///     [Coord::xy(0., 0.), Coord::xy(3., 4.)],
/// );
/// assert_eq!(line.length(), 5.);
/// ```
pub trait Length {
    fn length(&self) -> f64;
}

/// Sum of the 2D distances between successive vertices. Zero for fewer than two
/// vertices.
pub fn polyline_length(coords: &CoordBuffer) -> f64 {
    (0..coords.len())
        .map(|i| coords.xy(i))
        .tuple_windows()
        .map(|((x0, y0), (x1, y1))| (x1 - x0).hypot(y1 - y0))
        .sum()
}

impl Length for CoordBuffer {
    fn length(&self) -> f64 {
        polyline_length(self)
    }
}

impl Length for LineString {
    fn length(&self) -> f64 {
        polyline_length(self.coords())
    }
}

impl Length for Ring {
    fn length(&self) -> f64 {
        polyline_length(self.coords())
    }
}

/// Total length of every linestring. Polygon boundaries count as perimeter, not
/// length, and are skipped.
impl Length for GeometryCollection {
    fn length(&self) -> f64 {
        self.linestrings().iter().map(Length::length).sum()
    }
}
