//! Type tags shared by the geometry model, the algorithms and the GML reader.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

use crate::error::{GeoGmlError, Result};

/// The coordinate dimensions carried by a geometry.
///
/// The dimension fixes the stride of every coordinate buffer: each vertex occupies
/// [`Dimension::size`] consecutive `f64` values, ordered `x, y[, z][, m]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    #[default]
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Builds the dimension from the presence of the Z and M ordinates.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

impl TryFrom<&str> for Dimension {
    type Error = GeoGmlError;

    fn try_from(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "xy" => Ok(Dimension::XY),
            "xyz" => Ok(Dimension::XYZ),
            "xym" => Ok(Dimension::XYM),
            "xyzm" => Ok(Dimension::XYZM),
            _ => Err(GeoGmlError::General(format!("Invalid dimension name: {value}"))),
        }
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The declared type of a [`GeometryCollection`][crate::geometry::GeometryCollection].
///
/// A collection always stores its members in three independent lists. The declared
/// type tells a single-element collection apart from a multi-geometry of cardinality
/// one, e.g. a `Point` from a `MultiPoint` holding one point.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum GeometryType {
    Unknown = 0,
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

impl Default for GeometryType {
    fn default() -> Self {
        GeometryType::Unknown
    }
}

impl GeometryType {
    /// Whether this tag names a multi-geometry or a collection.
    pub fn is_multi(&self) -> bool {
        matches!(
            self,
            GeometryType::MultiPoint
                | GeometryType::MultiLineString
                | GeometryType::MultiPolygon
                | GeometryType::GeometryCollection
        )
    }

    /// The multi variant of a scalar type. Multi types and `Unknown` map to themselves.
    pub fn multi(&self) -> Self {
        match self {
            GeometryType::Point => GeometryType::MultiPoint,
            GeometryType::LineString => GeometryType::MultiLineString,
            GeometryType::Polygon => GeometryType::MultiPolygon,
            other => *other,
        }
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryType::Unknown => "Unknown",
            GeometryType::Point => "Point",
            GeometryType::LineString => "LineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::MultiPolygon => "MultiPolygon",
            GeometryType::GeometryCollection => "GeometryCollection",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dimension_stride() {
        assert_eq!(Dimension::XY.size(), 2);
        assert_eq!(Dimension::XYZ.size(), 3);
        assert_eq!(Dimension::XYM.size(), 3);
        assert_eq!(Dimension::XYZM.size(), 4);
    }

    #[test]
    fn dimension_flags() {
        for dim in [
            Dimension::XY,
            Dimension::XYZ,
            Dimension::XYM,
            Dimension::XYZM,
        ] {
            assert_eq!(Dimension::from_flags(dim.has_z(), dim.has_m()), dim);
            assert_eq!(Dimension::try_from(dim.to_string().as_str()).unwrap(), dim);
        }
        assert!(Dimension::try_from("xyt").is_err());
    }

    #[test]
    fn geometry_type_codes() {
        assert_eq!(GeometryType::try_from(3u8).unwrap(), GeometryType::Polygon);
        assert_eq!(u8::from(GeometryType::GeometryCollection), 7);
        assert!(GeometryType::try_from(8u8).is_err());
        assert_eq!(GeometryType::Point.multi(), GeometryType::MultiPoint);
        assert_eq!(
            GeometryType::GeometryCollection.multi(),
            GeometryType::GeometryCollection
        );
        assert!(!GeometryType::Polygon.is_multi());
        assert!(GeometryType::MultiPolygon.is_multi());
    }
}
