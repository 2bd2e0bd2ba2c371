use crate::error::Result;
use crate::geometry::GeometryCollection;

/// A coordinate-reprojection collaborator.
///
/// The GML reader consults it when merging fragments that declare different srids.
/// Projection mathematics live entirely behind this trait.
pub trait Reprojector {
    /// The projection definition registered for `srid`, if any.
    fn proj_params(&self, srid: i32) -> Option<String>;

    /// Reproject `geom` from the `from` definition to the `to` definition.
    fn transform(&self, geom: &GeometryCollection, from: &str, to: &str)
        -> Result<GeometryCollection>;
}
