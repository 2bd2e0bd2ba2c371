//! Folds the per-element fragments of a document into one geometry.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::algorithm::reproject::Reprojector;
use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeoGmlError, Result};
use crate::geometry::GeometryCollection;
use crate::io::gml::builder::BuiltDocument;
use crate::io::gml::reader::GmlReaderOptions;

/// The type of the merged geometry, from its member counts and the root's declared type.
///
/// A lone element keeps the declared type when the root asked for its Multi type or
/// for a collection. Several elements of a single kind become that kind's Multi type.
pub fn classify(
    points: usize,
    linestrings: usize,
    polygons: usize,
    declared: GeometryType,
) -> Option<GeometryType> {
    let scalar = match (points, linestrings, polygons) {
        (0, 0, 0) => return None,
        (_, 0, 0) => GeometryType::Point,
        (0, _, 0) => GeometryType::LineString,
        (0, 0, _) => GeometryType::Polygon,
        _ => return Some(GeometryType::GeometryCollection),
    };
    if declared == GeometryType::GeometryCollection {
        return Some(declared);
    }
    if points + linestrings + polygons == 1 && declared != scalar.multi() {
        Some(scalar)
    } else {
        Some(scalar.multi())
    }
}

fn valid_srid(srid: Option<i32>) -> Option<i32> {
    srid.filter(|srid| *srid > 0)
}

/// Try to bring `fragment` into `target`. Any failure degrades to the fragment as is.
fn reproject<'g>(
    reprojector: &dyn Reprojector,
    fragment: &'g GeometryCollection,
    from: i32,
    target: i32,
) -> Cow<'g, GeometryCollection> {
    let (Some(proj_from), Some(proj_to)) =
        (reprojector.proj_params(from), reprojector.proj_params(target))
    else {
        warn!(from, target, "no projection definition, merging unprojected");
        return Cow::Borrowed(fragment);
    };
    match reprojector.transform(fragment, &proj_from, &proj_to) {
        Ok(projected) => Cow::Owned(projected),
        Err(err) => {
            warn!(from, target, %err, "reprojection failed, merging unprojected");
            Cow::Borrowed(fragment)
        }
    }
}

/// Merge the fragments of `doc` into a single geometry.
///
/// The srid is the root's when it has a positive one, otherwise the first positive
/// fragment srid. Fragments declaring another positive srid are reprojected into it
/// when a [`Reprojector`] is given and reprojection is enabled.
pub fn merge_fragments(
    doc: &BuiltDocument,
    reprojector: Option<&dyn Reprojector>,
    options: &GmlReaderOptions,
) -> Result<GeometryCollection> {
    let fragments = &doc.fragments;
    let points: usize = fragments.iter().map(|g| g.num_points()).sum();
    let linestrings: usize = fragments.iter().map(|g| g.num_linestrings()).sum();
    let polygons: usize = fragments.iter().map(|g| g.num_polygons()).sum();
    let declared = doc.root_type.declared_type();
    let geometry_type =
        classify(points, linestrings, polygons, declared).ok_or(GeoGmlError::EmptyGeometry)?;

    let all_z = fragments.iter().all(|g| g.dim() == Dimension::XYZ);
    let dim = Dimension::from_flags(all_z, false);
    debug!(
        points,
        linestrings, polygons, %geometry_type, %dim, "merging GML fragments"
    );

    let mut result = GeometryCollection::new(dim);
    result.set_declared_type(geometry_type);
    let mut target = valid_srid(doc.srid);
    let reprojector = reprojector.filter(|_| options.reproject_on_merge);
    if reprojector.is_none() {
        debug!("reprojection disabled, fragments are merged as is");
    }

    for fragment in fragments {
        let srid = valid_srid(fragment.srid());
        if target.is_none() {
            target = srid;
        }
        let merged = match (reprojector, srid, target) {
            (Some(reprojector), Some(from), Some(to)) if from != to => {
                reproject(reprojector, fragment, from, to)
            }
            _ => Cow::Borrowed(fragment),
        };
        result.extend_from(&merged);
    }
    result.set_srid(target);
    Ok(result)
}
