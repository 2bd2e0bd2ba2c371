//! Algorithms implemented directly on this crate's geometry model.

pub(crate) mod area;
pub mod bounding_rect;
mod centroid;
mod contains;
mod dissolve;
mod distance;
mod extract;
mod intersection;
mod length;
mod map_coords;
mod orient;
mod sanitize;
mod toxic;

pub use area::Area;
pub use bounding_rect::{bounding_rect, bounding_rect_coords, BoundingRect};
pub use centroid::{Centroid, NO_CENTROID};
pub use contains::PointOnSurface;
pub use dissolve::{dissolve_points, dissolve_segments, linearize};
pub use distance::min_distance;
pub use extract::{extract_linestrings, extract_points, extract_polygons};
pub use intersection::segment_intersection;
pub use length::{polyline_length, Length};
pub use map_coords::MapCoords;
pub use orient::{is_clockwise, Orient};
pub use sanitize::Sanitize;
pub use toxic::{closure_defect, is_toxic, toxicity, IsNotClosed, Toxicity};
