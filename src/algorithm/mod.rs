//! Geometric algorithms implemented on the geometry model, plus the reprojection seam.

pub mod native;
#[cfg(feature = "proj")]
pub mod proj;
pub mod reproject;
