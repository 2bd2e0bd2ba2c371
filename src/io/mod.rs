//! Readers for GML and conversions to the [`geo`](::geo) crate.

pub mod geo;
pub mod gml;
