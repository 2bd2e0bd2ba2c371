use bumpalo::Bump;
use serde::{Deserialize, Serialize};

pub use crate::algorithm::reproject::Reprojector;
use crate::error::Result;
use crate::geometry::GeometryCollection;
use crate::io::gml::builder::build_document;
use crate::io::gml::merge::merge_fragments;
use crate::io::gml::parser::parse_document;

/// Options for reading GML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GmlReaderOptions {
    /// Reproject member geometries declaring another srid into the srid of the result.
    ///
    /// Only has an effect when the reader was given a [`Reprojector`]. Defaults to `true`.
    pub reproject_on_merge: bool,

    /// Reject any node after the closing tag of a scalar root.
    ///
    /// Polygon and multi-geometry roots always must end the document. Defaults to
    /// `false`, which ignores whatever follows a Point, LineString, Curve or Box.
    pub strict_trailing_nodes: bool,
}

impl GmlReaderOptions {
    pub fn new(reproject_on_merge: bool, strict_trailing_nodes: bool) -> Self {
        Self {
            reproject_on_merge,
            strict_trailing_nodes,
        }
    }

    pub fn with_reproject_on_merge(self, reproject_on_merge: bool) -> Self {
        Self {
            reproject_on_merge,
            ..self
        }
    }

    pub fn with_strict_trailing_nodes(self, strict_trailing_nodes: bool) -> Self {
        Self {
            strict_trailing_nodes,
            ..self
        }
    }

    /// Parse options from a JSON object. Missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for GmlReaderOptions {
    fn default() -> Self {
        Self::new(true, false)
    }
}

/// A reusable GML reader.
///
/// Each call to [`GmlReader::read`] is independent: parse-time nodes live in an arena
/// that is dropped when the call returns, whether it succeeded or not.
#[derive(Clone, Copy, Default)]
pub struct GmlReader<'r> {
    options: GmlReaderOptions,
    reprojector: Option<&'r dyn Reprojector>,
}

impl<'r> GmlReader<'r> {
    pub fn new(options: GmlReaderOptions) -> Self {
        Self {
            options,
            reprojector: None,
        }
    }

    /// Use `reprojector` when merging members that declare different srids.
    pub fn with_reprojector(self, reprojector: &'r dyn Reprojector) -> Self {
        Self {
            reprojector: Some(reprojector),
            ..self
        }
    }

    pub fn options(&self) -> &GmlReaderOptions {
        &self.options
    }

    /// Read one GML geometry fragment.
    pub fn read(&self, gml: &str) -> Result<GeometryCollection> {
        let bump = Bump::new();
        let chain = parse_document(&bump, gml)?;
        let doc = build_document(&chain, &self.options)?;
        merge_fragments(&doc, self.reprojector, &self.options)
    }
}

/// Read one GML geometry fragment with default options and no reprojection.
///
/// ```
/// use geogml::datatypes::GeometryType;
///
/// let geom = geogml::read_gml("<gml:Point><gml:coordinates>1,2</gml:coordinates></gml:Point>").unwrap();
/// assert_eq!(geom.declared_type(), GeometryType::Point);
/// assert_eq!(geom.points()[0].x(), 1.0);
/// ```
pub fn read_gml(gml: &str) -> Result<GeometryCollection> {
    GmlReader::default().read(gml)
}
