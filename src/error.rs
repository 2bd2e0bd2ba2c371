//! Defines [`GeoGmlError`], representing all errors returned by this crate.

use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoGmlError {
    /// The scanner met a character sequence it does not recognize.
    #[error("Lexical error at line {line}, column {column}: {message}")]
    Lexical {
        /// 1-based line of the offending character.
        line: usize,
        /// 1-based column of the offending character.
        column: usize,
        /// What the scanner expected.
        message: String,
    },

    /// A token arrived in a state where the grammar does not accept it.
    #[error("Grammar error: {0}")]
    Grammar(String),

    /// The root element is not one of the recognized GML geometry types.
    #[error("Unsupported GML geometry type: {0}")]
    UnsupportedGeometryType(String),

    /// An expected tag sequence did not match any known GML dialect.
    #[error("Invalid GML structure: {0}")]
    InvalidStructure(String),

    /// Coordinate text could not be parsed, or had the wrong tuple size.
    #[error("Invalid GML coordinates: {0}")]
    InvalidCoordinates(String),

    /// A polygon ring is too short, not closed, or the exterior count is wrong.
    #[error("Invalid ring: {0}")]
    InvalidRing(String),

    /// The document did not produce any point, linestring or polygon.
    #[error("Empty geometry")]
    EmptyGeometry,

    /// A reprojection collaborator failed.
    #[error("Reprojection error: {0}")]
    Reprojection(String),

    /// General error.
    #[error("General error: {0}")]
    General(String),

    /// [proj::ProjError]
    #[cfg(feature = "proj")]
    #[error(transparent)]
    ProjError(#[from] proj::ProjError),

    /// [serde_json::Error]
    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoGmlError>;
