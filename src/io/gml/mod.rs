//! Read GML 2 and GML 3 geometry fragments.
//!
//! Reading runs in stages. The [`lexer`] splits the text into tokens, the [`parser`]
//! assembles them into a flat [`NodeChain`](node::NodeChain), the [`builder`] turns
//! the chain into one geometry per element, and [`merge`] folds those into the final
//! [`GeometryCollection`](crate::geometry::GeometryCollection).

pub mod builder;
pub mod coords;
pub mod lexer;
pub mod merge;
pub mod node;
pub mod parser;
mod reader;
pub mod srs;

pub use reader::{read_gml, GmlReader, GmlReaderOptions, Reprojector};
