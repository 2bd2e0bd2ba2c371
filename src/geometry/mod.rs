//! The in-memory geometry model.
//!
//! Every geometry is dimension-aware: vertices live in flat [`CoordBuffer`]s whose
//! stride follows the owning geometry's [`Dimension`][crate::datatypes::Dimension].

pub use collection::GeometryCollection;
pub use coord::{Coord, CoordBuffer};
pub use linestring::LineString;
pub use point::Point;
pub use polygon::Polygon;
pub use ring::{Ring, Winding};

mod collection;
mod coord;
mod linestring;
mod point;
mod polygon;
mod ring;
