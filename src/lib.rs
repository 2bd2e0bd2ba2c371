//! Read [GML](https://www.ogc.org/standards/gml) geometry fragments into a simple
//! geometry model, plus algorithms implemented on that model.
//!
//! ```
//! use geogml::algorithm::native::{Area, Sanitize};
//!
//! let gml = r#"<gml:Polygon srsName="EPSG:4326">
//!   <gml:exterior><gml:LinearRing>
//!     <gml:posList>0 0 4 0 4 4 0 4 0 0</gml:posList>
//!   </gml:LinearRing></gml:exterior>
//! </gml:Polygon>"#;
//! let geom = geogml::read_gml(gml).unwrap().sanitize();
//! assert_eq!(geom.srid(), Some(4326));
//! assert_eq!(geom.polygons()[0].unsigned_area(), 16.0);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use io::gml::{read_gml, GmlReader, GmlReaderOptions};

pub mod algorithm;
pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
