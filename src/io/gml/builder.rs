//! Turns a [`NodeChain`] into preliminary single-type geometries.
//!
//! Every handler starts at a node index, consumes a contiguous run of nodes and returns
//! the index of the first node it did not consume. Container handlers delegate each
//! member element to the scalar handler for its tag and stop at their own closing tag.

use std::fmt::Display;

use phf::phf_map;
use tracing::debug;

use crate::datatypes::{Dimension, GeometryType};
use crate::error::{GeoGmlError, Result};
use crate::geometry::{Coord, GeometryCollection, Polygon, Ring};
use crate::io::gml::coords::{
    parse_coordinates, parse_point_v2, parse_point_v3, parse_pos_list, CoordSeq,
};
use crate::io::gml::node::{Node, NodeChain};
use crate::io::gml::reader::GmlReaderOptions;
use crate::io::gml::srs::{guess_srid, has_z};

/// The GML root elements this reader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GmlType {
    Point,
    LineString,
    Curve,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiCurve,
    MultiPolygon,
    MultiSurface,
    MultiGeometry,
    Box,
}

static GML_TYPES: phf::Map<&'static str, GmlType> = phf_map! {
    "Point" => GmlType::Point,
    "LineString" => GmlType::LineString,
    "Curve" => GmlType::Curve,
    "Polygon" => GmlType::Polygon,
    "MultiPoint" => GmlType::MultiPoint,
    "MultiLineString" => GmlType::MultiLineString,
    "MultiCurve" => GmlType::MultiCurve,
    "MultiPolygon" => GmlType::MultiPolygon,
    "MultiSurface" => GmlType::MultiSurface,
    "MultiGeometry" => GmlType::MultiGeometry,
    "Box" => GmlType::Box,
};

impl GmlType {
    /// Look up a node's tag, accepting both `gml:X` and bare `X`.
    pub fn from_node(node: &Node<'_>) -> Option<Self> {
        GML_TYPES.get(node.local_name()).copied()
    }

    /// The element name, without namespace prefix.
    pub fn tag(&self) -> &'static str {
        match self {
            GmlType::Point => "Point",
            GmlType::LineString => "LineString",
            GmlType::Curve => "Curve",
            GmlType::Polygon => "Polygon",
            GmlType::MultiPoint => "MultiPoint",
            GmlType::MultiLineString => "MultiLineString",
            GmlType::MultiCurve => "MultiCurve",
            GmlType::MultiPolygon => "MultiPolygon",
            GmlType::MultiSurface => "MultiSurface",
            GmlType::MultiGeometry => "MultiGeometry",
            GmlType::Box => "Box",
        }
    }

    /// The geometry type a document rooted at this element is declared as.
    pub fn declared_type(&self) -> GeometryType {
        match self {
            GmlType::Point => GeometryType::Point,
            GmlType::LineString | GmlType::Curve => GeometryType::LineString,
            GmlType::Polygon | GmlType::Box => GeometryType::Polygon,
            GmlType::MultiPoint => GeometryType::MultiPoint,
            GmlType::MultiLineString | GmlType::MultiCurve => GeometryType::MultiLineString,
            GmlType::MultiPolygon | GmlType::MultiSurface => GeometryType::MultiPolygon,
            GmlType::MultiGeometry => GeometryType::GeometryCollection,
        }
    }

    /// Wrapper tags and accepted element types of a container, `None` for scalars.
    fn members(&self) -> Option<(&'static [&'static str], &'static [GmlType])> {
        let members = match self {
            GmlType::MultiPoint => (POINT_MEMBERS, POINT_KINDS),
            GmlType::MultiLineString => (LINESTRING_MEMBERS, LINESTRING_KINDS),
            GmlType::MultiCurve => (CURVE_MEMBERS, CURVE_KINDS),
            GmlType::MultiPolygon => (POLYGON_MEMBERS, POLYGON_KINDS),
            GmlType::MultiSurface => (SURFACE_MEMBERS, POLYGON_KINDS),
            GmlType::MultiGeometry => (GEOMETRY_MEMBERS, GEOMETRY_KINDS),
            _ => return None,
        };
        Some(members)
    }
}

const POINT_MEMBERS: &[&str] = &["pointMember", "pointMembers"];
const LINESTRING_MEMBERS: &[&str] = &["lineStringMember", "lineStringMembers"];
const CURVE_MEMBERS: &[&str] = &["curveMember", "curveMembers"];
const POLYGON_MEMBERS: &[&str] = &["polygonMember", "polygonMembers"];
const SURFACE_MEMBERS: &[&str] = &["surfaceMember", "surfaceMembers"];
const GEOMETRY_MEMBERS: &[&str] = &["geometryMember", "geometryMembers"];

const POINT_KINDS: &[GmlType] = &[GmlType::Point];
const LINESTRING_KINDS: &[GmlType] = &[GmlType::LineString];
const CURVE_KINDS: &[GmlType] = &[GmlType::Curve, GmlType::LineString];
const POLYGON_KINDS: &[GmlType] = &[GmlType::Polygon];
const GEOMETRY_KINDS: &[GmlType] = &[
    GmlType::Point,
    GmlType::LineString,
    GmlType::Curve,
    GmlType::Polygon,
];

impl Display for GmlType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RingRole {
    Exterior,
    Interior,
}

const EXTERIOR_TAGS: &[&str] = &["outerBoundaryIs", "exterior"];
const INTERIOR_TAGS: &[&str] = &["innerBoundaryIs", "interior"];

/// The output of the builder: what the root declared, and one geometry per element.
#[derive(Debug)]
pub struct BuiltDocument {
    pub root_type: GmlType,
    pub srid: Option<i32>,
    pub fragments: Vec<GeometryCollection>,
}

fn mismatch(expected: &str, node: Option<&Node<'_>>) -> GeoGmlError {
    match node {
        Some(node) => GeoGmlError::InvalidStructure(format!(
            "expected <{expected}>, found <{}>",
            node.tag
        )),
        None => GeoGmlError::InvalidStructure(format!(
            "expected <{expected}>, found end of document"
        )),
    }
}

fn fragment(has_z: bool, srid: Option<i32>) -> GeometryCollection {
    let mut geom = GeometryCollection::new(Dimension::from_flags(has_z, false));
    geom.set_srid(srid);
    geom
}

/// A validated ring: at least 4 vertices, first equal to last (with Z when present).
fn check_ring(seq: &CoordSeq) -> Result<()> {
    if seq.len() < 4 {
        return Err(GeoGmlError::InvalidRing(format!(
            "a ring needs at least 4 points, found {}",
            seq.len()
        )));
    }
    let (first, last) = (seq.coords[0], seq.coords[seq.len() - 1]);
    let compare = Dimension::from_flags(seq.has_z, false);
    if !first.eq_in(&last, compare) {
        return Err(GeoGmlError::InvalidRing(
            "first and last points differ".to_string(),
        ));
    }
    Ok(())
}

struct Builder<'c, 'b> {
    chain: &'c NodeChain<'b>,
    fragments: Vec<GeometryCollection>,
}

impl<'c, 'b> Builder<'c, 'b> {
    fn node(&self, index: usize) -> Option<&'c Node<'b>> {
        self.chain.get(index)
    }

    /// Require the node at `index` to be named `name`.
    fn expect(&self, index: usize, name: &str) -> Result<()> {
        match self.node(index) {
            Some(node) if node.is(name) => Ok(()),
            other => Err(mismatch(name, other)),
        }
    }

    fn is_at(&self, index: usize, name: &str) -> bool {
        self.node(index).is_some_and(|node| node.is(name))
    }

    /// A run of `<pos>` elements, one vertex each. At least two are required.
    ///
    /// The chain is 3D as soon as any one `pos` carries a Z; 2D vertices then get `z = 0`.
    fn parse_pos_chain(&self, start: usize, seq: &mut CoordSeq) -> Result<usize> {
        let mut index = start;
        let mut chain = Vec::new();
        let mut any_z = false;
        while let Some(node) = self.node(index).filter(|node| node.is("pos")) {
            let (coord, z) = parse_point_v3(&node.coordinates)?;
            self.expect(index + 1, "pos")?;
            chain.push(coord);
            any_z |= z;
            index += 2;
        }
        if chain.len() < 2 {
            return Err(GeoGmlError::InvalidCoordinates(format!(
                "a chain of <pos> needs at least 2 elements, found {}",
                chain.len()
            )));
        }
        for coord in chain {
            seq.push(coord, any_z);
        }
        Ok(index)
    }

    /// `coordinates`, `posList` or a `pos` chain, including closing tags.
    fn parse_vertices(&self, start: usize, seq: &mut CoordSeq) -> Result<usize> {
        let node = self.node(start);
        match node {
            Some(node) if node.is("coordinates") => {
                parse_coordinates(&node.coordinates, seq)?;
                self.expect(start + 1, "coordinates")?;
                Ok(start + 2)
            }
            Some(node) if node.is("posList") => {
                parse_pos_list(&node.coordinates, has_z(node), seq)?;
                self.expect(start + 1, "posList")?;
                Ok(start + 2)
            }
            Some(node) if node.is("pos") => self.parse_pos_chain(start, seq),
            other => Err(mismatch("coordinates, posList or pos", other)),
        }
    }

    fn parse_point(&mut self, start: usize, srid: Option<i32>) -> Result<usize> {
        let (coord, z) = match self.node(start) {
            Some(node) if node.is("coordinates") => {
                let point = parse_point_v2(&node.coordinates)?;
                self.expect(start + 1, "coordinates")?;
                point
            }
            Some(node) if node.is("pos") => {
                let point = parse_point_v3(&node.coordinates)?;
                self.expect(start + 1, "pos")?;
                point
            }
            other => return Err(mismatch("coordinates or pos", other)),
        };
        self.expect(start + 2, "Point")?;
        let mut geom = fragment(z, srid);
        geom.add_point(coord);
        self.fragments.push(geom);
        Ok(start + 3)
    }

    fn push_line(&mut self, seq: CoordSeq, srid: Option<i32>) -> Result<()> {
        if seq.len() < 2 {
            return Err(GeoGmlError::InvalidStructure(format!(
                "a linestring needs at least 2 points, found {}",
                seq.len()
            )));
        }
        let mut geom = fragment(seq.has_z, srid);
        let line = geom.add_linestring(seq.len());
        for (i, coord) in seq.coords.into_iter().enumerate() {
            line.set_point(i, coord);
        }
        self.fragments.push(geom);
        Ok(())
    }

    fn parse_linestring(&mut self, start: usize, srid: Option<i32>) -> Result<usize> {
        let mut seq = CoordSeq::default();
        let next = self.parse_vertices(start, &mut seq)?;
        self.expect(next, "LineString")?;
        self.push_line(seq, srid)?;
        Ok(next + 1)
    }

    /// `<segments>` holding one or more `<LineStringSegment>`s, joined end to end.
    fn parse_curve(&mut self, start: usize, srid: Option<i32>) -> Result<usize> {
        self.expect(start, "segments")?;
        let mut index = start + 1;
        let mut seq = CoordSeq::default();
        let mut segments = 0;
        while self.is_at(index, "LineStringSegment") {
            let mut segment = CoordSeq::default();
            let next = self.parse_vertices(index + 1, &mut segment)?;
            self.expect(next, "LineStringSegment")?;
            seq.append_joined(segment);
            segments += 1;
            index = next + 1;
        }
        if segments == 0 {
            return Err(mismatch("LineStringSegment", self.node(index)));
        }
        self.expect(index, "segments")?;
        self.expect(index + 1, "Curve")?;
        self.push_line(seq, srid)?;
        Ok(index + 2)
    }

    /// One boundary element wrapping a `LinearRing`.
    fn parse_ring(&self, start: usize) -> Result<(RingRole, CoordSeq, usize)> {
        let boundary = self
            .node(start)
            .ok_or_else(|| mismatch("exterior or interior", None))?;
        let role = if boundary.is_any(EXTERIOR_TAGS) {
            RingRole::Exterior
        } else if boundary.is_any(INTERIOR_TAGS) {
            RingRole::Interior
        } else {
            return Err(mismatch("exterior or interior", Some(boundary)));
        };
        self.expect(start + 1, "LinearRing")?;
        let mut seq = CoordSeq::default();
        let next = self.parse_vertices(start + 2, &mut seq)?;
        self.expect(next, "LinearRing")?;
        self.expect(next + 1, boundary.local_name())?;
        check_ring(&seq)?;
        Ok((role, seq, next + 2))
    }

    fn parse_polygon(&mut self, start: usize, srid: Option<i32>) -> Result<usize> {
        let mut index = start;
        let mut exterior: Option<CoordSeq> = None;
        let mut interiors = Vec::new();
        loop {
            match self.node(index) {
                None => return Err(mismatch("Polygon", None)),
                Some(node) if node.is("Polygon") => break,
                Some(_) => {}
            }
            let (role, seq, next) = self.parse_ring(index)?;
            match role {
                RingRole::Exterior if exterior.is_some() => {
                    return Err(GeoGmlError::InvalidRing(
                        "a polygon needs exactly one exterior ring, found several".to_string(),
                    ))
                }
                RingRole::Exterior => exterior = Some(seq),
                RingRole::Interior => interiors.push(seq),
            }
            index = next;
        }
        let exterior = exterior.ok_or_else(|| {
            GeoGmlError::InvalidRing("a polygon needs exactly one exterior ring".to_string())
        })?;

        let z = exterior.has_z && interiors.iter().all(|ring| ring.has_z);
        let dim = Dimension::from_flags(z, false);
        let polygon = Polygon::from_rings(
            Ring::from_coords(dim, exterior.coords),
            interiors
                .into_iter()
                .map(|ring| Ring::from_coords(dim, ring.coords))
                .collect(),
        );
        let mut geom = fragment(z, srid);
        geom.insert_polygon(polygon);
        self.fragments.push(geom);
        Ok(index + 1)
    }

    /// Two `coordinates` corners expanded into a closed 5-point rectangle.
    fn parse_box(&mut self, start: usize, srid: Option<i32>) -> Result<usize> {
        let node = self.node(start).filter(|node| node.is("coordinates"));
        let Some(node) = node else {
            return Err(mismatch("coordinates", self.node(start)));
        };
        let mut seq = CoordSeq::default();
        parse_coordinates(&node.coordinates, &mut seq)?;
        self.expect(start + 1, "coordinates")?;
        self.expect(start + 2, "Box")?;
        let &[a, b] = seq.coords.as_slice() else {
            return Err(GeoGmlError::InvalidCoordinates(format!(
                "a box needs exactly 2 corners, found {}",
                seq.len()
            )));
        };
        let (minx, maxx) = (a.x.min(b.x), a.x.max(b.x));
        let (miny, maxy) = (a.y.min(b.y), a.y.max(b.y));

        let mut geom = fragment(false, srid);
        let ring = geom.add_polygon(5, 0).exterior_mut();
        ring.set_point(0, Coord::xy(minx, miny));
        ring.set_point(1, Coord::xy(maxx, miny));
        ring.set_point(2, Coord::xy(maxx, maxy));
        ring.set_point(3, Coord::xy(minx, maxy));
        ring.set_point(4, Coord::xy(minx, miny));
        self.fragments.push(geom);
        Ok(start + 3)
    }

    fn parse_scalar(&mut self, kind: GmlType, start: usize, srid: Option<i32>) -> Result<usize> {
        match kind {
            GmlType::Point => self.parse_point(start, srid),
            GmlType::LineString => self.parse_linestring(start, srid),
            GmlType::Curve => self.parse_curve(start, srid),
            GmlType::Polygon => self.parse_polygon(start, srid),
            GmlType::Box => self.parse_box(start, srid),
            other => Err(GeoGmlError::InvalidStructure(format!(
                "<{other}> cannot be nested here"
            ))),
        }
    }

    /// Member wrappers until the container's closing tag. Each wrapper holds one or more
    /// elements of the accepted kinds, each carrying its own `srsName`.
    fn parse_multi(
        &mut self,
        container: GmlType,
        wrappers: &[&str],
        kinds: &[GmlType],
        start: usize,
    ) -> Result<usize> {
        let mut index = start;
        let mut accepted = 0;
        loop {
            let node = self.node(index);
            match node {
                Some(node) if node.is(container.tag()) => break,
                Some(node) if node.is_any(wrappers) => {}
                other => return Err(mismatch(wrappers[0], other)),
            }
            let mut inner = index + 1;
            let mut elements = 0;
            while let Some(element) = self.node(inner) {
                // Anything else hands control back to the wrapper
                let Some(kind) = kinds.iter().copied().find(|k| element.is(k.tag())) else {
                    break;
                };
                inner = self.parse_scalar(kind, inner + 1, guess_srid(element))?;
                elements += 1;
            }
            if elements == 0 {
                return Err(GeoGmlError::InvalidStructure(format!(
                    "empty <{}> in <{container}>",
                    wrappers[0]
                )));
            }
            match self.node(inner) {
                Some(node) if node.is_any(wrappers) => {}
                other => return Err(mismatch(wrappers[0], other)),
            }
            accepted += elements;
            index = inner + 1;
        }
        if accepted == 0 {
            return Err(GeoGmlError::InvalidStructure(format!(
                "<{container}> has no members"
            )));
        }
        Ok(index + 1)
    }
}

/// Walk the node chain from its root element and build one geometry per element.
pub fn build_document(chain: &NodeChain<'_>, options: &GmlReaderOptions) -> Result<BuiltDocument> {
    let root = chain
        .root()
        .ok_or_else(|| GeoGmlError::InvalidStructure("empty document".to_string()))?;
    let root_type = GmlType::from_node(root)
        .ok_or_else(|| GeoGmlError::UnsupportedGeometryType(root.tag.to_string()))?;
    let srid = guess_srid(root);
    debug!(%root_type, ?srid, nodes = chain.len(), "building GML geometry");

    let mut builder = Builder {
        chain,
        fragments: Vec::new(),
    };
    let (next, strict) = match root_type.members() {
        Some((wrappers, kinds)) => (builder.parse_multi(root_type, wrappers, kinds, 1)?, true),
        None => (
            builder.parse_scalar(root_type, 1, srid)?,
            root_type == GmlType::Polygon || options.strict_trailing_nodes,
        ),
    };
    if strict {
        if let Some(node) = chain.get(next) {
            return Err(GeoGmlError::InvalidStructure(format!(
                "unexpected <{}> after </{}>",
                node.tag, root.tag
            )));
        }
    }

    Ok(BuiltDocument {
        root_type,
        srid,
        fragments: builder.fragments,
    })
}

#[cfg(test)]
mod test {
    use bumpalo::Bump;

    use super::*;
    use crate::io::gml::parser::parse_document;
    use crate::test::gml;

    fn build(input: &str) -> Result<BuiltDocument> {
        build_with(input, &GmlReaderOptions::default())
    }

    fn build_with(input: &str, options: &GmlReaderOptions) -> Result<BuiltDocument> {
        let bump = Bump::new();
        let chain = parse_document(&bump, input)?;
        build_document(&chain, options)
    }

    #[test]
    fn root_table() {
        let doc = build(gml::POINT_V2).unwrap();
        assert_eq!(doc.root_type, GmlType::Point);
        assert_eq!(GmlType::Curve.declared_type(), GeometryType::LineString);
        assert_eq!(GmlType::Box.declared_type(), GeometryType::Polygon);
        assert_eq!(
            GmlType::MultiGeometry.declared_type(),
            GeometryType::GeometryCollection
        );
        assert!(matches!(
            build("<gml:Surface></gml:Surface>"),
            Err(GeoGmlError::UnsupportedGeometryType(_))
        ));
        assert!(matches!(
            build("<ogc:Point></ogc:Point>"),
            Err(GeoGmlError::UnsupportedGeometryType(_))
        ));
    }

    #[test]
    fn point_fragment() {
        let doc = build(gml::POINT_V3_Z).unwrap();
        assert_eq!(doc.srid, Some(4326));
        assert_eq!(doc.fragments.len(), 1);
        let point = doc.fragments[0].points()[0];
        assert_eq!(point.coord(), Coord::xyz(1., 2., 3.));
        assert_eq!(doc.fragments[0].srid(), Some(4326));
    }

    #[test]
    fn pos_chain_linestring() {
        let doc = build(gml::LINESTRING_POS_CHAIN).unwrap();
        let line = &doc.fragments[0].linestrings()[0];
        assert_eq!(line.num_points(), 3);
        assert_eq!(line.dim(), Dimension::XY);
    }

    #[test]
    fn single_pos_is_not_a_chain() {
        let input = "<LineString><pos>1 2</pos></LineString>";
        assert!(matches!(
            build(input),
            Err(GeoGmlError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn pos_chain_with_any_z_is_3d() {
        let input = "<gml:LineString><gml:pos>0 0 1</gml:pos><gml:pos>1 1</gml:pos></gml:LineString>";
        let doc = build(input).unwrap();
        let line = &doc.fragments[0].linestrings()[0];
        assert_eq!(line.dim(), Dimension::XYZ);
        assert_eq!(line.point(0), Coord::xyz(0., 0., 1.));
        assert_eq!(line.point(1), Coord::xyz(1., 1., 0.));
    }

    #[test]
    fn curve_segments_are_joined() {
        let doc = build(gml::CURVE_TWO_SEGMENTS).unwrap();
        let line = &doc.fragments[0].linestrings()[0];
        assert_eq!(line.num_points(), 4);
        assert_eq!(line.point(3), Coord::xy(3., 0.));
    }

    #[test]
    fn polygon_with_hole() {
        let doc = build(gml::POLYGON_V2_HOLE).unwrap();
        let polygon = &doc.fragments[0].polygons()[0];
        assert_eq!(polygon.exterior().num_points(), 5);
        assert_eq!(polygon.num_interiors(), 1);
        assert_eq!(polygon.interior(0).point(1), Coord::xy(2., 4.));
    }

    #[test]
    fn polygon_ring_rules() {
        assert!(matches!(
            build(gml::POLYGON_SHORT_RING),
            Err(GeoGmlError::InvalidRing(_))
        ));
        assert!(matches!(
            build(gml::POLYGON_OPEN_RING),
            Err(GeoGmlError::InvalidRing(_))
        ));
        assert!(matches!(
            build(gml::POLYGON_NO_EXTERIOR),
            Err(GeoGmlError::InvalidRing(_))
        ));
        assert!(matches!(
            build(gml::POLYGON_TWO_EXTERIORS),
            Err(GeoGmlError::InvalidRing(_))
        ));
    }

    #[test]
    fn polygon_must_end_document() {
        let input = format!("{}<gml:Point/>", gml::POLYGON_V3);
        assert!(matches!(
            build(&input),
            Err(GeoGmlError::InvalidStructure(_))
        ));
    }

    #[test]
    fn strict_trailing_nodes() {
        let input = format!("{}<extra></extra>", gml::POINT_V2);
        assert!(build(&input).is_ok());
        let strict = GmlReaderOptions::default().with_strict_trailing_nodes(true);
        assert!(build_with(&input, &strict).is_err());
    }

    #[test]
    fn box_corners() {
        let doc = build(gml::BOX).unwrap();
        let ring = doc.fragments[0].polygons()[0].exterior().clone();
        let corners: Vec<_> = ring.coords().iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(
            corners,
            vec![(0., 0.), (10., 0.), (10., 10.), (0., 10.), (0., 0.)]
        );
        assert!(build("<gml:Box><gml:coordinates>0,0 1,1 2,2</gml:coordinates></gml:Box>").is_err());
    }

    #[test]
    fn member_srids() {
        let doc = build(gml::MULTIPOINT_MIXED_SRID).unwrap();
        assert_eq!(doc.srid, None);
        let srids: Vec<_> = doc.fragments.iter().map(|f| f.srid()).collect();
        assert_eq!(srids, vec![Some(4326), Some(3857), None]);
    }

    #[test]
    fn empty_members() {
        assert!(build(gml::MULTIPOINT_EMPTY).is_err());
        let input = "<gml:MultiPoint><gml:pointMember></gml:pointMember></gml:MultiPoint>";
        assert!(matches!(
            build(input),
            Err(GeoGmlError::InvalidStructure(_))
        ));
    }

    #[test]
    fn multi_must_be_closed_last() {
        let input = format!("{}<gml:Point/>", gml::MULTILINESTRING);
        assert!(build(&input).is_err());
        let truncated = gml::MULTILINESTRING.trim_end_matches("</gml:MultiLineString>");
        assert!(build(truncated).is_err());
    }

    #[test]
    fn multi_geometry_members() {
        let doc = build(gml::MULTIGEOMETRY).unwrap();
        assert_eq!(doc.fragments.len(), 3);
        assert_eq!(doc.fragments[0].num_points(), 1);
        assert_eq!(doc.fragments[1].num_linestrings(), 1);
        assert_eq!(doc.fragments[2].num_polygons(), 1);
    }

    #[test]
    fn wrong_member_kind() {
        let input = "<gml:MultiPoint><gml:pointMember><gml:LineString><gml:coordinates>0,0 1,1</gml:coordinates></gml:LineString></gml:pointMember></gml:MultiPoint>";
        assert!(matches!(
            build(input),
            Err(GeoGmlError::InvalidStructure(_))
        ));
    }
}
