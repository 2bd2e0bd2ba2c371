//! `srsName` and `srsDimension` attribute handling.

use crate::io::gml::node::Node;

const EPSG_PREFIX: &str = "EPSG:";
const URN_PREFIX: &str = "urn:ogc:def:crs:EPSG:";
const URL_PREFIX: &str = "http://www.opengis.net/gml/srs/epsg.xml#";

/// C-style integer prefix parse: leading whitespace, optional sign, then digits. Stops
/// at the first other character and yields 0 when there are no digits.
fn atoi(text: &str) -> i32 {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let mut value: i64 = 0;
    for c in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(c - b'0')).min(i64::from(i32::MAX) + 1);
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// The srid named by an `srsName` value.
///
/// Recognizes `EPSG:<n>`, `urn:ogc:def:crs:EPSG:[version]:<n>` and
/// `http://www.opengis.net/gml/srs/epsg.xml#<n>`. Anything else yields `None`.
pub fn parse_srs_name(value: &str) -> Option<i32> {
    if value.len() > EPSG_PREFIX.len() && value.starts_with(EPSG_PREFIX) {
        return Some(atoi(&value[EPSG_PREFIX.len()..]));
    }
    if value.len() > URN_PREFIX.len() && value.starts_with(URN_PREFIX) {
        return value.rfind(':').map(|i| atoi(&value[i + 1..]));
    }
    if value.len() > URL_PREFIX.len() && value.starts_with(URL_PREFIX) {
        return value.rfind('#').map(|i| atoi(&value[i + 1..]));
    }
    None
}

/// The srid declared by a node's `srsName` attribute.
pub fn guess_srid(node: &Node<'_>) -> Option<i32> {
    node.attribute("srsName").and_then(parse_srs_name)
}

/// Whether a node declares `srsDimension="3"`.
pub fn has_z(node: &Node<'_>) -> bool {
    node.attribute("srsDimension")
        .is_some_and(|value| atoi(value) == 3)
}

#[cfg(test)]
mod test {
    use bumpalo::Bump;

    use super::*;
    use crate::io::gml::node::{Attribute, NodeType};

    #[test]
    fn srs_name_conventions() {
        assert_eq!(parse_srs_name("EPSG:4326"), Some(4326));
        assert_eq!(parse_srs_name("urn:ogc:def:crs:EPSG::3003"), Some(3003));
        assert_eq!(parse_srs_name("urn:ogc:def:crs:EPSG:6.6:32632"), Some(32632));
        assert_eq!(
            parse_srs_name("http://www.opengis.net/gml/srs/epsg.xml#25832"),
            Some(25832)
        );
    }

    #[test]
    fn unrecognized_srs_names() {
        assert_eq!(parse_srs_name("EPSG:"), None);
        assert_eq!(parse_srs_name("CRS:84"), None);
        assert_eq!(parse_srs_name("epsg:4326"), None);
        assert_eq!(parse_srs_name(""), None);
    }

    #[test]
    fn integer_prefix() {
        assert_eq!(parse_srs_name("EPSG:4326abc"), Some(4326));
        assert_eq!(parse_srs_name("EPSG:abc"), Some(0));
        assert_eq!(parse_srs_name("EPSG: -12"), Some(-12));
        assert_eq!(parse_srs_name("EPSG:99999999999"), Some(i32::MAX));
    }

    #[test]
    fn srs_dimension() {
        let bump = Bump::new();
        let mut node = Node::new_in(&bump, "gml:posList", NodeType::Open);
        assert!(!has_z(&node));
        assert_eq!(guess_srid(&node), None);
        node.attributes.push(Attribute {
            key: "srsDimension",
            value: "3",
        });
        node.attributes.push(Attribute {
            key: "srsName",
            value: "EPSG:4326",
        });
        assert!(has_z(&node));
        assert_eq!(guess_srid(&node), Some(4326));
    }
}
