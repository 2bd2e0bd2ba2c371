//! The flat node chain produced by the tree parser.
//!
//! Nodes are not nested: an element contributes an `Open` node, the nodes of its
//! children, then a `Closed` node. Handlers re-derive nesting by matching tag names.
//! Every node, string and list lives in one [`Bump`] arena that is dropped as a whole
//! once the geometry has been built.

use bumpalo::collections::Vec as BumpVec;
use bumpalo::Bump;

/// Whether a node opens, closes, or is a self-closed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Open,
    SelfClosed,
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'b> {
    pub key: &'b str,
    pub value: &'b str,
}

#[derive(Debug)]
pub struct Node<'b> {
    pub tag: &'b str,
    pub node_type: NodeType,
    pub attributes: BumpVec<'b, Attribute<'b>>,
    /// Raw text runs found directly inside this element.
    pub coordinates: BumpVec<'b, &'b str>,
}

impl<'b> Node<'b> {
    pub fn new_in(bump: &'b Bump, tag: &str, node_type: NodeType) -> Self {
        Self {
            tag: bump.alloc_str(tag),
            node_type,
            attributes: BumpVec::new_in(bump),
            coordinates: BumpVec::new_in(bump),
        }
    }

    /// Whether this node's tag is `name`, either bare or with the `gml:` prefix.
    pub fn is(&self, name: &str) -> bool {
        self.tag == name || self.tag.strip_prefix("gml:") == Some(name)
    }

    /// Whether this node's tag matches any of `names`.
    pub fn is_any(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.is(name))
    }

    /// The tag without a `gml:` prefix.
    pub fn local_name(&self) -> &'b str {
        self.tag.strip_prefix("gml:").unwrap_or(self.tag)
    }

    /// The value of the first attribute named `key`.
    pub fn attribute(&self, key: &str) -> Option<&'b str> {
        self.attributes
            .iter()
            .find(|attr| attr.key == key)
            .map(|attr| attr.value)
    }
}

/// The whole document as one flat sequence of nodes.
///
/// A node's successor is the node at the next index.
#[derive(Debug)]
pub struct NodeChain<'b> {
    nodes: BumpVec<'b, Node<'b>>,
}

impl<'b> NodeChain<'b> {
    pub fn new_in(bump: &'b Bump) -> Self {
        Self {
            nodes: BumpVec::new_in(bump),
        }
    }

    pub(crate) fn push(&mut self, node: Node<'b>) {
        self.nodes.push(node);
    }

    pub(crate) fn last_mut(&mut self) -> Option<&mut Node<'b>> {
        self.nodes.last_mut()
    }

    pub fn get(&self, index: usize) -> Option<&Node<'b>> {
        self.nodes.get(index)
    }

    pub fn root(&self) -> Option<&Node<'b>> {
        self.nodes.first()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node<'b>> {
        self.nodes.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tag_matching() {
        let bump = Bump::new();
        let node = Node::new_in(&bump, "gml:Point", NodeType::Open);
        assert!(node.is("Point"));
        assert!(!node.is("point"));
        assert_eq!(node.local_name(), "Point");

        let bare = Node::new_in(&bump, "Point", NodeType::Open);
        assert!(bare.is("Point"));

        let other_prefix = Node::new_in(&bump, "ogc:Point", NodeType::Open);
        assert!(!other_prefix.is("Point"));
        assert!(other_prefix.is_any(&["LineString", "ogc:Point"]));
    }

    #[test]
    fn first_attribute_wins() {
        let bump = Bump::new();
        let mut node = Node::new_in(&bump, "pos", NodeType::SelfClosed);
        node.attributes.push(Attribute {
            key: "srsDimension",
            value: "3",
        });
        node.attributes.push(Attribute {
            key: "srsDimension",
            value: "2",
        });
        assert_eq!(node.attribute("srsDimension"), Some("3"));
        assert_eq!(node.attribute("srsName"), None);
    }
}
