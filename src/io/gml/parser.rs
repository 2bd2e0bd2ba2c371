//! Table-driven grammar turning the token stream into a [`NodeChain`].
//!
//! ```text
//! document := item* END
//! item     := OPEN_TAG (ATTR_KEY ATTR_VALUE)* (TAG_END COORD* | SELF_CLOSE)
//!           | CLOSE_TAG
//! ```
//!
//! The grammar only checks the shape of each tag; it accepts GML 2 and GML 3 alike and
//! does not pair opening with closing tags.

use bumpalo::Bump;
use tracing::trace;

use crate::error::{GeoGmlError, Result};
use crate::io::gml::lexer::{Lexer, Token, TokenKind};
use crate::io::gml::node::{Attribute, Node, NodeChain, NodeType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between tags.
    Content = 0,
    /// After `<name` or an attribute value.
    InTag = 1,
    /// After an attribute name.
    AfterKey = 2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    BeginNode,
    SetKey,
    AddAttribute,
    FinishOpen,
    FinishSelfClosed,
    CloseNode,
    AddText,
    Accept,
    Reject,
}

#[derive(Debug, Clone, Copy)]
struct Transition {
    action: Action,
    next: State,
}

const fn go(action: Action, next: State) -> Transition {
    Transition { action, next }
}

const ERR: Transition = go(Action::Reject, State::Content);

/// Indexed by `[State][TokenKind]`, in the declaration order of [`TokenKind`]:
/// OpenTag, AttrKey, AttrValue, TagEnd, SelfClose, CloseTag, Coord, End.
const TABLE: [[Transition; 8]; 3] = [
    // Content
    [
        go(Action::BeginNode, State::InTag),
        ERR,
        ERR,
        ERR,
        ERR,
        go(Action::CloseNode, State::Content),
        go(Action::AddText, State::Content),
        go(Action::Accept, State::Content),
    ],
    // InTag
    [
        ERR,
        go(Action::SetKey, State::AfterKey),
        ERR,
        go(Action::FinishOpen, State::Content),
        go(Action::FinishSelfClosed, State::Content),
        ERR,
        ERR,
        ERR,
    ],
    // AfterKey
    [
        ERR,
        ERR,
        go(Action::AddAttribute, State::InTag),
        ERR,
        ERR,
        ERR,
        ERR,
        ERR,
    ],
];

/// Builds a [`NodeChain`] in an arena, one token at a time.
struct TreeParser<'b> {
    bump: &'b Bump,
    chain: NodeChain<'b>,
    state: State,
    pending_key: Option<&'b str>,
    /// Whether text may attach to the last node, i.e. it is open with no child yet.
    accepting_text: bool,
}

impl<'b> TreeParser<'b> {
    fn new(bump: &'b Bump) -> Self {
        Self {
            bump,
            chain: NodeChain::new_in(bump),
            state: State::Content,
            pending_key: None,
            accepting_text: false,
        }
    }

    fn last_node(&mut self) -> Result<&mut Node<'b>> {
        self.chain
            .last_mut()
            .ok_or_else(|| GeoGmlError::Grammar("no element is open".to_string()))
    }

    /// Feed one token. Returns `true` once the document is accepted.
    fn step(&mut self, token: Token<'_>) -> Result<bool> {
        let transition = TABLE[self.state as usize][token.kind() as usize];
        match (transition.action, token) {
            (Action::BeginNode, Token::OpenTag(tag)) => {
                // Open until the tag end says otherwise
                self.chain.push(Node::new_in(self.bump, tag, NodeType::Open));
                self.accepting_text = false;
            }
            (Action::SetKey, Token::AttrKey(key)) => {
                self.pending_key = Some(self.bump.alloc_str(key));
            }
            (Action::AddAttribute, Token::AttrValue(value)) => {
                let key = self.pending_key.take().unwrap_or_default();
                let value = self.bump.alloc_str(value);
                self.last_node()?.attributes.push(Attribute { key, value });
            }
            (Action::FinishOpen, _) => {
                let node = self.last_node()?;
                trace!(tag = node.tag, "open node");
                self.accepting_text = true;
            }
            (Action::FinishSelfClosed, _) => {
                let node = self.last_node()?;
                node.node_type = NodeType::SelfClosed;
                trace!(tag = node.tag, "self-closed node");
            }
            (Action::CloseNode, Token::CloseTag(tag)) => {
                trace!(tag, "closed node");
                self.chain
                    .push(Node::new_in(self.bump, tag, NodeType::Closed));
                self.accepting_text = false;
            }
            (Action::AddText, Token::Coord(text)) => {
                if !self.accepting_text {
                    return Err(GeoGmlError::Grammar(format!(
                        "text \"{text}\" outside of an element"
                    )));
                }
                let text = self.bump.alloc_str(text);
                self.last_node()?.coordinates.push(text);
            }
            (Action::Accept, _) => return Ok(true),
            _ => {
                return Err(GeoGmlError::Grammar(format!("unexpected {token}")));
            }
        }
        self.state = transition.next;
        Ok(false)
    }
}

/// Scan and parse `input` into a chain of nodes allocated in `bump`.
///
/// Consumption stops at the first lexical or grammar error.
pub fn parse_document<'b>(bump: &'b Bump, input: &str) -> Result<NodeChain<'b>> {
    let mut parser = TreeParser::new(bump);
    for token in Lexer::new(input) {
        if parser.step(token?)? {
            return Ok(parser.chain);
        }
    }
    Err(GeoGmlError::Grammar("unexpected end of input".to_string()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flat_chain() {
        let bump = Bump::new();
        let chain = parse_document(
            &bump,
            r#"<gml:LineString srsName="EPSG:4326"><gml:posList srsDimension="3">0 0 0 1 1 1</gml:posList></gml:LineString>"#,
        )
        .unwrap();
        assert_eq!(chain.len(), 4);
        let tags: Vec<_> = chain.iter().map(|n| (n.tag, n.node_type)).collect();
        assert_eq!(
            tags,
            vec![
                ("gml:LineString", NodeType::Open),
                ("gml:posList", NodeType::Open),
                ("gml:posList", NodeType::Closed),
                ("gml:LineString", NodeType::Closed),
            ]
        );
        assert_eq!(chain.root().unwrap().attribute("srsName"), Some("EPSG:4326"));
        let pos_list = chain.get(1).unwrap();
        assert_eq!(pos_list.attribute("srsDimension"), Some("3"));
        assert_eq!(pos_list.coordinates.len(), 6);
    }

    #[test]
    fn attributes_in_any_order() {
        let bump = Bump::new();
        let chain = parse_document(&bump, r#"<pos b="2" a="1" srsDimension="3"/>"#).unwrap();
        let node = chain.root().unwrap();
        assert_eq!(node.node_type, NodeType::SelfClosed);
        assert_eq!(node.attribute("a"), Some("1"));
        assert_eq!(node.attribute("b"), Some("2"));
        assert_eq!(node.attribute("srsDimension"), Some("3"));
    }

    #[test]
    fn empty_document() {
        let bump = Bump::new();
        assert!(parse_document(&bump, "  <!-- nothing -->  ").unwrap().is_empty());
    }

    #[test]
    fn text_must_follow_an_open_tag() {
        let bump = Bump::new();
        assert!(matches!(
            parse_document(&bump, "1,2<a></a>"),
            Err(GeoGmlError::Grammar(_))
        ));
        assert!(matches!(
            parse_document(&bump, "<a><b/>1,2</a>"),
            Err(GeoGmlError::Grammar(_))
        ));
        assert!(matches!(
            parse_document(&bump, "<a></a> 1,2"),
            Err(GeoGmlError::Grammar(_))
        ));
    }

    #[test]
    fn lexical_errors_propagate() {
        let bump = Bump::new();
        assert!(matches!(
            parse_document(&bump, "<a b=c></a>"),
            Err(GeoGmlError::Lexical { .. })
        ));
    }
}
