//! Hand-written scanner for GML markup.

use std::fmt::Display;

use crate::error::{GeoGmlError, Result};

/// A lexical token. String payloads borrow from the scanned input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `<name`, the start of an opening or self-closing tag.
    OpenTag(&'a str),
    /// An attribute name inside a tag.
    AttrKey(&'a str),
    /// An attribute value with its quotes removed.
    AttrValue(&'a str),
    /// `>` ending an opening tag.
    TagEnd,
    /// `/>` ending a self-closing tag.
    SelfClose,
    /// `</name>`.
    CloseTag(&'a str),
    /// A whitespace-delimited run of text between tags.
    Coord(&'a str),
    /// End of input.
    End,
}

/// The discriminant of a [`Token`], used to index the grammar table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    OpenTag = 0,
    AttrKey = 1,
    AttrValue = 2,
    TagEnd = 3,
    SelfClose = 4,
    CloseTag = 5,
    Coord = 6,
    End = 7,
}

impl Token<'_> {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::OpenTag(_) => TokenKind::OpenTag,
            Token::AttrKey(_) => TokenKind::AttrKey,
            Token::AttrValue(_) => TokenKind::AttrValue,
            Token::TagEnd => TokenKind::TagEnd,
            Token::SelfClose => TokenKind::SelfClose,
            Token::CloseTag(_) => TokenKind::CloseTag,
            Token::Coord(_) => TokenKind::Coord,
            Token::End => TokenKind::End,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::OpenTag(name) => write!(f, "<{name}"),
            Token::AttrKey(key) => write!(f, "attribute {key}"),
            Token::AttrValue(value) => write!(f, "value \"{value}\""),
            Token::TagEnd => write!(f, ">"),
            Token::SelfClose => write!(f, "/>"),
            Token::CloseTag(name) => write!(f, "</{name}>"),
            Token::Coord(text) => write!(f, "text \"{text}\""),
            Token::End => write!(f, "end of input"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Between tags.
    Content,
    /// Inside `<name ... >`, expecting attributes or the tag end.
    Tag,
    /// Right after an attribute name, expecting `="value"`.
    Value,
    Done,
}

fn is_name_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_' || c == b':'
}

fn is_name_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'_' | b':' | b'-' | b'.')
}

/// Scanner state for one document.
///
/// Each instance owns its position, so separate documents can be scanned concurrently.
/// The input ends at its first NUL byte, if any.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    mode: Mode,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let input = match input.find('\0') {
            Some(end) => &input[..end],
            None => input,
        };
        Self {
            input,
            pos: 0,
            mode: Mode::Content,
        }
    }

    fn bytes(&self) -> &'a [u8] {
        self.input.as_bytes()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn starts_with(&self, pattern: &str) -> bool {
        self.input[self.pos..].starts_with(pattern)
    }

    /// 1-based line and column of byte offset `pos`.
    fn location(&self, pos: usize) -> (usize, usize) {
        let before = &self.input[..pos];
        let line = before.matches('\n').count() + 1;
        let column = match before.rfind('\n') {
            Some(newline) => before[newline + 1..].chars().count() + 1,
            None => before.chars().count() + 1,
        };
        (line, column)
    }

    fn error(&mut self, pos: usize, message: impl Into<String>) -> GeoGmlError {
        let (line, column) = self.location(pos);
        self.mode = Mode::Done;
        GeoGmlError::Lexical {
            line,
            column,
            message: message.into(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    /// Skip past `terminator`, or fail if it never appears.
    fn skip_past(&mut self, terminator: &str, what: &str) -> Result<()> {
        let start = self.pos;
        match self.input[self.pos..].find(terminator) {
            Some(offset) => {
                self.pos += offset + terminator.len();
                Ok(())
            }
            None => Err(self.error(start, format!("unterminated {what}"))),
        }
    }

    fn scan_name(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.pos += 1;
        }
        &self.input[start..self.pos]
    }

    fn scan_content(&mut self) -> Result<Token<'a>> {
        loop {
            self.skip_whitespace();
            let Some(c) = self.peek() else {
                self.mode = Mode::Done;
                return Ok(Token::End);
            };
            let start = self.pos;
            if c != b'<' {
                if c == b'>' {
                    return Err(self.error(start, "unexpected '>'"));
                }
                while self
                    .peek()
                    .is_some_and(|c| !c.is_ascii_whitespace() && c != b'<' && c != b'>')
                {
                    self.pos += 1;
                }
                return Ok(Token::Coord(&self.input[start..self.pos]));
            }

            if self.starts_with("<!--") {
                self.skip_past("-->", "comment")?;
            } else if self.starts_with("<?") {
                self.skip_past("?>", "processing instruction")?;
            } else if self.starts_with("<!") {
                self.skip_past(">", "declaration")?;
            } else if self.starts_with("</") {
                self.pos += 2;
                if !self.peek().is_some_and(is_name_start) {
                    return Err(self.error(self.pos, "expected a tag name after '</'"));
                }
                let name = self.scan_name();
                self.skip_whitespace();
                if self.peek() != Some(b'>') {
                    return Err(self.error(self.pos, format!("expected '>' to close </{name}")));
                }
                self.pos += 1;
                return Ok(Token::CloseTag(name));
            } else {
                self.pos += 1;
                if !self.peek().is_some_and(is_name_start) {
                    return Err(self.error(self.pos, "expected a tag name after '<'"));
                }
                let name = self.scan_name();
                self.mode = Mode::Tag;
                return Ok(Token::OpenTag(name));
            }
        }
    }

    fn scan_tag(&mut self) -> Result<Token<'a>> {
        self.skip_whitespace();
        let start = self.pos;
        match self.peek() {
            None => Err(self.error(start, "unexpected end of input inside a tag")),
            Some(b'>') => {
                self.pos += 1;
                self.mode = Mode::Content;
                Ok(Token::TagEnd)
            }
            Some(b'/') if self.starts_with("/>") => {
                self.pos += 2;
                self.mode = Mode::Content;
                Ok(Token::SelfClose)
            }
            Some(c) if is_name_start(c) => {
                let key = self.scan_name();
                self.mode = Mode::Value;
                Ok(Token::AttrKey(key))
            }
            Some(c) => Err(self.error(start, format!("unexpected '{}' inside a tag", c as char))),
        }
    }

    fn scan_value(&mut self) -> Result<Token<'a>> {
        self.skip_whitespace();
        if self.peek() != Some(b'=') {
            return Err(self.error(self.pos, "expected '=' after attribute name"));
        }
        self.pos += 1;
        self.skip_whitespace();
        let quote = match self.peek() {
            Some(q @ (b'"' | b'\'')) => q,
            _ => return Err(self.error(self.pos, "expected a quoted attribute value")),
        };
        let open = self.pos;
        self.pos += 1;
        let start = self.pos;
        match self.bytes()[start..].iter().position(|&c| c == quote) {
            Some(len) => {
                self.pos = start + len + 1;
                self.mode = Mode::Tag;
                Ok(Token::AttrValue(&self.input[start..start + len]))
            }
            None => Err(self.error(open, "unterminated attribute value")),
        }
    }

    /// Scan the next token. After [`Token::End`] or an error every call returns
    /// [`Token::End`].
    pub fn next_token(&mut self) -> Result<Token<'a>> {
        match self.mode {
            Mode::Content => self.scan_content(),
            Mode::Tag => self.scan_tag(),
            Mode::Value => self.scan_value(),
            Mode::Done => Ok(Token::End),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token<'a>>;

    /// Yields every token including one final [`Token::End`], and stops after the first
    /// error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.mode == Mode::Done {
            return None;
        }
        Some(self.next_token())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn tokens(input: &str) -> Vec<Token<'_>> {
        Lexer::new(input).collect::<Result<Vec<_>>>().unwrap()
    }

    #[test]
    fn point_document() {
        let toks = tokens(r#"<gml:Point srsName="EPSG:4326"><gml:coordinates>1,2</gml:coordinates></gml:Point>"#);
        assert_eq!(
            toks,
            vec![
                Token::OpenTag("gml:Point"),
                Token::AttrKey("srsName"),
                Token::AttrValue("EPSG:4326"),
                Token::TagEnd,
                Token::OpenTag("gml:coordinates"),
                Token::TagEnd,
                Token::Coord("1,2"),
                Token::CloseTag("gml:coordinates"),
                Token::CloseTag("gml:Point"),
                Token::End,
            ]
        );
    }

    #[test]
    fn self_closed_and_single_quotes() {
        let toks = tokens("<pos a='1' b = \"x y\" />");
        assert_eq!(
            toks,
            vec![
                Token::OpenTag("pos"),
                Token::AttrKey("a"),
                Token::AttrValue("1"),
                Token::AttrKey("b"),
                Token::AttrValue("x y"),
                Token::SelfClose,
                Token::End,
            ]
        );
    }

    #[test]
    fn skips_prolog_and_comments() {
        let toks = tokens(
            "<?xml version=\"1.0\"?>\n<!-- a <b> comment -->\n<posList>\n 1 2\t3 4 </posList >",
        );
        assert_eq!(
            toks,
            vec![
                Token::OpenTag("posList"),
                Token::TagEnd,
                Token::Coord("1"),
                Token::Coord("2"),
                Token::Coord("3"),
                Token::Coord("4"),
                Token::CloseTag("posList"),
                Token::End,
            ]
        );
    }

    #[test]
    fn nul_terminates_input() {
        let toks = tokens("<a>1</a>\0<garbage");
        assert_eq!(toks.len(), 5);
        assert_eq!(toks[4], Token::End);
    }

    #[test]
    fn reports_location() {
        let err = Lexer::new("<a>\n  <b c=1>")
            .collect::<Result<Vec<_>>>()
            .unwrap_err();
        match err {
            GeoGmlError::Lexical { line, column, .. } => assert_eq!((line, column), (2, 8)),
            other => panic!("unexpected {other}"),
        }
    }

    #[test]
    fn stops_after_error() {
        let mut lexer = Lexer::new("<a x=\"unterminated>");
        assert_eq!(lexer.next().unwrap().unwrap(), Token::OpenTag("a"));
        assert_eq!(lexer.next().unwrap().unwrap(), Token::AttrKey("x"));
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
    }

    #[test]
    fn rejects_stray_markup() {
        assert!(Lexer::new("a > b").collect::<Result<Vec<_>>>().is_err());
        assert!(Lexer::new("< a>").collect::<Result<Vec<_>>>().is_err());
        assert!(Lexer::new("<a").collect::<Result<Vec<_>>>().is_err());
        assert!(Lexer::new("<!-- open").collect::<Result<Vec<_>>>().is_err());
    }
}
