//! Coordinate text extraction for `coordinates`, `pos` and `posList`.

use crate::error::{GeoGmlError, Result};
use crate::geometry::Coord;

/// Whether `text` is an optionally signed decimal with at most one `.`.
///
/// Exponents, thousands separators and anything else are rejected.
pub fn check_coord(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let mut seen_dot = false;
    for c in digits.bytes() {
        match c {
            b'.' if seen_dot => return false,
            b'.' => seen_dot = true,
            b'0'..=b'9' => {}
            _ => return false,
        }
    }
    true
}

/// A checked value. A bare sign or dot has no digits and reads as `0`.
fn parse_value(text: &str) -> Result<f64> {
    if !check_coord(text) {
        return Err(GeoGmlError::InvalidCoordinates(format!(
            "\"{text}\" is not a decimal number"
        )));
    }
    if !text.bytes().any(|c| c.is_ascii_digit()) {
        return Ok(0.0);
    }
    text.parse::<f64>()
        .map_err(|_| GeoGmlError::InvalidCoordinates(format!("\"{text}\" is out of range")))
}

/// Ordinates collected for one vertex. Values past the third are counted but dropped.
#[derive(Debug, Default)]
struct Tuple {
    values: [f64; 3],
    count: usize,
}

impl Tuple {
    fn push(&mut self, value: f64) {
        if let Some(slot) = self.values.get_mut(self.count) {
            *slot = value;
        }
        self.count += 1;
    }

    /// The vertex and whether it has a Z, for tuples of exactly 2 or 3 values.
    fn finish(&self) -> Result<(Coord, bool)> {
        let [x, y, z] = self.values;
        match self.count {
            2 => Ok((Coord::xy(x, y), false)),
            3 => Ok((Coord::xyz(x, y, z), true)),
            n => Err(GeoGmlError::InvalidCoordinates(format!(
                "expected 2 or 3 values per vertex, found {n}"
            ))),
        }
    }

    /// Add every non-empty comma-separated piece of `token`.
    fn push_token(&mut self, token: &str) -> Result<()> {
        for piece in token.split(',').filter(|piece| !piece.is_empty()) {
            self.push(parse_value(piece)?);
        }
        Ok(())
    }
}

/// Vertices of a linestring or ring under construction.
///
/// `has_z` starts out true and is cleared as soon as any 2D vertex is added, so a
/// sequence is 3D only if every vertex was.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordSeq {
    pub coords: Vec<Coord>,
    pub has_z: bool,
}

impl Default for CoordSeq {
    fn default() -> Self {
        Self {
            coords: Vec::new(),
            has_z: true,
        }
    }
}

impl CoordSeq {
    pub fn push(&mut self, coord: Coord, has_z: bool) {
        self.has_z &= has_z;
        self.coords.push(coord);
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Append `other`, dropping its first vertex when it repeats our last one.
    pub fn append_joined(&mut self, other: CoordSeq) {
        let repeated = match (self.coords.last(), other.coords.first()) {
            (Some(last), Some(first)) => last.x == first.x && last.y == first.y && last.z == first.z,
            _ => false,
        };
        self.has_z &= other.has_z;
        self.coords
            .extend(other.coords.into_iter().skip(usize::from(repeated)));
    }
}

/// A GML 2 `<coordinates>` point: every value of every token forms one tuple.
pub fn parse_point_v2(tokens: &[&str]) -> Result<(Coord, bool)> {
    let mut tuple = Tuple::default();
    for token in tokens {
        tuple.push_token(token)?;
    }
    tuple.finish()
}

/// A GML 3 `<pos>` point: each token is one value.
pub fn parse_point_v3(tokens: &[&str]) -> Result<(Coord, bool)> {
    let mut tuple = Tuple::default();
    for token in tokens {
        tuple.push(parse_value(token)?);
    }
    tuple.finish()
}

/// GML 2 `<coordinates>` of a linestring or ring.
///
/// Tuples are separated by whitespace and values by commas. A tuple carries on into
/// the next token when the current token ends with a comma or the next one starts
/// with a comma, so `1,2 3,4` and `1, 2 3 ,4` both hold two vertices.
pub fn parse_coordinates(tokens: &[&str], seq: &mut CoordSeq) -> Result<()> {
    let mut i = 0;
    while i < tokens.len() {
        let mut tuple = Tuple::default();
        loop {
            let token = tokens[i];
            tuple.push_token(token)?;
            let follow = token.ends_with(',')
                || tokens
                    .get(i + 1)
                    .is_some_and(|next| next.starts_with(','));
            i += 1;
            if !follow || i >= tokens.len() {
                break;
            }
        }
        let (coord, has_z) = tuple.finish()?;
        seq.push(coord, has_z);
    }
    Ok(())
}

/// GML 3 `<posList>`: a flat list consumed in groups of 2, or 3 when `has_z`.
pub fn parse_pos_list(tokens: &[&str], has_z: bool, seq: &mut CoordSeq) -> Result<()> {
    let stride = if has_z { 3 } else { 2 };
    if tokens.len() % stride != 0 {
        return Err(GeoGmlError::InvalidCoordinates(format!(
            "posList of {} values is not a multiple of {stride}",
            tokens.len()
        )));
    }
    for group in tokens.chunks_exact(stride) {
        let x = parse_value(group[0])?;
        let y = parse_value(group[1])?;
        if has_z {
            seq.push(Coord::xyz(x, y, parse_value(group[2])?), true);
        } else {
            seq.push(Coord::xy(x, y), false);
        }
    }
    Ok(())
}
