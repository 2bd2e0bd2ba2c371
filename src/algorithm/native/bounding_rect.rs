use geo::{coord, Rect};

use crate::geometry::{Coord, CoordBuffer, GeometryCollection};

/// Axis-aligned minimum bounding rectangle on the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl BoundingRect {
    /// An empty rectangle that the first update replaces.
    pub fn new() -> Self {
        BoundingRect {
            minx: f64::INFINITY,
            miny: f64::INFINITY,
            maxx: -f64::INFINITY,
            maxy: -f64::INFINITY,
        }
    }

    pub fn update(&mut self, coord: &Coord) {
        if coord.x < self.minx {
            self.minx = coord.x;
        }
        if coord.y < self.miny {
            self.miny = coord.y;
        }
        if coord.x > self.maxx {
            self.maxx = coord.x;
        }
        if coord.y > self.maxy {
            self.maxy = coord.y;
        }
    }

    /// Whether no coordinate was ever added.
    pub fn is_empty(&self) -> bool {
        self.minx > self.maxx
    }

    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }

    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
}

impl Default for BoundingRect {
    fn default() -> Self {
        Self::new()
    }
}

impl From<BoundingRect> for Rect {
    fn from(value: BoundingRect) -> Self {
        let min_coord = coord! { x: value.minx, y: value.miny };
        let max_coord = coord! { x: value.maxx, y: value.maxy };
        Rect::new(min_coord, max_coord)
    }
}

impl From<BoundingRect> for ([f64; 2], [f64; 2]) {
    fn from(value: BoundingRect) -> Self {
        ([value.minx, value.miny], [value.maxx, value.maxy])
    }
}

fn finish(rect: BoundingRect) -> Option<BoundingRect> {
    (!rect.is_empty()).then_some(rect)
}

pub fn bounding_rect_coords(coords: &CoordBuffer) -> Option<BoundingRect> {
    let mut rect = BoundingRect::new();
    for coord in coords.iter() {
        rect.update(&coord);
    }
    finish(rect)
}

/// The bounding rectangle of every vertex of `geom`, or `None` when it is empty.
pub fn bounding_rect(geom: &GeometryCollection) -> Option<BoundingRect> {
    let mut rect = BoundingRect::new();
    for coord in geom.coords() {
        rect.update(&coord);
    }
    finish(rect)
}
