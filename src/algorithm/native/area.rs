use crate::geometry::{CoordBuffer, Polygon, Ring};

/// Signed and unsigned planar area.
///
/// The signed area is positive for counter-clockwise vertex order.
pub trait Area {
    fn signed_area(&self) -> f64;

    fn unsigned_area(&self) -> f64 {
        self.signed_area().abs()
    }
}

/// Shoelace sum over successive stored vertices. The ring is expected to repeat its first
/// vertex at the end, so no closing edge is added.
pub(crate) fn shoelace(coords: &CoordBuffer) -> f64 {
    let mut area = 0.;
    for i in 1..coords.len() {
        let (x0, y0) = coords.xy(i - 1);
        let (x1, y1) = coords.xy(i);
        area += x0 * y1 - x1 * y0;
    }
    area / 2.
}

impl Area for Ring {
    fn signed_area(&self) -> f64 {
        shoelace(self.coords())
    }
}

/// Exterior area minus the area of every hole, carrying the exterior's sign.
impl Area for Polygon {
    fn signed_area(&self) -> f64 {
        let exterior = self.exterior().signed_area();
        let holes: f64 = self.interiors().iter().map(Area::unsigned_area).sum();
        if exterior < 0. {
            exterior + holes
        } else {
            exterior - holes
        }
    }
}
