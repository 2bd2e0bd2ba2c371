use crate::algorithm::native::area::shoelace;
use crate::geometry::Ring;

/// Returned by [`Centroid::centroid`] for a ring without area.
pub const NO_CENTROID: (f64, f64) = (-f64::MAX, -f64::MAX);

/// Area-weighted centroid of a ring.
pub trait Centroid {
    /// The `(x, y)` centroid, or [`NO_CENTROID`] when the ring is empty or encloses
    /// no area.
    fn centroid(&self) -> (f64, f64);
}

impl Centroid for Ring {
    fn centroid(&self) -> (f64, f64) {
        let coords = self.coords();
        let area = shoelace(coords);
        if coords.is_empty() || area == 0. {
            return NO_CENTROID;
        }
        let mut cx = 0.;
        let mut cy = 0.;
        for i in 1..coords.len() {
            let (x0, y0) = coords.xy(i - 1);
            let (x1, y1) = coords.xy(i);
            let term = x0 * y1 - x1 * y0;
            cx += (x0 + x1) * term;
            cy += (y0 + y1) * term;
        }
        let denom = area * 6.;
        (cx / denom, cy / denom)
    }
}
