use crate::geometry::CoordBuffer;

/// Minimum XY distance from `(x, y)` to a polyline.
///
/// Each segment contributes the distance to its end vertices and, when the
/// perpendicular foot falls within the segment, to that foot. Returns `None` for
/// fewer than two vertices.
pub fn min_distance(x: f64, y: f64, coords: &CoordBuffer) -> Option<f64> {
    if coords.len() < 2 {
        return None;
    }
    let (ox, oy) = coords.xy(0);
    let mut min_dist = (x - ox).hypot(y - oy);
    for i in 1..coords.len() {
        let (ox, oy) = coords.xy(i - 1);
        let (vx, vy) = coords.xy(i);
        min_dist = min_dist.min((x - vx).hypot(y - vy));

        let line_mag = (vx - ox).powi(2) + (vy - oy).powi(2);
        if line_mag == 0. {
            continue;
        }
        let u = ((x - ox) * (vx - ox) + (y - oy) * (vy - oy)) / line_mag;
        if (0. ..=1.).contains(&u) {
            let px = ox + u * (vx - ox);
            let py = oy + u * (vy - oy);
            min_dist = min_dist.min((x - px).hypot(y - py));
        }
    }
    Some(min_dist)
}
