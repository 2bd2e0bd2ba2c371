use crate::geometry::{Polygon, Ring};

/// Point-in-surface tests on the XY plane.
pub trait PointOnSurface {
    /// Whether `(x, y)` falls inside the surface. Points exactly on a boundary may be
    /// reported either way.
    fn is_point_on_surface(&self, x: f64, y: f64) -> bool;
}

impl PointOnSurface for Ring {
    /// Even-odd ray casting. The closing vertex is ignored since it repeats the first.
    fn is_point_on_surface(&self, x: f64, y: f64) -> bool {
        let coords = self.coords();
        let cnt = coords.len().saturating_sub(1);
        if cnt < 2 {
            return false;
        }
        let vertices: Vec<(f64, f64)> = (0..cnt).map(|i| coords.xy(i)).collect();

        let (mut minx, mut miny) = (f64::MAX, f64::MAX);
        let (mut maxx, mut maxy) = (-f64::MAX, -f64::MAX);
        for &(vx, vy) in &vertices {
            minx = minx.min(vx);
            maxx = maxx.max(vx);
            miny = miny.min(vy);
            maxy = maxy.max(vy);
        }
        if x < minx || x > maxx || y < miny || y > maxy {
            return false;
        }

        let mut inside = false;
        let mut j = cnt - 1;
        for i in 0..cnt {
            let (xi, yi) = vertices[i];
            let (xj, yj) = vertices[j];
            if ((yi <= y && y < yj) || (yj <= y && y < yi))
                && x < (xj - xi) * (y - yi) / (yj - yi) + xi
            {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

impl PointOnSurface for Polygon {
    /// Inside the exterior and outside every hole.
    fn is_point_on_surface(&self, x: f64, y: f64) -> bool {
        self.exterior().is_point_on_surface(x, y)
            && !self
                .interiors()
                .iter()
                .any(|hole| hole.is_point_on_surface(x, y))
    }
}
