/// Intersection point of segments `p1-p2` and `p3-p4` on the XY plane.
///
/// Parallel segments, including collinear overlapping ones, yield `None`. The
/// intersection must fall within the bounding boxes of both segments.
///
/// # Examples
///
/// ```
/// use geogml::algorithm::native::segment_intersection;
///
/// let hit = segment_intersection((0., 0.), (2., 2.), (0., 2.), (2., 0.));
/// assert_eq!(hit, Some((1., 1.)));
/// ```
pub fn segment_intersection(
    p1: (f64, f64),
    p2: (f64, f64),
    p3: (f64, f64),
    p4: (f64, f64),
) -> Option<(f64, f64)> {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let (x4, y4) = p4;
    let (minx1, maxx1) = (x1.min(x2), x1.max(x2));
    let (miny1, maxy1) = (y1.min(y2), y1.max(y2));
    let (minx2, maxx2) = (x3.min(x4), x3.max(x4));
    let (miny2, maxy2) = (y3.min(y4), y3.max(y4));

    if minx1 > maxx2 || miny1 > maxy2 || maxx1 < minx2 || maxy1 < miny2 {
        return None;
    }

    // f64::MAX marks a vertical segment
    let slope = |dx: f64, dy: f64| if dx != 0. { dy / dx } else { f64::MAX };
    let m1 = slope(x2 - x1, y2 - y1);
    let m2 = slope(x4 - x3, y4 - y3);
    if m1 == m2 {
        return None;
    }
    let c1 = if m1 == f64::MAX { y1 } else { y1 - m1 * x1 };
    let c2 = if m2 == f64::MAX { y3 } else { y3 - m2 * x3 };

    let (x, y) = if m1 == f64::MAX {
        (x1, m2 * x1 + c2)
    } else if m2 == f64::MAX {
        (x3, m1 * x3 + c1)
    } else {
        // a*x + b*y + c = 0 with b = -1
        let det_inv = 1. / (-m1 + m2);
        ((-c2 + c1) * det_inv, (m2 * c1 - m1 * c2) * det_inv)
    };

    let within_first = x >= minx1 && x <= maxx1 && y >= miny1 && y <= maxy1;
    let within_second = x >= minx2 && x <= maxx2 && y >= miny2 && y <= maxy2;
    (within_first && within_second).then_some((x, y))
}
