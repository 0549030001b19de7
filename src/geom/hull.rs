//! Convex hull by gift wrapping (Jarvis march)

use super::point::Point3;

/// Turn direction of the ordered triple (p, q, r), screen coordinates (y-down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

/// Orientation of (p, q, r) from the sign of the cross product
pub fn orientation(p: Point3, q: Point3, r: Point3) -> Orientation {
    let value = (q.y - p.y) * (r.x - q.x) - (q.x - p.x) * (r.y - q.y);
    if value == 0.0 {
        Orientation::Collinear
    } else if value > 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::CounterClockwise
    }
}

/// Hull vertices of a point set, starting from the left-most point.
///
/// Returns an empty list for fewer than three points. Interior points are
/// dropped. Points lying on a hull edge between two corners may be kept or
/// dropped depending on the order the walk meets them.
pub fn convex_hull(points: &[Point3]) -> Vec<Point3> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    // Left-most point, first one wins on ties
    let mut start = 0;
    for i in 1..n {
        if points[i].x < points[start].x {
            start = i;
        }
    }

    let mut hull = Vec::new();
    let mut p = start;
    loop {
        hull.push(points[p]);

        let mut q = (p + 1) % n;
        for i in 0..n {
            if orientation(points[p], points[i], points[q]) == Orientation::CounterClockwise {
                q = i;
            }
        }
        p = q;

        if p == start {
            break;
        }
        // Duplicated corners can keep the walk from ever landing on `start`
        if hull.len() >= n {
            log::warn!("Hull walk did not close after {} points, stopping", n);
            break;
        }
    }

    hull
}
