use super::line::*;
use super::super::coordinate::*;

///
/// Returns the point at which two line segments intersect (if they intersect)
///
/// Only the 2-dimensional form is supported at the moment (lines are much less likely to intersect
/// in higher dimensions)
///
pub fn line_intersects_line<L: Line>(line1: &L, line2: &L) -> Option<L::Point>
where L::Point: Coordinate2D {
    let (from1, to1) = line1.points();
    let (from2, to2) = line2.points();

    let ((x1, y1), (x2, y2)) = ((from1.x(), from1.y()), (to1.x(), to1.y()));
    let ((x3, y3), (x4, y4)) = ((from2.x(), from2.y()), (to2.x(), to2.y()));

    let denominator = (y4-y3)*(x2-x1) - (x4-x3)*(y2-y1);
    if denominator == 0.0 {
        // Lines are parallel (or degenerate)
        return None;
    }

    let ua = ((x4-x3)*(y1-y3) - (y4-y3)*(x1-x3)) / denominator;
    let ub = ((x2-x1)*(y1-y3) - (y2-y1)*(x1-x3)) / denominator;

    if ua >= 0.0 && ua <= 1.0 && ub >= 0.0 && ub <= 1.0 {
        Some(L::Point::from_components(&[
            x1+(ua*(x2-x1)),
            y1+(ua*(y2-y1))
        ]))
    } else {
        None
    }
}
