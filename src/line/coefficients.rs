use super::line::*;
use super::super::coordinate::*;

///
/// For a two-dimensional line, computes the coefficients of the line equation ax+by+c=0
/// (such that a^2+b^2 = 1)
///
/// This will return (0,0,0) for a line where the start and end point are the same.
///
pub fn line_coefficients_2d<P: Coordinate+Coordinate2D, L: Line<Point=P>>(line: &L) -> (f64, f64, f64) {
    let (from, to)  = line.points();
    let (dx, dy)    = (to.x() - from.x(), to.y() - from.y());

    // The normal to the line direction supplies a and b directly
    let magnitude   = (dx*dx + dy*dy).sqrt();
    if magnitude == 0.0 {
        // This is a point rather than a line
        return (0.0, 0.0, 0.0);
    }

    let a           = dy / magnitude;
    let b           = -dx / magnitude;

    // c places the line so that it passes through the start point
    let c           = -(a*from.x() + b*from.y());

    (a, b, c)
}

///
/// The perpendicular distance from a point to the (infinite) line through a 2D line's points
///
#[inline]
pub fn line_distance_to_point<P: Coordinate+Coordinate2D, L: Line<Point=P>>(line: &L, point: &P) -> f64 {
    let (a, b, c) = line_coefficients_2d(line);

    (a*point.x() + b*point.y() + c).abs()
}
