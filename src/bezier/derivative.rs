use super::basis::*;
use super::curve::*;
use super::super::coordinate::*;

///
/// Returns the 1st derivative of a cubic bezier curve
///
pub fn derivative4<Point: Coordinate>(w1: Point, w2: Point, w3: Point, w4: Point) -> (Point, Point, Point) {
    ((w2-w1)*3.0, (w3-w2)*3.0, (w4-w3)*3.0)
}

///
/// Returns the 1st derivative of a quadratic bezier curve (or the 2nd derivative of a cubic curve)
///
pub fn derivative3<Point: Coordinate>(wn1: Point, wn2: Point, wn3: Point) -> (Point, Point) {
    ((wn2-wn1)*2.0, (wn3-wn2)*2.0)
}

///
/// Returns the 3rd derivative of a cubic bezier curve (2nd of a quadratic)
///
pub fn derivative2<Point: Coordinate>(wnn1: Point, wnn2: Point) -> Point {
    wnn2-wnn1
}

///
/// Computes the signed curvature of a 2D curve at the specified t value
///
/// Returns 0 where the curvature is undefined (at a cusp, where the first derivative vanishes)
///
pub fn curvature_at_pos<C: BezierCurve>(curve: &C, t: f64) -> f64
where C::Point: Coordinate2D {
    let w1          = curve.start_point();
    let (w2, w3)    = curve.control_points();
    let w4          = curve.end_point();

    let (d1, d2, d3)    = derivative4(w1, w2, w3, w4);
    let (dd1, dd2)      = derivative3(d1, d2, d3);

    let first           = de_casteljau3(t, d1, d2, d3);
    let second          = de_casteljau2(t, dd1, dd2);

    let denominator     = (first.x()*first.x() + first.y()*first.y()).powf(1.5);

    if denominator == 0.0 {
        0.0
    } else {
        (first.x()*second.y() - first.y()*second.x()) / denominator
    }
}
