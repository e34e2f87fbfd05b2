use super::line::*;
use super::super::bezier::*;

///
/// Changes a line into an equivalent bezier curve (whose control points lie along the line)
///
pub fn line_to_bezier<L: Line, Curve: BezierCurveFactory<Point=L::Point>>(line: &L) -> Curve {
    let (from, to)  = line.points();
    let offset      = to - from;
    let (cp1, cp2)  = (from + offset*(1.0/3.0), from + offset*(2.0/3.0));

    Curve::from_points(from, (cp1, cp2), to)
}
