use super::path::*;
use super::super::curve::*;

///
/// Converts a path to the sequence of bezier curves that make it up
///
/// Each point triple starts from where the previous one ended, so the curves share their
/// endpoints the way the contiguity invariant requires.
///
pub fn path_to_curves<Path: BezierPath, Curve: BezierCurveFactory<Point=Path::Point>>(path: &Path) -> impl Iterator<Item=Curve> {
    path.points()
        .scan(path.start_point(), |segment_start, (cp1, cp2, end_point)| {
            let curve = Curve::from_points(*segment_start, (cp1, cp2), end_point);
            *segment_start = end_point;

            Some(curve)
        })
}
