use super::path::*;
use super::to_curves::*;
use super::super::curve::*;
use super::super::search::*;
use super::super::super::geo::*;
use super::super::super::error::*;
use super::super::super::coordinate::*;

///
/// The result of a closest-point query against a path
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PathClosestPoint<Point> {
    /// Index of the curve within the path where the closest point was found
    pub segment: usize,

    /// The t value of the closest point on that curve
    pub t: f64,

    /// Where the closest point is
    pub pos: Point,

    /// How far the query point is from the path
    pub distance: f64
}

///
/// Finds the point on a path that lies closest to the specified point
///
/// Curves whose bounding boxes are already further away than the best match found so far
/// are skipped without searching them. Produces an `InvalidParameter` error for a path
/// with no curves in it.
///
pub fn path_closest_point<P: BezierPath>(path: &P, point: &P::Point) -> Result<PathClosestPoint<P::Point>, GeomError> {
    let mut best: Option<PathClosestPoint<P::Point>> = None;

    for (segment, curve) in path_to_curves::<_, Curve<P::Point>>(path).enumerate() {
        // Cheap rejection: the bounding box distance is a lower bound for the curve distance
        if let Some(ref best) = best {
            let bounds: Bounds<P::Point> = curve.bounding_box();
            if bounds.distance_to_point(point) >= best.distance {
                continue;
            }
        }

        let (t, pos, distance) = nearest_point_on_curve(&curve, point);

        if best.as_ref().map(|best| distance < best.distance).unwrap_or(true) {
            best = Some(PathClosestPoint { segment: segment, t: t, pos: pos, distance: distance });
        }
    }

    best.ok_or(GeomError::InvalidParameter)
}
