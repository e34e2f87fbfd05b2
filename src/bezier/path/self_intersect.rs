use super::path::*;
use super::to_curves::*;
use super::super::curve::*;
use super::super::intersection::*;
use super::super::super::geo::*;
use super::super::super::error::*;
use super::super::super::coordinate::*;

/// How close a t value needs to be to the end of a curve for an intersection there to count
/// as the shared endpoint of two neighbouring curves
const SHARED_POINT_T: f64 = 0.02;

///
/// A point where a path crosses itself
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PathIntersection<Point> {
    /// The (curve index, t value) of the crossing on the earlier part of the path
    pub segment1: (usize, f64),

    /// The (curve index, t value) of the crossing on the later part of the path
    pub segment2: (usize, f64),

    /// Where the crossing is
    pub pos: Point
}

///
/// Finds the points where a path crosses itself, to within the specified accuracy
///
/// Only curve pairs whose bounding boxes overlap are tested (broad-phase pruning), and the
/// shared endpoints of neighbouring curves - including the closing point of a closed path -
/// are not reported as intersections. Results are ordered by their position along the path.
///
pub fn path_self_intersections<P: BezierPath>(path: &P, accuracy: f64) -> Result<Vec<PathIntersection<P::Point>>, GeomError>
where P::Point: Coordinate2D {
    if !(accuracy > 0.0) {
        return Err(GeomError::InvalidParameter);
    }

    let curves: Vec<Curve<P::Point>>        = path_to_curves(path).collect();
    let bounds: Vec<Bounds<P::Point>>       = curves.iter().map(|curve| curve.bounding_box()).collect();
    let closed                              = path_is_closed(path);

    let mut crossings = vec![];

    for first in 0..curves.len() {
        // Crossings within a single curve (a curve that loops over itself)
        for hit in curve_self_intersections(&curves[first], accuracy)? {
            crossings.push(PathIntersection { segment1: (first, hit.t1), segment2: (first, hit.t2), pos: hit.pos });
        }

        // Crossings between this curve and the later ones whose bounds overlap it
        for second in (first+1)..curves.len() {
            if !bounds[first].overlaps(&bounds[second]) {
                continue;
            }

            let adjacent        = second == first+1;
            let wraps_around    = closed && first == 0 && second == curves.len()-1;

            for hit in curve_intersects_curve(&curves[first], &curves[second], accuracy)? {
                // The junction between consecutive curves is continuity, not a crossing
                if adjacent && hit.t1 > 1.0-SHARED_POINT_T && hit.t2 < SHARED_POINT_T {
                    continue;
                }
                if wraps_around && hit.t1 < SHARED_POINT_T && hit.t2 > 1.0-SHARED_POINT_T {
                    continue;
                }

                crossings.push(PathIntersection { segment1: (first, hit.t1), segment2: (second, hit.t2), pos: hit.pos });
            }
        }
    }

    // Order by position along the path so the results are deterministic
    crossings.sort_by(|a, b| {
        (a.segment1.0, a.segment2.0).cmp(&(b.segment1.0, b.segment2.0))
            .then(a.segment1.1.partial_cmp(&b.segment1.1).unwrap_or(std::cmp::Ordering::Equal))
    });

    Ok(crossings)
}
