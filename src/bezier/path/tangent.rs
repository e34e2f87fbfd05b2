use super::path::*;
use super::to_curves::*;
use super::super::curve::*;
use super::super::super::error::*;

///
/// Returns the tangent vector of a path at the given (segment index, t value) position
///
/// Produces an `InvalidParameter` error if the segment index is beyond the end of the
/// path or the t value is outside 0 to 1.
///
pub fn path_tangent_at<P: BezierPath>(path: &P, segment_index: usize, t: f64) -> Result<P::Point, GeomError> {
    path_to_curves::<_, Curve<P::Point>>(path)
        .nth(segment_index)
        .ok_or(GeomError::InvalidParameter)
        .and_then(|curve| curve.checked_tangent_at_pos(t))
}

///
/// Returns the tangent vector at the very end of a path
///
pub fn path_tangent_at_end<P: BezierPath>(path: &P) -> Result<P::Point, GeomError> {
    path_to_curves::<_, Curve<P::Point>>(path)
        .last()
        .ok_or(GeomError::InvalidParameter)
        .map(|curve| curve.tangent_at_pos(1.0))
}
