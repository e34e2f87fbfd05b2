use super::curve::*;
use super::flatten::*;
use super::super::error::*;
use super::super::coordinate::*;

///
/// Measures the length of a bezier curve by flattening it and summing the chord lengths
///
/// The accuracy of the result is bounded by the flattening tolerance: a smaller
/// `max_error` never produces a less accurate length.
///
pub fn curve_length<C: BezierCurve>(curve: &C, max_error: f64) -> Result<f64, GeomError> {
    let mut length      = 0.0;
    let mut last_point  = None;

    for (_t, point) in flatten_curve(curve, max_error)? {
        if let Some(last_point) = last_point {
            length += point.distance_to(&last_point);
        }
        last_point = Some(point);
    }

    Ok(length)
}

///
/// Finds the t value of the point that lies a given distance along a bezier curve
///
/// Walks the same polyline that `curve_length` measures and interpolates within the
/// bracketing chord. Lengths that overshoot the end of the curve by no more than
/// `max_error` are clamped to t=1; anything further produces an `OutOfRange` error.
/// Negative lengths are an `InvalidParameter` error.
///
pub fn curve_t_at_length<C: BezierCurve>(curve: &C, target_length: f64, max_error: f64) -> Result<f64, GeomError> {
    if target_length < 0.0 {
        return Err(GeomError::InvalidParameter);
    }

    let mut length_so_far   = 0.0;
    let mut last            = None;

    for (t, point) in flatten_curve(curve, max_error)? {
        if let Some((last_t, last_point)) = last {
            let chord_length: f64 = point.distance_to(&last_point);

            if chord_length > 0.0 && length_so_far + chord_length >= target_length {
                // Target lies within this chord: interpolate t linearly along it
                let remaining = target_length - length_so_far;
                return Ok(last_t + (t-last_t) * (remaining/chord_length));
            }

            length_so_far += chord_length;
        }

        last = Some((t, point));
    }

    // Ran off the end of the curve: tolerate a small overshoot due to the approximation
    if target_length <= length_so_far + max_error {
        Ok(1.0)
    } else {
        Err(GeomError::OutOfRange)
    }
}
