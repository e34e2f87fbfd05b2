use super::path::*;
use super::to_curves::*;
use super::super::curve::*;
use super::super::length::*;
use super::super::super::error::*;

///
/// Measures the total length of a path (the sum of the lengths of its curves)
///
pub fn path_length<P: BezierPath>(path: &P, max_error: f64) -> Result<f64, GeomError> {
    let mut total_length = 0.0;

    for curve in path_to_curves::<_, Curve<P::Point>>(path) {
        total_length += curve_length(&curve, max_error)?;
    }

    Ok(total_length)
}

///
/// Measures the length of a path up to and including the curve at the specified index
///
pub fn path_length_to_segment<P: BezierPath>(path: &P, segment_index: usize, max_error: f64) -> Result<f64, GeomError> {
    let mut total_length    = 0.0;
    let mut found_segment   = false;

    for (index, curve) in path_to_curves::<_, Curve<P::Point>>(path).enumerate() {
        total_length += curve_length(&curve, max_error)?;

        if index == segment_index {
            found_segment = true;
            break;
        }
    }

    if found_segment {
        Ok(total_length)
    } else {
        Err(GeomError::InvalidParameter)
    }
}

///
/// Finds the position a given distance along a path, as a (segment index, t value) pair
///
/// As with `curve_t_at_length`, lengths that overshoot the end of the path by no more
/// than `max_error` are clamped to the end of the final curve, and negative lengths are
/// an `InvalidParameter` error.
///
pub fn path_t_at_length<P: BezierPath>(path: &P, target_length: f64, max_error: f64) -> Result<(usize, f64), GeomError> {
    if target_length < 0.0 {
        return Err(GeomError::InvalidParameter);
    }

    let mut remaining   = target_length;
    let mut last_index  = None;

    for (index, curve) in path_to_curves::<_, Curve<P::Point>>(path).enumerate() {
        let segment_length = curve_length(&curve, max_error)?;

        if remaining <= segment_length {
            // Interior segments use the strict inversion (no overshoot slop needed here)
            return Ok((index, curve_t_at_length(&curve, remaining, max_error)?));
        }

        remaining   -= segment_length;
        last_index  = Some(index);
    }

    // Ran off the end of the path: tolerate a small overshoot due to the approximation
    match last_index {
        Some(index) if remaining <= max_error   => Ok((index, 1.0)),
        _                                       => Err(GeomError::OutOfRange)
    }
}
