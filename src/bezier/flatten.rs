use super::curve::*;
use super::subdivide::*;
use super::super::consts::*;
use super::super::error::*;
use super::super::coordinate::*;

///
/// Computes how far a curve deviates from its chord (the largest perpendicular distance
/// from either control point to the line joining the start and end points)
///
/// Once this deviation is below the flattening tolerance, the chord is an acceptable
/// stand-in for the curve itself.
///
fn deviation_from_chord<Point: Coordinate>(w1: &Point, w2: &Point, w3: &Point, w4: &Point) -> f64 {
    let chord       = *w4 - *w1;
    let chord_len   = chord.magnitude();

    if chord_len <= f64::EPSILON {
        // Degenerate chord: measure straight-line distance to the start point instead
        let d1 = w2.distance_to(w1);
        let d2 = w3.distance_to(w1);

        if d1 > d2 { d1 } else { d2 }
    } else {
        let unit        = chord * (1.0/chord_len);

        let offset1     = *w2 - *w1;
        let offset2     = *w3 - *w1;
        let perp1       = offset1 - unit*offset1.dot(&unit);
        let perp2       = offset2 - unit*offset2.dot(&unit);

        let d1          = perp1.magnitude();
        let d2          = perp2.magnitude();

        if d1 > d2 { d1 } else { d2 }
    }
}

///
/// A lazy sequence of points approximating a bezier curve as a polyline
///
/// Produced by `flatten_curve`. Yields `(t, point)` pairs in curve order, starting with
/// `(0.0, start_point)` and ending with `(1.0, end_point)`. The polyline stays within the
/// flattening tolerance of the true curve. Cloning the iterator before use makes it
/// possible to walk the same approximation more than once.
///
#[derive(Clone)]
pub struct FlattenedCurve<Point: Coordinate> {
    /// Maximum deviation between the curve and the generated polyline
    max_error: f64,

    /// The initial point, yielded before any subdivision takes place
    initial_point: Option<Point>,

    /// Sections still to be flattened, in reverse curve order ((t_min, t_max, weights, depth))
    stack: Vec<(f64, f64, (Point, Point, Point, Point), usize)>
}

impl<Point: Coordinate> Iterator for FlattenedCurve<Point> {
    type Item = (f64, Point);

    fn next(&mut self) -> Option<(f64, Point)> {
        if let Some(initial_point) = self.initial_point.take() {
            return Some((0.0, initial_point));
        }

        while let Some((t_min, t_max, weights, depth)) = self.stack.pop() {
            let (w1, w2, w3, w4) = weights;

            if depth >= MAX_SUBDIVISION_DEPTH || deviation_from_chord(&w1, &w2, &w3, &w4) <= self.max_error {
                // Section is flat enough (or too deep to subdivide further): emit its endpoint
                return Some((t_max, w4));
            }

            // Bisect and try again (the right half goes on the stack first so points come out in curve order)
            let (left, right)   = subdivide4(0.5, w1, w2, w3, w4);
            let t_mid           = (t_min+t_max)*0.5;

            self.stack.push((t_mid, t_max, right, depth+1));
            self.stack.push((t_min, t_mid, left, depth+1));
        }

        None
    }
}

///
/// Flattens a bezier curve into a polyline whose maximum deviation from the true curve
/// is at most `max_error`
///
/// Subdivision is recursion-bounded: numerically degenerate curves produce a best-effort
/// approximation rather than failing to terminate. A curve whose control points already
/// lie on its chord yields exactly two points.
///
pub fn flatten_curve<C: BezierCurve>(curve: &C, max_error: f64) -> Result<FlattenedCurve<C::Point>, GeomError> {
    if !(max_error > 0.0) {
        return Err(GeomError::InvalidParameter);
    }

    let w1          = curve.start_point();
    let (w2, w3)    = curve.control_points();
    let w4          = curve.end_point();

    Ok(FlattenedCurve {
        max_error:      max_error,
        initial_point:  Some(w1),
        stack:          vec![(0.0, 1.0, (w1, w2, w3, w4), 0)]
    })
}
