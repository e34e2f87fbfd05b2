use super::curve::*;
use super::super::consts::*;
use super::super::coordinate::*;

use roots::{find_roots_cubic, Roots};

/// How far a candidate point can be from the curve and still count as 'on' it
const CLOSE_ENOUGH: f64 = SMALL_DISTANCE * 50.0;

/// Roots this far outside 0..1 are snapped to the boundary (root finding is not exact)
const ROOT_SLOP: f64 = 0.001;

///
/// Finds the t values where a single dimension of a cubic bezier curve takes the value p
///
/// Only t values within the range of the curve are returned, with a little slop allowed
/// at either end to absorb root-finding inaccuracy.
///
pub fn solve_basis_for_t(w1: f64, w2: f64, w3: f64, w4: f64, p: f64) -> Vec<f64> {
    // Rearrange the basis function into polynomial coefficients with p subtracted
    let d = w1-p;
    let c = (w2-w1)*3.0;
    let b = (w3-w2)*3.0-c;
    let a = w4-w1-c-b;

    let roots = match find_roots_cubic(a, b, c, d) {
        Roots::No(r)    => r.to_vec(),
        Roots::One(r)   => r.to_vec(),
        Roots::Two(r)   => r.to_vec(),
        Roots::Three(r) => r.to_vec(),
        Roots::Four(r)  => r.to_vec()
    };

    roots.into_iter()
        .map(|root| {
            // Snap near-boundary roots onto the curve
            if root < 0.0 && root > -ROOT_SLOP         { 0.0 }
            else if root > 1.0 && root < 1.0+ROOT_SLOP { 1.0 }
            else                                       { root }
        })
        .filter(|root| *root >= 0.0 && *root <= 1.0)
        .collect()
}

///
/// Given a point on (or very close to) a bezier curve, recovers the t value where it lies
///
/// Solves one dimension at a time and accepts the first root whose curve position is close
/// enough to the requested point; returns `None` when the point is not near the curve.
///
pub fn solve_curve_for_t<C: BezierCurve>(curve: &C, point: &C::Point) -> Option<f64> {
    let close_enough_sq = CLOSE_ENOUGH * CLOSE_ENOUGH;

    let w1          = curve.start_point();
    let (w2, w3)    = curve.control_points();
    let w4          = curve.end_point();

    for dimension in 0..(C::Point::len()) {
        let candidates = solve_basis_for_t(
            w1.get(dimension), w2.get(dimension), w3.get(dimension), w4.get(dimension),
            point.get(dimension));

        for t in candidates {
            // A root in one dimension is only a solution if the whole point matches
            let offset = curve.point_at_pos(t) - *point;

            if offset.dot(&offset) <= close_enough_sq {
                return Some(t);
            }
        }
    }

    None
}
