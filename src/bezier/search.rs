use super::curve::*;
use super::super::coordinate::*;

/// Number of evenly spaced samples used to bracket the minima of the distance function
const COARSE_SAMPLES: usize = 16;

/// Iteration cap for the golden-section search (each step shrinks the bracket by ~0.618)
const MAX_SEARCH_STEPS: usize = 64;

/// The golden ratio section used to divide the search bracket
const GOLDEN_SECTION: f64 = 0.6180339887498949;

///
/// Golden-section search for the t value minimising the distance from a point to a curve,
/// within a bracketing interval
///
fn minimise_distance<C: BezierCurve>(curve: &C, point: &C::Point, t_min: f64, t_max: f64) -> f64 {
    let distance_at = |t: f64| curve.point_at_pos(t).distance_to(point);

    let mut a = t_min;
    let mut b = t_max;
    let mut c = b - GOLDEN_SECTION*(b-a);
    let mut d = a + GOLDEN_SECTION*(b-a);

    for _step in 0..MAX_SEARCH_STEPS {
        if (b-a).abs() < 1e-12 {
            break;
        }

        if distance_at(c) < distance_at(d) {
            b = d;
        } else {
            a = c;
        }

        c = b - GOLDEN_SECTION*(b-a);
        d = a + GOLDEN_SECTION*(b-a);
    }

    (a+b)*0.5
}

///
/// Finds the t value of the point on a curve that lies closest to the specified point
///
/// The distance to a cubic curve can have several local minima, so the curve is sampled
/// coarsely first and every bracketed minimum (plus the two endpoints) is refined by
/// golden-section search, keeping the global best.
///
pub fn nearest_t_on_curve<C: BezierCurve>(curve: &C, point: &C::Point) -> f64 {
    let sample_t    = |index: usize| (index as f64) / (COARSE_SAMPLES as f64);
    let distances: Vec<f64> = (0..(COARSE_SAMPLES+1))
        .map(|index| curve.point_at_pos(sample_t(index)).distance_to(point))
        .collect();

    let mut best_t          = 0.0;
    let mut best_distance   = distances[0];

    if distances[COARSE_SAMPLES] < best_distance {
        best_t        = 1.0;
        best_distance = distances[COARSE_SAMPLES];
    }

    // Refine every interior sample that's a local minimum of the coarse scan
    for index in 1..COARSE_SAMPLES {
        if distances[index] <= distances[index-1] && distances[index] <= distances[index+1] {
            let refined_t           = minimise_distance(curve, point, sample_t(index-1), sample_t(index+1));
            let refined_distance    = curve.point_at_pos(refined_t).distance_to(point);

            if refined_distance < best_distance {
                best_t        = refined_t;
                best_distance = refined_distance;
            }
        }
    }

    best_t
}

///
/// Finds the point on a curve that lies closest to the specified point, returning
/// the (t value, position, distance) of the result
///
pub fn nearest_point_on_curve<C: BezierCurve>(curve: &C, point: &C::Point) -> (f64, C::Point, f64) {
    let t   = nearest_t_on_curve(curve, point);
    let pos = curve.point_at_pos(t);

    (t, pos, pos.distance_to(point))
}
