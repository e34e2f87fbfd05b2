use super::curve::*;
use super::basis::*;
use super::derivative::*;
use super::super::coordinate::*;

/// Maximum number of reparameterization passes when trying to improve a fit
const MAX_FIT_ITERATIONS: usize = 4;

/// How far outside the error bound a fit can be (as a multiple of the maximum error)
/// and still be worth improving by reparameterization rather than splitting
const REFIT_RATIO: f64 = 4.0;

/// Maximum number of points fitted in one go (the algorithm is quadratic in the number
/// of points, so long inputs are divided into blocks first)
const MAX_POINTS_PER_BLOCK: usize = 100;

///
/// Fits a series of bezier curves against a set of sampled points, with a maximum error
///
/// This is the least-squares algorithm from Philip J. Schneider's 'An Algorithm for
/// Automatically Fitting Digitized Curves' (Graphics Gems), used to simplify point data
/// (for instance, input captured from a pointing device) into smooth curve segments.
///
/// Returns `None` when there are too few points to fit anything.
///
pub fn fit_curve<Curve: BezierCurveFactory>(points: &[Curve::Point], max_error: f64) -> Option<Vec<Curve>> {
    if points.len() < 2 {
        return None;
    }

    let mut curves = vec![];

    // Fit a block of points at a time so the quadratic fit stays tractable
    for block in points.chunks(MAX_POINTS_PER_BLOCK) {
        if block.len() < 2 { continue; }

        let start_tangent   = (block[1]-block[0]).to_unit_vector();
        let end_tangent     = (block[block.len()-2]-block[block.len()-1]).to_unit_vector();

        curves.extend(fit_curve_cubic(block, &start_tangent, &end_tangent, max_error));
    }

    Some(curves)
}

///
/// Fits a set of bezier curves against a set of points, with the tangents at either
/// end of the point set already known
///
pub fn fit_curve_cubic<Curve: BezierCurveFactory>(points: &[Curve::Point], start_tangent: &Curve::Point, end_tangent: &Curve::Point, max_error: f64) -> Vec<Curve> {
    if points.len() <= 2 {
        // Two points always fit as a line
        return vec![line_fit(&points[0], &points[1])];
    }

    // Estimate the t value for each point by chord-length parameterization
    let mut parameters  = chord_length_parameterize(points);
    let mut curve: Curve = least_squares_fit(points, &parameters, start_tangent, end_tangent);

    let (mut error, mut worst_point) = fit_error(points, &parameters, &curve);

    // When we're not too far out, Newton-Raphson reparameterization can rescue the fit
    if error > max_error && error < max_error*REFIT_RATIO {
        for _iteration in 0..MAX_FIT_ITERATIONS {
            parameters  = reparameterize(points, &parameters, &curve);
            curve       = least_squares_fit(points, &parameters, start_tangent, end_tangent);

            let (new_error, new_worst_point) = fit_error(points, &parameters, &curve);
            error       = new_error;
            worst_point = new_worst_point;

            if error <= max_error {
                break;
            }
        }
    }

    if error <= max_error {
        vec![curve]
    } else {
        // Split at the worst point and fit the two halves separately
        let split           = worst_point.max(1).min(points.len()-2);
        let centre_tangent  = centre_tangent(&points[split-1], &points[split], &points[split+1]);

        let lhs = fit_curve_cubic(&points[0..split+1], start_tangent, &centre_tangent, max_error);
        let rhs = fit_curve_cubic(&points[split..points.len()], &(centre_tangent*-1.0), end_tangent, max_error);

        lhs.into_iter().chain(rhs.into_iter()).collect()
    }
}

///
/// Creates the curve that represents a straight line between two points
///
fn line_fit<Curve: BezierCurveFactory>(p1: &Curve::Point, p2: &Curve::Point) -> Curve {
    let offset  = *p2 - *p1;
    let cp1     = *p1 + (offset * (1.0/3.0));
    let cp2     = *p1 + (offset * (2.0/3.0));

    Curve::from_points(*p1, (cp1, cp2), *p2)
}

///
/// Estimates a t value for each point, proportional to its distance along the polyline
/// through the points
///
fn chord_length_parameterize<Point: Coordinate>(points: &[Point]) -> Vec<f64> {
    let mut parameters      = vec![0.0];
    let mut total_distance  = 0.0;

    for p in 1..points.len() {
        total_distance += points[p-1].distance_to(&points[p]);
        parameters.push(total_distance);
    }

    if total_distance > 0.0 {
        for parameter in parameters.iter_mut() {
            *parameter /= total_distance;
        }
    }

    parameters
}

///
/// Performs the least-squares fit of a single cubic curve against a set of points with
/// estimated parameters
///
fn least_squares_fit<Curve: BezierCurveFactory>(points: &[Curve::Point], parameters: &[f64], start_tangent: &Curve::Point, end_tangent: &Curve::Point) -> Curve {
    let first_point = points[0];
    let last_point  = points[points.len()-1];

    // The tangent contributions for each parameter ('A' in the original paper)
    let tangent_weights: Vec<_> = parameters.iter().map(|t| {
        let one_minus_t = 1.0 - t;

        let b1          = 3.0 * t * (one_minus_t*one_minus_t);
        let b2          = 3.0 * t * t * one_minus_t;

        (*start_tangent*b1, *end_tangent*b2)
    }).collect();

    // Accumulate the 'C' matrix and 'X' vector of the least-squares system
    let mut c = [[0.0, 0.0], [0.0, 0.0]];
    let mut x = [0.0, 0.0];

    for (point_index, t) in parameters.iter().enumerate() {
        let (a1, a2)    = tangent_weights[point_index];

        c[0][0] += a1.dot(&a1);
        c[0][1] += a1.dot(&a2);
        c[1][0] = c[0][1];
        c[1][1] += a2.dot(&a2);

        let one_minus_t = 1.0 - t;
        let b0          = one_minus_t*one_minus_t*one_minus_t;
        let b1          = 3.0 * t * (one_minus_t*one_minus_t);
        let b2          = 3.0 * t * t * one_minus_t;
        let b3          = t*t*t;

        let offset = points[point_index] -
            ((first_point*b0) + (first_point*b1) + (last_point*b2) + (last_point*b3));

        x[0] += a1.dot(&offset);
        x[1] += a2.dot(&offset);
    }

    // Solve for the distances of the control points along the tangents
    let det_c0_c1   = c[0][0]*c[1][1] - c[1][0]*c[0][1];
    let det_c0_x    = c[0][0]*x[1]    - c[1][0]*x[0];
    let det_x_c1    = x[0]*c[1][1]    - x[1]*c[0][1];

    let alpha_l = if f64::abs(det_c0_c1) < 1.0e-4 { 0.0 } else { det_x_c1/det_c0_c1 };
    let alpha_r = if f64::abs(det_c0_c1) < 1.0e-4 { 0.0 } else { det_c0_x/det_c0_c1 };

    // Fall back to the Wu/Barsky heuristic when the alpha values are degenerate
    let segment_length  = first_point.distance_to(&last_point);
    let epsilon         = 1.0e-6*segment_length;

    if alpha_l < epsilon || alpha_r < epsilon {
        let distance = segment_length/3.0;
        Curve::from_points(first_point, (first_point+(*start_tangent*distance), last_point+(*end_tangent*distance)), last_point)
    } else {
        Curve::from_points(first_point, (first_point+(*start_tangent*alpha_l), last_point+(*end_tangent*alpha_r)), last_point)
    }
}

///
/// Computes the maximum distance between a fitted curve and the points it approximates,
/// along with the index of the worst point
///
fn fit_error<Curve: BezierCurve>(points: &[Curve::Point], parameters: &[f64], curve: &Curve) -> (f64, usize) {
    let mut worst_error_squared = 0.0;
    let mut worst_point         = points.len()/2;

    for (point_index, (point, t)) in points.iter().zip(parameters.iter()).enumerate() {
        let actual          = curve.point_at_pos(*t);
        let offset          = *point - actual;
        let error_squared   = offset.dot(&offset);

        if error_squared > worst_error_squared {
            worst_error_squared = error_squared;
            worst_point         = point_index;
        }
    }

    (f64::sqrt(worst_error_squared), worst_point)
}

///
/// Estimates the tangent in the middle of three points
///
fn centre_tangent<Point: Coordinate>(p1: &Point, p2: &Point, p3: &Point) -> Point {
    let v1 = *p1 - *p2;
    let v2 = *p2 - *p3;

    ((v1+v2)*0.5).to_unit_vector()
}

///
/// Improves the parameter estimates for a fitted curve using a Newton-Raphson step per point
///
fn reparameterize<Curve: BezierCurve>(points: &[Curve::Point], parameters: &[f64], curve: &Curve) -> Vec<f64> {
    points.iter().zip(parameters.iter())
        .map(|(point, t)| newton_raphson_step(curve, point, *t))
        .collect()
}

///
/// Moves a parameter estimate closer to the true closest point using one Newton-Raphson step
///
fn newton_raphson_step<Curve: BezierCurve>(curve: &Curve, point: &Curve::Point, estimated_t: f64) -> f64 {
    let w1          = curve.start_point();
    let (w2, w3)    = curve.control_points();
    let w4          = curve.end_point();

    let (d1, d2, d3)    = derivative4(w1, w2, w3, w4);
    let (dd1, dd2)      = derivative3(d1, d2, d3);

    let qt          = curve.point_at_pos(estimated_t);
    let qnt         = de_casteljau3(estimated_t, d1, d2, d3);
    let qnnt        = de_casteljau2(estimated_t, dd1, dd2);

    // One step of t = t - f(t)/f'(t) on the distance derivative
    let numerator   = (qt-*point).dot(&qnt);
    let denominator = qnt.dot(&qnt) + (qt-*point).dot(&qnnt);

    if denominator == 0.0 {
        estimated_t
    } else {
        estimated_t - (numerator/denominator)
    }
}
