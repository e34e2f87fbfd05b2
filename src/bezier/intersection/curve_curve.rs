use super::super::curve::*;
use super::super::basis::*;
use super::super::solve::*;
use super::super::subdivide::*;
use super::super::derivative::*;
use super::super::super::line::*;
use super::super::super::geo::*;
use super::super::super::error::*;
use super::super::super::consts::*;
use super::super::super::coordinate::*;

/// Intersections whose t values are closer than this on both curves are treated as duplicates
/// of the same crossing (this is also the separation needed to tell a self-intersection from
/// the trivial 't1 = t2' solution)
const MIN_T_SEPARATION: f64 = 0.01;

/// The four weights of a cubic bezier curve
type CurveWeights<Point> = (Point, Point, Point, Point);

///
/// A single crossing point between two bezier curves
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CurveIntersection<Point> {
    /// The t value of the crossing on the first curve
    pub t1: f64,

    /// The t value of the crossing on the second curve
    pub t2: f64,

    /// Where the crossing is
    pub pos: Point
}

///
/// Reads the weights out of a curve
///
#[inline]
fn curve_weights<C: BezierCurve>(curve: &C) -> CurveWeights<C::Point> {
    let (w2, w3) = curve.control_points();
    (curve.start_point(), w2, w3, curve.end_point())
}

///
/// The control-point hull bounds of a set of weights (fast, and never smaller than the curve)
///
#[inline]
fn weight_bounds<Point: Coordinate>(&(w1, w2, w3, w4): &CurveWeights<Point>) -> Bounds<Point> {
    Bounds::bounds_for_points(vec![w1, w2, w3, w4])
}

///
/// The length of a bounding box's diagonal (how 'big' a curve section is for accuracy purposes)
///
#[inline]
fn bounds_size<Point: Coordinate>(bounds: &Bounds<Point>) -> f64 {
    bounds.max().distance_to(&bounds.min())
}

///
/// Evaluates a curve's derivative vector from its weights
///
#[inline]
fn weights_tangent<Point: Coordinate>(&(w1, w2, w3, w4): &CurveWeights<Point>, t: f64) -> Point {
    let (d1, d2, d3) = derivative4(w1, w2, w3, w4);
    de_casteljau3(t, d1, d2, d3)
}

///
/// Simultaneously bisects two curves, pruning section pairs whose bounding boxes do not
/// overlap, and collects approximate intersections at the parameter midpoints of the
/// pairs that shrink below the accuracy threshold
///
/// The subdivision depth is capped so that numerically awkward input terminates with a
/// best-effort candidate rather than recursing forever.
///
fn bbox_intersect_candidates<Point: Coordinate>(curve1: (f64, f64, CurveWeights<Point>), curve2: (f64, f64, CurveWeights<Point>), accuracy: f64) -> Vec<(f64, f64)> {
    let mut candidates  = vec![];
    let mut pending     = vec![(curve1, curve2, 0)];

    while let Some(((t1_min, t1_max, w1), (t2_min, t2_max, w2), depth)) = pending.pop() {
        let bounds1 = weight_bounds(&w1);
        let bounds2 = weight_bounds(&w2);

        // Broad-phase rejection: sections that can't touch have no intersections
        if !bounds1.overlaps(&bounds2) {
            continue;
        }

        if (bounds_size(&bounds1) <= accuracy && bounds_size(&bounds2) <= accuracy) || depth >= MAX_SUBDIVISION_DEPTH {
            // Both sections have shrunk to the accuracy threshold (or we've run out of depth):
            // estimate the intersection at the centre of the two sections
            candidates.push(((t1_min+t1_max)*0.5, (t2_min+t2_max)*0.5));
            continue;
        }

        // Bisect both curves and test the four combinations of halves
        let (w1_left, w1_right) = subdivide4(0.5, w1.0, w1.1, w1.2, w1.3);
        let (w2_left, w2_right) = subdivide4(0.5, w2.0, w2.1, w2.2, w2.3);

        let t1_mid = (t1_min+t1_max)*0.5;
        let t2_mid = (t2_min+t2_max)*0.5;

        pending.push(((t1_min, t1_mid, w1_left), (t2_min, t2_mid, w2_left), depth+1));
        pending.push(((t1_min, t1_mid, w1_left), (t2_mid, t2_max, w2_right), depth+1));
        pending.push(((t1_mid, t1_max, w1_right), (t2_min, t2_mid, w2_left), depth+1));
        pending.push(((t1_mid, t1_max, w1_right), (t2_mid, t2_max, w2_right), depth+1));
    }

    candidates
}

///
/// Improves an estimated intersection between two curves using Newton-Raphson iteration
/// on the vector difference `curve1(t1) - curve2(t2)`
///
/// Returns `NoConvergence` if the residual has not shrunk below the accuracy within the
/// iteration budget: the caller can retry with a looser tolerance or keep the estimate
/// it already has.
///
pub fn refine_intersection<C: BezierCurve>(curve1: &C, curve2: &C, estimate: (f64, f64), accuracy: f64) -> Result<(f64, f64), GeomError>
where C::Point: Coordinate2D {
    let w1              = curve_weights(curve1);
    let w2              = curve_weights(curve2);
    let (mut t1, mut t2) = estimate;

    for _iteration in 0..MAX_REFINE_STEPS {
        let p1          = basis(t1, w1.0, w1.1, w1.2, w1.3);
        let p2          = basis(t2, w2.0, w2.1, w2.2, w2.3);
        let residual    = p1 - p2;

        if residual.magnitude() <= accuracy*0.001 {
            return Ok((t1, t2));
        }

        // Solve the 2x2 Jacobian [curve1'(t1), -curve2'(t2)] for the Newton step
        let d1          = weights_tangent(&w1, t1);
        let d2          = weights_tangent(&w2, t2);

        let determinant = d2.x()*d1.y() - d1.x()*d2.y();
        if determinant.abs() < 1e-12 {
            // Tangent curves have a singular Jacobian here: Newton can't proceed
            return Err(GeomError::NoConvergence);
        }

        let step1       = (d2.y()*residual.x() - d2.x()*residual.y()) / determinant;
        let step2       = (d1.y()*residual.x() - d1.x()*residual.y()) / determinant;

        t1 += step1;
        t2 += step2;

        // Keep the estimate on the curves
        t1 = t1.max(0.0).min(1.0);
        t2 = t2.max(0.0).min(1.0);

        if step1.abs() < 1e-14 && step2.abs() < 1e-14 {
            // Stalled against the ends of the parameter range
            break;
        }
    }

    // Accept whatever we converged to if it's within the overall accuracy
    let p1          = basis(t1, w1.0, w1.1, w1.2, w1.3);
    let p2          = basis(t2, w2.0, w2.1, w2.2, w2.3);

    if (p1-p2).magnitude() <= accuracy {
        Ok((t1, t2))
    } else {
        Err(GeomError::NoConvergence)
    }
}

///
/// Detects the case where two curves are collinear along the same line and overlap
///
/// Such a pair intersects over a continuous range rather than at isolated points, so
/// (as an approximation) a single representative intersection in the middle of the
/// shared range is reported instead of an unbounded continuum.
///
fn collinear_overlap<C: BezierCurve>(curve1: &C, curve2: &C) -> Option<Vec<CurveIntersection<C::Point>>>
where C::Point: Coordinate2D {
    let (w1, w2, w3, w4)        = curve_weights(curve1);
    let (v1, v2, v3, v4)        = curve_weights(curve2);

    let baseline                = (w1, w4);
    let (a, b, c)               = line_coefficients_2d(&baseline);

    if (a, b, c) == (0.0, 0.0, 0.0) {
        // First curve is a point, not a line
        return None;
    }

    // Every weight of both curves must sit on the same line
    let on_line = |p: &C::Point| (a*p.x() + b*p.y() + c).abs() < SMALL_DISTANCE;

    if !(on_line(&w2) && on_line(&w3) && on_line(&v1) && on_line(&v2) && on_line(&v3) && on_line(&v4)) {
        return None;
    }

    // Project both curves onto the line and look for a shared range
    let direction   = (w4-w1).to_unit_vector();
    let project     = |p: &C::Point| (*p-w1).dot(&direction);

    let len1        = project(&w4);
    let (s1, s2)    = (project(&v1), project(&v4));
    let (lo2, hi2)  = if s1 < s2 { (s1, s2) } else { (s2, s1) };

    let overlap_min = lo2.max(0.0);
    let overlap_max = hi2.min(len1);

    if overlap_min > overlap_max + SMALL_DISTANCE {
        // Collinear but disjoint
        return Some(vec![]);
    }

    // Report the middle of the shared range as the representative intersection
    let middle      = (overlap_min + overlap_max) * 0.5;
    let pos         = w1 + direction*middle;

    let t1          = solve_curve_for_t(curve1, &pos).unwrap_or(if len1 > 0.0 { (middle/len1).max(0.0).min(1.0) } else { 0.0 });
    let t2          = solve_curve_for_t(curve2, &pos).unwrap_or(0.0);
    let pos         = curve1.point_at_pos(t1);

    Some(vec![CurveIntersection { t1: t1, t2: t2, pos: pos }])
}

///
/// Refines a set of candidate intersections and removes the duplicates that the
/// box subdivision produces around each crossing
///
fn refine_candidates<C: BezierCurve>(curve1: &C, curve2: &C, candidates: Vec<(f64, f64)>, accuracy: f64) -> Vec<CurveIntersection<C::Point>>
where C::Point: Coordinate2D {
    let mut intersections: Vec<CurveIntersection<C::Point>> = vec![];

    for (t1, t2) in candidates {
        // Newton tightens the estimate when it can; the subdivision estimate already
        // satisfies the accuracy contract when it can't
        let (t1, t2)    = refine_intersection(curve1, curve2, (t1, t2), accuracy).unwrap_or((t1, t2));
        let pos         = curve1.point_at_pos(t1);

        let is_duplicate = intersections.iter().any(|existing|
            (existing.t1-t1).abs() < MIN_T_SEPARATION && (existing.t2-t2).abs() < MIN_T_SEPARATION);

        if !is_duplicate {
            intersections.push(CurveIntersection { t1: t1, t2: t2, pos: pos });
        }
    }

    intersections.sort_by(|first, second| first.t1.partial_cmp(&second.t1).unwrap_or(std::cmp::Ordering::Equal));
    intersections
}

///
/// Determines the points at which two bezier curves intersect, to within the specified accuracy
///
/// Uses simultaneous bounding-box subdivision to find candidate crossings, then Newton-Raphson
/// refinement to tighten each one. Collinear overlapping curves produce a single representative
/// intersection rather than a continuum.
///
pub fn curve_intersects_curve<C: BezierCurve>(curve1: &C, curve2: &C, accuracy: f64) -> Result<Vec<CurveIntersection<C::Point>>, GeomError>
where C::Point: Coordinate2D {
    if !(accuracy > 0.0) {
        return Err(GeomError::InvalidParameter);
    }

    // Overlapping collinear curves would generate an unbounded number of candidates
    if let Some(overlap) = collinear_overlap(curve1, curve2) {
        return Ok(overlap);
    }

    let candidates = bbox_intersect_candidates(
        (0.0, 1.0, curve_weights(curve1)),
        (0.0, 1.0, curve_weights(curve2)),
        accuracy);

    Ok(refine_candidates(curve1, curve2, candidates, accuracy))
}

///
/// Splits a curve in two and gathers candidate crossings between separated sections of it
///
fn self_intersect_candidates<Point: Coordinate>(weights: CurveWeights<Point>, t_min: f64, t_max: f64, depth: usize, accuracy: f64, candidates: &mut Vec<(f64, f64)>) {
    if depth >= MAX_SUBDIVISION_DEPTH {
        return;
    }

    // A section too small to contain a separated crossing needs no further searching
    if bounds_size(&weight_bounds(&weights)) <= accuracy || (t_max-t_min) < 1e-4 {
        return;
    }

    let (left, right)   = subdivide4(0.5, weights.0, weights.1, weights.2, weights.3);
    let t_mid           = (t_min+t_max)*0.5;

    // A self-intersection always straddles some bisection point, so testing left against
    // right at every level finds it; the two halves share the junction point, which shows
    // up as candidates with t1 ~ t2 and is filtered out later
    candidates.extend(bbox_intersect_candidates((t_min, t_mid, left), (t_mid, t_max, right), accuracy));

    self_intersect_candidates(left, t_min, t_mid, depth+1, accuracy, candidates);
    self_intersect_candidates(right, t_mid, t_max, depth+1, accuracy, candidates);
}

///
/// Finds the points where a curve crosses itself, to within the specified accuracy
///
/// The trivial solutions (where t1 and t2 are the same point on the curve) are excluded;
/// a simple arc that never crosses itself produces an empty result.
///
pub fn curve_self_intersections<C: BezierCurve>(curve: &C, accuracy: f64) -> Result<Vec<CurveIntersection<C::Point>>, GeomError>
where C::Point: Coordinate2D {
    if !(accuracy > 0.0) {
        return Err(GeomError::InvalidParameter);
    }

    let mut candidates = vec![];
    self_intersect_candidates(curve_weights(curve), 0.0, 1.0, 0, accuracy, &mut candidates);

    // Remove the trivial diagonal before refinement (junction points between
    // neighbouring sections are not crossings)
    candidates.retain(|(t1, t2)| (t2-t1).abs() >= MIN_T_SEPARATION);

    let mut intersections = refine_candidates(curve, curve, candidates, accuracy);
    intersections.retain(|intersection| (intersection.t2-intersection.t1).abs() >= MIN_T_SEPARATION);

    Ok(intersections)
}
