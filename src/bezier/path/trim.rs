use super::path::*;
use super::to_curves::*;
use super::super::curve::*;
use super::super::subdivide::*;
use super::super::super::error::*;
use super::super::super::coordinate::*;

///
/// Cuts the section between two t values out of a curve's weights
///
fn section4<Point: Coordinate>((w1, w2, w3, w4): (Point, Point, Point, Point), t1: f64, t2: f64) -> (Point, Point, Point, Point) {
    if t1 >= 1.0 {
        // Degenerate section at the very end of the curve
        return (w4, w4, w4, w4);
    }

    let (_, from_t1)    = subdivide4(t1, w1, w2, w3, w4);
    let section_end     = (t2-t1) / (1.0-t1);
    let (section, _)    = subdivide4(section_end, from_t1.0, from_t1.1, from_t1.2, from_t1.3);

    section
}

///
/// Produces the part of a path between two (curve index, t value) positions as a new path
///
/// The positions must be in path order ('from' at or before 'to') and within the bounds of
/// the path; anything else is an `InvalidParameter` error.
///
pub fn path_trim<P: BezierPathFactory>(path: &P, from: (usize, f64), to: (usize, f64)) -> Result<P, GeomError> {
    let (from_segment, from_t)  = from;
    let (to_segment, to_t)      = to;

    if from_t < 0.0 || from_t > 1.0 || to_t < 0.0 || to_t > 1.0 {
        return Err(GeomError::InvalidParameter);
    }
    if from_segment > to_segment || (from_segment == to_segment && from_t > to_t) {
        return Err(GeomError::InvalidParameter);
    }

    let curves: Vec<Curve<P::Point>> = path_to_curves(path).collect();

    if to_segment >= curves.len() {
        return Err(GeomError::InvalidParameter);
    }

    // Collect the weights of the trimmed curves
    let mut sections = vec![];

    for segment in from_segment..(to_segment+1) {
        let curve           = &curves[segment];
        let (cp1, cp2)      = curve.control_points();
        let weights         = (curve.start_point(), cp1, cp2, curve.end_point());

        let section_start   = if segment == from_segment { from_t } else { 0.0 };
        let section_end     = if segment == to_segment { to_t } else { 1.0 };

        if section_start >= section_end {
            // Nothing left of this curve (can happen at the ends of the range)
            continue;
        }

        sections.push(section4(weights, section_start, section_end));
    }

    // An empty trim still needs a start point
    let start_point = sections.first()
        .map(|(w1, _, _, _)| *w1)
        .unwrap_or_else(|| curves[from_segment].point_at_pos(from_t));

    Ok(P::from_points(start_point, sections.into_iter().map(|(_, w2, w3, w4)| (w2, w3, w4))))
}
