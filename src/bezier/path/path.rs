use super::super::super::geo::*;
use super::super::super::consts::*;
use super::super::super::coordinate::*;

///
/// Trait representing a path made out of bezier sections
///
/// The engine never owns a path: it's an immutable view over data supplied by the caller
/// for the duration of a query.
///
pub trait BezierPath : Geo+Clone+Sized {
    /// Type of an iterator over the points in this path. This tuple contains the points
    /// ordered as a hull: ie, two control points followed by a point on the curve
    type PointIter: Iterator<Item=(Self::Point, Self::Point, Self::Point)>;

    ///
    /// Retrieves the initial point of this path
    ///
    fn start_point(&self) -> Self::Point;

    ///
    /// Retrieves an iterator over the points in this path
    ///
    fn points(&self) -> Self::PointIter;
}

///
/// Trait implemented by paths that can be constructed from points
///
pub trait BezierPathFactory : BezierPath {
    ///
    /// Creates a new instance of this path from a set of points
    ///
    fn from_points<FromIter: IntoIterator<Item=(Self::Point, Self::Point, Self::Point)>>(start_point: Self::Point, points: FromIter) -> Self;
}

///
/// The simplest bezier path type: a start point and a list of (control point, control point,
/// end point) triples
///
pub type SimpleBezierPath = (Coord2, Vec<(Coord2, Coord2, Coord2)>);

impl<Point: Coordinate+Clone> Geo for (Point, Vec<(Point, Point, Point)>) {
    type Point = Point;
}

impl<Point: Coordinate+Clone> BezierPath for (Point, Vec<(Point, Point, Point)>) {
    type PointIter = ::std::vec::IntoIter<(Point, Point, Point)>;

    fn start_point(&self) -> Point {
        self.0
    }

    fn points(&self) -> Self::PointIter {
        self.1.clone().into_iter()
    }
}

impl<Point: Coordinate+Clone> BezierPathFactory for (Point, Vec<(Point, Point, Point)>) {
    fn from_points<FromIter: IntoIterator<Item=(Point, Point, Point)>>(start_point: Point, points: FromIter) -> Self {
        (start_point, points.into_iter().collect())
    }
}

///
/// Returns the final point of a path (the start point when the path has no curves)
///
pub fn path_last_point<P: BezierPath>(path: &P) -> P::Point {
    path.points().last()
        .map(|(_cp1, _cp2, end_point)| end_point)
        .unwrap_or_else(|| path.start_point())
}

///
/// True if the path is closed (its final point coincides with its start point)
///
pub fn path_is_closed<P: BezierPath>(path: &P) -> bool {
    if let Some((_cp1, _cp2, last_point)) = path.points().last() {
        last_point.distance_to(&path.start_point()) < SMALL_DISTANCE
    } else {
        // A path with no curves in it is never closed
        false
    }
}
