use super::super::geo::*;
use super::super::coordinate::*;

///
/// Represents a straight line segment between two points
///
pub trait Line : Geo {
    ///
    /// Creates a new line from its start and end points
    ///
    fn from_points(start: Self::Point, end: Self::Point) -> Self;

    ///
    /// Returns the start and end points of this line
    ///
    fn points(&self) -> (Self::Point, Self::Point);

    ///
    /// Given a value 't' from 0 to 1, returns the point at that position along the line
    ///
    fn point_at_pos(&self, t: f64) -> Self::Point {
        let (start, end) = self.points();

        start + (end-start)*t
    }
}

impl<Point: Coordinate+Clone> Geo for (Point, Point) {
    type Point = Point;
}

///
/// A tuple of two points is the simplest representation of a line
///
impl<Point: Coordinate+Clone> Line for (Point, Point) {
    #[inline]
    fn from_points(start: Self::Point, end: Self::Point) -> Self {
        (start, end)
    }

    #[inline]
    fn points(&self) -> (Self::Point, Self::Point) {
        self.clone()
    }
}
