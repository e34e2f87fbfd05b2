use bezier_query::*;
use bezier_query::line::*;

mod coefficients;

#[test]
fn points_at_ends_of_line() {
    let line = (Coord2(2.0, 3.0), Coord2(7.0, 6.0));

    assert!(line.point_at_pos(0.0) == Coord2(2.0, 3.0));
    assert!(line.point_at_pos(1.0) == Coord2(7.0, 6.0));
}

#[test]
fn midpoint_of_line() {
    let line = (Coord2(2.0, 3.0), Coord2(8.0, 7.0));

    assert!(line.point_at_pos(0.5).distance_to(&Coord2(5.0, 5.0)) < 0.0001);
}

#[test]
fn line_from_points_round_trips() {
    let line: (Coord2, Coord2) = Line::from_points(Coord2(1.0, 2.0), Coord2(3.0, 4.0));

    assert!(line.points() == (Coord2(1.0, 2.0), Coord2(3.0, 4.0)));
}
