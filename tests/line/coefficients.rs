use bezier_query::*;
use bezier_query::line::*;

#[test]
fn points_on_line_satisfy_the_equation() {
    let line        = (Coord2(2.0, 3.0), Coord2(7.0, 6.0));
    let (a, b, c)   = line_coefficients_2d(&line);

    for t in 0..=16 {
        let t       = (t as f64) / 16.0;
        let point   = line.point_at_pos(t);

        assert!((a*point.x() + b*point.y() + c).abs() < 0.001);
    }
}

#[test]
fn reversed_line_satisfies_the_equation_too() {
    let line        = (Coord2(7.0, 6.0), Coord2(2.0, 3.0));
    let (a, b, c)   = line_coefficients_2d(&line);

    for t in 0..=16 {
        let t       = (t as f64) / 16.0;
        let point   = line.point_at_pos(t);

        assert!((a*point.x() + b*point.y() + c).abs() < 0.001);
    }
}

#[test]
fn coefficients_are_normalised() {
    let line        = (Coord2(2.0, 3.0), Coord2(7.0, 6.0));
    let (a, b, _c)  = line_coefficients_2d(&line);

    assert!((a*a + b*b - 1.0).abs() < 0.0001);
}

#[test]
fn degenerate_line_has_zero_coefficients() {
    let line = (Coord2(4.0, 5.0), Coord2(4.0, 5.0));

    assert!(line_coefficients_2d(&line) == (0.0, 0.0, 0.0));
}

#[test]
fn distance_is_measured_perpendicular_to_the_line() {
    let line = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));

    assert!((line_distance_to_point(&line, &Coord2(5.0, 3.0)) - 3.0).abs() < 0.0001);
    assert!((line_distance_to_point(&line, &Coord2(5.0, -3.0)) - 3.0).abs() < 0.0001);
    assert!(line_distance_to_point(&line, &Coord2(5.0, 0.0)) < 0.0001);
}
