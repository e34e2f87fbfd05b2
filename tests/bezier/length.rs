use bezier_query::*;
use bezier_query::bezier;
use bezier_query::line::*;

#[test]
fn length_of_a_straight_line() {
    let curve   = line_to_bezier::<_, bezier::Curve<Coord2>>(&(Coord2(0.0, 0.0), Coord2(10.0, 0.0)));
    let length  = bezier::curve_length(&curve, 0.01).unwrap();

    assert!((length-10.0).abs() < 0.01);
}

#[test]
fn length_never_undershoots_the_chord() {
    let curve   = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 10.0), Coord2(8.0, 10.0)), Coord2(10.0, 0.0));
    let length  = bezier::curve_length(&curve, 0.01).unwrap();

    // The curve is longer than the straight line between its endpoints
    assert!(length > 10.0);
}

#[test]
fn length_converges_as_tolerance_shrinks() {
    let curve           = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(4.0, 12.0), Coord2(8.0, -4.0)), Coord2(10.0, 5.0));

    let coarse_length   = bezier::curve_length(&curve, 0.1).unwrap();
    let fine_length     = bezier::curve_length(&curve, 0.0001).unwrap();

    // The polyline underestimates the curve, and less so at finer tolerances
    assert!(fine_length >= coarse_length);
    assert!((fine_length-coarse_length).abs() < 0.5);
}

#[test]
fn quarter_circle_length_matches_the_analytic_value() {
    let radius  = 10.0;
    let kappa   = 0.5522847498 * radius;
    let curve   = bezier::Curve::from_points(Coord2(radius, 0.0), (Coord2(radius, kappa), Coord2(kappa, radius)), Coord2(0.0, radius));

    let length  = bezier::curve_length(&curve, 0.0001).unwrap();
    let analytic = std::f64::consts::PI * radius / 2.0;

    assert!((length-analytic).abs() < 0.01);
}

#[test]
fn t_at_length_inverts_arc_length_on_a_line() {
    let curve = line_to_bezier::<_, bezier::Curve<Coord2>>(&(Coord2(0.0, 0.0), Coord2(10.0, 0.0)));

    let t = bezier::curve_t_at_length(&curve, 2.5, 0.01).unwrap();

    assert!((t-0.25).abs() < 0.01);
    assert!(curve.point_at_pos(t).distance_to(&Coord2(2.5, 0.0)) < 0.01);
}

#[test]
fn t_at_length_walks_monotonically_along_a_curve() {
    let curve       = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 10.0), Coord2(8.0, 10.0)), Coord2(10.0, 0.0));
    let length      = bezier::curve_length(&curve, 0.001).unwrap();

    let mut last_t  = 0.0;
    for x in 1..10 {
        let target  = length * (x as f64)/10.0;
        let t       = bezier::curve_t_at_length(&curve, target, 0.001).unwrap();

        assert!(t > last_t);
        last_t = t;
    }
}

#[test]
fn t_at_length_lands_at_the_measured_distance() {
    let curve       = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(4.0, 12.0), Coord2(8.0, -4.0)), Coord2(10.0, 5.0));
    let length      = bezier::curve_length(&curve, 0.0001).unwrap();

    let t           = bezier::curve_t_at_length(&curve, length/2.0, 0.0001).unwrap();
    let (left, _): (bezier::Curve<Coord2>, bezier::Curve<Coord2>) = curve.subdivide(t);

    let left_length = bezier::curve_length(&left, 0.0001).unwrap();

    assert!((left_length - length/2.0).abs() < 0.01);
}

#[test]
fn zero_length_is_the_start_of_the_curve() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 10.0), Coord2(8.0, 10.0)), Coord2(10.0, 0.0));

    let t = bezier::curve_t_at_length(&curve, 0.0, 0.01).unwrap();

    assert!(t == 0.0);
}

#[test]
fn full_length_is_the_end_of_the_curve() {
    let curve   = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 10.0), Coord2(8.0, 10.0)), Coord2(10.0, 0.0));
    let length  = bezier::curve_length(&curve, 0.01).unwrap();

    let t = bezier::curve_t_at_length(&curve, length, 0.01).unwrap();

    assert!((t-1.0).abs() < 0.01);
}

#[test]
fn negative_length_is_rejected() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 10.0), Coord2(8.0, 10.0)), Coord2(10.0, 0.0));

    assert!(bezier::curve_t_at_length(&curve, -1.0, 0.01).err() == Some(GeomError::InvalidParameter));
}

#[test]
fn length_beyond_the_curve_is_out_of_range() {
    let curve = line_to_bezier::<_, bezier::Curve<Coord2>>(&(Coord2(0.0, 0.0), Coord2(10.0, 0.0)));

    assert!(bezier::curve_t_at_length(&curve, 20.0, 0.01).err() == Some(GeomError::OutOfRange));
}
