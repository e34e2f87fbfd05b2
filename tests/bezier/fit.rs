use bezier_query::*;
use bezier_query::bezier;

#[test]
fn fitting_too_few_points_fails() {
    let points: Vec<Coord2> = vec![Coord2(1.0, 1.0)];

    let fit: Option<Vec<bezier::Curve<Coord2>>> = bezier::fit_curve(&points, 0.1);

    assert!(fit.is_none());
}

#[test]
fn two_points_fit_as_a_line() {
    let points = vec![Coord2(0.0, 0.0), Coord2(10.0, 5.0)];

    let fit: Vec<bezier::Curve<Coord2>> = bezier::fit_curve(&points, 0.1).unwrap();

    assert!(fit.len() == 1);
    assert!(fit[0].start_point() == Coord2(0.0, 0.0));
    assert!(fit[0].end_point() == Coord2(10.0, 5.0));
}

#[test]
fn points_sampled_from_a_curve_fit_back_within_tolerance() {
    let max_error   = 0.1;
    let curve       = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(2.0, 10.0), Coord2(8.0, 10.0)), Coord2(10.0, 0.0));

    let points: Vec<Coord2> = (0..=50).map(|x| curve.point_at_pos((x as f64)/50.0)).collect();

    let fit: Vec<bezier::Curve<Coord2>> = bezier::fit_curve(&points, max_error).unwrap();

    assert!(fit.len() >= 1);

    // Every sampled point must be within the error bound of the fitted curves
    for point in points.iter() {
        let closest = fit.iter()
            .map(|curve| bezier::nearest_point_on_curve(curve, point).2)
            .fold(f64::MAX, f64::min);

        assert!(closest <= max_error + 0.001);
    }
}

#[test]
fn fitted_curves_join_end_to_end() {
    // A right-angle polyline forces the fit to split into several curves
    let mut points = vec![];
    for x in 0..=20 { points.push(Coord2((x as f64)/2.0, 0.0)); }
    for y in 1..=20 { points.push(Coord2(10.0, (y as f64)/2.0)); }

    let fit: Vec<bezier::Curve<Coord2>> = bezier::fit_curve(&points, 0.05).unwrap();

    assert!(fit.len() >= 2);

    for window in fit.windows(2) {
        assert!(window[0].end_point().distance_to(&window[1].start_point()) < 0.0001);
    }

    assert!(fit[0].start_point().distance_to(&Coord2(0.0, 0.0)) < 0.0001);
    assert!(fit[fit.len()-1].end_point().distance_to(&Coord2(10.0, 10.0)) < 0.0001);
}
