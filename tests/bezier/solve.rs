use bezier_query::*;
use bezier_query::bezier;

#[test]
fn solve_basis_finds_the_original_t() {
    for x in 0..=10 {
        let t       = (x as f64)/10.0;
        let value   = bezier::basis(t, 2.0, 3.0, 4.0, 5.0);
        let roots   = bezier::solve_basis_for_t(2.0, 3.0, 4.0, 5.0, value);

        assert!(roots.iter().any(|root| crate::approx_equal(*root, t)));
    }
}

#[test]
fn solve_basis_ignores_values_off_the_curve() {
    // Monotonic basis from 2 to 5: 10 is never reached
    let roots = bezier::solve_basis_for_t(2.0, 3.0, 4.0, 5.0, 10.0);

    assert!(roots.len() == 0);
}

#[test]
fn solve_curve_finds_points_on_the_curve() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(4.0, 12.0), Coord2(8.0, -4.0)), Coord2(10.0, 5.0));

    for x in 0..=20 {
        let t       = (x as f64)/20.0;
        let point   = curve.point_at_pos(t);

        let solved = curve.t_for_point(&point);

        assert!(solved.is_some());
        assert!(curve.point_at_pos(solved.unwrap()).distance_to(&point) <= 0.05);
    }
}

#[test]
fn solve_curve_rejects_distant_points() {
    let curve = bezier::Curve::from_points(Coord2(0.0, 0.0), (Coord2(4.0, 12.0), Coord2(8.0, -4.0)), Coord2(10.0, 5.0));

    assert!(curve.t_for_point(&Coord2(40.0, 40.0)).is_none());
}
