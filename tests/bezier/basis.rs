use bezier_query::bezier;

#[test]
fn basis_at_t0_is_w1() {
    assert!(bezier::basis(0.0, 2.0, 3.0, 4.0, 5.0) == 2.0);
}

#[test]
fn basis_at_t1_is_w4() {
    assert!(bezier::basis(1.0, 2.0, 3.0, 4.0, 5.0) == 5.0);
}

#[test]
fn basis_matches_de_casteljau() {
    for x in 0..100 {
        let t = (x as f64)/100.0;

        let from_basis          = bezier::basis(t, 2.0, 3.0, 4.0, 5.0);
        let from_de_casteljau   = bezier::de_casteljau4(t, 2.0, 3.0, 4.0, 5.0);

        assert!(crate::approx_equal(from_basis, from_de_casteljau));
    }
}

#[test]
fn coefficients_evaluate_the_curve() {
    let (a, b, c, d) = bezier::bezier_coefficients(0, &2.0, &3.0, &4.0, &5.0);

    for x in 0..100 {
        let t           = (x as f64)/100.0;
        let polynomial  = a*t*t*t + b*t*t + c*t + d;

        assert!(crate::approx_equal(polynomial, bezier::basis(t, 2.0, 3.0, 4.0, 5.0)));
    }
}
