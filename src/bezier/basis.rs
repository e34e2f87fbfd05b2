use super::super::coordinate::*;

///
/// de Casteljau's algorithm for lines
///
#[inline]
pub fn de_casteljau2<Point: Coordinate>(t: f64, w1: Point, w2: Point) -> Point {
    w1*(1.0-t) + w2*t
}

///
/// de Casteljau's algorithm for quadratic bezier curves
///
#[inline]
pub fn de_casteljau3<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point) -> Point {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);

    de_casteljau2(t, wn1, wn2)
}

///
/// de Casteljau's algorithm for cubic bezier curves
///
#[inline]
pub fn de_casteljau4<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let wn1 = de_casteljau2(t, w1, w2);
    let wn2 = de_casteljau2(t, w2, w3);
    let wn3 = de_casteljau2(t, w3, w4);

    de_casteljau3(t, wn1, wn2, wn3)
}

///
/// The cubic bezier weighted basis function
///
#[inline]
pub fn basis<Point: Coordinate>(t: f64, w1: Point, w2: Point, w3: Point, w4: Point) -> Point {
    let t_squared           = t*t;
    let t_cubed             = t_squared*t;

    let one_minus_t         = 1.0-t;
    let one_minus_t_squared = one_minus_t*one_minus_t;
    let one_minus_t_cubed   = one_minus_t_squared*one_minus_t;

    w1*one_minus_t_cubed
        + w2*(3.0*one_minus_t_squared*t)
        + w3*(3.0*one_minus_t*t_squared)
        + w4*t_cubed
}

///
/// Computes the polynomial coefficients (a, b, c, d) for a single dimension of a cubic
/// bezier curve, such that the curve component is `a*t^3 + b*t^2 + c*t + d`
///
#[inline]
pub fn bezier_coefficients<Point: Coordinate>(dimension: usize, w1: &Point, w2: &Point, w3: &Point, w4: &Point) -> (f64, f64, f64, f64) {
    let p1 = w1.get(dimension);
    let p2 = w2.get(dimension);
    let p3 = w3.get(dimension);
    let p4 = w4.get(dimension);

    (
        -p1 + p2*3.0 - p3*3.0 + p4,
        p1*3.0 - p2*6.0 + p3*3.0,
        p1*-3.0 + p2*3.0,
        p1
    )
}
