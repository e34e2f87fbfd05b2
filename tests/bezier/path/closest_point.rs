use bezier_query::*;
use bezier_query::bezier::path::*;

#[test]
fn closest_point_on_the_nearest_side() {
    let path    = super::square_path();
    let closest = path_closest_point(&path, &Coord2(5.0, -3.0)).unwrap();

    assert!(closest.segment == 0);
    assert!(closest.pos.distance_to(&Coord2(5.0, 0.0)) < 0.001);
    assert!((closest.t-0.5).abs() < 0.001);
    assert!((closest.distance-3.0).abs() < 0.001);
}

#[test]
fn point_inside_the_square_matches_its_nearest_wall() {
    let path    = super::square_path();
    let closest = path_closest_point(&path, &Coord2(5.0, 8.0)).unwrap();

    // The top wall (segment 2) is 2 units away, nearer than any other side
    assert!(closest.segment == 2);
    assert!(closest.pos.distance_to(&Coord2(5.0, 10.0)) < 0.001);
    assert!((closest.distance-2.0).abs() < 0.001);
}

#[test]
fn point_on_the_path_is_at_distance_zero() {
    let path    = super::square_path();
    let closest = path_closest_point(&path, &Coord2(10.0, 5.0)).unwrap();

    assert!(closest.segment == 1);
    assert!(closest.distance < 0.001);
}

#[test]
fn closest_point_beats_every_sampled_point_on_the_path() {
    let path    = super::square_path();
    let point   = Coord2(13.0, 13.0);
    let closest = path_closest_point(&path, &point).unwrap();

    for curve in path_to_curves::<_, bezier::Curve<Coord2>>(&path) {
        for x in 0..=100 {
            let t = (x as f64)/100.0;
            assert!(closest.distance <= curve.point_at_pos(t).distance_to(&point) + 0.0001);
        }
    }
}

#[test]
fn empty_path_has_no_closest_point() {
    let path: SimpleBezierPath = (Coord2(3.0, 4.0), vec![]);

    assert!(path_closest_point(&path, &Coord2(0.0, 0.0)).err() == Some(GeomError::InvalidParameter));
}
