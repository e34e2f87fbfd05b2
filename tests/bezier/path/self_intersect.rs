use bezier_query::*;
use bezier_query::bezier::path::*;

#[test]
fn square_has_no_self_intersections() {
    let path        = super::square_path();
    let crossings   = path_self_intersections(&path, 0.01).unwrap();

    assert!(crossings.len() == 0);
}

#[test]
fn bowtie_crosses_itself_once() {
    // The sides of this closed path cross in the middle
    let path = BezierPathBuilder::<SimpleBezierPath>::start(Coord2(0.0, 0.0))
        .line_to(Coord2(10.0, 10.0))
        .line_to(Coord2(10.0, 0.0))
        .line_to(Coord2(0.0, 10.0))
        .line_to(Coord2(0.0, 0.0))
        .build();

    let crossings = path_self_intersections(&path, 0.01).unwrap();

    assert!(crossings.len() == 1);
    assert!(crossings[0].segment1.0 == 0);
    assert!(crossings[0].segment2.0 == 2);
    assert!(crossings[0].pos.distance_to(&Coord2(5.0, 5.0)) < 0.01);
    assert!((crossings[0].segment1.1-0.5).abs() < 0.01);
    assert!((crossings[0].segment2.1-0.5).abs() < 0.01);
}

#[test]
fn shared_endpoints_do_not_count_as_crossings() {
    // An open zig-zag: consecutive segments touch only at their shared points
    let path = BezierPathBuilder::<SimpleBezierPath>::start(Coord2(0.0, 0.0))
        .line_to(Coord2(10.0, 10.0))
        .line_to(Coord2(20.0, 0.0))
        .line_to(Coord2(30.0, 10.0))
        .build();

    let crossings = path_self_intersections(&path, 0.01).unwrap();

    assert!(crossings.len() == 0);
}

#[test]
fn looping_segment_is_reported_against_itself() {
    // A single curve that loops over itself, crossing at (5, 3)
    let path = BezierPathBuilder::<SimpleBezierPath>::start(Coord2(0.0, 0.0))
        .curve_to((Coord2(20.0, 10.0), Coord2(-10.0, 10.0)), Coord2(10.0, 0.0))
        .build();

    let crossings = path_self_intersections(&path, 0.01).unwrap();

    assert!(crossings.len() == 1);
    assert!(crossings[0].segment1.0 == 0);
    assert!(crossings[0].segment2.0 == 0);
    assert!(crossings[0].pos.distance_to(&Coord2(5.0, 3.0)) < 0.01);
}

#[test]
fn crossings_are_ordered_along_the_path() {
    // The tail of this shape dives below the baseline and back up through the right wall
    let path = BezierPathBuilder::<SimpleBezierPath>::start(Coord2(0.0, 0.0))
        .line_to(Coord2(10.0, 0.0))
        .line_to(Coord2(10.0, 6.0))
        .line_to(Coord2(0.0, 6.0))
        .line_to(Coord2(5.0, -5.0))
        .line_to(Coord2(12.0, 3.0))
        .build();

    let crossings = path_self_intersections(&path, 0.01).unwrap();

    // Segment 3 crosses the baseline once and segment 4 crosses it and the right wall
    assert!(crossings.len() == 3);

    for window in crossings.windows(2) {
        assert!(window[0].segment1.0 <= window[1].segment1.0);
    }

    assert!(crossings[0].segment1.0 == 0 && crossings[0].segment2.0 == 3);
    assert!(crossings[1].segment1.0 == 0 && crossings[1].segment2.0 == 4);
    assert!(crossings[2].segment1.0 == 1 && crossings[2].segment2.0 == 4);
}

#[test]
fn invalid_accuracy_is_rejected() {
    let path = super::square_path();

    assert!(path_self_intersections(&path, 0.0).err() == Some(GeomError::InvalidParameter));
}
