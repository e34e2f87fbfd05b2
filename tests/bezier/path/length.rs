use bezier_query::*;
use bezier_query::bezier::path::*;

#[test]
fn perimeter_of_a_square() {
    let path    = super::square_path();
    let length  = path_length(&path, 0.01).unwrap();

    assert!((length-40.0).abs() < 0.01);
}

#[test]
fn length_of_an_empty_path_is_zero() {
    let path: SimpleBezierPath = (Coord2(3.0, 4.0), vec![]);

    assert!(path_length(&path, 0.01).unwrap() == 0.0);
}

#[test]
fn length_to_segment_accumulates_whole_sides() {
    let path = super::square_path();

    assert!((path_length_to_segment(&path, 0, 0.01).unwrap()-10.0).abs() < 0.01);
    assert!((path_length_to_segment(&path, 2, 0.01).unwrap()-30.0).abs() < 0.01);
    assert!((path_length_to_segment(&path, 3, 0.01).unwrap()-40.0).abs() < 0.01);
}

#[test]
fn length_to_a_missing_segment_is_rejected() {
    let path = super::square_path();

    assert!(path_length_to_segment(&path, 4, 0.01).err() == Some(GeomError::InvalidParameter));
}

#[test]
fn distance_along_the_path_finds_the_right_segment() {
    let path = super::square_path();

    // 25 units along a square of side 10 is halfway along the third side
    let (segment, t) = path_t_at_length(&path, 25.0, 0.01).unwrap();

    assert!(segment == 2);
    assert!((t-0.5).abs() < 0.01);
}

#[test]
fn distance_zero_is_the_start_of_the_path() {
    let path = super::square_path();

    let (segment, t) = path_t_at_length(&path, 0.0, 0.01).unwrap();

    assert!(segment == 0);
    assert!(t == 0.0);
}

#[test]
fn full_distance_is_the_end_of_the_path() {
    let path            = super::square_path();
    let length          = path_length(&path, 0.001).unwrap();
    let (segment, t)    = path_t_at_length(&path, length, 0.001).unwrap();

    assert!(segment == 3);
    assert!((t-1.0).abs() < 0.01);
}

#[test]
fn distance_beyond_the_path_is_out_of_range() {
    let path = super::square_path();

    assert!(path_t_at_length(&path, 50.0, 0.01).err() == Some(GeomError::OutOfRange));
    assert!(path_t_at_length(&path, -1.0, 0.01).err() == Some(GeomError::InvalidParameter));
}
