#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_default_is_origin() {
    assert_eq!(Point::default(), Point::ORIGIN);
}

#[test]
fn top_left_offsets_by_half_size() {
    let corner = Point::new(100.0, 200.0).top_left_for(32.0);
    assert_eq!(corner, Point::new(84.0, 184.0));
}

#[test]
fn center_for_inverts_top_left_for() {
    let p = Point::new(17.5, -3.0);
    assert_eq!(p.top_left_for(8.0).center_for(8.0), p);
}

#[test]
fn zero_size_keeps_point() {
    let p = Point::new(5.0, 6.0);
    assert_eq!(p.top_left_for(0.0), p);
}
