use egui::Pos2;
use kinelab::{GridTransform, Vec2, ViewLayout};

#[test]
fn to_surface_is_exact() {
    let tf = GridTransform::new(20.0, 250.0);
    let p = tf.to_surface(Vec2::new(3.0, -2.0), 250.0);
    assert_eq!(p, Pos2::new(310.0, 290.0));
}

#[test]
fn y_axis_is_inverted() {
    let tf = GridTransform::new(20.0, 250.0);
    let up = tf.to_surface(Vec2::new(0.0, 1.0), 250.0);
    let down = tf.to_surface(Vec2::new(0.0, -1.0), 250.0);
    assert!(up.y < down.y, "physical up must be pixel up");
}

#[test]
fn round_trip_quantizes_to_integer_units() {
    let tf = GridTransform::new(20.0, 250.0);
    for &(x, y) in &[
        (0.0, 0.0),
        (1.0, 0.0),
        (-3.0, 7.0),
        (2.4, -1.6),
        (0.49, 0.51),
    ] {
        let v = Vec2::new(x, y);
        let back = tf.to_grid(tf.to_surface(v, 140.0), 140.0);
        assert_eq!(back, v.round(), "round trip of ({x}, {y})");
    }
}

#[test]
fn to_grid_rounds_off_grid_pixels() {
    let tf = GridTransform::new(20.0, 250.0);
    // 9 px right of a gridline rounds down, 11 px rounds up.
    assert_eq!(tf.to_grid(Pos2::new(279.0, 250.0), 250.0).x, 1.0);
    assert_eq!(tf.to_grid(Pos2::new(281.0, 250.0), 250.0).x, 2.0);
}

#[test]
fn derived_origin_snaps_onto_gridline() {
    let layout = ViewLayout::default();
    let origin_y = layout.derived_origin_y();
    assert_eq!(origin_y, 140.0);
    assert_eq!(origin_y % layout.grid_size, 0.0);
}
