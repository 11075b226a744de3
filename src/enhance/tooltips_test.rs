use super::*;

#[test]
fn tooltip_position_centers_above_the_trigger() {
    let (x, y) = tooltip_position(100.0, 80.0, 40.0);
    assert!((x - 120.0).abs() < f64::EPSILON);
    assert!((y - 70.0).abs() < f64::EPSILON);
}

#[test]
fn tooltip_position_clamps_to_the_viewport_gutter() {
    let (x, y) = tooltip_position(-30.0, 4.0, 10.0);
    assert!((x - GUTTER_PX).abs() < f64::EPSILON);
    assert!((y - GUTTER_PX).abs() < f64::EPSILON);
}

#[test]
fn popover_position_sits_below_the_trigger() {
    let (x, y) = popover_position(100.0, 130.0, 40.0);
    assert!((x - 120.0).abs() < f64::EPSILON);
    assert!((y - 140.0).abs() < f64::EPSILON);
}

#[test]
fn popover_position_clamps_horizontally_only() {
    let (x, y) = popover_position(-50.0, 20.0, 10.0);
    assert!((x - GUTTER_PX).abs() < f64::EPSILON);
    assert!((y - 30.0).abs() < f64::EPSILON);
}
