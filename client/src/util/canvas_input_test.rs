use super::*;

#[test]
fn whole_sizes_pass_through() {
    assert_eq!(surface_dimensions(1280.0, 720.0), (1280, 720));
}

#[test]
fn fractional_sizes_are_floored() {
    assert_eq!(surface_dimensions(800.6, 600.2), (800, 600));
}

#[test]
fn degenerate_sizes_clamp_to_one_pixel() {
    assert_eq!(surface_dimensions(0.0, -20.0), (1, 1));
}

#[test]
fn nan_clamps_to_one_pixel() {
    assert_eq!(surface_dimensions(f64::NAN, 480.0), (1, 480));
}
