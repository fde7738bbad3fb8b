use pointer::platform::ScreenInfo;
use pointer::resolve_screen_index;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn screen(index: usize, x: i32, y: i32, scale_factor: f32, is_primary: bool) -> ScreenInfo {
    ScreenInfo {
        index,
        name: String::from("TEST"),
        x,
        y,
        width: 2560,
        height: 1440,
        scale_factor,
        is_primary,
    }
}

#[test]
fn resolve_keeps_valid_index() {
    assert_eq!(resolve_screen_index(1, 3), Some(1));
}

#[test]
fn resolve_clamps_to_last_screen() {
    assert_eq!(resolve_screen_index(5, 2), Some(1));
}

#[test]
fn resolve_without_screens_is_none() {
    assert_eq!(resolve_screen_index(0, 0), None);
    assert_eq!(resolve_screen_index(3, 0), None);
}

#[test]
fn to_local_subtracts_origin() {
    let s = screen(1, 2560, -200, 1.0, false);
    assert_eq!(s.to_local((2600, 100)), (40, 300));
}

#[test]
fn to_local_can_go_negative_off_screen() {
    let s = screen(1, 2560, 0, 1.0, false);
    assert_eq!(s.to_local((100, 100)), (-2460, 100));
}

#[test]
fn label_is_one_based() {
    assert_eq!(screen(0, 0, 0, 1.0, false).label(), "Monitor 1");
    assert_eq!(screen(2, 0, 0, 1.0, false).label(), "Monitor 3");
}

#[test]
fn label_marks_primary() {
    assert_eq!(screen(0, 0, 0, 1.0, true).label(), "Monitor 1 (primary)");
}

#[test]
fn invalid_scale_factor_means_one_pixel_per_point() {
    let s = screen(0, 0, 0, 0.0, true);
    assert!(approx_eq(s.pixels_per_point(), 1.0));
    assert_eq!(s.size_points(), [2560.0, 1440.0]);
}

#[cfg(not(target_os = "macos"))]
#[test]
fn scaled_display_converts_to_points() {
    let s = screen(1, 2560, 0, 2.0, false);
    assert!(approx_eq(s.pixels_per_point(), 2.0));
    assert_eq!(s.origin_points(), [1280.0, 0.0]);
    assert_eq!(s.size_points(), [1280.0, 720.0]);
}

#[cfg(target_os = "macos")]
#[test]
fn macos_geometry_is_already_in_points() {
    let s = screen(1, 1440, 0, 2.0, false);
    assert!(approx_eq(s.pixels_per_point(), 1.0));
    assert_eq!(s.origin_points(), [1440.0, 0.0]);
}
