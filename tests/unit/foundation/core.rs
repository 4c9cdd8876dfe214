use super::*;

#[test]
fn fps_frame_duration_and_floor() {
    let fps = Fps::new(60, 1).unwrap();
    assert!((fps.frame_duration_ms() - 16.666_666).abs() < 1e-3);
    assert_eq!(fps.ms_to_frames_floor(1000.0), 60);
    assert_eq!(fps.ms_to_frames_floor(-5.0), 0);
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn viewport_rejects_degenerate_extents() {
    assert!(Viewport::new(1280.0, 720.0).is_ok());
    assert!(Viewport::new(0.0, 720.0).is_err());
    assert!(Viewport::new(1280.0, f64::NAN).is_err());
    assert_eq!(
        Viewport::new(10.0, 20.0).unwrap().rect(),
        Rect::new(0.0, 0.0, 10.0, 20.0)
    );
}

#[test]
fn with_opacity_scales_alpha_only() {
    let c = Rgba8::new(10, 20, 30, 200).with_opacity(0.5);
    assert_eq!(c, Rgba8::new(10, 20, 30, 100));
    assert_eq!(Rgba8::new(1, 2, 3, 255).with_opacity(f64::NAN).a, 0);
    assert_eq!(Rgba8::new(1, 2, 3, 255).with_opacity(7.0).a, 255);
}
