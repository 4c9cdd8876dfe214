use super::*;

fn settle(s: &mut MotionSmoother, cfg: &CursorConfig) {
    for _ in 0..300 {
        s.step(1.0 / 60.0, cfg.integration);
    }
}

#[test]
fn starts_offscreen_at_base_size_and_transparent() {
    let cfg = CursorConfig::default();
    let s = MotionSmoother::new(&cfg);
    assert_eq!(s.dot(), Point::new(-200.0, -200.0));
    assert_eq!(s.reticle(), Point::new(-200.0, -200.0));
    assert_eq!(s.reticle_size(), 82.0);
    assert_eq!(s.backdrop_opacity(), 0.0);
    assert_eq!(s.outline_width(), 0.5);
}

#[test]
fn springs_converge_to_their_targets() {
    let cfg = CursorConfig::default();
    let mut s = MotionSmoother::new(&cfg);
    s.target_dot(Point::new(400.0, 300.0));
    s.target_reticle(Point::new(420.0, 310.0));
    s.target_reticle_size(196.0);
    s.target_backdrop_opacity(0.55);
    settle(&mut s, &cfg);
    assert_eq!(s.dot(), Point::new(400.0, 300.0));
    assert_eq!(s.reticle(), Point::new(420.0, 310.0));
    assert_eq!(s.reticle_size(), 196.0);
    assert!((s.backdrop_opacity() - 0.55).abs() < 1e-9);
}

#[test]
fn cue_priorities_pressed_over_hover() {
    let cfg = CursorConfig::default();
    let mut s = MotionSmoother::new(&cfg);

    s.target_cues(
        CueState {
            pressed: true,
            hovering: true,
        },
        &cfg,
    );
    settle(&mut s, &cfg);
    assert!((s.dot_scale() - 0.65).abs() < 1e-6);
    assert!((s.reticle_scale() - 0.9).abs() < 1e-6);
    assert!((s.dot_opacity() - 0.85).abs() < 1e-6);
    assert!((s.outline_width() - 1.5).abs() < 1e-6);

    s.target_cues(
        CueState {
            pressed: false,
            hovering: true,
        },
        &cfg,
    );
    settle(&mut s, &cfg);
    assert!((s.dot_scale() - 0.75).abs() < 1e-6);
    assert!((s.reticle_scale() - 1.1).abs() < 1e-6);

    s.target_cues(
        CueState {
            pressed: false,
            hovering: false,
        },
        &cfg,
    );
    settle(&mut s, &cfg);
    assert!((s.dot_scale() - 1.0).abs() < 1e-6);
    assert!((s.dot_opacity() - 1.0).abs() < 1e-6);
    assert!((s.outline_width() - 0.5).abs() < 1e-6);
}

#[test]
fn opacity_targets_are_clamped() {
    let cfg = CursorConfig::default();
    let mut s = MotionSmoother::new(&cfg);
    s.target_backdrop_opacity(3.0);
    assert_eq!(s.backdrop_opacity_target(), 1.0);
    s.target_backdrop_opacity(-1.0);
    assert_eq!(s.backdrop_opacity_target(), 0.0);
}
