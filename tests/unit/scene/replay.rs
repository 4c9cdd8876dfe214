use super::*;
use crate::scene::model::ScriptStep;

fn scene() -> Scene {
    Scene::from_json_str(
        r#"{
      "viewport": { "width": 640, "height": 480 },
      "duration_ms": 2000,
      "elements": [
        {
          "id": "button",
          "rect": { "left": 300, "top": 200, "width": 120, "height": 40 },
          "attrs": { "data-cursor-target": "", "data-cursor-padding": "20", "data-cursor-text": "Go" },
          "children": [
            { "id": "icon", "rect": { "left": 310, "top": 210, "width": 20, "height": 20 } }
          ]
        }
      ],
      "script": [
        { "at_ms": 0, "type": "move", "x": 50, "y": 50 },
        { "at_ms": 500, "type": "move", "x": 350, "y": 220 },
        { "at_ms": 600, "type": "move", "x": 315, "y": 215 },
        { "at_ms": 700, "type": "move", "x": 400, "y": 230 },
        { "at_ms": 1200, "type": "move", "x": 100, "y": 400 },
        { "at_ms": 1800, "type": "leave" }
      ]
    }"#,
    )
    .unwrap()
}

fn at(frames: &[ReplayFrame], t_ms: f64) -> &ReplayFrame {
    frames
        .iter()
        .rev()
        .find(|f| f.time_ms <= t_ms)
        .unwrap()
}

#[test]
fn frame_count_covers_duration() {
    let r = Replay::new(scene(), CursorConfig::default()).unwrap();
    assert_eq!(r.frame_count(), 121);
    let frames = r.run().unwrap();
    assert_eq!(frames.len(), 121);
    assert_eq!(frames[0].index, FrameIndex(0));
    assert!((frames[120].time_ms - 2000.0).abs() < 1e-9);
}

#[test]
fn hover_is_synthesized_from_hit_testing() {
    let frames = replay(&scene(), &CursorConfig::default()).unwrap();
    let button = NodeId(1);

    assert_eq!(at(&frames, 400.0).cursor.as_ref().unwrap().target, None);
    for t in [520.0, 650.0, 1100.0] {
        let f = at(&frames, t).cursor.as_ref().unwrap();
        assert_eq!(f.target, Some(button), "at {t} ms");
        assert!(f.label.is_some());
    }
    let settled = at(&frames, 1150.0).cursor.as_ref().unwrap();
    assert!((settled.reticle.diameter - 140.0).abs() < 0.5);
    assert!((settled.reticle.center.x - 360.0).abs() < 0.5);

    assert_eq!(at(&frames, 1300.0).cursor.as_ref().unwrap().target, None);
    assert!(at(&frames, 1900.0).cursor.is_none());
}

#[test]
fn replay_is_deterministic() {
    let a = replay(&scene(), &CursorConfig::default()).unwrap();
    let b = replay(&scene(), &CursorConfig::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn run_until_stops_at_requested_time() {
    let mut r = Replay::new(scene(), CursorConfig::default()).unwrap();
    let f = r.run_until(510.0).unwrap();
    assert_eq!(f.index, FrameIndex(30));
    assert_eq!(r.cursor().active_target().map(|t| t.element), Some(NodeId(1)));
    assert!(r.run_until(100.0).is_err());
}

#[test]
fn coarse_scene_yields_nothing() {
    let mut s = scene();
    s.pointer_fine = false;
    let r = Replay::new(s, CursorConfig::default()).unwrap();
    assert_eq!(r.host().listener_count(), 0);
    let frames = r.run().unwrap();
    assert!(frames.iter().all(|f| f.cursor.is_none()));
}

#[test]
fn explicit_over_out_without_synthesis() {
    let mut s = scene();
    s.synthesize_hover = false;
    s.script = vec![
        ScriptStep {
            at_ms: 0.0,
            event: ScriptEvent::Move { x: 350.0, y: 220.0 },
        },
        ScriptStep {
            at_ms: 100.0,
            event: ScriptEvent::Over {
                target: Some("icon".into()),
            },
        },
        ScriptStep {
            at_ms: 200.0,
            event: ScriptEvent::Out {
                related: Some("button".into()),
            },
        },
    ];
    let frames = Replay::new(s, CursorConfig::default())
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(at(&frames, 50.0).cursor.as_ref().unwrap().target, None);
    assert_eq!(
        at(&frames, 300.0).cursor.as_ref().unwrap().target,
        Some(NodeId(1))
    );
}

#[test]
fn oversized_scene_fails_to_build_instead_of_panicking() {
    let mut s = scene();
    s.duration_ms = 1e300;
    let err = Replay::new(s, CursorConfig::default()).unwrap_err();
    assert!(err.to_string().contains("frames"));
}
