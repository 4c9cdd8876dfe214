use crate::animation::spring::{Integration, PointSpring, Spring};
use crate::cursor::config::CursorConfig;
use crate::foundation::core::Point;

/// Every spring the cursor renders from.
///
/// The dot spring is stiffer than the reticle's so the dot leads and the reticle lags.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct MotionSmoother {
    dot: PointSpring,
    reticle: PointSpring,
    reticle_size: Spring,
    backdrop_opacity: Spring,

    dot_scale: Spring,
    dot_opacity: Spring,
    reticle_scale: Spring,
    outline_width: Spring,
}

/// Cue inputs for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct CueState {
    pub(crate) pressed: bool,
    pub(crate) hovering: bool,
}

impl MotionSmoother {
    pub(crate) fn new(cfg: &CursorConfig) -> Self {
        let off = cfg.offscreen_point();
        Self {
            dot: PointSpring::new(off, cfg.dot_spring),
            reticle: PointSpring::new(off, cfg.reticle_spring),
            reticle_size: Spring::new(cfg.base_reticle_size, cfg.reticle_spring),
            backdrop_opacity: Spring::new(0.0, cfg.backdrop_spring),
            dot_scale: Spring::new(1.0, cfg.dot_cue_spring),
            dot_opacity: Spring::new(1.0, cfg.dot_cue_spring),
            reticle_scale: Spring::new(1.0, cfg.reticle_cue_spring),
            outline_width: Spring::new(cfg.cues.outline_idle_width, cfg.reticle_cue_spring),
        }
    }

    pub(crate) fn target_dot(&mut self, p: Point) {
        self.dot.set_target(p);
    }

    pub(crate) fn target_reticle(&mut self, p: Point) {
        self.reticle.set_target(p);
    }

    pub(crate) fn target_reticle_size(&mut self, size: f64) {
        self.reticle_size.set_target(size);
    }

    pub(crate) fn target_backdrop_opacity(&mut self, opacity: f64) {
        self.backdrop_opacity.set_target(opacity.clamp(0.0, 1.0));
    }

    pub(crate) fn target_cues(&mut self, state: CueState, cfg: &CursorConfig) {
        let cues = &cfg.cues;
        let dot_scale = if state.pressed {
            cues.dot_pressed_scale
        } else if state.hovering {
            cues.dot_hover_scale
        } else {
            1.0
        };
        let reticle_scale = if state.pressed {
            cues.reticle_pressed_scale
        } else if state.hovering {
            cues.reticle_hover_scale
        } else {
            1.0
        };
        let (dot_opacity, outline_width) = if state.hovering {
            (cues.dot_hover_opacity, cues.outline_hover_width)
        } else {
            (1.0, cues.outline_idle_width)
        };

        self.dot_scale.set_target(dot_scale);
        self.reticle_scale.set_target(reticle_scale);
        self.dot_opacity.set_target(dot_opacity);
        self.outline_width.set_target(outline_width);
    }

    pub(crate) fn step(&mut self, dt_secs: f64, integration: Integration) {
        self.dot.step(dt_secs, integration);
        self.reticle.step(dt_secs, integration);
        self.reticle_size.step(dt_secs, integration);
        self.backdrop_opacity.step(dt_secs, integration);
        self.dot_scale.step(dt_secs, integration);
        self.dot_opacity.step(dt_secs, integration);
        self.reticle_scale.step(dt_secs, integration);
        self.outline_width.step(dt_secs, integration);
    }

    pub(crate) fn dot(&self) -> Point {
        self.dot.value()
    }

    pub(crate) fn reticle(&self) -> Point {
        self.reticle.value()
    }

    pub(crate) fn reticle_target(&self) -> Point {
        self.reticle.target()
    }

    pub(crate) fn reticle_size(&self) -> f64 {
        self.reticle_size.value()
    }

    pub(crate) fn reticle_size_target(&self) -> f64 {
        self.reticle_size.target()
    }

    // Under-damped cue presets could push a spring slightly past its range.
    pub(crate) fn backdrop_opacity(&self) -> f64 {
        self.backdrop_opacity.value().clamp(0.0, 1.0)
    }

    pub(crate) fn backdrop_opacity_target(&self) -> f64 {
        self.backdrop_opacity.target()
    }

    pub(crate) fn dot_scale(&self) -> f64 {
        self.dot_scale.value()
    }

    pub(crate) fn dot_opacity(&self) -> f64 {
        self.dot_opacity.value().clamp(0.0, 1.0)
    }

    pub(crate) fn reticle_scale(&self) -> f64 {
        self.reticle_scale.value()
    }

    pub(crate) fn outline_width(&self) -> f64 {
        self.outline_width.value().max(0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/smoother.rs"]
mod tests;
