use crate::animation::spring::{Integration, SpringConfig};
use crate::foundation::core::Point;
use crate::foundation::error::{ReticleError, ReticleResult};

/// Backdrop opacity levels of the reticle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpacityLevels {
    /// Pointer over the page but not over a target.
    pub moving: f64,
    /// Just left a target, or became visible without one.
    pub idle: f64,
    /// Hovering a target.
    pub engaged: f64,
}

impl Default for OpacityLevels {
    fn default() -> Self {
        Self {
            moving: 0.3,
            idle: 0.28,
            engaged: 0.55,
        }
    }
}

/// Scale/opacity/outline goals for the secondary visual cues.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CueLevels {
    /// Dot scale while the pointer is pressed.
    pub dot_pressed_scale: f64,
    /// Dot scale while hovering a target.
    pub dot_hover_scale: f64,
    /// Dot opacity while hovering a target.
    pub dot_hover_opacity: f64,
    /// Reticle scale while the pointer is pressed.
    pub reticle_pressed_scale: f64,
    /// Reticle scale while hovering a target.
    pub reticle_hover_scale: f64,
    /// Outline width without a target.
    pub outline_idle_width: f64,
    /// Outline width while hovering a target.
    pub outline_hover_width: f64,
}

impl Default for CueLevels {
    fn default() -> Self {
        Self {
            dot_pressed_scale: 0.65,
            dot_hover_scale: 0.75,
            dot_hover_opacity: 0.85,
            reticle_pressed_scale: 0.9,
            reticle_hover_scale: 1.1,
            outline_idle_width: 0.5,
            outline_hover_width: 1.5,
        }
    }
}

/// Every tunable of the floating cursor. Missing JSON fields take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    /// Reticle diameter without a target.
    pub base_reticle_size: f64,
    /// Dot diameter.
    pub dot_size: f64,
    /// Padding used when a target does not specify one.
    pub default_padding: f64,
    /// Coordinate (on both axes) that parks the cursor off-screen.
    pub offscreen: f64,
    /// Backdrop opacity levels.
    pub opacity: OpacityLevels,
    /// Reticle position and size.
    pub reticle_spring: SpringConfig,
    /// Dot position.
    pub dot_spring: SpringConfig,
    /// Backdrop opacity.
    pub backdrop_spring: SpringConfig,
    /// Dot scale and opacity cues.
    pub dot_cue_spring: SpringConfig,
    /// Reticle scale and outline cues.
    pub reticle_cue_spring: SpringConfig,
    /// Secondary cue goals.
    pub cues: CueLevels,
    /// Label rotation speed in degrees per millisecond.
    pub rotation_deg_per_ms: f64,
    /// How many times the label unit is repeated around the ring.
    pub label_repeat: usize,
    /// Glyph separating label repetitions.
    pub label_separator: char,
    /// Frame time is clamped to this many milliseconds.
    pub max_frame_ms: f64,
    /// Spring integration settings.
    pub integration: Integration,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            base_reticle_size: 82.0,
            dot_size: 6.0,
            default_padding: 36.0,
            offscreen: -200.0,
            opacity: OpacityLevels::default(),
            reticle_spring: SpringConfig::new(260.0, 28.0, 0.6),
            dot_spring: SpringConfig::new(420.0, 32.0, 0.38),
            backdrop_spring: SpringConfig::new(150.0, 24.0, 1.0),
            dot_cue_spring: SpringConfig::new(400.0, 28.0, 1.0),
            reticle_cue_spring: SpringConfig::new(280.0, 30.0, 1.0),
            cues: CueLevels::default(),
            rotation_deg_per_ms: 0.03,
            label_repeat: 6,
            label_separator: '•',
            max_frame_ms: 40.0,
            integration: Integration::default(),
        }
    }
}

impl CursorConfig {
    /// Parse a JSON config; omitted fields keep their defaults.
    pub fn from_json_str(s: &str) -> ReticleResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ReticleError::serde(format!("parse cursor config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field for values the engine cannot work with.
    pub fn validate(&self) -> ReticleResult<()> {
        for (name, v) in [
            ("base_reticle_size", self.base_reticle_size),
            ("dot_size", self.dot_size),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(ReticleError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        if !(self.default_padding.is_finite() && self.default_padding >= 0.0) {
            return Err(ReticleError::validation(
                "default_padding must be finite and >= 0",
            ));
        }
        if !self.offscreen.is_finite() {
            return Err(ReticleError::validation("offscreen must be finite"));
        }
        let OpacityLevels {
            moving,
            idle,
            engaged,
        } = self.opacity;
        if ![moving, idle, engaged]
            .iter()
            .all(|o| (0.0..=1.0).contains(o))
        {
            return Err(ReticleError::validation(
                "opacity levels must be within 0..=1",
            ));
        }

        self.reticle_spring.validate("reticle_spring")?;
        self.dot_spring.validate("dot_spring")?;
        self.backdrop_spring.validate("backdrop_spring")?;
        self.dot_cue_spring.validate("dot_cue_spring")?;
        self.reticle_cue_spring.validate("reticle_cue_spring")?;
        self.integration.validate()?;

        if !(self.rotation_deg_per_ms.is_finite() && self.rotation_deg_per_ms >= 0.0) {
            return Err(ReticleError::validation(
                "rotation_deg_per_ms must be finite and >= 0",
            ));
        }
        if self.label_repeat == 0 {
            return Err(ReticleError::validation("label_repeat must be > 0"));
        }
        if !(self.max_frame_ms.is_finite() && self.max_frame_ms > 0.0) {
            return Err(ReticleError::validation(
                "max_frame_ms must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// The off-screen parking point.
    pub fn offscreen_point(&self) -> Point {
        Point::new(self.offscreen, self.offscreen)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/config.rs"]
mod tests;
