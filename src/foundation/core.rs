use crate::foundation::error::{ReticleError, ReticleResult};

pub use kurbo::{Point, Rect, Vec2};

/// Index of a frame produced by a replay, starting at 0.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Rational frame rate used to step replays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Validated constructor.
    pub fn new(num: u32, den: u32) -> ReticleResult<Self> {
        if den == 0 {
            return Err(ReticleError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ReticleError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in milliseconds.
    pub fn frame_duration_ms(self) -> f64 {
        1000.0 * f64::from(self.den) / f64::from(self.num)
    }

    /// Number of whole frames that fit in `ms`.
    pub fn ms_to_frames_floor(self, ms: f64) -> u64 {
        (ms / 1000.0 * self.as_f64()).floor().max(0.0) as u64
    }
}

impl Default for Fps {
    fn default() -> Self {
        Self { num: 60, den: 1 }
    }
}

/// Visible page area in CSS pixels. Pointer coordinates are relative to its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Validated constructor.
    pub fn new(width: f64, height: f64) -> ReticleResult<Self> {
        let v = Self { width, height };
        v.validate()?;
        Ok(v)
    }

    /// Reject non-finite or non-positive extents.
    pub fn validate(self) -> ReticleResult<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(ReticleError::validation("viewport width must be finite and > 0"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ReticleError::validation("viewport height must be finite and > 0"));
        }
        Ok(())
    }

    /// The viewport as a rect anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Build from components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha scaled by `opacity` (clamped to 0..1).
    pub fn with_opacity(self, opacity: f64) -> Self {
        let o = if opacity.is_finite() {
            opacity.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            a: (f64::from(self.a) * o).round().clamp(0.0, 255.0) as u8,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
