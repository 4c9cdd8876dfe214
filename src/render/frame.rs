use crate::cursor::label::GlyphPlacement;
use crate::document::attrs::Tone;
use crate::document::tree::NodeId;
use crate::foundation::core::Point;

/// Renderable snapshot of the cursor after one tick.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorFrame {
    /// Pointer is inside the viewport.
    pub visible: bool,
    /// Primary button held.
    pub pressed: bool,
    /// Latest raw pointer sample.
    pub pointer: Point,
    /// Small leading dot.
    pub dot: DotFrame,
    /// Large lagging ring.
    pub reticle: ReticleFrame,
    /// Active hover target, if any.
    pub target: Option<NodeId>,
    /// Rotating label, present only for labelled targets.
    pub label: Option<LabelFrame>,
}

/// Dot geometry and cues.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DotFrame {
    /// Centre.
    pub center: Point,
    /// Unscaled diameter.
    pub size: f64,
    /// Scale cue.
    pub scale: f64,
    /// Opacity cue.
    pub opacity: f64,
}

/// Reticle geometry and cues.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReticleFrame {
    /// Centre.
    pub center: Point,
    /// Unscaled diameter.
    pub diameter: f64,
    /// Scale cue.
    pub scale: f64,
    /// Backdrop opacity.
    pub opacity: f64,
    /// Outline stroke width.
    pub outline_width: f64,
    /// Color theme.
    pub tone: Tone,
}

impl ReticleFrame {
    /// Radius after scaling.
    pub fn radius(&self) -> f64 {
        0.5 * self.diameter * self.scale
    }
}

/// Ring label state.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LabelFrame {
    /// Repeated ring text.
    pub text: String,
    /// Live rotation of the whole ring in degrees.
    pub rotation_deg: f64,
    /// Per-character placements.
    pub glyphs: Vec<GlyphPlacement>,
}
