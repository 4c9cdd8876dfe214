use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;

use crate::document::tree::{Document, NodeId};
use crate::foundation::core::{Fps, Rect, Rgba8, Viewport};
use crate::foundation::error::{ReticleError, ReticleResult};
use crate::foundation::math::{lerp_rect, rect_is_finite};

/// Longest replay accepted, in frames (a little over four and a half hours at 60 fps).
pub const MAX_SCENE_FRAMES: u64 = 1_000_000;

/// A page, its elements and a timed pointer script, replayed frame by frame.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Visible page area.
    pub viewport: Viewport,
    /// Replay frame rate.
    #[serde(default)]
    pub fps: Fps,
    /// Length of the replay. Frames are sampled at `0..=duration_ms`.
    pub duration_ms: f64,
    /// Whether the primary pointer starts out fine.
    #[serde(default = "default_true")]
    pub pointer_fine: bool,
    /// Derive over/out events from hit testing on every scripted move.
    #[serde(default = "default_true")]
    pub synthesize_hover: bool,
    /// Page color used when rasterizing.
    #[serde(default = "default_background")]
    pub background: Rgba8,
    /// Top-level elements, children of the page body.
    #[serde(default)]
    pub elements: Vec<SceneElement>,
    /// Timed input, sorted by `at_ms`.
    #[serde(default)]
    pub script: Vec<ScriptStep>,
}

fn default_true() -> bool {
    true
}

fn default_background() -> Rgba8 {
    Rgba8::new(18, 20, 28, 255)
}

/// One element of the page tree.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct SceneElement {
    /// Unique id, used by scripts.
    pub id: String,
    /// Box in viewport coordinates, fixed or keyframed.
    pub rect: RectDef,
    /// `data-cursor-*` and other attributes.
    #[serde(default)]
    pub attrs: BTreeMap<String, String>,
    /// Nested elements.
    #[serde(default)]
    pub children: Vec<SceneElement>,
}

/// Axis-aligned box as `left/top/width/height`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoxDef {
    /// Left edge.
    pub left: f64,
    /// Top edge.
    pub top: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl BoxDef {
    /// As a kurbo rect.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.left,
            self.top,
            self.left + self.width,
            self.top + self.height,
        )
    }
}

/// Box keyed at a point in time.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RectKeyframe {
    /// Time of the key.
    pub at_ms: f64,
    /// Box at that time.
    pub rect: BoxDef,
}

/// Fixed box or linearly interpolated keyframes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RectDef {
    /// Never moves.
    Static(BoxDef),
    /// Held before the first and after the last key.
    Keyframes(Vec<RectKeyframe>),
}

impl RectDef {
    /// Box at `t_ms`.
    pub fn sample(&self, t_ms: f64) -> Rect {
        let keys = match self {
            RectDef::Static(b) => return b.to_rect(),
            RectDef::Keyframes(keys) => keys,
        };
        let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
            return Rect::ZERO;
        };
        if t_ms <= first.at_ms {
            return first.rect.to_rect();
        }
        if t_ms >= last.at_ms {
            return last.rect.to_rect();
        }
        for pair in keys.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            if t_ms < b.at_ms {
                let span = b.at_ms - a.at_ms;
                let t = if span > 0.0 {
                    (t_ms - a.at_ms) / span
                } else {
                    1.0
                };
                return lerp_rect(a.rect.to_rect(), b.rect.to_rect(), t);
            }
        }
        last.rect.to_rect()
    }

    fn validate(&self, id: &str) -> ReticleResult<()> {
        match self {
            RectDef::Static(b) => validate_box(id, b),
            RectDef::Keyframes(keys) => {
                if keys.is_empty() {
                    return Err(ReticleError::validation(format!(
                        "element '{id}' has an empty keyframe list"
                    )));
                }
                let mut prev = f64::NEG_INFINITY;
                for k in keys {
                    if !k.at_ms.is_finite() || k.at_ms < prev {
                        return Err(ReticleError::validation(format!(
                            "element '{id}' keyframes must have finite, non-decreasing at_ms"
                        )));
                    }
                    prev = k.at_ms;
                    validate_box(id, &k.rect)?;
                }
                Ok(())
            }
        }
    }
}

fn validate_box(id: &str, b: &BoxDef) -> ReticleResult<()> {
    if !rect_is_finite(b.to_rect()) || b.width < 0.0 || b.height < 0.0 {
        return Err(ReticleError::validation(format!(
            "element '{id}' has a non-finite or negative box"
        )));
    }
    Ok(())
}

/// One scripted input.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScriptStep {
    /// When the input arrives.
    pub at_ms: f64,
    /// The input itself.
    #[serde(flatten)]
    pub event: ScriptEvent,
}

/// Scripted input. Elements are named by id.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    /// Pointer moved to `(x, y)`.
    Move {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Primary button pressed.
    Down,
    /// Primary button released.
    Up,
    /// Pointer left the viewport.
    Leave,
    /// Explicit pointer-over.
    Over {
        /// Element entered.
        #[serde(default)]
        target: Option<String>,
    },
    /// Explicit pointer-out.
    Out {
        /// Element being entered.
        #[serde(default)]
        related: Option<String>,
    },
    /// The primary pointer changed between fine and coarse.
    Capability {
        /// New capability.
        fine: bool,
    },
}

impl Scene {
    /// Parse and validate a scene from JSON text.
    pub fn from_json_str(s: &str) -> ReticleResult<Self> {
        let scene: Self = serde_json::from_str(s)
            .map_err(|e| ReticleError::serde(format!("parse scene JSON: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Parse and validate a scene from a reader.
    pub fn from_reader(r: impl Read) -> ReticleResult<Self> {
        let scene: Self = serde_json::from_reader(r)
            .map_err(|e| ReticleError::serde(format!("parse scene JSON: {e}")))?;
        scene.validate()?;
        Ok(scene)
    }

    /// Parse and validate a scene file.
    pub fn from_path(path: impl AsRef<Path>) -> ReticleResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path)
            .map_err(|e| ReticleError::scene(format!("open scene '{}': {e}", path.display())))?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Check geometry, timing and every id a script refers to.
    pub fn validate(&self) -> ReticleResult<()> {
        self.viewport.validate()?;
        Fps::new(self.fps.num, self.fps.den)?;
        if !(self.duration_ms.is_finite() && self.duration_ms > 0.0) {
            return Err(ReticleError::validation(
                "duration_ms must be finite and > 0",
            ));
        }
        if self.duration_ms / 1000.0 * self.fps.as_f64() >= MAX_SCENE_FRAMES as f64 {
            return Err(ReticleError::validation(format!(
                "duration_ms {} at {} fps exceeds {MAX_SCENE_FRAMES} frames",
                self.duration_ms,
                self.fps.as_f64()
            )));
        }

        let mut ids = HashSet::new();
        ids.insert(Document::ROOT_KEY.to_string());
        let mut stack: Vec<&SceneElement> = self.elements.iter().collect();
        while let Some(el) = stack.pop() {
            if el.id.trim().is_empty() {
                return Err(ReticleError::validation("element id must be non-empty"));
            }
            if !ids.insert(el.id.clone()) {
                return Err(ReticleError::validation(format!(
                    "duplicate element id '{}'",
                    el.id
                )));
            }
            el.rect.validate(&el.id)?;
            stack.extend(el.children.iter());
        }

        let mut prev = 0.0;
        for (i, step) in self.script.iter().enumerate() {
            if !step.at_ms.is_finite() || step.at_ms < prev {
                return Err(ReticleError::validation(format!(
                    "script step {i} must have a finite at_ms >= 0, sorted ascending"
                )));
            }
            prev = step.at_ms;

            let named = match &step.event {
                ScriptEvent::Move { x, y } => {
                    if !(x.is_finite() && y.is_finite()) {
                        return Err(ReticleError::validation(format!(
                            "script step {i} moves to a non-finite position"
                        )));
                    }
                    None
                }
                ScriptEvent::Over { target } => target.as_deref(),
                ScriptEvent::Out { related } => related.as_deref(),
                _ => None,
            };
            if let Some(id) = named
                && !ids.contains(id)
            {
                return Err(ReticleError::scene(format!(
                    "script step {i} references unknown element '{id}'"
                )));
            }
        }
        Ok(())
    }

    /// Frames a replay yields: one per frame interval, plus frame 0.
    pub fn frame_count(&self) -> u64 {
        self.fps
            .ms_to_frames_floor(self.duration_ms)
            .saturating_add(1)
    }

    /// Build the page tree with every box sampled at `t_ms`.
    pub fn build_document(&self, t_ms: f64) -> ReticleResult<Document> {
        let mut doc = Document::new(self.viewport.rect());
        let root = doc.root();
        let mut stack: Vec<(NodeId, &SceneElement)> =
            self.elements.iter().rev().map(|el| (root, el)).collect();
        while let Some((parent, el)) = stack.pop() {
            let id = doc.append(parent, el.id.as_str(), el.rect.sample(t_ms))?;
            for (name, value) in &el.attrs {
                doc.set_attr(id, name.as_str(), value.as_str())?;
            }
            stack.extend(el.children.iter().rev().map(|child| (id, child)));
        }
        Ok(doc)
    }

    /// Move every keyframed element of `doc` to its box at `t_ms`.
    pub fn update_document(&self, doc: &mut Document, t_ms: f64) -> ReticleResult<()> {
        let mut stack: Vec<&SceneElement> = self.elements.iter().collect();
        while let Some(el) = stack.pop() {
            if let RectDef::Keyframes(_) = el.rect {
                let id = doc.lookup(&el.id).ok_or_else(|| {
                    ReticleError::scene(format!("element '{}' missing from document", el.id))
                })?;
                doc.set_rect(id, el.rect.sample(t_ms))?;
            }
            stack.extend(el.children.iter());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
