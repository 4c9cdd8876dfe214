//! Reticle is a headless engine for the floating-cursor effect: a small dot and a larger
//! lagging reticle follow the pointer, and the reticle snaps onto hover targets, morphing to
//! their box while a label rotates around the ring.
//!
//! The public API is session-oriented:
//!
//! - Describe the page with a [`Document`] (or load a [`Scene`])
//! - Mount a [`FloatingCursor`] through a [`CursorHost`]
//! - [`push`](FloatingCursor::push) pointer events and [`tick`](FloatingCursor::tick) once per
//!   animation frame to get a [`CursorFrame`]
//! - Optionally [`rasterize`] frames, or [`replay`] a whole scene deterministically
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod cursor;
pub(crate) mod document;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod session;

pub use crate::foundation::core::{Fps, FrameIndex, Point, Rect, Rgba8, Vec2, Viewport};
pub use crate::foundation::error::{ReticleError, ReticleResult};

pub use crate::animation::spring::{Integration, PointSpring, Spring, SpringConfig};
pub use crate::cursor::config::{CueLevels, CursorConfig, OpacityLevels};
pub use crate::cursor::events::CursorEvent;
pub use crate::cursor::label::{GlyphPlacement, layout_ring, ring_text};
pub use crate::cursor::resolver::HoverTarget;
pub use crate::document::attrs::{
    PADDING_ATTR, TARGET_ATTR, TEXT_ATTR, TONE_ATTR, TargetAttrs, Tone,
};
pub use crate::document::tree::{Ancestors, Document, NodeId};
pub use crate::render::cpu::{FrameRGBA, RasterOpts, rasterize};
pub use crate::render::frame::{CursorFrame, DotFrame, LabelFrame, ReticleFrame};
pub use crate::scene::model::{
    BoxDef, RectDef, RectKeyframe, Scene, SceneElement, ScriptEvent, ScriptStep,
};
pub use crate::scene::replay::{Replay, ReplayFrame, replay};
pub use crate::session::floating_cursor::FloatingCursor;
pub use crate::session::host::{ACTIVE_BODY_CLASS, CursorHost, InMemoryHost, ListenerKind};
