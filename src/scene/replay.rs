use crate::cursor::config::CursorConfig;
use crate::cursor::events::CursorEvent;
use crate::document::tree::{Document, NodeId};
use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::error::{ReticleError, ReticleResult};
use crate::render::frame::CursorFrame;
use crate::scene::model::{Scene, ScriptEvent};
use crate::session::floating_cursor::FloatingCursor;
use crate::session::host::InMemoryHost;

/// One replayed animation frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReplayFrame {
    /// Frame number.
    pub index: FrameIndex,
    /// Scene time in milliseconds.
    pub time_ms: f64,
    /// What the cursor drew, `None` while hidden or inert.
    pub cursor: Option<CursorFrame>,
}

/// Deterministic frame-by-frame playback of a [`Scene`].
///
/// Each frame moves keyframed elements, feeds every script step due by that time to the
/// cursor and ticks it once. The iterator yields frames `0..=duration`.
#[derive(Debug)]
pub struct Replay {
    scene: Scene,
    doc: Document,
    host: InMemoryHost,
    cursor: FloatingCursor,
    next_step: usize,
    next_frame: u64,
    frame_count: u64,
    hovered: Option<NodeId>,
}

impl Replay {
    /// Validate the scene, build its page and mount a cursor on it.
    pub fn new(scene: Scene, cfg: CursorConfig) -> ReticleResult<Self> {
        scene.validate()?;
        let doc = scene.build_document(0.0)?;
        let mut host = InMemoryHost::new(scene.pointer_fine);
        let mut cursor = FloatingCursor::new(cfg)?;
        cursor.mount(&mut host);
        let frame_count = scene.frame_count();
        Ok(Self {
            scene,
            doc,
            host,
            cursor,
            next_step: 0,
            next_frame: 0,
            frame_count,
            hovered: None,
        })
    }

    /// Number of frames the replay yields in total.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Scene being replayed.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Page as of the last frame.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Host state (listeners, body classes).
    pub fn host(&self) -> &InMemoryHost {
        &self.host
    }

    /// The cursor under replay.
    pub fn cursor(&self) -> &FloatingCursor {
        &self.cursor
    }

    /// Advance one frame. `None` once the scene is over.
    pub fn step(&mut self) -> ReticleResult<Option<ReplayFrame>> {
        if self.next_frame >= self.frame_count {
            return Ok(None);
        }
        let index = self.next_frame;
        let frame_ms = self.scene.fps.frame_duration_ms();
        let time_ms = index as f64 * frame_ms;

        self.scene.update_document(&mut self.doc, time_ms)?;
        while let Some(step) = self.scene.script.get(self.next_step) {
            if step.at_ms > time_ms {
                break;
            }
            let event = step.event.clone();
            self.next_step += 1;
            self.dispatch(event)?;
        }

        let dt_ms = if index == 0 { 0.0 } else { frame_ms };
        let cursor = self.cursor.tick(dt_ms, &self.doc, &mut self.host);
        self.next_frame += 1;
        Ok(Some(ReplayFrame {
            index: FrameIndex(index),
            time_ms,
            cursor,
        }))
    }

    /// Play to the end, collecting every frame.
    pub fn run(mut self) -> ReticleResult<Vec<ReplayFrame>> {
        let mut frames = Vec::with_capacity(self.frame_count.min(4096) as usize);
        while let Some(f) = self.step()? {
            frames.push(f);
        }
        Ok(frames)
    }

    /// Play up to and including the last frame at or before `t_ms`.
    pub fn run_until(&mut self, t_ms: f64) -> ReticleResult<ReplayFrame> {
        if !(t_ms.is_finite() && t_ms >= 0.0) {
            return Err(ReticleError::validation("time must be finite and >= 0"));
        }
        let frame_ms = self.scene.fps.frame_duration_ms();
        let mut last = None;
        while self.next_frame < self.frame_count && (self.next_frame as f64) * frame_ms <= t_ms {
            last = self.step()?;
        }
        last.ok_or_else(|| {
            ReticleError::validation(format!(
                "no frame left at or before {t_ms} ms (next frame is {})",
                self.next_frame
            ))
        })
    }

    fn dispatch(&mut self, event: ScriptEvent) -> ReticleResult<()> {
        match event {
            ScriptEvent::Move { x, y } => {
                if self.scene.synthesize_hover && self.cursor.is_active() {
                    let hit = self.doc.hit_test(Point::new(x, y));
                    if hit != self.hovered {
                        if self.hovered.is_some() {
                            self.cursor.push(CursorEvent::PointerOut { related: hit });
                        }
                        if hit.is_some() {
                            self.cursor.push(CursorEvent::PointerOver { target: hit });
                        }
                        self.hovered = hit;
                    }
                }
                self.cursor.push(CursorEvent::PointerMove { x, y });
            }
            ScriptEvent::Down => self.cursor.push(CursorEvent::PointerDown),
            ScriptEvent::Up => self.cursor.push(CursorEvent::PointerUp),
            ScriptEvent::Leave => {
                if self.scene.synthesize_hover && self.hovered.take().is_some() {
                    self.cursor.push(CursorEvent::PointerOut { related: None });
                }
                self.cursor.push(CursorEvent::PointerLeave);
            }
            ScriptEvent::Over { target } => {
                let target = self.node(target.as_deref())?;
                self.hovered = target;
                self.cursor.push(CursorEvent::PointerOver { target });
            }
            ScriptEvent::Out { related } => {
                let related = self.node(related.as_deref())?;
                self.cursor.push(CursorEvent::PointerOut { related });
            }
            ScriptEvent::Capability { fine } => {
                self.hovered = None;
                self.host.set_pointer_fine(fine);
                self.cursor.capability_changed(fine, &mut self.host);
            }
        }
        Ok(())
    }

    fn node(&self, id: Option<&str>) -> ReticleResult<Option<NodeId>> {
        id.map(|id| {
            self.doc
                .lookup(id)
                .ok_or_else(|| ReticleError::scene(format!("unknown element '{id}'")))
        })
        .transpose()
    }
}

impl Iterator for Replay {
    type Item = ReticleResult<ReplayFrame>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step().transpose()
    }
}

/// Replay `scene` from start to finish with `cfg`.
#[tracing::instrument(skip_all, fields(duration_ms = scene.duration_ms, steps = scene.script.len()))]
pub fn replay(scene: &Scene, cfg: &CursorConfig) -> ReticleResult<Vec<ReplayFrame>> {
    let frames = Replay::new(scene.clone(), cfg.clone())?.run()?;
    tracing::debug!(frames = frames.len(), "replay finished");
    Ok(frames)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/replay.rs"]
mod tests;
