use std::collections::VecDeque;

use crate::cursor::config::CursorConfig;
use crate::cursor::events::CursorEvent;
use crate::cursor::label::{RotatingLabel, layout_ring, ring_text};
use crate::cursor::resolver::{Exit, HoverTarget, Resolution, TargetResolver};
use crate::cursor::smoother::{CueState, MotionSmoother};
use crate::cursor::tracker::PointerTracker;
use crate::document::tree::Document;
use crate::foundation::core::Point;
use crate::foundation::error::ReticleResult;
use crate::render::frame::{CursorFrame, DotFrame, LabelFrame, ReticleFrame};
use crate::session::host::{ACTIVE_BODY_CLASS, CursorHost, ListenerKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Unmounted,
    /// Mounted on a coarse pointer: no listeners, no frame callback, no output.
    Inert,
    Attached,
}

/// The floating cursor component.
///
/// Input is queued with [`FloatingCursor::push`] and applied at the start of the next
/// [`FloatingCursor::tick`], in arrival order, before the springs integrate. Listener
/// registration and the body marker class go through a [`CursorHost`].
#[derive(Clone, Debug)]
pub struct FloatingCursor {
    cfg: CursorConfig,
    lifecycle: Lifecycle,
    queue: VecDeque<CursorEvent>,

    tracker: PointerTracker,
    resolver: TargetResolver,
    smoother: MotionSmoother,
    label: RotatingLabel,

    // (visible, has_target) as of the last visibility sync.
    synced: Option<(bool, bool)>,
}

impl FloatingCursor {
    /// Build an unmounted cursor. Fails if `cfg` does not validate.
    pub fn new(cfg: CursorConfig) -> ReticleResult<Self> {
        cfg.validate()?;
        Ok(Self {
            tracker: PointerTracker::new(cfg.offscreen_point()),
            resolver: TargetResolver::default(),
            smoother: MotionSmoother::new(&cfg),
            label: RotatingLabel::default(),
            lifecycle: Lifecycle::Unmounted,
            queue: VecDeque::new(),
            synced: None,
            cfg,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &CursorConfig {
        &self.cfg
    }

    /// Mount on a page: subscribe to capability changes and attach if the pointer is fine.
    pub fn mount(&mut self, host: &mut impl CursorHost) {
        if self.lifecycle != Lifecycle::Unmounted {
            return;
        }
        host.watch_pointer_capability(true);
        self.lifecycle = Lifecycle::Inert;
        let fine = host.pointer_is_fine();
        self.apply_capability(fine, host);
    }

    /// Capability change notification from the host.
    pub fn capability_changed(&mut self, fine: bool, host: &mut impl CursorHost) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.apply_capability(fine, host);
    }

    /// Tear down: every listener removed, frame callback stopped, marker class cleared,
    /// all state reset.
    pub fn unmount(&mut self, host: &mut impl CursorHost) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        if self.lifecycle == Lifecycle::Attached {
            self.detach(host);
        }
        host.remove_body_class(ACTIVE_BODY_CLASS);
        host.watch_pointer_capability(false);
        self.label = RotatingLabel::default();
        self.lifecycle = Lifecycle::Unmounted;
        tracing::debug!("floating cursor unmounted");
    }

    /// Mounted (attached or inert).
    pub fn is_mounted(&self) -> bool {
        self.lifecycle != Lifecycle::Unmounted
    }

    /// Mounted on a fine pointer with listeners registered.
    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Attached
    }

    /// Queue an input event. Dropped unless attached, since no listener would have fired.
    pub fn push(&mut self, event: CursorEvent) {
        if self.lifecycle != Lifecycle::Attached {
            tracing::trace!(?event, "dropping event: cursor is not attached");
            return;
        }
        self.queue.push_back(event);
    }

    /// Events waiting for the next tick.
    pub fn pending_events(&self) -> usize {
        self.queue.len()
    }

    /// Run one animation frame.
    ///
    /// Drains every queued event against `doc`, integrates the springs over `dt_ms` (clamped to
    /// `max_frame_ms`) and advances the ring label by the full, unclamped `dt_ms`. Returns the frame to draw, or `None` when
    /// inert, unmounted or hidden.
    pub fn tick(
        &mut self,
        dt_ms: f64,
        doc: &Document,
        host: &mut impl CursorHost,
    ) -> Option<CursorFrame> {
        if self.lifecycle != Lifecycle::Attached {
            self.queue.clear();
            return None;
        }

        while let Some(event) = self.queue.pop_front() {
            self.apply(event, doc);
            self.sync_visibility(host);
        }

        let elapsed_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        // Only the springs see the clamped frame time.
        let spring_ms = elapsed_ms.min(self.cfg.max_frame_ms);

        self.smoother.target_cues(
            CueState {
                pressed: self.tracker.is_pressed(),
                hovering: self.resolver.active().is_some(),
            },
            &self.cfg,
        );
        self.smoother.step(spring_ms / 1000.0, self.cfg.integration);

        if self.resolver.active().is_some_and(|t| t.label.is_some()) {
            self.label.advance(elapsed_ms, self.cfg.rotation_deg_per_ms);
        }

        self.tracker.is_visible().then(|| self.frame())
    }

    /// Snapshot of the current state, regardless of visibility.
    pub fn frame(&self) -> CursorFrame {
        let target = self.resolver.active();
        let label = target.and_then(|t| t.label.as_deref()).map(|l| {
            let text = ring_text(l, self.cfg.label_separator, self.cfg.label_repeat);
            LabelFrame {
                glyphs: layout_ring(&text),
                text,
                rotation_deg: self.label.rotation_deg(),
            }
        });

        CursorFrame {
            visible: self.tracker.is_visible(),
            pressed: self.tracker.is_pressed(),
            pointer: self.tracker.pointer(),
            dot: DotFrame {
                center: self.smoother.dot(),
                size: self.cfg.dot_size,
                scale: self.smoother.dot_scale(),
                opacity: self.smoother.dot_opacity(),
            },
            reticle: ReticleFrame {
                center: self.smoother.reticle(),
                diameter: self.smoother.reticle_size(),
                scale: self.smoother.reticle_scale(),
                opacity: self.smoother.backdrop_opacity(),
                outline_width: self.smoother.outline_width(),
                tone: target.map(|t| t.tone).unwrap_or_default(),
            },
            target: target.map(|t| t.element),
            label,
        }
    }

    /// Active hover target.
    pub fn active_target(&self) -> Option<&HoverTarget> {
        self.resolver.active()
    }

    /// Pointer inside the viewport.
    pub fn is_visible(&self) -> bool {
        self.tracker.is_visible()
    }

    /// Primary button held.
    pub fn is_pressed(&self) -> bool {
        self.tracker.is_pressed()
    }

    /// Whether the last capability reading was a fine pointer.
    pub fn is_pointer_fine(&self) -> bool {
        self.tracker.is_fine()
    }

    /// Latest raw pointer sample.
    pub fn pointer(&self) -> Point {
        self.tracker.pointer()
    }

    /// Current smoothed dot centre.
    pub fn dot_position(&self) -> Point {
        self.smoother.dot()
    }

    /// Current smoothed reticle centre.
    pub fn reticle_position(&self) -> Point {
        self.smoother.reticle()
    }

    /// Where the reticle is heading.
    pub fn reticle_target(&self) -> Point {
        self.smoother.reticle_target()
    }

    /// Current smoothed reticle diameter.
    pub fn reticle_size(&self) -> f64 {
        self.smoother.reticle_size()
    }

    /// Diameter the reticle is heading to.
    pub fn reticle_size_target(&self) -> f64 {
        self.smoother.reticle_size_target()
    }

    /// Current smoothed backdrop opacity.
    pub fn backdrop_opacity(&self) -> f64 {
        self.smoother.backdrop_opacity()
    }

    /// Backdrop opacity goal.
    pub fn backdrop_opacity_target(&self) -> f64 {
        self.smoother.backdrop_opacity_target()
    }

    /// Ring rotation in `[0, 360)`.
    pub fn rotation_deg(&self) -> f64 {
        self.label.rotation_deg()
    }

    fn apply_capability(&mut self, fine: bool, host: &mut impl CursorHost) {
        self.tracker.set_fine(fine);
        match (fine, self.lifecycle) {
            (true, Lifecycle::Inert) => self.attach(host),
            (false, Lifecycle::Attached) => {
                self.detach(host);
                self.lifecycle = Lifecycle::Inert;
            }
            (false, _) => host.remove_body_class(ACTIVE_BODY_CLASS),
            _ => {}
        }
    }

    fn attach(&mut self, host: &mut impl CursorHost) {
        for kind in ListenerKind::ALL {
            host.add_listener(kind, kind.capture());
            tracing::trace!(event = kind.event_name(), capture = kind.capture(), "listener added");
        }
        host.set_frame_callback(true);
        self.lifecycle = Lifecycle::Attached;
        self.synced = None;
        self.sync_visibility(host);
        tracing::debug!("floating cursor attached");
    }

    fn detach(&mut self, host: &mut impl CursorHost) {
        for kind in ListenerKind::ALL {
            host.remove_listener(kind, kind.capture());
        }
        host.set_frame_callback(false);
        host.remove_body_class(ACTIVE_BODY_CLASS);

        let fine = self.tracker.is_fine();
        self.queue.clear();
        self.tracker = PointerTracker::new(self.cfg.offscreen_point());
        self.tracker.set_fine(fine);
        self.resolver.clear();
        self.smoother = MotionSmoother::new(&self.cfg);
        self.synced = None;
        tracing::debug!("floating cursor detached");
    }

    fn apply(&mut self, event: CursorEvent, doc: &Document) {
        match event {
            CursorEvent::PointerMove { x, y } => {
                if !(x.is_finite() && y.is_finite()) {
                    tracing::trace!(x, y, "ignoring non-finite pointer sample");
                    return;
                }
                let p = Point::new(x, y);
                self.tracker.record_move(p);
                self.smoother.target_dot(p);
                let reticle = self.resolver.refresh_bounds(doc).unwrap_or(p);
                self.smoother.target_reticle(reticle);
            }
            CursorEvent::PointerDown => self.tracker.press(),
            CursorEvent::PointerUp => self.tracker.release(),
            CursorEvent::PointerLeave => {
                let off = self.cfg.offscreen_point();
                self.tracker.leave(off);
                self.resolver.clear();
                self.smoother.target_dot(off);
                self.smoother.target_reticle(off);
                self.smoother.target_reticle_size(self.cfg.base_reticle_size);
            }
            CursorEvent::PointerOver { target } => {
                match self
                    .resolver
                    .pointer_over(doc, target, self.cfg.default_padding)
                {
                    Resolution::Entered(t) => {
                        tracing::debug!(element = ?t.element, size = t.reticle_size(), "cursor target entered");
                        self.smoother.target_reticle(t.center());
                        self.smoother.target_reticle_size(t.reticle_size());
                        self.smoother
                            .target_backdrop_opacity(self.cfg.opacity.engaged);
                    }
                    Resolution::NoTarget => {
                        self.smoother.target_reticle_size(self.cfg.base_reticle_size);
                        self.smoother
                            .target_backdrop_opacity(self.cfg.opacity.moving);
                    }
                }
            }
            CursorEvent::PointerOut { related } => {
                match self.resolver.pointer_out(doc, related) {
                    Exit::Suppressed => {
                        tracing::trace!(?related, "nested boundary crossing, keeping target");
                    }
                    Exit::Left => {
                        tracing::debug!(?related, "cursor target left");
                        self.smoother.target_reticle_size(self.cfg.base_reticle_size);
                        self.smoother.target_backdrop_opacity(self.cfg.opacity.idle);
                    }
                }
            }
        }
    }

    fn sync_visibility(&mut self, host: &mut impl CursorHost) {
        let state = (
            self.tracker.is_visible(),
            self.resolver.active().is_some(),
        );
        if self.synced == Some(state) {
            return;
        }
        self.synced = Some(state);
        match state {
            (false, _) => {
                self.smoother.target_backdrop_opacity(0.0);
                host.remove_body_class(ACTIVE_BODY_CLASS);
            }
            (true, false) => {
                self.smoother.target_backdrop_opacity(self.cfg.opacity.idle);
                host.add_body_class(ACTIVE_BODY_CLASS);
            }
            (true, true) => host.add_body_class(ACTIVE_BODY_CLASS),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/floating_cursor.rs"]
mod tests;
