use std::collections::BTreeSet;

/// Class toggled on the document body while the cursor effect is active.
pub const ACTIVE_BODY_CLASS: &str = "floating-cursor-active";

/// Pointer listeners the cursor registers while attached.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ListenerKind {
    /// `pointermove` on the window.
    PointerMove,
    /// `pointerdown` on the window.
    PointerDown,
    /// `pointerup` on the window.
    PointerUp,
    /// `pointerleave` on the window.
    PointerLeave,
    /// `pointerover`, capture phase at the root.
    PointerOver,
    /// `pointerout`, capture phase at the root.
    PointerOut,
}

impl ListenerKind {
    /// Every listener, in registration order.
    pub const ALL: [Self; 6] = [
        Self::PointerMove,
        Self::PointerDown,
        Self::PointerUp,
        Self::PointerLeave,
        Self::PointerOver,
        Self::PointerOut,
    ];

    /// Hover delegation listens in the capture phase.
    pub fn capture(self) -> bool {
        matches!(self, Self::PointerOver | Self::PointerOut)
    }

    /// DOM event name.
    pub fn event_name(self) -> &'static str {
        match self {
            Self::PointerMove => "pointermove",
            Self::PointerDown => "pointerdown",
            Self::PointerUp => "pointerup",
            Self::PointerLeave => "pointerleave",
            Self::PointerOver => "pointerover",
            Self::PointerOut => "pointerout",
        }
    }
}

/// Side-effect surface of the host page.
///
/// The cursor never touches the page directly: it asks the host for the pointer capability,
/// registers/unregisters listeners, toggles the body marker class and starts/stops the frame
/// callback through this trait.
pub trait CursorHost {
    /// Whether the primary pointer is fine (mouse-like, can hover).
    fn pointer_is_fine(&self) -> bool;
    /// Subscribe to or drop capability change notifications.
    fn watch_pointer_capability(&mut self, watching: bool);
    /// Register a pointer listener.
    fn add_listener(&mut self, kind: ListenerKind, capture: bool);
    /// Unregister a pointer listener.
    fn remove_listener(&mut self, kind: ListenerKind, capture: bool);
    /// Start or stop the per-frame callback.
    fn set_frame_callback(&mut self, active: bool);
    /// Add a class to the document body.
    fn add_body_class(&mut self, class: &str);
    /// Remove a class from the document body.
    fn remove_body_class(&mut self, class: &str);
}

/// In-memory host for tests, replays and debugging.
#[derive(Clone, Debug, Default)]
pub struct InMemoryHost {
    fine: bool,
    watching: bool,
    listeners: BTreeSet<(ListenerKind, bool)>,
    frame_callback: bool,
    body_classes: BTreeSet<String>,
}

impl InMemoryHost {
    /// A host with the given pointer capability.
    pub fn new(pointer_fine: bool) -> Self {
        Self {
            fine: pointer_fine,
            ..Self::default()
        }
    }

    /// Simulate a capability change. The cursor must still be told via
    /// [`crate::FloatingCursor::capability_changed`].
    pub fn set_pointer_fine(&mut self, fine: bool) {
        self.fine = fine;
    }

    /// Registered listeners as `(kind, capture)` pairs.
    pub fn listeners(&self) -> impl Iterator<Item = (ListenerKind, bool)> + '_ {
        self.listeners.iter().copied()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether a listener of `kind` is registered (either phase).
    pub fn has_listener(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|(k, _)| *k == kind)
    }

    /// Whether the frame callback is running.
    pub fn frame_callback_active(&self) -> bool {
        self.frame_callback
    }

    /// Whether the capability subscription is live.
    pub fn is_watching_capability(&self) -> bool {
        self.watching
    }

    /// Whether the body carries `class`.
    pub fn has_body_class(&self, class: &str) -> bool {
        self.body_classes.contains(class)
    }
}

impl CursorHost for InMemoryHost {
    fn pointer_is_fine(&self) -> bool {
        self.fine
    }

    fn watch_pointer_capability(&mut self, watching: bool) {
        self.watching = watching;
    }

    fn add_listener(&mut self, kind: ListenerKind, capture: bool) {
        self.listeners.insert((kind, capture));
    }

    fn remove_listener(&mut self, kind: ListenerKind, capture: bool) {
        self.listeners.remove(&(kind, capture));
    }

    fn set_frame_callback(&mut self, active: bool) {
        self.frame_callback = active;
    }

    fn add_body_class(&mut self, class: &str) {
        self.body_classes.insert(class.to_string());
    }

    fn remove_body_class(&mut self, class: &str) {
        self.body_classes.remove(class);
    }
}
