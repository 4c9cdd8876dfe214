use crate::document::tree::NodeId;

/// Host input delivered to the cursor, queued until the next tick.
///
/// Element references are nullable like their DOM counterparts: an `over` without a target or
/// an `out` without a related element are both normal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CursorEvent {
    /// Pointer moved to viewport coordinates `(x, y)`.
    PointerMove {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Primary button pressed.
    PointerDown,
    /// Primary button released.
    PointerUp,
    /// Pointer left the viewport.
    PointerLeave,
    /// Pointer entered `target` (captured at the document root).
    PointerOver {
        /// Element the pointer entered.
        target: Option<NodeId>,
    },
    /// Pointer left an element for `related` (captured at the document root).
    PointerOut {
        /// Element the pointer is moving into.
        related: Option<NodeId>,
    },
}
