use crate::document::attrs::{TARGET_ATTR, TargetAttrs, Tone};
use crate::document::tree::{Document, NodeId};
use crate::foundation::core::{Point, Rect};

/// The element the reticle is currently locked onto.
#[derive(Clone, Debug, PartialEq)]
pub struct HoverTarget {
    /// Target element.
    pub element: NodeId,
    /// Bounding box as of the last enter or pointer move.
    pub bounds: Rect,
    /// Extra diameter around the longer side.
    pub padding: f64,
    /// Rotating label, if any.
    pub label: Option<String>,
    /// Color theme.
    pub tone: Tone,
}

impl HoverTarget {
    /// Centre of the bounding box.
    pub fn center(&self) -> Point {
        self.bounds.center()
    }

    /// Reticle diameter that wraps the target: `max(width, height) + padding`.
    pub fn reticle_size(&self) -> f64 {
        self.bounds.width().max(self.bounds.height()) + self.padding
    }
}

/// Outcome of a pointer-over.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Resolution {
    /// Over an element inside a target (possibly the same one again).
    Entered(HoverTarget),
    /// Over markup outside every target.
    NoTarget,
}

/// Outcome of a pointer-out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Exit {
    /// Left the active target for something outside its subtree.
    Left,
    /// Boundary crossing inside the active target's subtree.
    Suppressed,
}

/// Owns the single active hover target.
#[derive(Clone, Debug, Default)]
pub(crate) struct TargetResolver {
    active: Option<HoverTarget>,
}

impl TargetResolver {
    pub(crate) fn active(&self) -> Option<&HoverTarget> {
        self.active.as_ref()
    }

    pub(crate) fn clear(&mut self) {
        self.active = None;
    }

    pub(crate) fn pointer_over(
        &mut self,
        doc: &Document,
        node: Option<NodeId>,
        default_padding: f64,
    ) -> Resolution {
        let Some(element) = node.and_then(|n| doc.closest_with_attr(n, TARGET_ATTR)) else {
            self.active = None;
            return Resolution::NoTarget;
        };

        let attrs = TargetAttrs::read(doc, element, default_padding);
        let target = HoverTarget {
            element,
            bounds: doc.bounding_box(element).unwrap_or(Rect::ZERO),
            padding: attrs.padding,
            label: attrs.label,
            tone: attrs.tone,
        };
        self.active = Some(target.clone());
        Resolution::Entered(target)
    }

    // Only containment of the related element's target in the active target's subtree is
    // checked; the related element itself is not re-validated.
    pub(crate) fn pointer_out(&mut self, doc: &Document, related: Option<NodeId>) -> Exit {
        let next = related.and_then(|n| doc.closest_with_attr(n, TARGET_ATTR));
        if let (Some(active), Some(next)) = (&self.active, next)
            && doc.contains(active.element, next)
        {
            return Exit::Suppressed;
        }
        self.active = None;
        Exit::Left
    }

    /// Re-read the active target's live box; returns its centre.
    pub(crate) fn refresh_bounds(&mut self, doc: &Document) -> Option<Point> {
        let active = self.active.as_mut()?;
        if let Some(bounds) = doc.bounding_box(active.element) {
            active.bounds = bounds;
        }
        Some(active.center())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/resolver.rs"]
mod tests;
