use std::collections::{BTreeMap, HashMap};

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{ReticleError, ReticleResult};
use crate::foundation::math::rect_is_finite;

/// Handle to an element of a [`Document`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

impl NodeId {
    fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Element {
    key: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    rect: Rect,
    attrs: BTreeMap<String, String>,
}

/// Minimal element tree standing in for the host page.
///
/// Elements live in an arena and are never removed, so a [`NodeId`] stays valid for the life
/// of the document. Each element has a unique string key, a live bounding box in viewport
/// coordinates and free-form string attributes.
#[derive(Clone, Debug)]
pub struct Document {
    nodes: Vec<Element>,
    by_key: HashMap<String, NodeId>,
}

impl Document {
    /// Key of the implicit root element.
    pub const ROOT_KEY: &'static str = "body";

    /// A document whose root element (`body`) covers `root_rect`.
    pub fn new(root_rect: Rect) -> Self {
        let root = Element {
            key: Self::ROOT_KEY.to_string(),
            parent: None,
            children: Vec::new(),
            rect: root_rect,
            attrs: BTreeMap::new(),
        };
        let mut by_key = HashMap::new();
        by_key.insert(Self::ROOT_KEY.to_string(), NodeId(0));
        Self {
            nodes: vec![root],
            by_key,
        }
    }

    /// The root element.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of elements, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root element exists from construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a child element under `parent`. Keys must be unique.
    pub fn append(
        &mut self,
        parent: NodeId,
        key: impl Into<String>,
        rect: Rect,
    ) -> ReticleResult<NodeId> {
        let key = key.into();
        if parent.idx() >= self.nodes.len() {
            return Err(ReticleError::scene(format!(
                "unknown parent element for '{key}'"
            )));
        }
        if self.by_key.contains_key(&key) {
            return Err(ReticleError::scene(format!("duplicate element id '{key}'")));
        }
        if !rect_is_finite(rect) {
            return Err(ReticleError::scene(format!(
                "element '{key}' has a non-finite rect"
            )));
        }
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Element {
            key: key.clone(),
            parent: Some(parent),
            children: Vec::new(),
            rect,
            attrs: BTreeMap::new(),
        });
        self.nodes[parent.idx()].children.push(id);
        self.by_key.insert(key, id);
        Ok(id)
    }

    /// Set (or overwrite) an attribute.
    pub fn set_attr(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> ReticleResult<()> {
        let el = self
            .nodes
            .get_mut(id.idx())
            .ok_or_else(|| ReticleError::scene(format!("unknown element {id:?}")))?;
        el.attrs.insert(name.into(), value.into());
        Ok(())
    }

    /// Move/resize an element. Non-finite rects are rejected.
    pub fn set_rect(&mut self, id: NodeId, rect: Rect) -> ReticleResult<()> {
        if !rect_is_finite(rect) {
            return Err(ReticleError::scene("element rect must be finite"));
        }
        let el = self
            .nodes
            .get_mut(id.idx())
            .ok_or_else(|| ReticleError::scene(format!("unknown element {id:?}")))?;
        el.rect = rect;
        Ok(())
    }

    /// Attribute value, if present.
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.nodes
            .get(id.idx())
            .and_then(|el| el.attrs.get(name))
            .map(String::as_str)
    }

    /// True when the attribute is present (any value, including empty).
    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    /// Current bounding box of an element.
    pub fn bounding_box(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id.idx()).map(|el| el.rect)
    }

    /// Parent element (`None` for the root or unknown ids).
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.idx()).and_then(|el| el.parent)
    }

    /// Element by key.
    pub fn lookup(&self, key: &str) -> Option<NodeId> {
        self.by_key.get(key).copied()
    }

    /// Key of an element.
    pub fn key(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id.idx()).map(|el| el.key.as_str())
    }

    /// `id` followed by each of its ancestors up to the root.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        let next = (id.idx() < self.nodes.len()).then_some(id);
        Ancestors { doc: self, next }
    }

    /// Nearest element, starting at `id` itself, that carries attribute `name`.
    pub fn closest_with_attr(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.ancestors(id).find(|&n| self.has_attr(n, name))
    }

    /// Inclusive containment: an element contains itself.
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors(node).any(|n| n == ancestor)
    }

    /// Topmost element under `p`: deeper elements win over their ancestors and later siblings
    /// over earlier ones. Children are only considered when `p` lies inside their parent.
    pub fn hit_test(&self, p: Point) -> Option<NodeId> {
        let root = self.root();
        if !self.nodes[root.idx()].rect.contains(p) {
            return None;
        }
        let mut current = root;
        'descend: loop {
            for &child in self.nodes[current.idx()].children.iter().rev() {
                if self.nodes[child.idx()].rect.contains(p) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }
}

/// Iterator returned by [`Document::ancestors`].
pub struct Ancestors<'a> {
    doc: &'a Document,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let cur = self.next?;
        self.next = self.doc.parent(cur);
        Some(cur)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/document/tree.rs"]
mod tests;
