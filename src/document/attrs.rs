use crate::document::tree::{Document, NodeId};

/// Marker attribute: the element is a cursor target.
pub const TARGET_ATTR: &str = "data-cursor-target";
/// Extra diameter added around the target's longer side.
pub const PADDING_ATTR: &str = "data-cursor-padding";
/// Label rotated around the reticle.
pub const TEXT_ATTR: &str = "data-cursor-text";
/// `light` or `dark`.
pub const TONE_ATTR: &str = "data-cursor-tone";

/// Color theme of the reticle while hovering a target.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Default.
    #[default]
    Light,
    /// Dark variant.
    Dark,
}

impl Tone {
    /// Parse an attribute value; anything but `dark` is light.
    pub fn from_attr(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Attribute spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Display metadata read from a target element's attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetAttrs {
    /// Non-negative padding in pixels.
    pub padding: f64,
    /// Trimmed label, `None` when absent or blank.
    pub label: Option<String>,
    /// Color theme.
    pub tone: Tone,
}

impl TargetAttrs {
    /// Read the companion attributes of `id`, falling back to defaults.
    pub fn read(doc: &Document, id: NodeId, default_padding: f64) -> Self {
        Self {
            padding: parse_padding(doc.attr(id, PADDING_ATTR), default_padding),
            label: parse_label(doc.attr(id, TEXT_ATTR)),
            tone: Tone::from_attr(doc.attr(id, TONE_ATTR)),
        }
    }
}

// Blank values count as 0, like numeric coercion of an empty string. Garbage falls back to the
// default and negatives clamp to 0.
pub(crate) fn parse_padding(raw: Option<&str>, default_padding: f64) -> f64 {
    let Some(raw) = raw else {
        return default_padding;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return 0.0;
    }
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => v.max(0.0),
        _ => default_padding,
    }
}

pub(crate) fn parse_label(raw: Option<&str>) -> Option<String> {
    let t = raw?.trim();
    (!t.is_empty()).then(|| t.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/document/attrs.rs"]
mod tests;
