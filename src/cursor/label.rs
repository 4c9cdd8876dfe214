use crate::foundation::math::wrap_degrees;

/// One character of the ring label and where it sits on the circle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GlyphPlacement {
    /// The character.
    pub ch: char,
    /// Offset around the ring in degrees, before the live ring rotation.
    pub angle_deg: f64,
}

/// Text laid around the reticle: the label, terminated by the separator, repeated `repeat`
/// times.
///
/// A label that already ends with the separator is repeated as-is; otherwise
/// `" {separator} "` is appended first.
pub fn ring_text(label: &str, separator: char, repeat: usize) -> String {
    if label.ends_with(separator) {
        label.repeat(repeat)
    } else {
        format!("{label} {separator} ").repeat(repeat)
    }
}

/// Evenly spaced placements: character `i` of `n` sits at `360 * i / n` degrees.
pub fn layout_ring(text: &str) -> Vec<GlyphPlacement> {
    let n = text.chars().count();
    text.chars()
        .enumerate()
        .map(|(i, ch)| GlyphPlacement {
            ch,
            angle_deg: 360.0 * i as f64 / n as f64,
        })
        .collect()
}

/// Persistent rotation of the ring. Survives re-hovers; only advances while a labelled target
/// is active.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct RotatingLabel {
    rotation_deg: f64,
}

impl RotatingLabel {
    pub(crate) fn rotation_deg(&self) -> f64 {
        self.rotation_deg
    }

    pub(crate) fn advance(&mut self, elapsed_ms: f64, deg_per_ms: f64) {
        self.rotation_deg = wrap_degrees(self.rotation_deg + elapsed_ms * deg_per_ms);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cursor/label.rs"]
mod tests;
