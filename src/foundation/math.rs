use crate::foundation::core::Rect;

/// Wrap an angle into `[0, 360)`.
pub(crate) fn wrap_degrees(deg: f64) -> f64 {
    if !deg.is_finite() {
        return 0.0;
    }
    let w = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if w >= 360.0 { 0.0 } else { w }
}

pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub(crate) fn lerp_rect(a: Rect, b: Rect, t: f64) -> Rect {
    Rect::new(
        lerp(a.x0, b.x0, t),
        lerp(a.y0, b.y0, t),
        lerp(a.x1, b.x1, t),
        lerp(a.y1, b.y1, t),
    )
}

pub(crate) fn rect_is_finite(r: Rect) -> bool {
    r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
