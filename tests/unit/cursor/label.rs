use super::*;

#[test]
fn email_ring_repeats_with_separator() {
    let ring = ring_text("Email", '•', 6);
    assert_eq!(ring, "Email • ".repeat(6));
    assert_eq!(ring.chars().count(), 48);

    let glyphs = layout_ring(&ring);
    assert_eq!(glyphs.len(), 48);
    assert_eq!(glyphs[0].ch, 'E');
    assert_eq!(glyphs[0].angle_deg, 0.0);
    assert!((glyphs[1].angle_deg - 7.5).abs() < 1e-12);
    assert_eq!(glyphs[6].ch, '•');
    assert!((glyphs[47].angle_deg - 352.5).abs() < 1e-12);
}

#[test]
fn label_ending_in_separator_is_not_extended() {
    assert_eq!(ring_text("Go •", '•', 3), "Go •Go •Go •");
}

#[test]
fn empty_text_lays_out_nothing() {
    assert!(layout_ring("").is_empty());
}

#[test]
fn rotation_accumulates_and_wraps() {
    let mut r = RotatingLabel::default();
    r.advance(1000.0, 0.03);
    assert!((r.rotation_deg() - 30.0).abs() < 1e-9);
    r.advance(11_000.0, 0.03);
    assert!(r.rotation_deg() < 1e-9);
    r.advance(16.0, 0.03);
    assert!((r.rotation_deg() - 0.48).abs() < 1e-6);
    assert!((0.0..360.0).contains(&r.rotation_deg()));
}
