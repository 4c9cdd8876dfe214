use super::*;

fn page() -> (Document, NodeId, NodeId, NodeId, NodeId) {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 1280.0, 800.0));
    let root = doc.root();
    let card = doc
        .append(root, "card", Rect::new(100.0, 100.0, 500.0, 400.0))
        .unwrap();
    let button = doc
        .append(card, "button", Rect::new(150.0, 300.0, 300.0, 350.0))
        .unwrap();
    let label = doc
        .append(button, "label", Rect::new(160.0, 310.0, 290.0, 340.0))
        .unwrap();
    let other = doc
        .append(root, "other", Rect::new(700.0, 100.0, 900.0, 300.0))
        .unwrap();
    (doc, card, button, label, other)
}

#[test]
fn closest_with_attr_includes_self_and_walks_up() {
    let (mut doc, card, button, label, other) = page();
    doc.set_attr(card, "data-cursor-target", "").unwrap();
    assert_eq!(doc.closest_with_attr(label, "data-cursor-target"), Some(card));
    assert_eq!(doc.closest_with_attr(card, "data-cursor-target"), Some(card));
    assert_eq!(doc.closest_with_attr(other, "data-cursor-target"), None);

    doc.set_attr(button, "data-cursor-target", "").unwrap();
    assert_eq!(
        doc.closest_with_attr(label, "data-cursor-target"),
        Some(button)
    );
}

#[test]
fn contains_is_inclusive_and_directional() {
    let (doc, card, button, label, other) = page();
    assert!(doc.contains(card, card));
    assert!(doc.contains(card, label));
    assert!(doc.contains(button, label));
    assert!(!doc.contains(label, button));
    assert!(!doc.contains(card, other));
    assert!(doc.contains(doc.root(), other));
}

#[test]
fn ancestors_end_at_root() {
    let (doc, card, button, label, _) = page();
    let chain: Vec<_> = doc.ancestors(label).collect();
    assert_eq!(chain, vec![label, button, card, doc.root()]);
    assert_eq!(doc.ancestors(NodeId(999)).count(), 0);
}

#[test]
fn hit_test_prefers_deepest_then_latest() {
    let (mut doc, card, button, label, other) = page();
    assert_eq!(doc.hit_test(Point::new(200.0, 320.0)), Some(label));
    assert_eq!(doc.hit_test(Point::new(155.0, 345.0)), Some(button));
    assert_eq!(doc.hit_test(Point::new(120.0, 120.0)), Some(card));
    assert_eq!(doc.hit_test(Point::new(800.0, 200.0)), Some(other));
    assert_eq!(doc.hit_test(Point::new(1000.0, 700.0)), Some(doc.root()));
    assert_eq!(doc.hit_test(Point::new(-5.0, 10.0)), None);

    let overlay = doc
        .append(doc.root(), "overlay", Rect::new(0.0, 0.0, 1280.0, 800.0))
        .unwrap();
    assert_eq!(doc.hit_test(Point::new(200.0, 320.0)), Some(overlay));
}

#[test]
fn append_rejects_duplicates_and_bad_rects() {
    let (mut doc, card, ..) = page();
    assert!(doc.append(card, "button", Rect::ZERO).is_err());
    assert!(doc.append(card, Document::ROOT_KEY, Rect::ZERO).is_err());
    assert!(
        doc.append(card, "nan", Rect::new(0.0, 0.0, f64::NAN, 1.0))
            .is_err()
    );
    assert!(doc.append(NodeId(999), "orphan", Rect::ZERO).is_err());
}

#[test]
fn lookup_key_and_live_rects() {
    let (mut doc, card, ..) = page();
    assert_eq!(doc.lookup("card"), Some(card));
    assert_eq!(doc.key(card), Some("card"));
    assert_eq!(doc.lookup("missing"), None);

    let moved = Rect::new(120.0, 140.0, 520.0, 440.0);
    doc.set_rect(card, moved).unwrap();
    assert_eq!(doc.bounding_box(card), Some(moved));
    assert_eq!(doc.len(), 5);
    assert!(!doc.is_empty());
}
