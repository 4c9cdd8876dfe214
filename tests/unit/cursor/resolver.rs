use super::*;
use crate::document::attrs::{PADDING_ATTR, TEXT_ATTR, TONE_ATTR};

struct Page {
    doc: Document,
    hero: NodeId,
    hero_title: NodeId,
    hero_cta: NodeId,
    cta_icon: NodeId,
    sibling: NodeId,
    plain: NodeId,
}

fn page() -> Page {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 1440.0, 900.0));
    let root = doc.root();
    let hero = doc
        .append(root, "hero", Rect::new(80.0, 80.0, 880.0, 480.0))
        .unwrap();
    let hero_title = doc
        .append(hero, "hero-title", Rect::new(100.0, 100.0, 700.0, 180.0))
        .unwrap();
    let hero_cta = doc
        .append(hero, "hero-cta", Rect::new(100.0, 380.0, 260.0, 428.0))
        .unwrap();
    let cta_icon = doc
        .append(hero_cta, "cta-icon", Rect::new(230.0, 394.0, 250.0, 414.0))
        .unwrap();
    let sibling = doc
        .append(root, "sibling", Rect::new(960.0, 80.0, 1360.0, 280.0))
        .unwrap();
    let plain = doc
        .append(root, "plain", Rect::new(960.0, 400.0, 1360.0, 600.0))
        .unwrap();

    doc.set_attr(hero, TARGET_ATTR, "").unwrap();
    doc.set_attr(hero_cta, TARGET_ATTR, "").unwrap();
    doc.set_attr(hero_cta, TEXT_ATTR, " Email ").unwrap();
    doc.set_attr(hero_cta, PADDING_ATTR, "20").unwrap();
    doc.set_attr(sibling, TARGET_ATTR, "").unwrap();
    doc.set_attr(sibling, TONE_ATTR, "dark").unwrap();

    Page {
        doc,
        hero,
        hero_title,
        hero_cta,
        cta_icon,
        sibling,
        plain,
    }
}

#[test]
fn over_resolves_nearest_target_and_its_metadata() {
    let p = page();
    let mut r = TargetResolver::default();

    let Resolution::Entered(t) = r.pointer_over(&p.doc, Some(p.cta_icon), 36.0) else {
        panic!("expected enter");
    };
    assert_eq!(t.element, p.hero_cta);
    assert_eq!(t.label.as_deref(), Some("Email"));
    assert_eq!(t.padding, 20.0);
    assert_eq!(t.tone, Tone::Light);
    assert_eq!(t.center(), Point::new(180.0, 404.0));
    assert_eq!(t.reticle_size(), 160.0 + 20.0);
    assert_eq!(r.active(), Some(&t));
}

#[test]
fn default_padding_applies_when_unspecified() {
    let p = page();
    let mut r = TargetResolver::default();
    let Resolution::Entered(t) = r.pointer_over(&p.doc, Some(p.sibling), 36.0) else {
        panic!("expected enter");
    };
    assert_eq!(t.reticle_size(), 400.0 + 36.0);
    assert_eq!(t.tone, Tone::Dark);
}

#[test]
fn over_plain_markup_clears_target() {
    let p = page();
    let mut r = TargetResolver::default();
    r.pointer_over(&p.doc, Some(p.sibling), 36.0);
    assert_eq!(r.pointer_over(&p.doc, Some(p.plain), 36.0), Resolution::NoTarget);
    assert!(r.active().is_none());
    assert_eq!(r.pointer_over(&p.doc, None, 36.0), Resolution::NoTarget);
}

#[test]
fn out_into_own_subtree_is_suppressed() {
    let p = page();
    let mut r = TargetResolver::default();
    r.pointer_over(&p.doc, Some(p.hero), 36.0);

    // hero -> hero-title (resolves to hero itself) and hero -> nested target.
    assert_eq!(
        r.pointer_out(&p.doc, Some(p.hero_title)),
        Exit::Suppressed
    );
    assert_eq!(
        r.pointer_out(&p.doc, Some(p.cta_icon)),
        Exit::Suppressed
    );
    assert_eq!(r.active().map(|t| t.element), Some(p.hero));
}

#[test]
fn out_to_sibling_or_nothing_exits() {
    let p = page();
    let mut r = TargetResolver::default();
    r.pointer_over(&p.doc, Some(p.hero), 36.0);
    assert_eq!(r.pointer_out(&p.doc, Some(p.sibling)), Exit::Left);
    assert!(r.active().is_none());

    r.pointer_over(&p.doc, Some(p.hero), 36.0);
    assert_eq!(r.pointer_out(&p.doc, Some(p.plain)), Exit::Left);

    r.pointer_over(&p.doc, Some(p.hero), 36.0);
    assert_eq!(r.pointer_out(&p.doc, None), Exit::Left);
}

#[test]
fn out_from_nested_target_to_parent_target_exits() {
    let p = page();
    let mut r = TargetResolver::default();
    r.pointer_over(&p.doc, Some(p.hero_cta), 36.0);
    // The parent target is not inside the cta's subtree.
    assert_eq!(r.pointer_out(&p.doc, Some(p.hero_title)), Exit::Left);
}

#[test]
fn refresh_bounds_follows_live_geometry() {
    let mut p = page();
    let mut r = TargetResolver::default();
    assert_eq!(r.refresh_bounds(&p.doc), None);

    r.pointer_over(&p.doc, Some(p.sibling), 36.0);
    p.doc
        .set_rect(p.sibling, Rect::new(1000.0, 100.0, 1400.0, 300.0))
        .unwrap();
    assert_eq!(r.refresh_bounds(&p.doc), Some(Point::new(1200.0, 200.0)));
    assert_eq!(
        r.active().map(|t| t.bounds),
        Some(Rect::new(1000.0, 100.0, 1400.0, 300.0))
    );
}
