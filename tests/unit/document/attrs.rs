use super::*;
use crate::foundation::core::Rect;

#[test]
fn padding_defaults_blank_garbage_and_negatives() {
    assert_eq!(parse_padding(None, 36.0), 36.0);
    assert_eq!(parse_padding(Some("24"), 36.0), 24.0);
    assert_eq!(parse_padding(Some(" 12.5 "), 36.0), 12.5);
    assert_eq!(parse_padding(Some(""), 36.0), 0.0);
    assert_eq!(parse_padding(Some("wide"), 36.0), 36.0);
    assert_eq!(parse_padding(Some("-8"), 36.0), 0.0);
    assert_eq!(parse_padding(Some("inf"), 36.0), 36.0);
}

#[test]
fn label_is_trimmed_and_blank_is_none() {
    assert_eq!(parse_label(Some("  Email ")), Some("Email".to_string()));
    assert_eq!(parse_label(Some("   ")), None);
    assert_eq!(parse_label(None), None);
}

#[test]
fn tone_only_recognizes_dark() {
    assert_eq!(Tone::from_attr(Some("dark")), Tone::Dark);
    assert_eq!(Tone::from_attr(Some(" dark ")), Tone::Dark);
    assert_eq!(Tone::from_attr(Some("light")), Tone::Light);
    assert_eq!(Tone::from_attr(Some("neon")), Tone::Light);
    assert_eq!(Tone::from_attr(None), Tone::Light);
    assert_eq!(Tone::Dark.as_str(), "dark");
}

#[test]
fn read_collects_all_companion_attributes() {
    let mut doc = Document::new(Rect::new(0.0, 0.0, 100.0, 100.0));
    let root = doc.root();
    let cta = doc
        .append(root, "cta", Rect::new(10.0, 10.0, 60.0, 30.0))
        .unwrap();
    doc.set_attr(cta, TARGET_ATTR, "").unwrap();
    assert_eq!(
        TargetAttrs::read(&doc, cta, 36.0),
        TargetAttrs {
            padding: 36.0,
            label: None,
            tone: Tone::Light,
        }
    );

    doc.set_attr(cta, PADDING_ATTR, "48").unwrap();
    doc.set_attr(cta, TEXT_ATTR, "Email").unwrap();
    doc.set_attr(cta, TONE_ATTR, "dark").unwrap();
    assert_eq!(
        TargetAttrs::read(&doc, cta, 36.0),
        TargetAttrs {
            padding: 48.0,
            label: Some("Email".to_string()),
            tone: Tone::Dark,
        }
    );
}
