use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        ReticleError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(ReticleError::scene("x").to_string().contains("scene error:"));
    assert!(
        ReticleError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        ReticleError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = ReticleError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
