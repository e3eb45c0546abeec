use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LintransError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(LintransError::input("x").to_string().contains("input error:"));
    assert!(
        LintransError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        LintransError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LintransError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
