use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        InviteError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(InviteError::storage("x").to_string().contains("storage error:"));
    assert!(InviteError::render("x").to_string().contains("render error:"));
    assert!(InviteError::export("x").to_string().contains("export error:"));
    assert!(InviteError::share("x").to_string().contains("share error:"));
    assert!(
        InviteError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = InviteError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
