use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(DmdError::config("x").to_string().contains("config error:"));
    assert!(DmdError::decode("x").to_string().contains("decode error:"));
    assert!(DmdError::encode("x").to_string().contains("encode error:"));
    assert!(
        DmdError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn io_keeps_context_and_source() {
    let err = DmdError::io(
        "read source 'a.png'",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    assert!(err.to_string().contains("a.png"));
    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("gone"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DmdError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn context_wrapped_errors_become_other() {
    use anyhow::Context as _;

    fn build() -> DmdResult<()> {
        Err::<(), _>(std::io::Error::other("pool exhausted")).context("build rayon thread pool")?;
        Ok(())
    }

    let err = build().unwrap_err();
    assert!(matches!(err, DmdError::Other(_)));
    assert_eq!(err.to_string(), "build rayon thread pool");
    assert!(format!("{:#}", anyhow::Error::from(err)).contains("pool exhausted"));
}
