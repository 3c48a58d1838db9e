use super::FfError;

#[test]
fn helpers_format_messages() {
    let err = FfError::probe_parse("abc");
    assert_eq!(err.to_string(), "unexpected probe output: abc");

    let err = FfError::launch("permission denied");
    assert_eq!(
        err.to_string(),
        "failed to launch transcoder: permission denied"
    );
}

#[test]
fn launch_failures_are_classified() {
    assert!(FfError::launch("x").is_launch_failure());
    assert!(FfError::dependency("ffmpeg").is_launch_failure());
    assert!(FfError::probe_launch("x").is_launch_failure());
    assert!(!FfError::probe_parse("x").is_launch_failure());
    assert!(!FfError::Task("join".into()).is_launch_failure());
}
