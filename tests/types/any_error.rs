use kind_error::sentry::{KindSentryError, SentryData};
use kind_error::{AnyError, Errors, KindError, KindErrorOptions, PlainError};

#[test]
fn capabilities_by_variant() {
    let plain: AnyError = PlainError::new("plain").into();
    let kind: AnyError = KindError::unknown("kind").into();
    let sentry: AnyError = KindSentryError::new(
        "sentry",
        Errors::INTERNAL,
        KindErrorOptions::default(),
        SentryData::default().with_tag("a", "b"),
    )
    .unwrap()
    .into();

    assert!(plain.as_kind_error().is_none());
    assert_eq!(plain.kind(), None);
    assert!(!plain.has_sentry_data());

    assert_eq!(kind.kind(), Some("Unknown"));
    assert!(kind.sentry_data().is_none());

    assert_eq!(sentry.kind(), Some("Internal"));
    assert!(sentry.has_sentry_data());
    assert_eq!(sentry.sentry_data().unwrap().tags["a"], "b");
}

#[test]
fn original_message_and_stack() {
    let plain: AnyError = PlainError::new("plain").with_stack("Error: plain\n at x").into();
    assert_eq!(plain.original_message(), "plain");
    assert_eq!(plain.original_stack(), "Error: plain\n\tat x");

    let kind: AnyError = KindError::new(
        "outer",
        "Outer",
        KindErrorOptions::default().stack_frames(["at y"]).cause(plain),
    )
    .unwrap()
    .into();
    assert_eq!(kind.original_message(), "outer");
    assert_eq!(kind.original_stack(), "OuterError: outer\n\tat y");
    assert_eq!(kind.to_string(), "OuterError: outer\n\tcaused by\n\t\tError: plain");
}
