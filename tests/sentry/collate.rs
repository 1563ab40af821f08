use kind_error::sentry::{collate_sentry_data, KindErrorDataOptions, KindSentryError, SentryData};
use kind_error::{AnyError, Errors, KindError, KindErrorOptions, PlainError};
use serde_json::json;

fn chain() -> AnyError {
    let leaf = PlainError::new("connection reset");
    let middle = KindSentryError::new(
        "query failed",
        Errors::TRANSIENT_SERVICE,
        KindErrorOptions::default().cause(leaf),
        SentryData::default()
            .with_tag("db", "orders")
            .with_tag("region", "eu")
            .with_fingerprint(["db", "query"]),
    )
    .unwrap();
    KindSentryError::new(
        "checkout failed",
        Errors::INTERNAL,
        KindErrorOptions::default().cause(middle),
        SentryData::default()
            .with_tag("region", "us")
            .with_context("cart", json!({"items": 3}))
            .with_fingerprint(["checkout"]),
    )
    .unwrap()
    .into()
}

#[test]
fn whole_chain_is_collated() {
    let root = chain();
    let data = collate_sentry_data(&KindErrorDataOptions::default(), &root).unwrap();

    assert_eq!(data.tags["db"], "orders");
    assert_eq!(data.tags["region"], "eu");
    assert_eq!(data.tags["kind"], "Internal");
    assert_eq!(data.tags["group_by_message"], "checkout failed");
    assert_eq!(data.tags["concatenated_message"], root.message());
    assert_eq!(data.contexts["cart"]["items"], 3);
    assert!(data.contexts.contains_key("Source Error - 1"));
    assert!(data.contexts.contains_key("Source Error - 2"));
    assert!(!data.contexts.contains_key("Source Error - 0"));
    assert_eq!(data.fingerprint, ["checkout", "db", "query"]);
}

#[test]
fn plain_root_is_tagged_unknown() {
    let root: AnyError = PlainError::new("bare").into();
    let data = collate_sentry_data(&KindErrorDataOptions::default(), &root).unwrap();

    assert_eq!(data.tags["kind"], "Unknown");
    assert_eq!(data.tags["group_by_message"], "bare");
    assert_eq!(data.tags["concatenated_message"], "bare");
    assert!(data.contexts.is_empty());
    assert!(data.fingerprint.is_empty());
}

#[test]
fn blank_original_message_is_not_a_group() {
    let root: AnyError = KindError::unknown("   ").into();
    let data = collate_sentry_data(&KindErrorDataOptions::default(), &root).unwrap();

    assert!(!data.tags.contains_key("group_by_message"));
    assert_eq!(data.tags["kind"], "Unknown");
}

#[test]
fn long_messages_are_truncated_in_tags() {
    let message = "m".repeat(300);
    let root: AnyError = KindError::unknown(message.as_str()).into();
    let data = collate_sentry_data(&KindErrorDataOptions::default(), &root).unwrap();

    assert_eq!(data.tags["group_by_message"].chars().count(), 200);
    assert_eq!(data.tags["concatenated_message"].chars().count(), 200);
}

#[test]
fn tag_names_follow_options() {
    let options = KindErrorDataOptions::default()
        .kind_tag_name("error_kind")
        .group_by_tag_name("group")
        .concatenated_message_tag_name("full_message")
        .causal_error_context_prefix("cause-");
    let data = collate_sentry_data(&options, &chain()).unwrap();

    assert_eq!(data.tags["error_kind"], "Internal");
    assert_eq!(data.tags["group"], "checkout failed");
    assert!(data.tags.contains_key("full_message"));
    assert!(data.contexts.contains_key("cause-2"));
    assert!(!data.tags.contains_key("kind"));
}

#[cfg(not(feature = "unchecked"))]
#[test]
fn reserved_tag_in_chain_is_rejected() {
    let cause = KindSentryError::new(
        "inner",
        Errors::INTERNAL,
        KindErrorOptions::default(),
        SentryData::default().with_tag("kind", "custom"),
    )
    .unwrap();
    let root: AnyError = KindError::new("outer", Errors::INTERNAL, KindErrorOptions::default().cause(cause))
        .unwrap()
        .into();

    match collate_sentry_data(&KindErrorDataOptions::default(), &root) {
        Err(kind_error::Error::InvalidSentryData(rejection)) => {
            let details = &rejection.sentry_data().contexts["Invalid Sentry Data"];
            assert_eq!(details["reserved"], json!(["kind"]));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn option_tag_names_are_validated() {
    assert!(KindErrorDataOptions::default().validate().is_ok());
    assert!(KindErrorDataOptions::default().kind_tag_name("k".repeat(32)).validate().is_ok());

    let result = KindErrorDataOptions::default()
        .kind_tag_name("")
        .concatenated_message_tag_name("m".repeat(33))
        .validate();
    match result {
        Err(kind_error::Error::InvalidArgument(message)) => {
            assert!(message.contains(&"m".repeat(33)));
            assert!(message.contains("\"\""));
        }
        other => panic!("expected invalid argument, got {other:?}"),
    }
}

#[cfg(not(feature = "unchecked"))]
#[test]
fn misconfigured_tag_name_rejects_collation() {
    let options = KindErrorDataOptions::default().group_by_tag_name("");
    let root: AnyError = PlainError::new("bare").into();
    assert!(matches!(
        collate_sentry_data(&options, &root),
        Err(kind_error::Error::InvalidArgument(_))
    ));
}
