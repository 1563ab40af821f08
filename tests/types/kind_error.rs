use kind_error::types::stack_trace::common_suffix_len;
use kind_error::{AnyError, Errors, KindError, KindErrorOptions, PlainError};
use serde_json::json;

fn frames(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn name_is_built_from_kind() {
    let err = KindError::new("missing", Errors::NOT_FOUND, KindErrorOptions::default()).unwrap();
    assert_eq!(err.kind(), "NotFound");
    assert_eq!(err.name(), "NotFoundError");
    assert_eq!(err.to_string(), "NotFoundError: missing");
}

#[test]
fn name_uses_prefix_and_name_override() {
    let options = KindErrorOptions::default().prefix("Db").name("Lookup");
    let err = KindError::new("missing", Errors::NOT_FOUND, options).unwrap();
    assert_eq!(err.kind(), "NotFound");
    assert_eq!(err.name(), "DbLookupError");
}

#[test]
fn unknown_defaults_kind() {
    let err = KindError::unknown("what happened");
    assert_eq!(err.kind(), Errors::UNKNOWN);
    assert_eq!(err.name(), "UnknownError");
}

#[test]
fn without_cause_message_is_unchanged() {
    let err = KindError::new(
        "plain message",
        Errors::INTERNAL,
        KindErrorOptions::default().stack_frames(["at a", "at b"]),
    )
    .unwrap();

    assert_eq!(err.message(), "plain message");
    assert_eq!(err.original_message(), "plain message");
    assert_eq!(err.stack(), "InternalError: plain message\n\tat a\n\tat b");
    assert_eq!(err.original_stack(), err.stack());
    assert!(err.cause().is_none());
}

#[test]
fn strip_stack_frames_respects_minimum() {
    let options = KindErrorOptions::default()
        .stack_frames(["at new", "at caller", "at main"])
        .strip_stack_frames(2)
        .minimum_frame_count(2);
    let err = KindError::new("trimmed", Errors::INTERNAL, options).unwrap();

    assert_eq!(err.stack_frames(), frames(&["at caller", "at main"]));
}

#[test]
fn cause_enriches_message_but_not_stack_by_default() {
    let cause = PlainError::new("disk full").with_stack("Error: disk full\n    at write\n    at main");
    let options = KindErrorOptions::default().stack_frames(["at save", "at main"]).cause(cause);
    let err = KindError::new("save failed", Errors::INTERNAL, options).unwrap();

    assert_eq!(err.message(), "save failed\n\tcaused by\n\t\tError: disk full");
    assert_eq!(err.original_message(), "save failed");
    assert_eq!(err.stack(), "InternalError: save failed\n\tat save\n\tat main");
    assert_eq!(err.original_stack(), err.stack());
}

#[test]
fn composite_stack_includes_cause_frames() {
    let cause = PlainError::new("disk full").with_stack("Error: disk full\n    at write\n    at main");
    let options = KindErrorOptions::default()
        .stack_frames(["at save", "at main"])
        .cause(cause)
        .composite_stack(true);
    let err = KindError::new("save failed", Errors::INTERNAL, options).unwrap();

    assert_eq!(
        err.stack(),
        "InternalError: save failed\n\tcaused by\n\t\tError: disk full\n\tat save\n\tat write\n\tat main"
    );
    assert_eq!(err.original_stack(), "InternalError: save failed\n\tat save\n\tat main");
    assert_eq!(err.stack_frames(), frames(&["at save", "at write", "at main"]));
}

#[test]
fn nested_causes_cascade_into_message() {
    let leaf = PlainError::new("LEAF");
    let middle =
        KindError::new("CAUSE", "CauseKind", KindErrorOptions::default().cause(leaf)).unwrap();
    let root = KindError::new("ROOT", "RootKind", KindErrorOptions::default().cause(middle)).unwrap();

    assert_eq!(
        root.message(),
        "ROOT\n\tcaused by\n\t\tCauseKindError: CAUSE\n\tcaused by\n\t\tError: LEAF"
    );
    assert_eq!(root.original_message(), "ROOT");
    assert_eq!(root.cause().and_then(AnyError::kind), Some("CauseKind"));
}

#[test]
fn captured_stack_is_standardized() {
    let err = KindError::new("captured", Errors::INTERNAL, KindErrorOptions::default()).unwrap();
    assert!(err.stack().starts_with("InternalError: captured"));
    for line in err.stack().lines().skip(1) {
        assert!(line.starts_with('\t'), "unexpected frame line {line:?}");
    }
}

#[test]
fn composite_stack_with_captured_frames_keeps_shared_tail_once() {
    let cause = KindError::new("inner", "Inner", KindErrorOptions::default()).unwrap();
    let cause_frames = cause.stack_frames().to_vec();
    let err = KindError::new(
        "outer",
        "Outer",
        KindErrorOptions::default().cause(cause).composite_stack(true),
    )
    .unwrap();

    let own_frames: Vec<String> = err
        .original_stack()
        .lines()
        .skip(1)
        .map(|line| line.trim_start_matches('\t').to_string())
        .collect();
    let shared = common_suffix_len(&own_frames, &cause_frames);

    let mut expected = own_frames[..own_frames.len() - shared].to_vec();
    expected.extend_from_slice(&cause_frames[..cause_frames.len() - shared]);
    expected.extend_from_slice(&own_frames[own_frames.len() - shared..]);
    assert_eq!(err.stack_frames(), expected);
}

#[test]
fn captured_stack_starts_at_the_caller() {
    let err = KindError::new("here", Errors::INTERNAL, KindErrorOptions::default()).unwrap();
    if let Some(first) = err.stack_frames().first() {
        assert!(
            first.contains("captured_stack_starts_at_the_caller"),
            "first frame is {first:?}"
        );
    }
    assert!(err.stack_frames().iter().all(|frame| !frame.contains("KindError::")));
}

#[test]
fn strip_stack_frames_counts_from_the_caller() {
    let full = KindError::new("full", Errors::INTERNAL, KindErrorOptions::default()).unwrap();
    let stripped = KindError::new(
        "stripped",
        Errors::INTERNAL,
        KindErrorOptions::default().strip_stack_frames(1),
    )
    .unwrap();

    if let Some(caller) = full.stack_frames().first() {
        assert!(caller.contains("strip_stack_frames_counts_from_the_caller"));
        assert_eq!(stripped.stack_frames(), &full.stack_frames()[1..]);
    }
}

#[test]
fn metadata_is_an_independent_copy() {
    let mut source = json!({"request": {"ids": [1, 2, 3]}, "user": "ada"});
    let err = KindError::new(
        "with metadata",
        Errors::INTERNAL,
        KindErrorOptions::default().metadata(&source),
    )
    .unwrap();

    source["request"]["ids"][0] = json!(99);
    source["user"] = json!("grace");

    let metadata = err.metadata().unwrap();
    assert_eq!(metadata["request"]["ids"], json!([1, 2, 3]));
    assert_eq!(metadata["user"], "ada");
}

#[test]
fn metadata_absent_by_default() {
    assert!(KindError::unknown("bare").metadata().is_none());
}

#[cfg(not(feature = "unchecked"))]
mod validation {
    use super::*;
    use kind_error::Error;

    #[test]
    fn rejects_whitespace_in_kind() {
        let result = KindError::new("msg", "Not Found", KindErrorOptions::default());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn rejects_empty_kind() {
        let result = KindError::new("msg", "", KindErrorOptions::default());
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn rejects_whitespace_in_name() {
        let result = KindError::new("msg", "Kind", KindErrorOptions::default().name("bad name"));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn rejects_whitespace_in_prefix() {
        let result = KindError::new("msg", "Kind", KindErrorOptions::default().prefix("a\tb"));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}

#[cfg(feature = "unchecked")]
mod unchecked {
    use super::*;

    #[test]
    fn whitespace_kind_is_accepted() {
        let err = KindError::new("m", "Not Found", KindErrorOptions::default()).unwrap();
        assert_eq!(err.name(), "Not FoundError");
    }

    #[test]
    fn empty_kind_and_spaced_prefix_are_accepted() {
        let err = KindError::new("m", "", KindErrorOptions::default().prefix("a b")).unwrap();
        assert_eq!(err.name(), "a bError");
    }
}
