//! Reducing a cause chain into one set of reporting data.

use serde_json::{Map, Value};

use crate::error::{Result, CHECKED};
use crate::sentry::normalize::truncate_tag_value;
use crate::sentry::{normalize_sentry_data, KindErrorDataOptions, SentryContext, SentryData};
use crate::traits::{errors_from_error, Order};
use crate::types::{AnyError, Errors};

/// Collates the reporting data of `error` and all of its causes.
///
/// The chain is reduced root-to-leaf with [`sentry_data_reducer`], normalized,
/// and then tagged with the root's kind, original message (for grouping) and
/// full message.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when a
/// configured tag name is not a valid tag key (checked builds only), and
/// propagates [`normalize_sentry_data`] failures.
///
/// # Examples
///
/// ```
/// use kind_error::sentry::{collate_sentry_data, KindErrorDataOptions, KindSentryError, SentryData};
/// use kind_error::{AnyError, Errors, KindErrorOptions, PlainError};
///
/// let err: AnyError = KindSentryError::new(
///     "checkout failed",
///     Errors::INTERNAL,
///     KindErrorOptions::default().cause(PlainError::new("timeout")),
///     SentryData::default().with_tag("shop", "42"),
/// )
/// .unwrap()
/// .into();
///
/// let data = collate_sentry_data(&KindErrorDataOptions::default(), &err).unwrap();
/// assert_eq!(data.tags["shop"], "42");
/// assert_eq!(data.tags["kind"], "Internal");
/// assert_eq!(data.tags["group_by_message"], "checkout failed");
/// assert!(data.contexts.contains_key("Source Error - 1"));
/// ```
pub fn collate_sentry_data(options: &KindErrorDataOptions, error: &AnyError) -> Result<SentryData> {
    if CHECKED {
        options.validate()?;
    }

    let reduced = errors_from_error(Some(error), Order::ConsequenceFirst)
        .enumerate()
        .fold(SentryData::default(), |acc, (index, current)| {
            sentry_data_reducer(options, acc, current, index)
        });
    tracing::trace!(
        tags = reduced.tags.len(),
        contexts = reduced.contexts.len(),
        "collated sentry data from cause chain"
    );

    let mut data = normalize_sentry_data(options, reduced)?;

    let kind = error.kind().unwrap_or(Errors::UNKNOWN);
    insert_tag(&mut data, &options.kind_tag_name, kind);

    let group_by = error.original_message().trim();
    if !group_by.is_empty() {
        insert_tag(&mut data, &options.group_by_tag_name, group_by);
    }

    insert_tag(&mut data, &options.concatenated_message_tag_name, error.message());
    Ok(data)
}

fn insert_tag(data: &mut SentryData, key: &str, value: &str) {
    let mut value = value.to_string();
    truncate_tag_value(&mut value);
    data.tags.insert(key.to_string(), value);
}

/// Folds one error of a cause chain into the accumulated data.
///
/// At `index` 0 (the root) the root's data, if any, becomes the accumulator.
/// Deeper errors merge over it: their tags and contexts win on key collisions,
/// and their fingerprint entries are appended unless already present. Every
/// deeper error also gets a `"{prefix}{index}"` context recording its summary,
/// raw data and original stack, so nothing is lost to overrides.
#[must_use]
pub fn sentry_data_reducer(
    options: &KindErrorDataOptions,
    mut acc: SentryData,
    current: &AnyError,
    index: usize,
) -> SentryData {
    let current_data = current.sentry_data();

    if index == 0 {
        return current_data.cloned().unwrap_or(acc);
    }

    if let Some(data) = current_data {
        acc.tags.extend(data.tags.iter().map(|(k, v)| (k.clone(), v.clone())));
        acc.contexts.extend(data.contexts.iter().map(|(k, v)| (k.clone(), v.clone())));
        acc.fingerprint = merge_fingerprints(&acc.fingerprint, &data.fingerprint);
    }

    acc.contexts.insert(
        format!("{}{}", options.causal_error_context_prefix, index),
        causal_context(current, current_data),
    );
    acc
}

/// Union of both fingerprints in first-seen order, without duplicates.
fn merge_fingerprints(first: &[String], second: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(first.len() + second.len());
    for entry in first.iter().chain(second) {
        if !merged.contains(entry) {
            merged.push(entry.clone());
        }
    }
    merged
}

fn causal_context(error: &AnyError, data: Option<&SentryData>) -> SentryContext {
    let raw = data
        .and_then(|data| serde_json::to_string(data).ok())
        .unwrap_or_default();

    let mut context = Map::new();
    context.insert("error".into(), Value::String(error.to_string()));
    context.insert("sentryData".into(), Value::String(raw));
    context.insert("originalStack".into(), Value::String(error.original_stack()));
    context
}
