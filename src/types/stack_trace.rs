//! Stack frame capture, parsing and deduplication.
//!
//! Frames are kept as trimmed text lines such as
//! `at my_service::handler (src/handler.rs:42:9)`; nothing downstream depends on
//! their exact shape, only on equality between frames of related errors.

use std::backtrace::{Backtrace, BacktraceStatus};

/// Captures the calling thread's stack as frame lines.
///
/// Frames of the capture machinery and of this crate's error construction are
/// dropped, so the first frame is the code that created the error. Returns an
/// empty list on platforms where backtraces are unsupported.
#[must_use]
pub fn capture_frames() -> Vec<String> {
    let backtrace = Backtrace::force_capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }
    parse_backtrace(&backtrace.to_string())
}

/// Parses the textual rendering of a [`Backtrace`] into frame lines.
pub(crate) fn parse_backtrace(text: &str) -> Vec<String> {
    let mut parsed: Vec<(&str, Option<&str>)> = Vec::new();

    for line in text.lines().map(str::trim) {
        if let Some(location) = line.strip_prefix("at ") {
            if let Some(last) = parsed.last_mut().filter(|last| last.1.is_none()) {
                last.1 = Some(location);
            }
            continue;
        }

        if let Some((index, symbol)) = line.split_once(": ") {
            if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
                parsed.push((symbol, None));
            }
        }
    }

    let skip = construction_frame_count(&parsed);
    parsed
        .into_iter()
        .skip(skip)
        .map(|(symbol, location)| match location {
            Some(location) => format!("at {symbol} ({location})"),
            None => format!("at {symbol}"),
        })
        .collect()
}

/// Counts the leading frames spent capturing the stack and building the error.
///
/// Within the leading run of frames from this crate and the standard library,
/// everything up to and including the last frame of this crate is dropped.
/// Without such a frame only the backtrace machinery is dropped.
fn construction_frame_count(frames: &[(&str, Option<&str>)]) -> usize {
    let leading = frames
        .iter()
        .take_while(|(symbol, _)| is_crate_frame(symbol) || is_library_frame(symbol))
        .count();

    match frames[..leading].iter().rposition(|(symbol, _)| is_crate_frame(symbol)) {
        Some(last) => last + 1,
        None => frames
            .iter()
            .take_while(|(symbol, _)| symbol_paths(symbol).any(|path| path.starts_with("std::backtrace")))
            .count(),
    }
}

/// The type and trait paths a demangled symbol names.
///
/// `<F as core::ops::function::FnOnce<A>>::call_once` yields `F` and
/// `core::ops::function::FnOnce<A>>::call_once`.
fn symbol_paths(symbol: &str) -> impl Iterator<Item = &str> {
    symbol.split(" as ").map(|path| path.trim_start_matches('<'))
}

fn is_crate_frame(symbol: &str) -> bool {
    let krate = module_path!().split("::").next().unwrap_or_default();
    symbol_paths(symbol).any(|path| path.split("::").next() == Some(krate))
}

fn is_library_frame(symbol: &str) -> bool {
    symbol_paths(symbol)
        .any(|path| ["std::", "core::", "alloc::"].iter().any(|prefix| path.starts_with(prefix)))
}

/// Splits raw stack text into frames, dropping the leading summary line.
///
/// `summary` is the error's own `"{name}: {message}"` rendering. When the stack
/// text *is* the summary, nothing was duplicated and every line is kept.
pub(crate) fn frames_from_stack_text(stack: &str, summary: &str) -> Vec<String> {
    let body = if stack == summary {
        stack
    } else if let Some(rest) = stack.strip_prefix(summary).filter(|rest| rest.starts_with('\n')) {
        rest
    } else {
        match (stack.split_once('\n'), summary.lines().next()) {
            (Some((first, rest)), Some(head)) if first.trim_end() == head => rest,
            (None, Some(head)) if stack.trim_end() == head => "",
            _ => stack,
        }
    };

    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Removes up to `strip` leading frames while keeping at least `minimum` frames.
pub(crate) fn strip_frames(mut frames: Vec<String>, strip: usize, minimum: usize) -> Vec<String> {
    let removable = strip.min(frames.len().saturating_sub(minimum));
    frames.drain(..removable);
    frames
}

/// Returns how many trailing frames the two stacks share.
#[must_use]
pub fn common_suffix_len(a: &[String], b: &[String]) -> usize {
    a.iter().rev().zip(b.iter().rev()).take_while(|(x, y)| x == y).count()
}

/// Combines a consequence stack with its cause's stack.
///
/// The result is the consequence-only frames, then the cause-only frames, then
/// the shared trailing frames exactly once.
///
/// # Examples
///
/// ```
/// use kind_error::types::stack_trace::combine_stacks;
///
/// let frames = |s: &[&str]| s.iter().map(|f| f.to_string()).collect::<Vec<_>>();
/// let combined = combine_stacks(&frames(&["c1", "c2", "d1", "d2"]), &frames(&["e1", "d1", "d2"]));
/// assert_eq!(combined, frames(&["c1", "c2", "e1", "d1", "d2"]));
/// ```
#[must_use]
pub fn combine_stacks(consequence: &[String], cause: &[String]) -> Vec<String> {
    let shared = common_suffix_len(consequence, cause);
    let (consequence_only, suffix) = consequence.split_at(consequence.len() - shared);
    let cause_only = &cause[..cause.len() - shared];

    let mut combined = Vec::with_capacity(consequence.len() + cause_only.len());
    combined.extend_from_slice(consequence_only);
    combined.extend_from_slice(cause_only);
    combined.extend_from_slice(suffix);
    combined
}
