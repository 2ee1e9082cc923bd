//! Bounded, single-line rendering of assertion operands.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Maximum length of a rendered value, ellipsis included.
pub const MAX_RENDERED_LEN: usize = 100;

const ELLIPSIS: &str = "...";

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Renders a value for an assertion message.
///
/// The value is serialized as compact JSON, whitespace runs are collapsed to a
/// single space, every character outside printable ASCII becomes `?`, and the
/// result is cut to [`MAX_RENDERED_LEN`] characters with a trailing `...`.
#[must_use]
pub fn make_short_string(value: &Value) -> String {
    let serialized = value.to_string();
    let collapsed = WHITESPACE_RUN.replace_all(&serialized, " ");
    let printable: String = collapsed
        .chars()
        .map(|c| if matches!(c, ' '..='~') { c } else { '?' })
        .collect();

    // Only ASCII remains, so byte and char lengths agree.
    if printable.len() > MAX_RENDERED_LEN {
        let keep = MAX_RENDERED_LEN - ELLIPSIS.len();
        format!("{}{ELLIPSIS}", &printable[..keep])
    } else {
        printable
    }
}
