//! Order numbers encoded in category titles.
//!
//! Titles look like `"3"`, `"3#"` or `"3#Featured"`: the leading integer
//! before the first `#` is the sibling sort order.

use regex::Regex;
use std::sync::LazyLock;

/// Optional whitespace, optional sign, then the leading run of ASCII digits.
static LEADING_INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").expect("leading integer regex"));

/// Extract the leading base-10 integer of a title.
///
/// Only the part before the first `#` is considered. Trailing non-digit
/// content is ignored (`"12abc"` is 12). Returns `None` when there are no
/// leading digits or the value does not fit in an `i64`.
pub fn parse_leading_number(title: &str) -> Option<i64> {
    let head = title.split_once('#').map_or(title, |(head, _)| head);

    LEADING_INT_RE
        .captures(head)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<i64>().ok())
}
