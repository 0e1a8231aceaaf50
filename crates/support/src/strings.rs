//! String helpers.

use std::borrow::Cow;

/// Marker that replaces the tail of a truncated string.
pub const ELLIPSIS: &str = "...";

/// Limits `input` to at most `max_length` characters.
///
/// Strings that already fit are returned unchanged (borrowed). Longer strings
/// keep a prefix and end in [`ELLIPSIS`], for a total of exactly `max_length`
/// characters. Lengths count `char`s, so multi-byte text is never split
/// inside a code point.
///
/// ```rust
/// use support::limit;
///
/// assert_eq!(limit("partition", 20), "partition");
/// assert_eq!(limit("partitioning", 8), "parti...");
/// ```
pub fn limit(input: &str, max_length: usize) -> Cow<'_, str> {
    if input.chars().count() <= max_length {
        return Cow::Borrowed(input);
    }

    // ELLIPSIS is ASCII, so byte and char lengths agree
    if max_length <= ELLIPSIS.len() {
        return Cow::Borrowed(&ELLIPSIS[..max_length]);
    }

    let keep = max_length - ELLIPSIS.len();
    let cut = input
        .char_indices()
        .nth(keep)
        .map_or(input.len(), |(offset, _)| offset);

    let mut truncated = String::with_capacity(cut + ELLIPSIS.len());
    truncated.push_str(&input[..cut]);
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}
