// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// String transformation: abbreviation, padding, splitting, grouping, and
// form-style URL encoding.
//
// Every length and offset here counts Unicode scalar values (`char`s), never
// bytes, so multi-byte text is never cut mid-character.

use std::borrow::Cow;

use lanyard_core::config::LangConfig;
use lanyard_core::error::{LanyardError, Result};
use lanyard_core::types::PadSide;
use tracing::debug;

/// Default marker used by [`abbreviate`].
pub const ELLIPSIS: &str = "...";

// ---------------------------------------------------------------------------
// Abbreviation
// ---------------------------------------------------------------------------

/// Abbreviate `s` to at most `max_width` chars using `"..."`.
///
/// `abbreviate("Now is the time for all good men", 10)` gives `"Now is ..."`.
pub fn abbreviate(s: &str, max_width: usize) -> Result<String> {
    abbreviate_with_offset(s, ELLIPSIS, 0, max_width)
}

/// Abbreviate `s` using the marker from `config`.
pub fn abbreviate_configured(s: &str, max_width: usize, config: &LangConfig) -> Result<String> {
    abbreviate_with_offset(s, &config.abbreviation_marker, 0, max_width)
}

/// Abbreviate `s` to at most `max_width` chars using a custom marker.
pub fn abbreviate_with(s: &str, marker: &str, max_width: usize) -> Result<String> {
    abbreviate_with_offset(s, marker, 0, max_width)
}

/// Abbreviate `s` so that the char at `offset` is near the left edge of the
/// result.
///
/// A leading marker appears when the kept window does not start at 0 and a
/// trailing marker when it does not reach the end. The result never exceeds
/// `max_width` chars and strings that already fit are returned unchanged.
///
/// # Errors
///
/// `OutOfRange` when `max_width` cannot hold the marker plus one char, or
/// when a leading marker is needed and `max_width` cannot hold two markers
/// plus one char.
pub fn abbreviate_with_offset(
    s: &str,
    marker: &str,
    offset: usize,
    max_width: usize,
) -> Result<String> {
    let chars: Vec<char> = s.chars().collect();

    if marker.is_empty() {
        return Ok(chars.iter().take(max_width).collect());
    }
    if chars.is_empty() {
        return Ok(String::new());
    }

    let marker_len = marker.chars().count();
    require_width("max_width", max_width, marker_len + 1)?;

    let len = chars.len();
    if len <= max_width {
        return Ok(s.to_owned());
    }

    let keep = max_width - marker_len;
    let mut offset = offset.min(len);
    if len - offset < keep {
        offset = len - keep;
    }

    if offset <= marker_len + 1 {
        let mut out: String = chars[..keep].iter().collect();
        out.push_str(marker);
        return Ok(out);
    }

    require_width("max_width", max_width, 2 * marker_len + 1)?;

    let mut out = String::from(marker);
    if offset + keep < len {
        let rest: String = chars[offset..].iter().collect();
        out.push_str(&abbreviate_with_offset(&rest, marker, 0, keep)?);
    } else {
        out.extend(&chars[len - keep..]);
    }
    Ok(out)
}

/// Replace the middle of `s` with `middle` so the result is `length` chars.
///
/// Returns `s` unchanged when either string is empty, when `s` already fits,
/// or when `length` leaves no room for at least one char on each side.
pub fn abbreviate_middle(s: &str, middle: &str, length: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    let middle_len = middle.chars().count();

    if chars.is_empty() || middle.is_empty() || length >= chars.len() || length < middle_len + 2 {
        return s.to_owned();
    }

    let target = length - middle_len;
    let start = target / 2 + target % 2;
    let end = chars.len() - target / 2;

    let mut out: String = chars[..start].iter().collect();
    out.push_str(middle);
    out.extend(&chars[end..]);
    out
}

fn require_width(name: &'static str, value: usize, min: usize) -> Result<()> {
    if value < min {
        debug!(name, value, min, "width below minimum");
        return Err(LanyardError::OutOfRange {
            name,
            value: value as i64,
            min: min as i64,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Padding
// ---------------------------------------------------------------------------

/// Pad `s` to `size` chars by cycling `pad_str` on the given side(s).
///
/// An empty `pad_str` pads with spaces. Strings already `size` chars or
/// longer are returned unchanged.
pub fn pad(s: &str, size: usize, pad_str: &str, side: PadSide) -> String {
    let len = s.chars().count();
    if len >= size {
        return s.to_owned();
    }
    let pad_str = if pad_str.is_empty() { " " } else { pad_str };
    let missing = size - len;

    let (left, right) = match side {
        PadSide::Left => (missing, 0),
        PadSide::Right => (0, missing),
        PadSide::Both => (missing / 2, missing - missing / 2),
    };

    let mut out = String::with_capacity(s.len() + missing * pad_str.len());
    out.extend(pad_str.chars().cycle().take(left));
    out.push_str(s);
    out.extend(pad_str.chars().cycle().take(right));
    out
}

/// Pad on the left to `size` chars.
pub fn left_pad(s: &str, size: usize, pad_str: &str) -> String {
    pad(s, size, pad_str, PadSide::Left)
}

/// Pad on the right to `size` chars.
pub fn right_pad(s: &str, size: usize, pad_str: &str) -> String {
    pad(s, size, pad_str, PadSide::Right)
}

/// Center `s` in `size` chars; an odd leftover char goes on the right.
pub fn center(s: &str, size: usize, pad_str: &str) -> String {
    pad(s, size, pad_str, PadSide::Both)
}

// ---------------------------------------------------------------------------
// Splitting, joining, grouping
// ---------------------------------------------------------------------------

/// Split on `sep`, collapsing adjacent separators. No empty tokens.
pub fn split(s: &str, sep: char) -> Vec<String> {
    s.split(sep)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Split on `sep`, keeping empty tokens between adjacent separators.
///
/// `join(&split_preserve_all_tokens(s, c), c)` always gives back `s`.
pub fn split_preserve_all_tokens(s: &str, sep: char) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }
    s.split(sep).map(str::to_owned).collect()
}

/// Join the items with `sep` between each pair.
pub fn join<I>(items: I, sep: impl std::fmt::Display) -> String
where
    I: IntoIterator,
    I::Item: std::fmt::Display,
{
    use std::fmt::Write;

    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            // Writing to a String cannot fail.
            let _ = write!(out, "{sep}");
        }
        let _ = write!(out, "{item}");
    }
    out
}

/// Cut `s` into consecutive groups of `size` chars; the last may be shorter.
pub fn group(s: &str, size: usize) -> Result<Vec<String>> {
    if size == 0 {
        debug!("group size of zero rejected");
        return Err(LanyardError::invalid("group size must be positive"));
    }
    let chars: Vec<char> = s.chars().collect();
    Ok(chars.chunks(size).map(|chunk| chunk.iter().collect()).collect())
}

/// `s` repeated `count` times with `sep` between repetitions.
pub fn repeat(s: &str, sep: &str, count: usize) -> String {
    join(std::iter::repeat_n(s, count), sep)
}

// ---------------------------------------------------------------------------
// URL encoding
// ---------------------------------------------------------------------------

/// Form-encode `s` (spaces become `+`).
pub fn url_encode(s: &str) -> String {
    url_encode_with(s, true)
}

/// Encode `s` with the space style from `config`.
pub fn url_encode_configured(s: &str, config: &LangConfig) -> String {
    url_encode_with(s, config.url_space_as_plus)
}

/// Percent-encode `s`; spaces become `+` when `space_as_plus` is set and
/// `%20` otherwise.
pub fn url_encode_with(s: &str, space_as_plus: bool) -> String {
    let encoded = urlencoding::encode(s);
    if space_as_plus {
        encoded.replace("%20", "+")
    } else {
        encoded.into_owned()
    }
}

/// Decode a form-encoded string (`+` becomes a space).
///
/// # Errors
///
/// `Decode` when a `%` is not followed by two hex digits or when the decoded
/// bytes are not UTF-8.
pub fn url_decode(s: &str) -> Result<String> {
    check_escapes(s)?;
    let spaced: Cow<'_, str> = if s.contains('+') {
        Cow::Owned(s.replace('+', " "))
    } else {
        Cow::Borrowed(s)
    };
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|e| {
            debug!(error = %e, "decoded bytes are not UTF-8");
            LanyardError::Decode(e.to_string())
        })
}

fn check_escapes(s: &str) -> Result<()> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                debug!(position = i, "malformed percent escape");
                return Err(LanyardError::Decode(format!(
                    "malformed escape at position {i}"
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Blank handling and case
// ---------------------------------------------------------------------------

/// True when `s` is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// True when `s` has at least one non-whitespace char.
pub fn is_not_blank(s: &str) -> bool {
    !is_blank(s)
}

/// Trimmed `s`, or `None` when nothing is left.
pub fn trim_to_none(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// `default` when `s` is blank, otherwise `s` untouched.
pub fn default_if_blank<'a>(s: &'a str, default: &'a str) -> &'a str {
    if is_blank(s) { default } else { s }
}

/// Upper-case the first char, leaving the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first char, leaving the rest untouched.
pub fn uncapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn abbreviate_basic() {
        assert_eq!(abbreviate("", 4).unwrap(), "");
        assert_eq!(abbreviate("abcdefg", 6).unwrap(), "abc...");
        assert_eq!(abbreviate("abcdefg", 7).unwrap(), "abcdefg");
        assert_eq!(abbreviate("abcdefg", 8).unwrap(), "abcdefg");
        assert_eq!(abbreviate("abcdefg", 4).unwrap(), "a...");
    }

    #[test]
    fn abbreviate_rejects_tiny_width() {
        let err = abbreviate("abcdefg", 3).unwrap_err();
        assert!(matches!(
            err,
            LanyardError::OutOfRange { name: "max_width", value: 3, min: 4 }
        ));
    }

    #[test]
    fn abbreviate_with_offset_windows() {
        let s = "abcdefghijklmno";
        assert_eq!(abbreviate_with_offset(s, "...", 0, 10).unwrap(), "abcdefg...");
        assert_eq!(abbreviate_with_offset(s, "...", 4, 10).unwrap(), "abcdefg...");
        assert_eq!(abbreviate_with_offset(s, "...", 5, 10).unwrap(), "...fghi...");
        assert_eq!(abbreviate_with_offset(s, "...", 6, 10).unwrap(), "...ghij...");
        assert_eq!(abbreviate_with_offset(s, "...", 8, 10).unwrap(), "...ijklmno");
        assert_eq!(abbreviate_with_offset(s, "...", 10, 10).unwrap(), "...ijklmno");
        assert_eq!(abbreviate_with_offset(s, "...", 100, 10).unwrap(), "...ijklmno");
    }

    #[test]
    fn abbreviate_offset_needs_room_for_two_markers() {
        assert!(abbreviate_with_offset("abcdefghij", "...", 5, 6).is_err());
        assert!(abbreviate_with_offset("abcdefghij", "...", 0, 3).is_err());
    }

    #[test]
    fn abbreviate_custom_and_empty_marker() {
        assert_eq!(abbreviate_with("abcdefg", "~", 4).unwrap(), "abc~");
        assert_eq!(abbreviate_with("abcdefg", "", 3).unwrap(), "abc");
        assert_eq!(abbreviate_with("abcdefg", "", 0).unwrap(), "");
    }

    #[test]
    fn abbreviate_counts_chars_not_bytes() {
        assert_eq!(abbreviate("éééééééé", 5).unwrap(), "éé...");
    }

    #[test]
    fn abbreviate_uses_configured_marker() {
        let config = LangConfig {
            abbreviation_marker: "…".into(),
            ..Default::default()
        };
        assert_eq!(abbreviate_configured("abcdefg", 4, &config).unwrap(), "abc…");
    }

    #[test]
    fn abbreviate_middle_cases() {
        assert_eq!(abbreviate_middle("abc", ".", 0), "abc");
        assert_eq!(abbreviate_middle("abc", ".", 3), "abc");
        assert_eq!(abbreviate_middle("abcdef", ".", 4), "ab.f");
        assert_eq!(abbreviate_middle("abcdef", "", 4), "abcdef");
        assert_eq!(abbreviate_middle("abcdefghij", "..", 6), "ab..ij");
    }

    #[test]
    fn padding() {
        assert_eq!(left_pad("bat", 5, "z"), "zzbat");
        assert_eq!(left_pad("bat", 8, "yz"), "yzyzybat");
        assert_eq!(right_pad("bat", 5, ""), "bat  ");
        assert_eq!(right_pad("bat", 1, "z"), "bat");
        assert_eq!(center("ab", 5, "-"), "-ab--");
        assert_eq!(center("a", 4, "yz"), "yayz");
    }

    #[test]
    fn split_collapses_and_preserve_keeps() {
        assert_eq!(split("a..b.c", '.'), vec!["a", "b", "c"]);
        assert!(split("", '.').is_empty());
        assert_eq!(split_preserve_all_tokens("a..b.", '.'), vec!["a", "", "b", ""]);
        assert!(split_preserve_all_tokens("", '.').is_empty());
    }

    #[test]
    fn join_and_repeat() {
        assert_eq!(join(["a", "b", "c"], ", "), "a, b, c");
        assert_eq!(join(Vec::<String>::new(), ","), "");
        assert_eq!(join([1, 2, 3], '-'), "1-2-3");
        assert_eq!(repeat("ab", "|", 3), "ab|ab|ab");
        assert_eq!(repeat("ab", "|", 0), "");
    }

    #[test]
    fn group_chunks() {
        assert_eq!(group("abcdefg", 3).unwrap(), vec!["abc", "def", "g"]);
        assert!(group("", 3).unwrap().is_empty());
        assert!(matches!(group("abc", 0), Err(LanyardError::InvalidArgument(_))));
    }

    #[test]
    fn url_encoding() {
        assert_eq!(url_encode("a b&c=d"), "a+b%26c%3Dd");
        assert_eq!(url_encode_with("a b", false), "a%20b");

        let mut config = LangConfig::default();
        assert_eq!(url_encode_configured("a b", &config), "a+b");
        config.url_space_as_plus = false;
        assert_eq!(url_encode_configured("a b", &config), "a%20b");
        assert_eq!(url_encode("1+1"), "1%2B1");
        assert_eq!(url_decode("a+b%26c%3Dd").unwrap(), "a b&c=d");
        assert_eq!(url_decode("caf%C3%A9").unwrap(), "café");
    }

    #[test]
    fn url_decode_rejects_bad_input() {
        assert!(matches!(url_decode("100%"), Err(LanyardError::Decode(_))));
        assert!(matches!(url_decode("%zz"), Err(LanyardError::Decode(_))));
        assert!(matches!(url_decode("%FF"), Err(LanyardError::Decode(_))));
    }

    #[test]
    fn blanks_and_case() {
        assert!(is_blank("  \t"));
        assert!(is_not_blank(" a "));
        assert_eq!(trim_to_none("  "), None);
        assert_eq!(trim_to_none(" x "), Some("x"));
        assert_eq!(default_if_blank(" ", "d"), "d");
        assert_eq!(capitalize("cat"), "Cat");
        assert_eq!(uncapitalize("Cat"), "cat");
        assert_eq!(capitalize(""), "");
    }

    proptest! {
        #[test]
        fn abbreviate_never_exceeds_width(s in "\\PC{0,40}", width in 4usize..30) {
            let out = abbreviate(&s, width).unwrap();
            prop_assert!(out.chars().count() <= width);
        }

        #[test]
        fn abbreviate_offset_never_exceeds_width(
            s in "[a-z]{0,40}",
            offset in 0usize..50,
            width in 7usize..30,
        ) {
            let out = abbreviate_with_offset(&s, "...", offset, width).unwrap();
            prop_assert!(out.chars().count() <= width);
        }

        #[test]
        fn split_join_round_trips(s in "[a-z,]{0,30}") {
            prop_assert_eq!(join(split_preserve_all_tokens(&s, ','), ','), s);
        }

        #[test]
        fn split_join_round_trips_without_separator(s in "[a-z]{1,30}") {
            prop_assert_eq!(join(split(&s, ','), ','), s);
        }

        #[test]
        fn groups_concatenate_back(s in "\\PC{0,40}", size in 1usize..8) {
            prop_assert_eq!(group(&s, size).unwrap().concat(), s);
        }

        #[test]
        fn url_round_trip(s in "\\PC{0,40}") {
            prop_assert_eq!(url_decode(&url_encode(&s)).unwrap(), s);
        }
    }
}
