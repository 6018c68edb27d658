//! Length-limited text previews

use std::borrow::Cow;

const ELLIPSIS: &str = "...";

/// Cut `text` to at most `max_len` bytes without splitting a character
///
/// ```rust
/// use chunkwise_core::truncate_text;
///
/// assert_eq!(truncate_text("Hello, world!", 5), "Hello");
/// assert_eq!(truncate_text("Hi", 10), "Hi");
/// assert_eq!(truncate_text("Hi", 0), "");
/// ```
pub fn truncate_text(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

/// Like [`truncate_text`], but marks the cut with `"..."` inside the limit
///
/// Limits below four bytes leave no room for the marker and cut plainly.
///
/// ```rust
/// use chunkwise_core::truncate_with_ellipsis;
///
/// assert_eq!(truncate_with_ellipsis("Hello, world!", 8), "Hello...");
/// assert_eq!(truncate_with_ellipsis("Hi", 10), "Hi");
/// ```
pub fn truncate_with_ellipsis(text: &str, max_len: usize) -> Cow<'_, str> {
    if text.len() <= max_len {
        return Cow::Borrowed(text);
    }
    if max_len < ELLIPSIS.len() + 1 {
        return Cow::Borrowed(truncate_text(text, max_len));
    }
    let head = truncate_text(text, max_len - ELLIPSIS.len());
    Cow::Owned(format!("{head}{ELLIPSIS}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_unicode() {
        // "é" is two bytes; cutting at 2 would land inside it
        assert_eq!(truncate_text("aé", 2), "a");
        assert_eq!(truncate_text("日本語", 7), "日本");
    }

    #[test]
    fn test_ellipsis_small_limits() {
        assert_eq!(truncate_with_ellipsis("Hello", 3), "Hel");
        assert_eq!(truncate_with_ellipsis("Hello", 0), "");
        assert_eq!(truncate_with_ellipsis("Hello", 4), "H...");
    }

    #[test]
    fn test_ellipsis_never_exceeds_limit() {
        let text = "日本語のテキスト";
        for limit in 0..text.len() {
            assert!(truncate_with_ellipsis(text, limit).len() <= limit);
        }
    }
}
