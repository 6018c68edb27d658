//! Coarse token estimation

/// Bytes of text assumed per model token
pub const CHARS_PER_TOKEN: usize = 4;

/// Estimate the token count of `text`
///
/// The estimate is the UTF-8 byte length divided by [`CHARS_PER_TOKEN`],
/// rounded down. It ignores script, language and whitespace; every budget
/// decision in this crate inherits that imprecision.
///
/// ```rust
/// use chunkwise_core::estimate_tokens;
///
/// assert_eq!(estimate_tokens(""), 0);
/// assert_eq!(estimate_tokens("abc"), 0);
/// assert_eq!(estimate_tokens("Hello, world!"), 3);
/// ```
#[inline]
pub fn estimate_tokens(text: &str) -> usize {
    text.len() / CHARS_PER_TOKEN
}

/// Convert a token budget into a byte budget
#[inline]
pub(crate) fn tokens_to_bytes(tokens: usize) -> usize {
    tokens.saturating_mul(CHARS_PER_TOKEN)
}
