use std::borrow::Cow;

use memchr::memchr;
use percent_encoding::percent_decode_str;

/// Outcome of [`decode_component`]: either the decoded text, or the input
/// returned untouched because it is not a valid percent-encoded UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<'a> {
    Decoded(Cow<'a, str>),
    PassedThrough(&'a str),
}

impl<'a> Decoded<'a> {
    pub fn is_passed_through(&self) -> bool {
        matches!(self, Self::PassedThrough(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Decoded(value) => value,
            Self::PassedThrough(raw) => raw,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Decoded(value) => value.into_owned(),
            Self::PassedThrough(raw) => raw.to_string(),
        }
    }
}

/// Percent-decodes one path component. Never fails: a malformed escape
/// (`%` not followed by two hex digits) or bytes that do not form UTF-8 yield
/// [`Decoded::PassedThrough`] with the original text.
#[inline]
pub fn decode_component(input: &str) -> Decoded<'_> {
    if memchr(b'%', input.as_bytes()).is_none() {
        return Decoded::Decoded(Cow::Borrowed(input));
    }

    if !has_valid_escapes(input.as_bytes()) {
        tracing::debug!(value = %input, "malformed percent escape; keeping raw value");
        return Decoded::PassedThrough(input);
    }

    match percent_decode_str(input).decode_utf8() {
        Ok(decoded) => Decoded::Decoded(decoded),
        Err(err) => {
            tracing::debug!(value = %input, error = %err, "decoded bytes are not utf-8; keeping raw value");
            Decoded::PassedThrough(input)
        }
    }
}

fn has_valid_escapes(bytes: &[u8]) -> bool {
    let mut offset = 0usize;
    while let Some(pos) = memchr(b'%', &bytes[offset..]) {
        let idx = offset + pos;
        match (bytes.get(idx + 1), bytes.get(idx + 2)) {
            (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => {}
            _ => return false,
        }
        offset = idx + 3;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_text_borrowed() {
        let decoded = decode_component("how-to-node");
        assert_eq!(decoded, Decoded::Decoded(Cow::Borrowed("how-to-node")));
    }

    #[test]
    fn decodes_utf8_sequences() {
        assert_eq!(decode_component("caf%C3%A9").as_str(), "café");
        assert_eq!(decode_component("how%20to%20node").as_str(), "how to node");
    }

    #[test]
    fn passes_through_truncated_escape() {
        let decoded = decode_component("100%");
        assert!(decoded.is_passed_through());
        assert_eq!(decoded.as_str(), "100%");
    }

    #[test]
    fn passes_through_non_hex_escape() {
        assert!(decode_component("%zz").is_passed_through());
        assert_eq!(decode_component("a%2").as_str(), "a%2");
    }

    #[test]
    fn passes_through_invalid_utf8() {
        let decoded = decode_component("%FF%FE");
        assert!(decoded.is_passed_through());
        assert_eq!(decoded.into_string(), "%FF%FE");
    }
}
