use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in a single component: everything but ASCII alphanumerics
/// and `-_.!~*'()`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encodes a value for use as a single path segment.
#[inline]
pub fn encode_component(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, COMPONENT).into()
}

/// Encodes each `/`-separated piece, keeping the separators. Used for
/// catch-all segments where the value is itself a sub-path.
pub fn encode_path(input: &str) -> String {
    input
        .split('/')
        .map(encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Strips the `(.*)` catch-all groups from a template, leaving the form used
/// for URL generation.
pub fn plain_path(template: &str) -> String {
    template.replace("(.*)", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_spaces_and_reserved_characters() {
        assert_eq!(encode_component("how to node"), "how%20to%20node");
        assert_eq!(encode_component("a/b?c"), "a%2Fb%3Fc");
        assert_eq!(encode_component("a&b=c#d"), "a%26b%3Dc%23d");
    }

    #[test]
    fn leaves_unreserved_marks_unescaped() {
        assert_eq!(encode_component("it's(1)!"), "it's(1)!");
        assert_eq!(encode_component("-_.~*"), "-_.~*");
        assert_eq!(encode_component("café"), "caf%C3%A9");
    }

    #[test]
    fn path_encoding_preserves_separators() {
        assert_eq!(encode_path("docs/read me.md"), "docs/read%20me.md");
    }

    #[test]
    fn plain_path_strips_catch_all_groups() {
        assert_eq!(plain_path("/files/(.*)"), "/files/");
        assert_eq!(plain_path("/:id(.*)"), "/:id");
    }
}
