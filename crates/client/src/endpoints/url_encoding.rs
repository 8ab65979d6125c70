//! URL encoding utilities for constructing safe API paths.
//!
//! Recipe and deployment ids come from the command line and are interpolated
//! into paths; every id is percent-encoded as a single path segment so that
//! `/`, `?` or `#` can never change the request target.
//!
//! # Example
//!
//! ```
//! use compose_client::endpoints::url_encoding::encode_path_segment;
//!
//! let encoded = encode_path_segment("abc/def");
//! assert_eq!(encoded, "abc%2Fdef");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986, section 3.3).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_object_id_unchanged() {
        assert_eq!(
            encode_path_segment("5854017e89d50f424e000201"),
            "5854017e89d50f424e000201"
        );
        assert_eq!(encode_path_segment("my-deployment_1.x"), "my-deployment_1.x");
    }

    #[test]
    fn test_encode_slash_and_query() {
        assert_eq!(encode_path_segment("../accounts"), "..%2Faccounts");
        assert_eq!(encode_path_segment("id?embed=1"), "id%3Fembed=1");
        assert_eq!(encode_path_segment("id#frag"), "id%23frag");
    }

    #[test]
    fn test_encode_percent_and_space() {
        assert_eq!(encode_path_segment("a%20b"), "a%2520b");
        assert_eq!(encode_path_segment("a b"), "a%20b");
    }

    #[test]
    fn test_encode_template_braces() {
        assert_eq!(encode_path_segment("{?embed}"), "%7B%3Fembed%7D");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("\u{00e9}"), "%C3%A9");
    }
}
