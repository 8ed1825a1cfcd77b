//! Byte-level percent coding applied to templates and candidate paths.
//!
//! Encoding leaves ASCII alphanumerics and every printable ASCII punctuation
//! character untouched, so templates keep their syntax (`:`, `*`, `{`, `(`)
//! and already-encoded sequences such as `%2F` survive as-is. Everything else
//! (controls, space, DEL and all non-ASCII bytes) becomes `%XX`.

use percent_encoding::{percent_decode, percent_encode, AsciiSet, CONTROLS};

/// Bytes that get escaped besides the non-ASCII range.
const ESCAPED: &AsciiSet = &CONTROLS.add(b' ');

/// Percent-encodes `text` byte by byte using uppercase hex digits.
///
/// ```
/// assert_eq!(pathrex_match::codec::encode("/café"), "/caf%C3%A9");
/// assert_eq!(pathrex_match::codec::encode("/a%2Fb"), "/a%2Fb");
/// ```
pub fn encode(text: &str) -> String {
    encode_bytes(text.as_bytes())
}

pub fn encode_bytes(bytes: &[u8]) -> String {
    percent_encode(bytes, ESCAPED).to_string()
}

/// Replaces every `%XX` triple with the byte it names.
///
/// A `%` that is not followed by two hex digits is kept literally. Decoded
/// bytes that are not valid UTF-8 are replaced with U+FFFD; use
/// [`decode_bytes`] to get the exact bytes.
pub fn decode(text: &str) -> String {
    percent_decode(text.as_bytes())
        .decode_utf8_lossy()
        .into_owned()
}

pub fn decode_bytes(bytes: &[u8]) -> Vec<u8> {
    percent_decode(bytes).collect()
}
