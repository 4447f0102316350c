//! Character encoding handling for byte input.
//!
//! Steam serves news bodies as UTF-8, but exported files sometimes carry a
//! byte-order mark or arrive as UTF-16. The BOM decides; otherwise UTF-8.

use encoding_rs::{Encoding, UTF_8};

/// Detect the encoding of `bytes` from its byte-order mark.
///
/// Returns the encoding and the BOM length to skip. Without a BOM this is
/// UTF-8 with nothing to skip.
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> (&'static Encoding, usize) {
    Encoding::for_bom(bytes).unwrap_or((UTF_8, 0))
}

/// Transcode BBCode bytes to a UTF-8 string.
///
/// Invalid sequences are replaced with U+FFFD rather than causing errors.
///
/// # Examples
///
/// ```
/// use steam_bbcode::encoding::transcode_to_utf8;
///
/// assert_eq!(transcode_to_utf8(b"\xEF\xBB\xBF[b]hi[/b]"), "[b]hi[/b]");
/// ```
#[must_use]
pub fn transcode_to_utf8(bytes: &[u8]) -> String {
    let (encoding, bom_len) = detect_encoding(bytes);
    let body = &bytes[bom_len..];

    if encoding == UTF_8 {
        // Fast path for UTF-8: just do lossy conversion
        return String::from_utf8_lossy(body).into_owned();
    }

    let (decoded, _had_errors) = encoding.decode_without_bom_handling(body);
    decoded.into_owned()
}
