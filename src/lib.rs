//! # steam-bbcode
//!
//! Converts the BBCode dialect used in Steam news posts and announcements
//! into styled HTML fragments ready to embed in a page.
//!
//! ## Quick Start
//!
//! ```rust
//! use steam_bbcode::parse;
//!
//! let html = parse("[h1]Patch 1.2[/h1][b]Fixed:[/b] crashes");
//! assert!(html.starts_with("<h2 "));
//! assert!(html.contains(">Fixed:</strong>"));
//! ```
//!
//! ## How it works
//!
//! There is no grammar and no tree. Conversion is a fixed sequence of regex
//! rewrites over the whole string:
//!
//! 1. **Structural rules** ([`rules::structural_rules`]): escapes, headings,
//!    lists, paragraphs, inline formatting, links, code, clan-image
//!    placeholders, then newlines.
//! 2. **Media handlers** ([`media::apply_media_handlers`]): YouTube
//!    previews, `[video]`, then `[img]`.
//! 3. **Cleanup rules** ([`rules::cleanup_rules`]): strip any markup the
//!    earlier stages left behind and collapse redundant whitespace.
//!
//! Malformed input never fails; unconverted tags are dropped by cleanup.
//! Output is not guaranteed to be idempotent under repeated conversion.
//!
//! ## Security
//!
//! The output is **not sanitized**. Raw `<`/`>` in the input and attribute
//! values inside tags pass through unescaped. Run the fragment through an
//! HTML sanitizer before embedding content from untrusted authors.

mod error;
mod options;
mod parse;

/// Ordered rule tables and the engine that applies them.
pub mod rules;

/// Media embed handlers (YouTube previews, video, images).
pub mod media;

/// Byte-order-mark aware decoding for byte input.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::{Options, DEFAULT_MAX_INPUT_LEN};

/// Converts Steam BBCode to an HTML fragment.
///
/// Total: every input produces some output, and no size limit applies.
///
/// # Example
///
/// ```rust
/// use steam_bbcode::parse;
///
/// assert_eq!(parse("line one\nline two"), "line one<br>line two");
/// ```
#[must_use]
pub fn parse(bbcode: &str) -> String {
    parse::convert(bbcode)
}

/// Converts Steam BBCode to an HTML fragment, enforcing `options`.
///
/// # Example
///
/// ```rust
/// use steam_bbcode::{parse_with_options, Error, Options};
///
/// let options = Options {
///     max_input_len: Some(16),
///     ..Options::default()
/// };
/// assert!(parse_with_options("[i]short[/i]", &options).is_ok());
/// assert!(matches!(
///     parse_with_options(&"x".repeat(17), &options),
///     Err(Error::InputTooLarge { len: 17, max: 16 })
/// ));
/// ```
pub fn parse_with_options(bbcode: &str, options: &Options) -> Result<String> {
    parse::convert_with_options(bbcode, options)
}

/// Converts BBCode bytes, decoding them first.
///
/// A UTF-8 or UTF-16 byte-order mark selects the encoding; otherwise the
/// bytes are read as UTF-8 with invalid sequences replaced by U+FFFD.
///
/// # Example
///
/// ```rust
/// use steam_bbcode::parse_bytes;
///
/// let html = parse_bytes(b"\xEF\xBB\xBF[i]hi[/i]");
/// assert_eq!(html, r#"<em style="font-style: italic;">hi</em>"#);
/// ```
#[must_use]
pub fn parse_bytes(bbcode: &[u8]) -> String {
    parse(&encoding::transcode_to_utf8(bbcode))
}

/// Converts BBCode bytes, decoding them first and enforcing `options`.
///
/// The size guard applies to the raw byte length, before decoding.
pub fn parse_bytes_with_options(bbcode: &[u8], options: &Options) -> Result<String> {
    parse::guard(bbcode.len(), options)?;
    Ok(parse(&encoding::transcode_to_utf8(bbcode)))
}
