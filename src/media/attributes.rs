//! Attribute extraction for media tags.
//!
//! A tag's raw attribute text (`mp4="a.mp4" autoplay=true`) is never fully
//! parsed; each lookup scans it independently and missing keys are `None`.

use std::sync::LazyLock;

use regex::Regex;

use crate::rules::compile;

/// `name=value` where value is double-quoted, single-quoted or bare.
static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"([A-Za-z][A-Za-z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'\]]+))"#)
});

/// Returns the value of the first `name=...` pair in `raw`.
///
/// Names match case-insensitively. Empty values count as missing.
///
/// # Examples
///
/// ```
/// use steam_bbcode::media::extract_attribute;
///
/// let raw = r#"mp4="clip.mp4" AUTOPLAY='true' controls=false"#;
/// assert_eq!(extract_attribute(raw, "mp4"), Some("clip.mp4"));
/// assert_eq!(extract_attribute(raw, "autoplay"), Some("true"));
/// assert_eq!(extract_attribute(raw, "controls"), Some("false"));
/// assert_eq!(extract_attribute(raw, "poster"), None);
/// ```
#[must_use]
pub fn extract_attribute<'a>(raw: &'a str, name: &str) -> Option<&'a str> {
    ATTRIBUTE
        .captures_iter(raw)
        .find(|caps| caps[1].eq_ignore_ascii_case(name))
        .and_then(|caps| caps.get(2).or_else(|| caps.get(3)).or_else(|| caps.get(4)))
        .map(|value| value.as_str())
        .filter(|value| !value.is_empty())
}

/// Lazily-queried view over a tag's raw attribute text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBag<'a> {
    raw: &'a str,
}

impl<'a> AttributeBag<'a> {
    #[must_use]
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// See [`extract_attribute`].
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'a str> {
        extract_attribute(self.raw, name)
    }

    /// True when `name` is present and equals `value`, ignoring ASCII case.
    #[must_use]
    pub fn is(&self, name: &str, value: &str) -> bool {
        self.get(name).is_some_and(|v| v.eq_ignore_ascii_case(value))
    }
}
