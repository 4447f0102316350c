//! `[video mp4=... webm=... poster=...][/video]` tags.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::attributes::AttributeBag;
use crate::rules::compile;

static VIDEO: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?is)\[video\s+([^\]]+?)\].*?\[/video\]"));

/// Sources and playback flags resolved from a `[video]` tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoEmbed<'a> {
    pub mp4: Option<&'a str>,
    pub webm: Option<&'a str>,
    pub poster: Option<&'a str>,
    pub autoplay: bool,
    pub controls: bool,
}

impl<'a> VideoEmbed<'a> {
    /// Reads the embed from raw attribute text.
    ///
    /// `autoplay` is on only for `autoplay="true"`; `controls` is on unless
    /// `controls="false"`.
    #[must_use]
    pub fn from_attributes(raw: &'a str) -> Self {
        let attrs = AttributeBag::new(raw);
        Self {
            mp4: attrs.get("mp4"),
            webm: attrs.get("webm"),
            poster: attrs.get("poster"),
            autoplay: attrs.is("autoplay", "true"),
            controls: !attrs.is("controls", "false"),
        }
    }

    /// Renders a `<video>` element. Without sources it is emitted empty.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from(
            r#"<video preload="metadata" style="max-width: 100%; height: auto; border-radius: 8px; margin: 1rem 0; background: #000;""#,
        );
        if let Some(poster) = self.poster {
            let _ = write!(html, r#" poster="{poster}""#);
        }
        if self.autoplay {
            html.push_str(" autoplay muted loop playsinline");
        }
        if self.controls {
            html.push_str(" controls");
        }
        html.push('>');
        if let Some(mp4) = self.mp4 {
            let _ = write!(html, r#"<source src="{mp4}" type="video/mp4">"#);
        }
        if let Some(webm) = self.webm {
            let _ = write!(html, r#"<source src="{webm}" type="video/webm">"#);
        }
        html.push_str("Your browser does not support the video tag.</video>");
        html
    }
}

/// Replaces every `[video ...]...[/video]` with a `<video>` element.
#[must_use]
pub fn embed_videos(text: &str) -> String {
    VIDEO
        .replace_all(text, |caps: &Captures<'_>| {
            VideoEmbed::from_attributes(caps.get(1).map_or("", |m| m.as_str())).to_html()
        })
        .into_owned()
}
