//! `[previewyoutube=ID;full]` video-preview embeds.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::rules::compile;

/// `[previewyoutube="ID";...]...[/previewyoutube]`
static PAIRED: LazyLock<Regex> = LazyLock::new(|| {
    compile(r#"(?is)\[previewyoutube="([^"]+)";[^\]]*\].*?\[/previewyoutube\]"#)
});

/// `[previewyoutube=ID;...]` with no closing tag.
static SELF_CLOSING: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\[previewyoutube=([^;\]]+);[^\]]*\]"));

/// Replaces preview tags with a 16:9 responsive player frame.
#[must_use]
pub fn embed_youtube(text: &str) -> String {
    let text = PAIRED.replace_all(text, |caps: &Captures<'_>| render_embed(&caps[1]));
    SELF_CLOSING
        .replace_all(&text, |caps: &Captures<'_>| render_embed(&caps[1]))
        .into_owned()
}

fn render_embed(id: &str) -> String {
    format!(
        concat!(
            r#"<div class="youtube-embed" style="margin: 1.5rem 0; position: relative; padding-bottom: 56.25%; height: 0; overflow: hidden; border-radius: 0.5rem; background: #1a1a1a;">"#,
            r#"<iframe src="https://www.youtube.com/embed/{id}?autoplay=0&rel=0" style="position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: none;" "#,
            r#"allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture" allowfullscreen loading="lazy"></iframe></div>"#,
        ),
        id = id
    )
}
