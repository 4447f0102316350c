//! `[img]` tags in their several spellings.
//!
//! Four independent passes, each over the output of the previous one:
//!
//! 1. `[img]content[/img]`, or `[img]content` running up to the next tag or
//!    the end of input. The first http(s) image URL in the content wins; with
//!    none the whole match is dropped.
//! 2. `[img src="URL"]`, optionally self-closed with `/]`.
//! 3. `[img=URL]`.
//! 4. Any other `[img...]` opener and stray `[/img]` are dropped.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::rules::compile;

/// Content ends at the first `[`, which is where the next tag would start.
static IMG_CONTENT: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\[img\]([^\[]*)(?:\[/img\])?"));

static IMAGE_URL: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)(https?://\S+\.(?:png|jpg|jpeg|gif|webp))"));

static IMG_SRC: LazyLock<Regex> =
    LazyLock::new(|| compile(r#"(?i)\[img\s+src=["']([^"']+)["']\s*/?\]"#));

static IMG_EQUALS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\[img=([^\]]+)\]"));

static IMG_LEFTOVER_OPEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?is)\[img.*?\]"));

static IMG_LEFTOVER_CLOSE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\[/img\]"));

fn render_img(src: &str) -> String {
    format!(
        r#"<img src="{src}" alt="Steam content" style="max-width: 100%; height: auto; border-radius: 8px; margin: 1rem 0; display: block;" />"#
    )
}

/// First http(s) URL in `content` ending in a known image extension.
#[must_use]
pub fn find_image_url(content: &str) -> Option<&str> {
    IMAGE_URL.find(content).map(|m| m.as_str())
}

/// Runs all four image passes in order.
#[must_use]
pub fn embed_images(text: &str) -> String {
    let text = IMG_CONTENT.replace_all(text, |caps: &Captures<'_>| {
        find_image_url(&caps[1]).map(render_img).unwrap_or_default()
    });
    let text = IMG_SRC.replace_all(&text, |caps: &Captures<'_>| render_img(&caps[1]));
    let text = IMG_EQUALS.replace_all(&text, |caps: &Captures<'_>| render_img(&caps[1]));
    let text = IMG_LEFTOVER_OPEN.replace_all(&text, "");
    IMG_LEFTOVER_CLOSE.replace_all(&text, "").into_owned()
}
