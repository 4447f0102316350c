//! Structural rules: escapes, headings, lists, paragraphs, inline formatting,
//! links, code, clan-image placeholders and line breaks.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{compile, computed, template, Rule};

/// CDN root that `{STEAM_CLAN_IMAGE}` placeholders resolve against.
pub const CLAN_IMAGE_CDN: &str = "https://clan.cloudflare.steamstatic.com/images";

static STRUCTURAL_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        // Escaped brackets are literal text, never tags.
        template("unescape-open", r"\\\[", "["),
        template("unescape-close", r"\\\]", "]"),
        template("noise-phrases", r"(?i)\bno\s+(?:image|vids?)\s+", ""),

        // Headings shift down one level
        template(
            "h1",
            r"(?is)\[h1\](.*?)\[/h1\]",
            r#"<h2 style="font-size: 2rem; font-weight: bold; margin: 1.5rem 0 0.75rem 0; color: #ffffff;">${1}</h2>"#,
        ),
        template(
            "h2",
            r"(?is)\[h2\](.*?)\[/h2\]",
            r#"<h3 style="font-size: 1.75rem; font-weight: bold; margin: 1.5rem 0 0.75rem 0; color: #ffffff;">${1}</h3>"#,
        ),
        template(
            "h3",
            r"(?is)\[h3\](.*?)\[/h3\]",
            r#"<h4 style="font-size: 1.5rem; font-weight: bold; margin: 1.5rem 0 0.75rem 0; color: #e5e7eb;">${1}</h4>"#,
        ),

        template(
            "list-open",
            r"(?i)\[list\]",
            r#"<ul style="margin: 0.75rem 0; padding-left: 2rem; list-style-type: disc;">"#,
        ),
        template("list-close", r"(?i)\[/list\]", "</ul>"),
        template(
            "olist-open",
            r"(?i)\[olist\]",
            r#"<ol style="margin: 0.75rem 0; padding-left: 2rem;">"#,
        ),
        template("olist-close", r"(?i)\[/olist\]", "</ol>"),
        template(
            "item-open",
            r"(?i)\[\*\]",
            r#"<li style="margin: 0.5rem 0; line-height: 1.6;">"#,
        ),
        template("item-close", r"(?i)\[/\*\]", "</li>"),
        template("item-close-alt", r"(?i)\[\*/\]", "</li>"),
        computed(
            "item-autoclose",
            r"(?is)(<(?:ul|ol)\b[^>]*>)(.*?)(</(?:ul|ol)>)",
            close_list_items,
        ),

        template("paragraph-attrs", r"(?i)\[p\s+[^\]]*\]", "<br>"),
        template("paragraph-open", r"(?i)\[p\]", "<br>"),
        template("paragraph-close", r"(?i)\[/p\]", ""),
        computed("item-leading-break", r"(?i)<li[^>]*>\s*<br>", strip_first_break),

        template(
            "hr-pair",
            r"(?i)\[hr\]\[/hr\]",
            r#"<hr style="border: none; border-top: 1px solid #374151; margin: 1.5rem 0;" />"#,
        ),
        template(
            "hr",
            r"(?i)\[hr\]",
            r#"<hr style="border: none; border-top: 1px solid #374151; margin: 1.5rem 0;" />"#,
        ),
        template("hr-close", r"(?i)\[/hr\]", ""),

        template(
            "bold",
            r"(?is)\[b\](.*?)\[/b\]",
            r#"<strong style="font-weight: 700; color: #ffffff;">${1}</strong>"#,
        ),
        template(
            "italic",
            r"(?is)\[i\](.*?)\[/i\]",
            r#"<em style="font-style: italic;">${1}</em>"#,
        ),
        template(
            "underline",
            r"(?is)\[u\](.*?)\[/u\]",
            r#"<u style="text-decoration: underline; text-decoration-thickness: 1.5px;">${1}</u>"#,
        ),
        template(
            "strike",
            r"(?is)\[strike\](.*?)\[/strike\]",
            r#"<s style="opacity: 0.7;">${1}</s>"#,
        ),
        template(
            "caption",
            r"(?is)\[c\](.*?)\[/c\]",
            r#"<div style="text-align: center; font-style: italic; opacity: 0.8; margin: 0.5rem 0;">${1}</div>"#,
        ),

        // [url="..."], [url=...], then bare [url]dest[/url]
        template(
            "url-quoted",
            r#"(?is)\[url=["']([^"']+)["']\](.*?)\[/url\]"#,
            r#"<a href="${1}" target="_blank" rel="noopener noreferrer" style="color: #60a5fa; text-decoration: underline;">${2}</a>"#,
        ),
        template(
            "url-unquoted",
            r"(?is)\[url=([^\]]+?)\](.*?)\[/url\]",
            r#"<a href="${1}" target="_blank" rel="noopener noreferrer" style="color: #60a5fa; text-decoration: underline;">${2}</a>"#,
        ),
        template(
            "url-bare",
            r"(?is)\[url\](.*?)\[/url\]",
            r#"<a href="${1}" target="_blank" rel="noopener noreferrer" style="color: #60a5fa; text-decoration: underline;">${1}</a>"#,
        ),

        template(
            "dynamiclink-quoted",
            r#"(?is)\[dynamiclink\s+href=["']([^"']+)["']\](.*?)\[/dynamiclink\]"#,
            r#"<a href="${1}" target="_blank" rel="noopener noreferrer" style="color: #60a5fa; text-decoration: underline;">${2}</a>"#,
        ),
        template(
            "dynamiclink-unquoted",
            r"(?is)\[dynamiclink\s+href=([^\]]+?)\](.*?)\[/dynamiclink\]",
            r#"<a href="${1}" target="_blank" rel="noopener noreferrer" style="color: #60a5fa; text-decoration: underline;">${2}</a>"#,
        ),
        template(
            "dynamiclink-quoted-single",
            r#"(?i)\[dynamiclink\s+href=["']([^"']+)["']\s*/?\]"#,
            r#"<a href="${1}" target="_blank" rel="noopener noreferrer" style="color: #60a5fa; text-decoration: underline;">${1}</a>"#,
        ),
        template(
            "dynamiclink-unquoted-single",
            r"(?i)\[dynamiclink\s+href=([^\]]+?)\s*/?\]",
            r#"<a href="${1}" target="_blank" rel="noopener noreferrer" style="color: #60a5fa; text-decoration: underline;">${1}</a>"#,
        ),

        template(
            "code",
            r"(?is)\[code\](.*?)\[/code\]",
            r#"<code style="background: #374151; padding: 0.125rem 0.375rem; border-radius: 0.25rem; font-family: monospace; font-size: 0.875rem;">${1}</code>"#,
        ),
        template(
            "pre",
            r"(?is)\[pre\](.*?)\[/pre\]",
            r#"<pre style="background: #374151; padding: 1rem; border-radius: 0.5rem; overflow-x: auto; font-family: monospace; font-size: 0.875rem;">${1}</pre>"#,
        ),

        computed(
            "clan-image",
            r"(?i)\{STEAM_CLAN_IMAGE\}/(\d+)/([a-f0-9]+\.(?:png|jpg|jpeg|gif))",
            clan_image_url,
        ),

        // Must stay last: block tags above already carry their own spacing.
        template("paragraph-breaks", r"\n{2,}", "<br><br>"),
        template("line-breaks", r"\n", "<br>"),
    ]
});

/// The structural table, in application order.
#[must_use]
pub fn structural_rules() -> &'static [Rule] {
    &STRUCTURAL_RULES
}

static ITEM_OPEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<li\b"));

static LIST_OPEN: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)<(?:ul|ol)\b"));

/// Closes `[*]` items that never got a `[/*]` inside one list.
///
/// Nested lists are left as they are: the lazy match cannot pair their
/// open and close tags.
fn close_list_items(caps: &Captures<'_>) -> String {
    let (open, body, close) = (&caps[1], &caps[2], &caps[3]);
    if LIST_OPEN.is_match(body) {
        return caps[0].to_string();
    }

    let starts: Vec<usize> = ITEM_OPEN.find_iter(body).map(|m| m.start()).collect();
    let mut html = String::with_capacity(caps[0].len() + starts.len() * 5);
    html.push_str(open);
    html.push_str(&body[..starts.first().copied().unwrap_or(body.len())]);

    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(body.len());
        let item = &body[start..end];
        if item.to_ascii_lowercase().contains("</li>") {
            html.push_str(item);
            continue;
        }
        // Keep trailing newlines outside the item so they become spacing
        let content = item.trim_end();
        html.push_str(content);
        html.push_str("</li>");
        html.push_str(&item[content.len()..]);
    }

    html.push_str(close);
    html
}

/// Drops the `<br>` a `[p]` left right after a list-item open tag.
fn strip_first_break(caps: &Captures<'_>) -> String {
    caps[0].replacen("<br>", "", 1)
}

fn clan_image_url(caps: &Captures<'_>) -> String {
    format!("{CLAN_IMAGE_CDN}/{}/{}", &caps[1], &caps[2])
}
