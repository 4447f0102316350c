//! Cleanup rules: strip whatever markup the earlier stages left unconverted.
//!
//! Deliberately lossy. A malformed tag is removed rather than rendered
//! literally, even when that swallows a fragment the author intended.

use std::sync::LazyLock;

use super::{template, Rule};

static CLEANUP_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    vec![
        template("img-src-remnant", r#"(?i)\[img\s+src=["']"#, ""),
        template("carousel-open", r"(?i)\[carousel\]", ""),
        template("carousel-close", r"(?i)\[/carousel\]", ""),
        template("video-open", r"(?i)\[video[^\]]*\]", ""),
        template("video-close", r"(?i)\[/video\]", ""),
        // Whole tags go before the fragment rules below, which would
        // otherwise eat their quotes or closing bracket and leave a `[`.
        // Openers whose closing tag never arrived, e.g. `[b]New map added`
        template(
            "unclosed-open",
            r"(?i)\[(?:h[1-6]|b|i|u|s|strike|c|code|pre|list|olist|p|quote|spoiler|noparse|table|tr|th|td|expand|previewyoutube|url|dynamiclink)(?:[=\s][^\[\]]*)?\]",
            "",
        ),
        template("closing-tag", r"\[/[^\]]*\]", ""),
        template("bracket-quote", r#"\[["']"#, ""),
        template("quote-bracket", r#"["']\s*\]"#, ""),
        template("trailing-quote", r#"(?m)["']\s*$"#, ""),
        template("empty-brackets", r"\[\]", ""),
        template("trailing-bracket", r"(?m)\]\s*$", ""),
        template("whitespace-runs", r"\s{3,}", " "),
        template("break-runs", r"(?:<br>\s*){3,}", "<br><br>"),
    ]
});

/// The cleanup table, in application order.
#[must_use]
pub fn cleanup_rules() -> &'static [Rule] {
    &CLEANUP_RULES
}
