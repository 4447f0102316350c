//! Malformed and adversarial input.
//!
//! Conversion never fails; unconverted markup is stripped by cleanup.

use std::time::{Duration, Instant};

use steam_bbcode::parse;

#[test]
fn unclosed_bold_does_not_leak() {
    let html = parse("[b]New map added\nMore text follows here.");
    assert!(!html.contains("[b]"));
    assert!(html.contains("New map added"));
    assert!(html.contains("More text follows here."));
}

#[test]
fn unclosed_link_keeps_label() {
    let html = parse("[url=https://example.com]Link without closing tag");
    assert_eq!(html, "Link without closing tag");
}

#[test]
fn stray_closing_tags_are_removed() {
    assert_eq!(parse("text[/b] more[/quote]"), "text more");
}

#[test]
fn spoiler_tags_are_stripped_keeping_content() {
    assert_eq!(parse("[spoiler]boss dies[/spoiler]"), "boss dies");
}

#[test]
fn empty_input() {
    assert_eq!(parse(""), "");
}

#[test]
fn lone_brackets() {
    assert_eq!(parse("[]"), "");
    assert_eq!(parse("["), "[");
    assert_eq!(parse("]"), "");
}

#[test]
fn video_without_sources_degrades() {
    let html = parse("[video autoplay=\"true\"][/video]");
    assert!(html.starts_with("<video "));
    assert!(!html.contains("<source"));
}

#[test]
fn unclosed_video_tag_is_stripped() {
    assert_eq!(parse(r#"before [video mp4="a.mp4"] after"#), "before  after");
}

#[test]
fn img_without_url_is_dropped() {
    assert_eq!(parse("a [img]not a picture[/img] b"), "a  b");
}

fn assert_fast(input: &str) {
    let start = Instant::now();
    let _ = parse(input);
    let elapsed = start.elapsed();
    assert!(
        elapsed < Duration::from_secs(5),
        "conversion of {} bytes took {elapsed:?}",
        input.len()
    );
}

#[test]
fn pathological_bracket_nesting_is_bounded() {
    assert_fast(&"[".repeat(20_000));
    assert_fast(&"[b][i][u]".repeat(5_000));
    assert_fast(&"[img][url=".repeat(5_000));
    assert_fast(&format!("{}{}", "[list][*]".repeat(3_000), "[/list]".repeat(3_000)));
    assert_fast(&"[video ".repeat(5_000));
}

#[test]
fn pathological_whitespace_is_bounded() {
    assert_fast(&" \n".repeat(50_000));
    assert_fast(&format!("[h1]{}", "\n".repeat(50_000)));
}
