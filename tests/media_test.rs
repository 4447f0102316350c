//! Media embeds through the full pipeline.

use steam_bbcode::media::{extract_attribute, AttributeBag, VideoEmbed};
use steam_bbcode::parse;

#[test]
fn video_autoplay_without_controls() {
    let html = parse(
        r#"[video mp4="a.mp4" poster="p.png" autoplay="true" controls="false"][/video]"#,
    );
    assert!(html.contains(" autoplay muted loop playsinline"));
    assert!(!html.contains(" controls"));
    assert!(html.contains(r#" poster="p.png""#));
    assert_eq!(html.matches("<source").count(), 1);
    assert!(html.contains(r#"<source src="a.mp4" type="video/mp4">"#));
}

#[test]
fn video_with_both_sources() {
    let html = parse(r#"[video webm="v.webm" mp4="v.mp4"]Trailer[/video]"#);
    assert_eq!(
        html,
        r#"<video preload="metadata" style="max-width: 100%; height: auto; border-radius: 8px; margin: 1rem 0; background: #000;" controls><source src="v.mp4" type="video/mp4"><source src="v.webm" type="video/webm">Your browser does not support the video tag.</video>"#
    );
}

#[test]
fn youtube_quoted_paired_form() {
    let html = parse(r#"[previewyoutube="abc123";full]Watch the trailer[/previewyoutube]"#);
    assert!(html.starts_with(r#"<div class="youtube-embed""#));
    assert!(html.contains(r#"src="https://www.youtube.com/embed/abc123?autoplay=0&rel=0""#));
    assert!(!html.contains("Watch the trailer"));
}

#[test]
fn image_forms_share_markup() {
    let closed = parse("[img]https://x.com/a.png[/img]");
    assert_eq!(parse(r#"[img src="https://x.com/a.png"]"#), closed);
    assert_eq!(parse("[img=https://x.com/a.png]"), closed);
    assert_eq!(parse("[img]https://x.com/a.png"), closed);
}

#[test]
fn unclosed_img_stops_at_next_bracketed_tag() {
    let html = parse("[img]https://x.com/a.png[spoiler]Caption[/spoiler]");
    assert!(html.starts_with(r#"<img src="https://x.com/a.png""#));
    assert!(html.ends_with(" />Caption"));
}

#[test]
fn unclosed_img_swallows_markup_converted_earlier() {
    // [b] is already <strong> when images run, so the [img] content
    // extends to the end of input.
    let html = parse("[img]https://x.com/a.png[b]Caption[/b]");
    assert!(html.starts_with(r#"<img src="https://x.com/a.png""#));
    assert!(!html.contains("Caption"));
}

#[test]
fn carousel_wrapper_is_dropped() {
    let html = parse("[carousel][img]https://x.com/1.jpg[/img][img]https://x.com/2.jpg[/img][/carousel]");
    assert_eq!(html.matches("<img ").count(), 2);
    assert!(!html.contains("carousel"));
}

#[test]
fn attribute_helpers_are_public() {
    let raw = r#"mp4="clip.mp4" controls='false'"#;
    assert_eq!(extract_attribute(raw, "MP4"), Some("clip.mp4"));
    assert!(AttributeBag::new(raw).is("controls", "false"));

    let embed = VideoEmbed::from_attributes(raw);
    assert!(!embed.controls);
    assert!(!embed.autoplay);
    assert_eq!(embed.webm, None);
}
