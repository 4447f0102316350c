//! Property-based checks over generated input.

use proptest::prelude::*;
use steam_bbcode::parse;

/// Words of three or more letters can't form a noise phrase like "no vids".
fn prose() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-zA-Z0-9]{3,8}", prop::sample::select(vec![" ", "\n", ", "])), 1..40)
        .prop_map(|parts| {
            let mut text: String = parts.into_iter().map(|(word, sep)| format!("{word}{sep}")).collect();
            text.push_str("end");
            text
        })
}

fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "[b]", "[/b]", "[i]", "[url=", "[url]", "[/url]", "[img]", "[/img]", "[video ", "[/video]",
        "[list]", "[*]", "[/*]", "[/list]", "[h1]", "[p]", "\"", "'", "]", "[", "\n", "text ",
        "https://x.com/a.png", "[previewyoutube=", ";full]", "mp4=\"a.mp4\"",
    ])
}

proptest! {
    #[test]
    fn markup_free_text_only_gains_breaks(text in prose()) {
        prop_assert_eq!(parse(&text), text.replace('\n', "<br>"));
    }

    #[test]
    fn arbitrary_input_never_panics(input in any::<String>()) {
        let _ = parse(&input);
    }

    #[test]
    fn tag_soup_leaks_no_inline_openers(parts in prop::collection::vec(fragment(), 0..30)) {
        let html = parse(&parts.concat());
        for tag in ["[b]", "[i]", "[h1]", "[list]", "[/b]", "[/url]", "[/video]", "[/list]"] {
            prop_assert!(!html.contains(tag), "{} leaked into {}", tag, html);
        }
    }
}
