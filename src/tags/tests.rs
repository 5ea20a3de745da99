use proptest::prelude::*;

use super::{
    Segment, SegmentKind, TagKind, is_link_tag, is_mention_tag, is_raw_url, is_tag,
    split_mew_text_into_parts, split_mew_text_into_segments,
};

fn kinds(text: &str) -> Vec<SegmentKind> {
    split_mew_text_into_segments(text)
        .iter()
        .map(|s| s.kind)
        .collect()
}

#[test]
fn is_tag_cashtag() {
    assert!(is_tag("hello $AAPL"));
    assert!(!is_tag("hello world"));
}

#[test]
fn is_tag_every_kind() {
    assert!(is_tag("#news"));
    assert!(is_tag("cc @bob"));
    assert!(is_tag("see ^report"));
    assert!(is_tag("see ^[annual report]"));
}

#[test]
fn is_tag_ignores_raw_urls() {
    assert!(!is_tag("visit https://example.com/page"));
}

#[test]
fn is_tag_requires_symbol_outside_word() {
    assert!(!is_tag("a#b"));
    assert!(!is_tag("email bob@example.com"));
    assert!(!is_tag("price5$"));
}

#[test]
fn is_tag_empty() {
    assert!(!is_tag(""));
}

#[test]
fn is_mention_tag_basic() {
    assert!(is_mention_tag("cc @bob"));
    assert!(is_mention_tag("@bob at start"));
    assert!(!is_mention_tag("no mention here"));
    assert!(!is_mention_tag("bob@example.com"));
    assert!(!is_mention_tag("#news $AAPL"));
}

#[test]
fn is_link_tag_single_word() {
    assert!(is_link_tag("see ^report"));
    assert!(!is_link_tag("see report"));
    assert!(!is_link_tag("@bob"));
}

#[test]
fn is_link_tag_bracket_opening_counts_as_single_word() {
    // "^[" is already a non-whitespace run after the symbol.
    assert!(is_link_tag("^[two words]"));
    assert!(is_tag("^[two words]"));
}

#[test]
fn is_raw_url_scheme() {
    assert!(is_raw_url("visit https://example.com/page"));
    assert!(is_raw_url("https://example.com"));
    assert!(is_raw_url("mailto:bob@example.com"));
}

#[test]
fn is_raw_url_bare_domain_needs_path() {
    assert!(is_raw_url("see example.com/page"));
    assert!(!is_raw_url("see example.com"));
}

#[test]
fn is_raw_url_not_after_link_symbol() {
    assert!(!is_raw_url("^https://example.com"));
    assert!(!is_raw_url("a^https://example.com"));
}

#[test]
fn is_raw_url_is_case_sensitive() {
    assert!(!is_raw_url("see HTTPS://EXAMPLE.COM/X"));
}

#[test]
fn is_raw_url_plain_text() {
    assert!(!is_raw_url("hello world"));
    assert!(!is_raw_url(""));
}

#[test]
fn split_mention_and_hashtag() {
    assert_eq!(
        split_mew_text_into_parts("hi @bob check #news"),
        vec!["hi ", "@bob", " check ", "#news"]
    );
}

#[test]
fn split_empty() {
    assert!(split_mew_text_into_parts("").is_empty());
}

#[test]
fn split_plain_text_is_single_part() {
    assert_eq!(split_mew_text_into_parts("hello world"), vec!["hello world"]);
}

#[test]
fn split_cashtag() {
    assert_eq!(
        split_mew_text_into_parts("hello $AAPL"),
        vec!["hello ", "$AAPL"]
    );
}

#[test]
fn split_labeled_link_keeps_bracketed_label() {
    assert_eq!(
        split_mew_text_into_parts("go to ^[my site](no this is literal text)"),
        vec!["go to ", "^[my site]", "(no this is literal text)"]
    );
}

#[test]
fn split_link_tag_swallows_url() {
    assert_eq!(
        split_mew_text_into_parts("^https://example.com"),
        vec!["^https://example.com"]
    );
}

#[test]
fn split_url_after_link_symbol_is_not_raw_url() {
    assert_eq!(
        split_mew_text_into_parts("a^https://example.com"),
        vec!["a^https://example.com"]
    );
}

#[test]
fn split_raw_url_drops_trailing_punctuation() {
    assert_eq!(
        split_mew_text_into_parts("read https://example.com/a."),
        vec!["read ", "https://example.com/a", "."]
    );
}

#[test]
fn split_raw_url_with_balanced_parens() {
    assert_eq!(
        split_mew_text_into_parts("wiki https://en.wikipedia.org/wiki/Rust_(language) ok"),
        vec![
            "wiki ",
            "https://en.wikipedia.org/wiki/Rust_(language)",
            " ok"
        ]
    );
}

#[test]
fn split_is_case_insensitive_for_urls() {
    assert_eq!(
        split_mew_text_into_parts("see HTTPS://EXAMPLE.COM/X"),
        vec!["see ", "HTTPS://EXAMPLE.COM/X"]
    );
}

#[test]
fn split_mention_wins_over_url() {
    assert_eq!(
        kinds("@bob.example.com/path"),
        vec![SegmentKind::Tag(TagKind::Mention)]
    );
}

#[test]
fn split_mention_keeps_trailing_punctuation() {
    assert_eq!(
        split_mew_text_into_parts("hi @bob, ok"),
        vec!["hi ", "@bob,", " ok"]
    );
}

#[test]
fn split_multi_line() {
    assert_eq!(
        split_mew_text_into_parts("line one\n#tag\n@bob"),
        vec!["line one\n", "#tag", "\n", "@bob"]
    );
}

#[test]
fn split_tag_inside_parens() {
    assert_eq!(
        split_mew_text_into_parts("(#tag)"),
        vec!["(", "#tag", ")"]
    );
}

#[test]
fn split_hashtag_stops_at_non_ascii_letter() {
    assert_eq!(split_mew_text_into_parts("#café x"), vec!["#caf", "é x"]);
}

#[test]
fn split_mention_after_non_ascii_letter() {
    assert_eq!(split_mew_text_into_parts("naï@bob"), vec!["naï", "@bob"]);
    // An ASCII letter right before the symbol still glues it to the word.
    assert_eq!(split_mew_text_into_parts("naïve@bob"), vec!["naïve@bob"]);
}

#[test]
fn is_tag_after_non_ascii_letter() {
    assert!(is_tag("é#x"));
    assert!(is_mention_tag("ü@bob"));
}

#[test]
fn split_raw_url_after_non_ascii_letter() {
    assert!(is_raw_url("éhttps://x.com/a"));
    assert_eq!(
        split_mew_text_into_parts("éhttps://x.com/a"),
        vec!["é", "https://x.com/a"]
    );
}

#[test]
fn split_domain_letters_are_ascii_only() {
    // KELVIN SIGN does not case-fold into the domain class.
    assert_eq!(
        split_mew_text_into_parts("see \u{212A}b.com/xy"),
        vec!["see \u{212A}", "b.com/xy"]
    );
}

#[test]
fn segments_classify_every_kind() {
    let text = "hi @bob $X #y ^z ^[a b] https://x.io/p";
    let segments = split_mew_text_into_segments(text);
    let tokens: Vec<(SegmentKind, &str)> = segments
        .iter()
        .filter(|s| !s.is_text())
        .map(|s| (s.kind, s.text))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (SegmentKind::Tag(TagKind::Mention), "@bob"),
            (SegmentKind::Tag(TagKind::Cashtag), "$X"),
            (SegmentKind::Tag(TagKind::Hashtag), "#y"),
            (SegmentKind::Tag(TagKind::Link), "^z"),
            (SegmentKind::Tag(TagKind::Link), "^[a b]"),
            (SegmentKind::RawUrl, "https://x.io/p"),
        ]
    );
}

#[test]
fn segment_value_strips_symbol_and_brackets() {
    let segments = split_mew_text_into_segments("@bob ^[a b] ^z $X https://x.io/p");
    let values: Vec<&str> = segments
        .iter()
        .filter(|s| !s.is_text())
        .map(Segment::value)
        .collect();
    assert_eq!(values, vec!["bob", "a b", "z", "X", "https://x.io/p"]);
}

#[test]
fn segment_value_of_text_is_text() {
    let segment = Segment {
        kind: SegmentKind::Text,
        text: "plain",
    };
    assert_eq!(segment.value(), "plain");
}

#[test]
fn segments_serialize_with_kind_name() {
    let segments = split_mew_text_into_segments("hi @bob");
    let json = serde_json::to_string(&segments).unwrap();
    assert_eq!(
        json,
        r#"[{"kind":"text","text":"hi "},{"kind":"mention","text":"@bob"}]"#
    );
}

#[test]
fn split_tokens_satisfy_predicates() {
    for part in split_mew_text_into_parts("hi @bob see ^report and https://example.com/x") {
        match part {
            "@bob" => assert!(is_mention_tag(part) && is_tag(part)),
            "^report" => assert!(is_link_tag(part) && is_tag(part)),
            "https://example.com/x" => assert!(is_raw_url(part) && !is_tag(part)),
            _ => assert!(!is_tag(part) && !is_raw_url(part), "unexpected token {part:?}"),
        }
    }
}

proptest! {
    #[test]
    fn split_reconstructs_any_text(text in "\\PC*") {
        let parts = split_mew_text_into_parts(&text);
        prop_assert_eq!(parts.concat(), text.clone());
        prop_assert!(parts.iter().all(|p| !p.is_empty()));
    }

    #[test]
    fn split_reconstructs_tag_heavy_text(text in "[a-zA-Z0-9é #$@^\\[\\]().:/,\n-]{0,60}") {
        let parts = split_mew_text_into_parts(&text);
        prop_assert_eq!(parts.concat(), text.clone());
    }

    #[test]
    fn split_is_idempotent(text in "[a-zé #$@^\\[\\]().:/\n]{0,60}") {
        let parts = split_mew_text_into_parts(&text);
        let rejoined = parts.concat();
        prop_assert_eq!(split_mew_text_into_parts(&rejoined), parts);
    }
}
