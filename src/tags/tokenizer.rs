//! Tag predicates and the mew splitter.

use regex::{Captures, Match, Regex};

use super::patterns::{
    self, GROUP_CASHTAG, GROUP_HASHTAG, GROUP_LINK, GROUP_LINK_LABELED, GROUP_MENTION,
};
use super::segments::{Segment, SegmentKind};
use super::symbols::TagKind;

/// True if `text` contains a cashtag, hashtag, mention, or link tag (either form).
/// Raw URLs are not tags.
pub fn is_tag(text: &str) -> bool {
    patterns::patterns().tag.is_match(text)
}

/// True if `text` contains a mention.
pub fn is_mention_tag(text: &str) -> bool {
    patterns::patterns().mention.is_match(text)
}

/// True if `text` contains a single-word link tag. The bracketed pattern is not tried on its
/// own; `^[...]` still matches because `[` is not whitespace.
pub fn is_link_tag(text: &str) -> bool {
    patterns::patterns().link.is_match(text)
}

/// True if `text` contains a raw URL that is not part of a link tag.
pub fn is_raw_url(text: &str) -> bool {
    find_raw_url(&patterns::patterns().raw_url, text).is_some()
}

/// Leftmost raw URL match not directly preceded by the link symbol.
fn find_raw_url<'t>(re: &Regex, text: &'t str) -> Option<Match<'t>> {
    let mut start = 0;
    while start < text.len() {
        let m = re.find_at(text, start)?;
        if !patterns::preceded_by_link_symbol(text, m.start()) {
            return Some(m);
        }
        start = patterns::next_char_boundary(text, m.start());
    }
    None
}

fn kind_of(caps: &Captures<'_>) -> SegmentKind {
    let groups = [
        (GROUP_CASHTAG, SegmentKind::Tag(TagKind::Cashtag)),
        (GROUP_HASHTAG, SegmentKind::Tag(TagKind::Hashtag)),
        (GROUP_MENTION, SegmentKind::Tag(TagKind::Mention)),
        (GROUP_LINK_LABELED, SegmentKind::Tag(TagKind::Link)),
        (GROUP_LINK, SegmentKind::Tag(TagKind::Link)),
    ];
    groups
        .into_iter()
        .find(|(name, _)| caps.name(name).is_some())
        .map_or(SegmentKind::RawUrl, |(_, kind)| kind)
}

/// Leftmost token at or after `from`: byte range and kind.
fn next_token(text: &str, from: usize) -> Option<(usize, usize, SegmentKind)> {
    let re = &patterns::patterns().tag_or_raw_url;
    let mut start = from;
    while start < text.len() {
        let caps = re.captures_at(text, start)?;
        let whole = caps.get(0)?;
        let kind = kind_of(&caps);
        if kind == SegmentKind::RawUrl && patterns::preceded_by_link_symbol(text, whole.start())
        {
            start = patterns::next_char_boundary(text, whole.start());
            continue;
        }
        return Some((whole.start(), whole.end(), kind));
    }
    None
}

/// Split a mew into classified segments, left to right. Empty segments are dropped, so
/// concatenating every segment's text gives back `text`.
pub fn split_mew_text_into_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut rest_start = 0;
    while let Some((start, end, kind)) = next_token(text, rest_start) {
        if start > rest_start {
            segments.push(Segment {
                kind: SegmentKind::Text,
                text: &text[rest_start..start],
            });
        }
        segments.push(Segment {
            kind,
            text: &text[start..end],
        });
        rest_start = end;
    }
    if rest_start < text.len() {
        segments.push(Segment {
            kind: SegmentKind::Text,
            text: &text[rest_start..],
        });
    }
    log::trace!(
        "split {} bytes into {} segments ({} tokens)",
        text.len(),
        segments.len(),
        segments.iter().filter(|s| !s.is_text()).count()
    );
    segments
}

/// Split a mew into plain-text and token substrings, left to right, empty ones dropped.
/// Callers tell tokens apart by re-testing each part with the predicates.
pub fn split_mew_text_into_parts(text: &str) -> Vec<&str> {
    split_mew_text_into_segments(text)
        .into_iter()
        .map(|segment| segment.text)
        .collect()
}
