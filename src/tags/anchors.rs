//! Index anchors: the paths under which a mew carrying hashtags or cashtags is filed.

use serde::Serialize;

use super::segments::SegmentKind;
use super::symbols::TagKind;
use super::tokenizer::split_mew_text_into_segments;

/// A hashtag or cashtag found in a mew. `tag` keeps its leading symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagAnchor {
    pub kind: TagKind,
    pub tag: String,
}

impl TagAnchor {
    /// Index path, e.g. `hashtags.#news`.
    pub fn path(&self) -> String {
        anchor_path(self.kind, &self.tag).unwrap_or_default()
    }
}

fn anchor_prefix(kind: TagKind) -> Option<&'static str> {
    match kind {
        TagKind::Hashtag => Some("hashtags"),
        TagKind::Cashtag => Some("cashtags"),
        TagKind::Mention | TagKind::Link => None,
    }
}

/// Index path for `tag` of the given kind. Only hashtags and cashtags are indexed.
pub fn anchor_path(kind: TagKind, tag: &str) -> Option<String> {
    anchor_prefix(kind).map(|prefix| format!("{}.{}", prefix, tag))
}

/// Hashtags and cashtags of `text` in order of first appearance, without repeats.
pub fn tag_anchors(text: &str) -> Vec<TagAnchor> {
    let mut anchors: Vec<TagAnchor> = Vec::new();
    for segment in split_mew_text_into_segments(text) {
        let SegmentKind::Tag(kind) = segment.kind else {
            continue;
        };
        if anchor_prefix(kind).is_none() {
            continue;
        }
        if anchors.iter().any(|a| a.kind == kind && a.tag == segment.text) {
            continue;
        }
        anchors.push(TagAnchor {
            kind,
            tag: segment.text.to_string(),
        });
    }
    anchors
}
