//! Tag recognition for mews: cashtags, hashtags, mentions, link tags, and raw URLs.
//!
//! Patterns are compiled once and shared; every function here is total over any input.

mod anchors;
mod patterns;
mod segments;
mod symbols;
mod tokenizer;

pub use anchors::{TagAnchor, anchor_path, tag_anchors};
pub use segments::{Segment, SegmentKind};
pub use symbols::{TAG_SYMBOLS, TagKind};
pub use tokenizer::{
    is_link_tag, is_mention_tag, is_raw_url, is_tag, split_mew_text_into_parts,
    split_mew_text_into_segments,
};

#[cfg(test)]
mod tests;
