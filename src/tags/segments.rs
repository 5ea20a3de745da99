//! Typed segments: a slice of the message together with what it was recognised as.

use serde::Serialize;

use super::symbols::TagKind;

/// What a segment of a mew is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Text,
    Tag(TagKind),
    RawUrl,
}

impl SegmentKind {
    /// Name used in CLI output: `text`, `raw_url`, or the tag kind name.
    pub fn name(self) -> &'static str {
        match self {
            SegmentKind::Text => "text",
            SegmentKind::Tag(kind) => kind.name(),
            SegmentKind::RawUrl => "raw_url",
        }
    }
}

/// Segment of a message: plain text, a tag, or a raw URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
}

impl<'a> Segment<'a> {
    pub fn is_text(&self) -> bool {
        self.kind == SegmentKind::Text
    }

    /// Token content without its leading symbol. For `^[label]` this is the label; text and
    /// raw URLs are returned whole.
    pub fn value(&self) -> &'a str {
        match self.kind {
            SegmentKind::Tag(kind) => {
                let rest = self
                    .text
                    .strip_prefix(kind.symbol())
                    .unwrap_or(self.text);
                if kind == TagKind::Link
                    && let Some(label) = rest.strip_prefix('[').and_then(|r| r.strip_suffix(']'))
                {
                    return label;
                }
                rest
            }
            SegmentKind::Text | SegmentKind::RawUrl => self.text,
        }
    }
}

impl Serialize for Segment<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("Segment", 2)?;
        s.serialize_field("kind", self.kind.name())?;
        s.serialize_field("text", self.text)?;
        s.end()
    }
}
