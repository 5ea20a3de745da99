//! Rendering results for the CLI, as aligned text lines or JSON.

use std::io::{self, Write};

use serde::Serialize;

use crate::tags::{self, Segment, TagAnchor};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

impl Format {
    /// Parse `text` or `json` (case-insensitive).
    pub fn parse(s: &str) -> Option<Format> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Format::Text),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

/// Results of the four predicates for one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_tag: bool,
    pub is_mention_tag: bool,
    pub is_link_tag: bool,
    pub is_raw_url: bool,
}

impl Classification {
    pub fn of(text: &str) -> Self {
        Classification {
            is_tag: tags::is_tag(text),
            is_mention_tag: tags::is_mention_tag(text),
            is_link_tag: tags::is_link_tag(text),
            is_raw_url: tags::is_raw_url(text),
        }
    }
}

#[derive(Serialize)]
struct AnchorRow<'a> {
    kind: &'static str,
    tag: &'a str,
    path: String,
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}

/// One line per segment: kind name, then the quoted segment text.
pub fn write_segments<W: Write>(
    out: &mut W,
    segments: &[Segment<'_>],
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Json => write_json(out, segments),
        Format::Text => {
            for segment in segments {
                writeln!(out, "{:<7} {:?}", segment.kind.name(), segment.text)?;
            }
            Ok(())
        }
    }
}

pub fn write_classification<W: Write>(
    out: &mut W,
    classification: &Classification,
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Json => write_json(out, classification),
        Format::Text => {
            writeln!(out, "tag:          {}", classification.is_tag)?;
            writeln!(out, "mention tag:  {}", classification.is_mention_tag)?;
            writeln!(out, "link tag:     {}", classification.is_link_tag)?;
            writeln!(out, "raw url:      {}", classification.is_raw_url)
        }
    }
}

/// One anchor path per line, or JSON rows with kind, tag, and path.
pub fn write_anchors<W: Write>(
    out: &mut W,
    anchors: &[TagAnchor],
    format: Format,
) -> io::Result<()> {
    match format {
        Format::Json => {
            let rows: Vec<AnchorRow<'_>> = anchors
                .iter()
                .map(|a| AnchorRow {
                    kind: a.kind.name(),
                    tag: &a.tag,
                    path: a.path(),
                })
                .collect();
            write_json(out, &rows)
        }
        Format::Text => {
            for anchor in anchors {
                writeln!(out, "{}", anchor.path())?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{split_mew_text_into_segments, tag_anchors};

    fn render<F: FnOnce(&mut Vec<u8>) -> io::Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn format_parse() {
        assert_eq!(Format::parse("text"), Some(Format::Text));
        assert_eq!(Format::parse(" Json "), Some(Format::Json));
        assert_eq!(Format::parse("xml"), None);
    }

    #[test]
    fn segments_as_text() {
        let segments = split_mew_text_into_segments("hi @bob");
        let out = render(|w| write_segments(w, &segments, Format::Text));
        assert_eq!(out, "text    \"hi \"\nmention \"@bob\"\n");
    }

    #[test]
    fn segments_as_json() {
        let segments = split_mew_text_into_segments("#news");
        let out = render(|w| write_segments(w, &segments, Format::Json));
        assert_eq!(out, "[{\"kind\":\"hashtag\",\"text\":\"#news\"}]\n");
    }

    #[test]
    fn classification_of_mention() {
        let c = Classification::of("cc @bob");
        assert!(c.is_tag && c.is_mention_tag);
        assert!(!c.is_link_tag && !c.is_raw_url);
        let out = render(|w| write_classification(w, &c, Format::Json));
        assert_eq!(
            out,
            "{\"is_tag\":true,\"is_mention_tag\":true,\"is_link_tag\":false,\"is_raw_url\":false}\n"
        );
    }

    #[test]
    fn anchors_as_text_and_json() {
        let anchors = tag_anchors("#news $AAPL");
        let text = render(|w| write_anchors(w, &anchors, Format::Text));
        assert_eq!(text, "hashtags.#news\ncashtags.$AAPL\n");
        let json = render(|w| write_anchors(w, &anchors[..1], Format::Json));
        assert_eq!(
            json,
            "[{\"kind\":\"hashtag\",\"tag\":\"#news\",\"path\":\"hashtags.#news\"}]\n"
        );
    }

    #[test]
    fn empty_anchors_print_nothing() {
        let out = render(|w| write_anchors(w, &[], Format::Text));
        assert!(out.is_empty());
    }
}
