//! Pattern sources for every tag shape and for raw URLs, compiled once on first use.
//!
//! Tag patterns are derived from the symbol table. The combined splitting pattern names each
//! alternative so a match can be classified without re-testing it.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use super::symbols::TagKind;

pub(crate) const GROUP_CASHTAG: &str = "cashtag";
pub(crate) const GROUP_HASHTAG: &str = "hashtag";
pub(crate) const GROUP_MENTION: &str = "mention";
pub(crate) const GROUP_LINK_LABELED: &str = "link_labeled";
pub(crate) const GROUP_LINK: &str = "link";
pub(crate) const GROUP_RAW_URL: &str = "raw_url";

/// Scheme URI (`https://`, `mailto:x`) or bare domain with a path (`example.com/`), then a body
/// that may hold balanced parentheses, ending on a character that is not trailing punctuation.
/// Word boundaries and the scheme/domain classes are ASCII-only; the body classes are not.
/// Must not be used right after the link symbol; see [`preceded_by_link_symbol`].
const RAW_URL_SOURCE: &str = concat!(
    r"(?-u:\b)",
    r"(?:(?-u:[a-z][\w-]+):(?:/{1,3}|(?-u:[a-z0-9%]))|(?-u:[a-z0-9.-]+[.][a-z]{2,4})/)",
    r"(?:[^\s()<>]+|\((?:[^\s()<>]+|\([^\s()<>]+\))*\))+",
    r#"(?:\((?:[^\s()<>]+|\([^\s()<>]+\))*\)|[^\s`!()\[\]{};:'".,<>?«»“”‘’])"#,
);

/// The symbol must not follow an ASCII word character.
const NOT_AFTER_WORD: &str = r"(?-u:\B)";

/// One or more ASCII letters, digits, or underscores.
const WORD: &str = r"(?-u:\w)+";

fn symbol(kind: TagKind) -> String {
    regex::escape(&kind.symbol().to_string())
}

pub(crate) fn cashtag_source() -> String {
    format!("{}{}{}", NOT_AFTER_WORD, symbol(TagKind::Cashtag), WORD)
}

pub(crate) fn hashtag_source() -> String {
    format!("{}{}{}", NOT_AFTER_WORD, symbol(TagKind::Hashtag), WORD)
}

pub(crate) fn mention_source() -> String {
    format!(r"{}{}\S+", NOT_AFTER_WORD, symbol(TagKind::Mention))
}

/// `^[label with spaces]`
pub(crate) fn labeled_link_source() -> String {
    format!(r"{}{}\[[\S ]+\]", NOT_AFTER_WORD, symbol(TagKind::Link))
}

/// `^label`
pub(crate) fn link_source() -> String {
    format!(r"{}{}\S+", NOT_AFTER_WORD, symbol(TagKind::Link))
}

/// Tag alternatives in precedence order, paired with their group names.
fn tag_alternatives() -> [(&'static str, String); 5] {
    [
        (GROUP_CASHTAG, cashtag_source()),
        (GROUP_HASHTAG, hashtag_source()),
        (GROUP_MENTION, mention_source()),
        (GROUP_LINK_LABELED, labeled_link_source()),
        (GROUP_LINK, link_source()),
    ]
}

/// Any tag shape, unnamed.
pub(crate) fn tag_source() -> String {
    tag_alternatives()
        .iter()
        .map(|(_, source)| format!("(?:{})", source))
        .collect::<Vec<_>>()
        .join("|")
}

/// Every tag shape followed by the raw URL shape, each in its own named group.
pub(crate) fn tag_or_raw_url_source() -> String {
    tag_alternatives()
        .into_iter()
        .chain(std::iter::once((GROUP_RAW_URL, RAW_URL_SOURCE.to_string())))
        .map(|(name, source)| format!("(?P<{}>{})", name, source))
        .collect::<Vec<_>>()
        .join("|")
}

/// Compiled, immutable pattern set shared by every caller.
pub(crate) struct PatternSet {
    pub tag: Regex,
    pub mention: Regex,
    pub link: Regex,
    pub raw_url: Regex,
    pub tag_or_raw_url: Regex,
}

fn tag_regex(source: &str, what: &str) -> Regex {
    RegexBuilder::new(source)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .unwrap_or_else(|e| panic!("{} pattern must be valid: {}", what, e))
}

impl PatternSet {
    fn compile() -> PatternSet {
        let set = PatternSet {
            tag: tag_regex(&tag_source(), "tag"),
            mention: tag_regex(&mention_source(), "mention"),
            link: tag_regex(&link_source(), "link"),
            // Standalone raw URL matching is case-sensitive.
            raw_url: Regex::new(RAW_URL_SOURCE).expect("raw URL pattern must be valid"),
            tag_or_raw_url: tag_regex(&tag_or_raw_url_source(), "tag or raw URL"),
        };
        log::debug!(
            "compiled tag patterns ({} alternatives in splitter)",
            set.tag_or_raw_url.captures_len() - 1
        );
        set
    }
}

static PATTERNS: OnceLock<PatternSet> = OnceLock::new();

/// Returns the pattern set, compiling it on first access.
pub(crate) fn patterns() -> &'static PatternSet {
    PATTERNS.get_or_init(PatternSet::compile)
}

/// True if the character right before `pos` is the link symbol.
pub(crate) fn preceded_by_link_symbol(text: &str, pos: usize) -> bool {
    text[..pos].ends_with(TagKind::Link.symbol())
}

/// Byte offset of the character after the one starting at `pos`.
pub(crate) fn next_char_boundary(text: &str, pos: usize) -> usize {
    pos + text[pos..].chars().next().map_or(1, char::len_utf8)
}
