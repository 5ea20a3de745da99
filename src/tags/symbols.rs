//! Tag kinds and the single leading symbol that introduces each of them.

use serde::Serialize;

/// Kind of tag embedded in a mew. Discriminants index [`TAG_SYMBOLS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(usize)]
pub enum TagKind {
    /// `$AAPL`
    Cashtag,
    /// `#news`
    Hashtag,
    /// `@alice`
    Mention,
    /// `^report` or `^[annual report]`
    Link,
}

/// Symbol table: every tag kind with its leading character.
pub const TAG_SYMBOLS: [(TagKind, char); 4] = [
    (TagKind::Cashtag, '$'),
    (TagKind::Hashtag, '#'),
    (TagKind::Mention, '@'),
    (TagKind::Link, '^'),
];

const _: () = {
    let mut i = 0;
    while i < TAG_SYMBOLS.len() {
        assert!(TAG_SYMBOLS[i].0 as usize == i, "TAG_SYMBOLS must follow TagKind order");
        i += 1;
    }
};

impl TagKind {
    /// Leading character of this tag kind.
    pub const fn symbol(self) -> char {
        TAG_SYMBOLS[self as usize].1
    }

    /// Tag kind introduced by `c`, if any.
    pub fn from_symbol(c: char) -> Option<TagKind> {
        TAG_SYMBOLS
            .iter()
            .find(|(_, symbol)| *symbol == c)
            .map(|(kind, _)| *kind)
    }

    /// Lowercase name used in CLI output.
    pub const fn name(self) -> &'static str {
        match self {
            TagKind::Cashtag => "cashtag",
            TagKind::Hashtag => "hashtag",
            TagKind::Mention => "mention",
            TagKind::Link => "link",
        }
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
