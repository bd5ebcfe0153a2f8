//! Player and clan tags.

use std::fmt;

/// Which kind of entity a tag refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Clan,
}

impl EntityKind {
    /// URL path segment of the collection for this kind.
    pub fn path_segment(self) -> &'static str {
        match self {
            EntityKind::Player => "players",
            EntityKind::Clan => "clans",
        }
    }

    /// Display noun used in replies.
    pub fn noun(self) -> &'static str {
        match self {
            EntityKind::Player => "Player",
            EntityKind::Clan => "Clan",
        }
    }

    /// Command name that looks this kind up.
    pub fn command(self) -> &'static str {
        match self {
            EntityKind::Player => "player",
            EntityKind::Clan => "clan",
        }
    }
}

/// A `#`-prefixed player or clan tag.
///
/// Only the prefix is checked locally; anything else is up to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTag(String);

impl EntityTag {
    /// Returns `None` unless `raw` starts with `#`.
    pub fn new(raw: &str) -> Option<Self> {
        raw.starts_with('#').then(|| Self(raw.to_string()))
    }

    /// The tag percent-encoded for use as a URL path segment.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_requires_hash_prefix() {
        assert!(EntityTag::new("#2PP").is_some());
        assert!(EntityTag::new("2PP").is_none());
        assert!(EntityTag::new("").is_none());
        assert!(EntityTag::new("2P#P").is_none());
    }

    #[test]
    fn test_tag_encoding() {
        let tag = EntityTag::new("#2PP0JCL").unwrap();
        assert_eq!(tag.encoded(), "%232PP0JCL");
        assert_eq!(tag.to_string(), "#2PP0JCL");
    }

    #[test]
    fn test_kind_segments() {
        assert_eq!(EntityKind::Player.path_segment(), "players");
        assert_eq!(EntityKind::Clan.path_segment(), "clans");
        assert_eq!(EntityKind::Clan.noun(), "Clan");
    }
}
