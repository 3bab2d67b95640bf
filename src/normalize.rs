//! Title and artist canonicalization.
//!
//! The chart and the lyrics catalog name things differently: the chart
//! credits every collaborator while the catalog files songs under one artist,
//! and either side may append an alternate title in parentheses. Both sides
//! are reduced to a common form before comparison.

use crate::error::{Error, Result};

/// A collaboration marker in an artist credit.
///
/// Rules are applied in [`SeparatorRule::ORDER`]; each one that matches cuts
/// the credit down to what precedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorRule {
    /// `"A With B"`
    With,
    /// `"A Featuring B"`
    Featuring,
    /// `"A & B"`
    Ampersand,
}

impl SeparatorRule {
    /// Application order.
    pub const ORDER: [Self; 3] = [Self::With, Self::Featuring, Self::Ampersand];

    /// The marker text, leading space included.
    pub const fn token(self) -> &'static str {
        match self {
            Self::With => " With",
            Self::Featuring => " Featuring",
            Self::Ampersand => " & ",
        }
    }

    /// Byte offset where this marker first starts in `credit`, if present.
    ///
    /// Plain substring match: "Bill Withers" is cut at " With" too.
    pub fn find(self, credit: &str) -> Option<usize> {
        credit.find(self.token())
    }

    /// Cut `credit` at this marker, or return it untouched.
    pub fn apply(self, credit: &str) -> &str {
        self.find(credit).map_or(credit, |idx| &credit[..idx])
    }
}

/// Drop a trailing parenthetical: `"Song (Remix)"` becomes `"Song"`.
pub fn strip_parenthetical(title: &str) -> &str {
    title.split_once(" (").map_or(title, |(head, _)| head)
}

/// Canonical song title used for catalog lookups.
pub fn normalize_title(title: &str) -> Result<String> {
    if title.trim().is_empty() {
        return Err(Error::invalid("no song title given"));
    }
    Ok(strip_parenthetical(title.trim()).trim_end().to_string())
}

/// The first credited artist of a possibly multi-artist credit.
pub fn normalize_primary_artist(artist: &str) -> Result<String> {
    if artist.trim().is_empty() {
        return Err(Error::invalid("artist name must be given"));
    }
    let primary = SeparatorRule::ORDER
        .iter()
        .fold(artist, |credit, rule| rule.apply(credit));
    Ok(primary.to_string())
}

/// A chart song reduced to what the catalog can match on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    /// Title without alternate-title suffix
    pub title: String,
    /// First credited artist
    pub primary_artist: String,
}

impl NormalizedQuery {
    /// Normalize a raw (title, artist) pair.
    pub fn new(title: &str, artist: &str) -> Result<Self> {
        Ok(Self {
            title: normalize_title(title)?,
            primary_artist: normalize_primary_artist(artist)?,
        })
    }

    /// Whether a catalog song link names this song.
    pub fn matches_title(&self, link_text: &str) -> bool {
        strip_parenthetical(link_text.trim().to_lowercase().as_str()) == self.title.to_lowercase()
    }
}
