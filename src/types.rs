//! Core data types shared across the pipeline.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::Url;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::words::WordFrequencyMap;

/// One ranked song on the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    /// Chart position, starting at 1
    pub rank: u32,
    /// Song title as printed on the chart
    pub title: String,
    /// Full artist credit, collaborators included
    pub artist: String,
}

impl ChartEntry {
    /// Build an entry, rejecting a zero rank.
    pub fn new(rank: u32, title: impl Into<String>, artist: impl Into<String>) -> Result<Self> {
        if rank == 0 {
            return Err(Error::invalid("chart ranks start at 1"));
        }
        Ok(Self { rank, title: title.into(), artist: artist.into() })
    }

    /// Build an entry from the rank text found in chart markup.
    pub fn parse(rank: &str, title: impl Into<String>, artist: impl Into<String>) -> Result<Self> {
        let rank = rank
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|&r| r > 0)
            .ok_or_else(|| Error::parse(format!("rank {rank:?} is not a chart position")))?;
        Self::new(rank, title, artist)
    }
}

/// Absolute address of a lyrics page on the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricsAddress(Url);

impl LyricsAddress {
    /// Wrap an already-resolved URL.
    pub const fn new(url: Url) -> Self {
        Self(url)
    }

    /// The address as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LyricsAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Word statistics for one chart position
#[derive(Debug, Clone, Serialize)]
pub struct SongRecord {
    /// Chart position
    pub rank: u32,
    /// Song title
    pub title: String,
    /// Full artist credit
    pub artist: String,
    /// Word counts of the lyrics; empty when they could not be retrieved
    pub word_counts: WordFrequencyMap,
}

impl SongRecord {
    /// Artist credit with `&` joins shown as a comma list, for display.
    pub fn credit(&self) -> String {
        self.artist.replace(" &", ",")
    }

    /// Number of distinct words in the lyrics.
    pub fn unique_words(&self) -> usize {
        self.word_counts.len()
    }
}

/// Song records keyed by chart position
#[derive(Debug, Clone, Default)]
pub struct SongChart {
    records: BTreeMap<u32, SongRecord>,
}

impl SongChart {
    /// Create an empty chart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a record already occupies `rank`.
    pub fn contains(&self, rank: u32) -> bool {
        self.records.contains_key(&rank)
    }

    /// Add a record; a second record for the same rank is an error.
    pub fn insert(&mut self, record: SongRecord) -> Result<()> {
        if self.contains(record.rank) {
            return Err(Error::DuplicateRank(record.rank));
        }
        self.records.insert(record.rank, record);
        Ok(())
    }

    /// Look up the record at `rank`.
    pub fn get(&self, rank: u32) -> Option<&SongRecord> {
        self.records.get(&rank)
    }

    /// Records in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &SongRecord> {
        self.records.values()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the chart has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Serialize for SongChart {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.records.values())
    }
}

/// An artist with the number of distinct words in their song
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistVerbosity {
    /// Display credit of the artist
    pub artist: String,
    /// Distinct words in the song's lyrics
    pub unique_words: usize,
}
