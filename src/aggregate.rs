//! Chart-wide word statistics.
//!
//! Song records are built one chart entry at a time; a song whose lyrics
//! cannot be had still gets a record, just an empty one, so one bad catalog
//! page never costs the other ninety-nine songs.

use std::cmp::Reverse;

use crate::error::{Error, Result};
use crate::lyrics::LyricsProvider;
use crate::types::{ArtistVerbosity, ChartEntry, SongChart, SongRecord};
use crate::words::{count_words, WordFrequencyMap};

/// Add every count of `song` into `total` and hand the total back.
///
/// Order of merging never changes the resulting counts.
pub fn merge_frequency_maps(song: &WordFrequencyMap, mut total: WordFrequencyMap) -> WordFrequencyMap {
    total.absorb(song);
    total
}

/// Fetch and count the lyrics of every chart entry.
///
/// Per-song failures are logged and recorded as empty lyrics. A rank seen
/// twice, or any non-recoverable error, stops the run.
pub async fn build_song_records<P: LyricsProvider + ?Sized>(
    entries: &[ChartEntry],
    provider: &P,
) -> Result<SongChart> {
    let mut chart = SongChart::new();

    for entry in entries {
        if chart.contains(entry.rank) {
            return Err(Error::DuplicateRank(entry.rank));
        }

        let lyrics = match provider.lyrics_for(entry).await {
            Ok(lyrics) => lyrics,
            Err(e) if e.is_recoverable() => {
                tracing::warn!("#{} {} - {}: {e}; counting no words", entry.rank, entry.artist, entry.title);
                String::new()
            }
            Err(e) => return Err(e),
        };

        let word_counts = count_words(&lyrics);
        tracing::debug!("#{} has {} distinct words", entry.rank, word_counts.len());

        chart.insert(SongRecord {
            rank: entry.rank,
            title: entry.title.clone(),
            artist: entry.artist.clone(),
            word_counts,
        })?;
    }

    Ok(chart)
}

/// Sum the word counts of all songs, in rank order.
pub fn aggregate_word_counts(chart: &SongChart) -> WordFrequencyMap {
    chart
        .iter()
        .fold(WordFrequencyMap::new(), |total, record| merge_frequency_maps(&record.word_counts, total))
}

/// The `limit` most frequent words, most frequent first.
///
/// Equal counts keep the order the words were first seen in.
pub fn rank_most_used_words(aggregate: &WordFrequencyMap, limit: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = aggregate.iter().map(|(w, n)| (w.to_string(), n)).collect();
    ranked.sort_by_key(|&(_, n)| Reverse(n));
    ranked.truncate(limit);
    ranked
}

/// The `limit` songs with the most distinct words, as (artist, count).
///
/// Equal counts keep chart order.
pub fn rank_most_verbose_artists(chart: &SongChart, limit: usize) -> Vec<ArtistVerbosity> {
    let mut records: Vec<&SongRecord> = chart.iter().collect();
    records.sort_by_key(|r| Reverse(r.unique_words()));
    records
        .into_iter()
        .take(limit)
        .map(|r| ArtistVerbosity { artist: r.credit(), unique_words: r.unique_words() })
        .collect()
}
