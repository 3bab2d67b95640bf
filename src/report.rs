//! Run results and their presentation.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::aggregate::{rank_most_used_words, rank_most_verbose_artists};
use crate::constants::report::BAR_WIDTH;
use crate::error::{Error, Result};
use crate::types::SongChart;
use crate::words::WordFrequencyMap;

/// Everything one run produced
#[derive(Debug, Clone, Serialize)]
pub struct ChartReport {
    /// When the chart was read
    pub fetched_at: DateTime<Utc>,
    /// Per-song word counts
    pub songs: SongChart,
    /// Word counts summed over all songs
    pub totals: WordFrequencyMap,
}

impl ChartReport {
    /// Songs whose lyrics came back empty.
    pub fn songs_without_lyrics(&self) -> usize {
        self.songs.iter().filter(|r| r.word_counts.is_empty()).count()
    }

    /// Both rankings rendered as text bar charts.
    pub fn render(&self, top_words: usize, top_artists: usize) -> String {
        let words = rank_most_used_words(&self.totals, top_words);
        let artists: Vec<(String, u64)> = rank_most_verbose_artists(&self.songs, top_artists)
            .into_iter()
            .map(|a| (a.artist, a.unique_words as u64))
            .collect();

        let mut out = render_bar_chart("Most Used Words In All Lyrics", &words, BAR_WIDTH);
        out.push('\n');
        out.push_str(&render_bar_chart("Artists Who Use Most Words In Lyrics", &artists, BAR_WIDTH));
        out
    }

    /// Write the report as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs_err::write(path, json).map_err(|e| Error::Io { source: e, path: Some(path.to_path_buf()) })
    }
}

/// Horizontal bars, the longest `width` characters, labels left-aligned.
pub fn render_bar_chart(title: &str, rows: &[(String, u64)], width: usize) -> String {
    let mut out = format!("{title}\n{}\n", "=".repeat(title.chars().count()));
    let Some(max) = rows.iter().map(|(_, n)| *n).max().filter(|&m| m > 0) else {
        out.push_str("(no data)\n");
        return out;
    };
    let label_width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    for (label, count) in rows {
        let len = bar_len(*count, max, width);
        let _ = writeln!(out, "{label:<label_width$} | {} {count}", "#".repeat(len));
    }
    out
}

/// Bar length for `count`, scaled so `max` fills `width`; nonzero counts get at least one mark.
fn bar_len(count: u64, max: u64, width: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let scaled = u128::from(count) * width as u128 / u128::from(max);
    usize::try_from(scaled).unwrap_or(width).max(1)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::types::SongRecord;
    use crate::words::count_words;

    fn report() -> ChartReport {
        let mut songs = SongChart::new();
        songs
            .insert(SongRecord {
                rank: 1,
                title: "Flowers".into(),
                artist: "Miley Cyrus".into(),
                word_counts: count_words("buy myself flowers buy"),
            })
            .unwrap();
        songs
            .insert(SongRecord {
                rank: 2,
                title: "Missing".into(),
                artist: "Nobody".into(),
                word_counts: WordFrequencyMap::new(),
            })
            .unwrap();
        let totals = crate::aggregate::aggregate_word_counts(&songs);
        ChartReport { fetched_at: Utc::now(), songs, totals }
    }

    #[test]
    fn bars_scale_to_largest() {
        let rows = vec![("love".to_string(), 10), ("baby".to_string(), 5), ("oh".to_string(), 1)];
        let chart = render_bar_chart("Words", &rows, 10);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[0], "Words");
        assert_eq!(lines[1], "=====");
        assert_eq!(lines[2], "love | ########## 10");
        assert_eq!(lines[3], "baby | ##### 5");
        assert_eq!(lines[4], "oh   | # 1");
    }

    #[test]
    fn empty_rows_render_placeholder() {
        assert!(render_bar_chart("Words", &[], 10).ends_with("(no data)\n"));
    }

    #[test]
    fn counts_songs_without_lyrics() {
        assert_eq!(report().songs_without_lyrics(), 1);
    }

    #[test]
    fn render_includes_both_rankings() {
        let text = report().render(2, 2);
        assert!(text.contains("Most Used Words In All Lyrics"));
        assert!(text.contains("buy    | ##"));
        assert!(text.contains("Miley Cyrus | "));
    }

    #[test]
    fn writes_json_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report().write_json(&path).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs_err::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["totals"]["buy"], 2);
        assert_eq!(value["songs"][0]["artist"], "Miley Cyrus");
        assert_eq!(value["songs"][1]["word_counts"], serde_json::json!({}));
    }
}
