//! End-to-end run: chart -> lyrics -> word statistics.

use chrono::Utc;

use crate::aggregate::{aggregate_word_counts, build_song_records};
use crate::chart::ChartSource;
use crate::config::Config;
use crate::error::Result;
use crate::fetch::PageFetcher;
use crate::lyrics::CatalogLyrics;
use crate::report::ChartReport;

/// One pass over the current chart
pub struct Pipeline<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    config: &'a Config,
}

impl<'a, F: PageFetcher + ?Sized> Pipeline<'a, F> {
    /// Create a pipeline reading every page through `fetcher`.
    pub const fn new(fetcher: &'a F, config: &'a Config) -> Self {
        Self { fetcher, config }
    }

    /// Read the chart, count every song's words and total them.
    ///
    /// Requests go out one at a time.
    pub async fn run(&self) -> Result<ChartReport> {
        let fetched_at = Utc::now();
        let entries = ChartSource::new(self.fetcher, self.config.chart_url.as_str()).entries().await?;

        let provider = CatalogLyrics::new(self.fetcher, &self.config.catalog_url, self.config.max_candidates)?;
        let songs = build_song_records(&entries, &provider).await?;
        let totals = aggregate_word_counts(&songs);

        let report = ChartReport { fetched_at, songs, totals };
        tracing::info!(
            "Counted {} distinct words across {} songs ({} without lyrics)",
            report.totals.len(),
            report.songs.len(),
            report.songs_without_lyrics()
        );
        Ok(report)
    }
}
