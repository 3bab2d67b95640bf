//! Billboard Hot-100 chart retrieval.

use scraper::{Html, Selector};

use crate::constants::chart;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::markup::{element_text, tag_class_selector};
use crate::types::ChartEntry;

/// The chart page as a source of ranked songs
pub struct ChartSource<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    url: String,
}

impl<'a, F: PageFetcher + ?Sized> ChartSource<'a, F> {
    /// Create a source reading the chart at `url`.
    pub fn new(fetcher: &'a F, url: impl Into<String>) -> Self {
        Self { fetcher, url: url.into() }
    }

    /// Fetch the chart and return its entries in page order.
    pub async fn entries(&self) -> Result<Vec<ChartEntry>> {
        let markup = self.fetcher.fetch(&self.url).await?;
        let entries = parse_chart(&markup)?;
        tracing::info!("Chart lists {} songs", entries.len());
        Ok(entries)
    }
}

/// Parse chart rows out of the chart page markup.
///
/// Every row must carry a rank, a title and an artist; a row missing any of
/// them means the page no longer has the layout we read.
pub fn parse_chart(markup: &str) -> Result<Vec<ChartEntry>> {
    let row_sel = tag_class_selector(chart::ROW.0, chart::ROW.1)?;
    let rank_sel = tag_class_selector(chart::RANK.0, chart::RANK.1)?;
    let title_sel = tag_class_selector(chart::TITLE.0, chart::TITLE.1)?;
    let artist_sel = tag_class_selector(chart::ARTIST.0, chart::ARTIST.1)?;

    let doc = Html::parse_document(markup);
    let entries: Result<Vec<ChartEntry>> = doc
        .select(&row_sel)
        .enumerate()
        .map(|(idx, row)| {
            let field = |sel: &Selector, name: &str| {
                row.select(sel)
                    .next()
                    .map(|el| element_text(el).trim().to_string())
                    .ok_or_else(|| Error::parse(format!("chart row {} has no {name}", idx + 1)))
            };
            let rank = field(&rank_sel, "rank")?;
            let title = field(&title_sel, "title")?;
            let artist = field(&artist_sel, "artist")?;
            ChartEntry::parse(&rank, title, artist)
        })
        .collect();
    entries
}
