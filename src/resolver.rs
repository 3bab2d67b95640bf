//! Catalog resolution: chart song -> lyrics page address.
//!
//! The catalog files songs under artist pages addressed by name. When a name
//! is ambiguous the catalog answers with a search page listing candidate
//! artists instead; those are followed one at a time, in page order, until
//! one lists the song.

use reqwest::Url;

use crate::constants::catalog;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::markup::{select_link_cells, LinkCell};
use crate::normalize::NormalizedQuery;
use crate::types::LyricsAddress;

/// Resolves chart songs to lyrics pages on the catalog
pub struct CatalogResolver<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    base: Url,
    max_candidates: usize,
}

impl<'a, F: PageFetcher + ?Sized> CatalogResolver<'a, F> {
    /// Create a resolver for the catalog rooted at `base_url`.
    pub fn new(fetcher: &'a F, base_url: &str, max_candidates: usize) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| {
            Error::config(
                format!("catalog address {base_url:?} is not a valid URL: {e}"),
                "Set LYRICS_CATALOG_URL to an absolute http(s) address",
            )
        })?;
        Ok(Self { fetcher, base, max_candidates })
    }

    /// Address of the catalog page for `artist`.
    pub fn artist_page_url(&self, artist: &str) -> Result<Url> {
        let path = format!("{}{}", catalog::ARTIST_PATH, encode_artist(artist));
        self.join(&path)
    }

    /// Find the lyrics page for a chart song.
    ///
    /// Fails with [`Error::NotFound`] when neither the artist page nor any
    /// candidate it points to lists the title.
    pub async fn resolve(&self, title: &str, artist: &str) -> Result<LyricsAddress> {
        let query = NormalizedQuery::new(title, artist)?;
        let url = self.artist_page_url(&query.primary_artist)?;
        tracing::debug!("Resolving \"{}\" via {url}", query.title);

        let markup = self.fetcher.fetch(url.as_str()).await?;
        let songs = select_link_cells(&markup, catalog::SONG_CELL)?;
        if !songs.is_empty() {
            return self.find_song(&query, &songs).ok_or_else(|| not_found(&query));
        }

        // No song list: this is a search page naming candidate artists
        let candidates = select_link_cells(&markup, catalog::ARTIST_CELL)?;
        tracing::debug!(
            "{} is ambiguous, {} candidate artist(s)",
            query.primary_artist,
            candidates.len()
        );

        for candidate in candidates.iter().take(self.max_candidates) {
            let Some(href) = candidate.href.as_deref() else {
                tracing::debug!("Skipping candidate {:?} without a link", candidate.text);
                continue;
            };
            let Ok(page) = self.join(href) else {
                tracing::debug!("Skipping candidate with unusable link {href:?}");
                continue;
            };

            let markup = match self.fetcher.fetch(page.as_str()).await {
                Ok(markup) => markup,
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Candidate page {page} unavailable: {e}");
                    continue;
                }
                Err(e) => return Err(e),
            };

            let songs = select_link_cells(&markup, catalog::SONG_CELL)?;
            if let Some(address) = self.find_song(&query, &songs) {
                return Ok(address);
            }
        }

        Err(not_found(&query))
    }

    /// First song cell naming the queried title. No scoring: order decides.
    fn find_song(&self, query: &NormalizedQuery, songs: &[LinkCell]) -> Option<LyricsAddress> {
        songs
            .iter()
            .filter(|song| query.matches_title(&song.text))
            .find_map(|song| self.join(song.href.as_deref()?).ok())
            .map(LyricsAddress::new)
    }

    fn join(&self, href: &str) -> Result<Url> {
        self.base
            .join(href)
            .map_err(|e| Error::parse(format!("bad catalog link {href:?}: {e}")))
    }
}

fn not_found(query: &NormalizedQuery) -> Error {
    Error::NotFound {
        title: query.title.clone(),
        artist: query.primary_artist.clone(),
    }
}

/// Artist name as it appears in catalog addresses: lowercase, `+` for spaces.
///
/// Characters that would end the path segment early are percent-encoded.
pub fn encode_artist(artist: &str) -> String {
    let mut out = String::with_capacity(artist.len());
    for c in artist.to_lowercase().chars() {
        match c {
            ' ' => out.push_str(catalog::SPACE_TOKEN),
            '+' => out.push_str("%2B"),
            '/' => out.push_str("%2F"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            '%' => out.push_str("%25"),
            _ => out.push(c),
        }
    }
    out
}
