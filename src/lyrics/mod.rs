//! Lyrics retrieval from resolved catalog pages.

use async_trait::async_trait;

use crate::constants::catalog;
use crate::error::{Error, Result};
use crate::fetch::PageFetcher;
use crate::markup::select_first_text;
use crate::resolver::CatalogResolver;
use crate::types::{ChartEntry, LyricsAddress};

/// Source of lyrics for chart songs.
#[async_trait]
pub trait LyricsProvider: Send + Sync {
    /// Lyrics of `entry`'s song.
    async fn lyrics_for(&self, entry: &ChartEntry) -> Result<String>;
}

/// Lyrics looked up on the catalog: resolve the page, then read it
pub struct CatalogLyrics<'a, F: PageFetcher + ?Sized> {
    fetcher: &'a F,
    resolver: CatalogResolver<'a, F>,
}

impl<'a, F: PageFetcher + ?Sized> CatalogLyrics<'a, F> {
    /// Create a provider over the catalog rooted at `base_url`.
    pub fn new(fetcher: &'a F, base_url: &str, max_candidates: usize) -> Result<Self> {
        Ok(Self {
            fetcher,
            resolver: CatalogResolver::new(fetcher, base_url, max_candidates)?,
        })
    }
}

#[async_trait]
impl<F: PageFetcher + ?Sized> LyricsProvider for CatalogLyrics<'_, F> {
    async fn lyrics_for(&self, entry: &ChartEntry) -> Result<String> {
        let address = self.resolver.resolve(&entry.title, &entry.artist).await?;
        tracing::debug!("#{} resolved to {address}", entry.rank);
        fetch_lyrics(self.fetcher, &address).await
    }
}

/// Fetch the lyrics text at `address`.
///
/// Fails with [`Error::Extraction`] when the page has no lyrics body, which
/// means the address is stale or the catalog changed its layout.
pub async fn fetch_lyrics<F: PageFetcher + ?Sized>(fetcher: &F, address: &LyricsAddress) -> Result<String> {
    let markup = fetcher.fetch(address.as_str()).await?;
    extract_lyrics(&markup, address.as_str())
}

/// Pull the lyrics body out of a song page.
pub fn extract_lyrics(markup: &str, url: &str) -> Result<String> {
    select_first_text(markup, catalog::LYRICS_BODY)?.ok_or_else(|| Error::Extraction {
        what: "lyrics body",
        url: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::fetch::StaticPages;
    use reqwest::Url;

    fn address(url: &str) -> LyricsAddress {
        LyricsAddress::new(Url::parse(url).unwrap())
    }

    #[tokio::test]
    async fn reads_lyrics_body() {
        let pages = StaticPages::new().with_page(
            "https://lyrics.test/lyric/1/x",
            r#"<div><pre id="lyric-body-text" class="lyric-body">I can buy myself <a href="/w">flowers</a>
Write my name in the sand</pre></div>"#,
        );
        let text = fetch_lyrics(&pages, &address("https://lyrics.test/lyric/1/x")).await.unwrap();
        assert_eq!(text, "I can buy myself flowers\nWrite my name in the sand");
    }

    #[tokio::test]
    async fn missing_body_is_extraction_error() {
        let pages = StaticPages::new()
            .with_page("https://lyrics.test/lyric/1/x", "<html><p>Moved</p></html>");
        let err = fetch_lyrics(&pages, &address("https://lyrics.test/lyric/1/x")).await.unwrap_err();
        assert!(matches!(err, Error::Extraction { what: "lyrics body", .. }));
    }

    #[tokio::test]
    async fn catalog_lyrics_resolves_then_reads() {
        let pages = StaticPages::new()
            .with_page(
                "https://lyrics.test/artist/miley+cyrus",
                r#"<table><tr><td class="tal qx"><a href="/lyric/2/f">Flowers</a></td></tr></table>"#,
            )
            .with_page(
                "https://lyrics.test/lyric/2/f",
                r#"<pre id="lyric-body-text">We were good, we were gold</pre>"#,
            );
        let provider = CatalogLyrics::new(&pages, "https://lyrics.test/", 10).unwrap();
        let entry = ChartEntry::new(1, "Flowers", "Miley Cyrus").unwrap();
        assert_eq!(provider.lyrics_for(&entry).await.unwrap(), "We were good, we were gold");
    }

    #[tokio::test]
    async fn http_failure_is_fetch_error() {
        let pages = StaticPages::new();
        let err = fetch_lyrics(&pages, &address("https://lyrics.test/lyric/9/z")).await.unwrap_err();
        assert!(matches!(err, Error::Fetch { status: 404, .. }));
    }
}
