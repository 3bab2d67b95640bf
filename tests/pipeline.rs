//! End-to-end runs over a synthetic chart and catalog.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use hot100_lyrics::aggregate::{rank_most_used_words, rank_most_verbose_artists};
use hot100_lyrics::config::Config;
use hot100_lyrics::error::Error;
use hot100_lyrics::fetch::StaticPages;
use hot100_lyrics::pipeline::Pipeline;

const CHART: &str = "https://chart.test/hot-100";
const CATALOG: &str = "https://lyrics.test/";

fn config() -> Config {
    let mut config = Config::default();
    config.chart_url = CHART.to_string();
    config.catalog_url = CATALOG.to_string();
    config
}

fn chart_page(rows: &[(&str, &str, &str)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(rank, title, artist)| {
            format!(
                r#"<ul class="o-chart-results-list-row">
                     <li><span class="a-font-primary-bold-l">{rank}</span></li>
                     <li><h3 class="c-title a-no-trucate">{title}</h3>
                         <span class="c-label a-no-trucate">{artist}</span></li>
                   </ul>"#
            )
        })
        .collect();
    format!("<html><body>{rows}</body></html>")
}

fn song_page(songs: &[(&str, &str)]) -> String {
    let rows: String = songs
        .iter()
        .map(|(title, href)| format!(r#"<tr><td class="tal qx"><a href="{href}">{title}</a></td></tr>"#))
        .collect();
    format!("<table>{rows}</table>")
}

fn lyrics_page(text: &str) -> String {
    format!(r#"<html><body><pre id="lyric-body-text" class="lyric-body">{text}</pre></body></html>"#)
}

#[tokio::test]
async fn unresolved_song_contributes_nothing() {
    let pages = StaticPages::new()
        .with_page(CHART, chart_page(&[("1", "Counting", "Alpha"), ("2", "Lost", "Beta")]))
        .with_page("https://lyrics.test/artist/alpha", song_page(&[("Counting", "/lyric/1/counting")]))
        .with_page("https://lyrics.test/lyric/1/counting", lyrics_page("one two two"))
        .with_page("https://lyrics.test/artist/beta", song_page(&[("Something Else", "/lyric/2/else")]));

    let config = config();
    let report = Pipeline::new(&pages, &config).run().await.unwrap();

    assert_eq!(report.totals.len(), 2);
    assert_eq!(report.totals.get("one"), 1);
    assert_eq!(report.totals.get("two"), 2);
    assert_eq!(report.songs_without_lyrics(), 1);

    let artists = rank_most_verbose_artists(&report.songs, 10);
    assert_eq!(artists[0].artist, "Alpha");
    assert_eq!(artists[0].unique_words, 2);
    assert_eq!(artists[1].artist, "Beta");
    assert_eq!(artists[1].unique_words, 0);
}

#[tokio::test]
async fn collaborations_and_disambiguation_resolve() {
    let pages = StaticPages::new()
        .with_page(
            CHART,
            chart_page(&[
                ("1", "Rich Flex", "Drake &amp; 21 Savage"),
                ("2", "Wait For U (Remix)", "Future Featuring Drake &amp; Tems"),
            ]),
        )
        // "drake" is ambiguous on the catalog
        .with_page(
            "https://lyrics.test/artist/drake",
            r#"<table>
                 <tr><td class="tal fx">Drake (no page)</td></tr>
                 <tr><td class="tal fx"><a href="artist/Drake-Bell/11">Drake Bell</a></td></tr>
                 <tr><td class="tal fx"><a href="artist/Drake/22">Drake</a></td></tr>
               </table>"#,
        )
        .with_page("https://lyrics.test/artist/Drake-Bell/11", song_page(&[("Found a Way", "/lyric/9/f")]))
        .with_page("https://lyrics.test/artist/Drake/22", song_page(&[("Rich Flex", "/lyric/3/rich-flex")]))
        .with_page("https://lyrics.test/lyric/3/rich-flex", lyrics_page("Go, go, go!"))
        .with_page("https://lyrics.test/artist/future", song_page(&[("Wait for U", "/lyric/4/wait")]))
        .with_page("https://lyrics.test/lyric/4/wait", lyrics_page("I will wait, wait for you"));

    let config = config();
    let report = Pipeline::new(&pages, &config).run().await.unwrap();

    assert_eq!(report.songs_without_lyrics(), 0);
    assert_eq!(
        rank_most_used_words(&report.totals, 2),
        vec![("go".to_string(), 3), ("wait".to_string(), 2)]
    );
    assert_eq!(report.songs.get(1).unwrap().credit(), "Drake, 21 Savage");
}

#[tokio::test]
async fn duplicate_chart_rank_is_fatal() {
    let pages = StaticPages::new().with_page(CHART, chart_page(&[("1", "A", "X"), ("1", "B", "Y")]));
    let config = config();
    let err = Pipeline::new(&pages, &config).run().await.unwrap_err();
    assert!(matches!(err, Error::DuplicateRank(1)));
}

#[tokio::test]
async fn unreachable_chart_is_fatal() {
    let pages = StaticPages::new();
    let config = config();
    let err = Pipeline::new(&pages, &config).run().await.unwrap_err();
    assert!(matches!(err, Error::Fetch { status: 404, .. }));
}
