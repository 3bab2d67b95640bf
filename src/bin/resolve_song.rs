//! Resolve one song on the lyrics catalog and print its word counts.
//!
//! Usage: cargo run --bin resolve_song -- "<title>" "<artist>" [--top 20]

use hot100_lyrics::aggregate::rank_most_used_words;
use hot100_lyrics::config::Config;
use hot100_lyrics::error::{Error, Result};
use hot100_lyrics::fetch::HttpFetcher;
use hot100_lyrics::lyrics::fetch_lyrics;
use hot100_lyrics::resolver::CatalogResolver;
use hot100_lyrics::words::count_words;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let top: usize = args
        .iter()
        .position(|a| a == "--top")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(20);
    let (Some(title), Some(artist)) = (args.first(), args.get(1)) else {
        return Err(Error::invalid("usage: resolve_song <title> <artist> [--top N]"));
    };

    let config = Config::load()?;
    let fetcher = HttpFetcher::new(&config);
    let resolver = CatalogResolver::new(&fetcher, &config.catalog_url, config.max_candidates)?;

    let address = resolver.resolve(title, artist).await?;
    println!("{title} - {artist}\n  {address}\n");

    let counts = count_words(&fetch_lyrics(&fetcher, &address).await?);
    println!("{} words, {} distinct", counts.total(), counts.len());
    for (word, count) in rank_most_used_words(&counts, top) {
        println!("  {count:>4}  {word}");
    }

    Ok(())
}
