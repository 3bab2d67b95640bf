//! Application constants.
//!
//! Centralizes site addresses, markup selectors and ranking defaults.

/// Billboard chart page constants.
pub mod chart {
    /// Default address of the Hot-100 chart.
    pub const DEFAULT_URL: &str = "https://www.billboard.com/charts/hot-100";

    /// One chart position per row.
    pub const ROW: (&str, &str) = ("ul", "o-chart-results-list-row");

    /// Rank number inside a row.
    pub const RANK: (&str, &str) = ("span", "a-font-primary-bold-l");

    /// Song title inside a row.
    pub const TITLE: (&str, &str) = ("h3", "a-no-trucate");

    /// Artist credit inside a row.
    pub const ARTIST: (&str, &str) = ("span", "a-no-trucate");
}

/// Lyrics catalog constants.
pub mod catalog {
    /// Default catalog root. Must end in `/` so relative links join beneath it.
    pub const DEFAULT_BASE_URL: &str = "https://www.lyrics.com/";

    /// Path segment of artist pages, relative to the base.
    pub const ARTIST_PATH: &str = "artist/";

    /// Token that replaces spaces in artist page addresses.
    pub const SPACE_TOKEN: &str = "+";

    /// Cells linking to one song on an artist page.
    pub const SONG_CELL: (&str, &str) = ("td", "tal qx");

    /// Cells linking to a candidate artist on a search/disambiguation page.
    pub const ARTIST_CELL: (&str, &str) = ("td", "tal fx");

    /// Selector of the element holding the lyrics on a song page.
    pub const LYRICS_BODY: &str = "pre#lyric-body-text";

    /// Default bound on disambiguation candidates followed per song.
    pub const DEFAULT_MAX_CANDIDATES: usize = 10;
}

/// HTTP client constants.
pub mod http {
    /// Default per-request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// User agent sent with every request.
    pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
}

/// Ranking and report constants.
pub mod report {
    /// Default number of words in the most-used ranking.
    pub const DEFAULT_TOP_WORDS: usize = 100;

    /// Default number of artists in the most-verbose ranking.
    pub const DEFAULT_TOP_ARTISTS: usize = 10;

    /// Width in characters of the longest bar.
    pub const BAR_WIDTH: usize = 50;
}
