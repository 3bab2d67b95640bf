//! `hot100-lyrics` - word usage across the Billboard Hot-100.
//!
//! Reads the current chart, finds each song's lyrics on a lyrics catalog,
//! and reports the most used words and the artists with the largest
//! vocabularies.

pub mod aggregate;
pub mod chart;
pub mod config;
pub mod constants;
pub mod error;
pub mod fetch;
pub mod lyrics;
pub mod markup;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod resolver;
pub mod types;
pub mod words;
