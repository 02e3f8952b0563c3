// Wordsketch: streaming word-frequency estimation over a text corpus.
//
// This is the library root. Three competing counters share one contract
// (consume a token stream, report top-N estimates): an exact baseline, a
// decaying-probability sketch, and a bounded-memory space-saving tracker.
// The `corpus` module turns raw text into the token stream they consume.

pub mod config;
pub mod corpus;
pub mod counters;
pub mod output;
