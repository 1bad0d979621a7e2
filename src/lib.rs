//! Chart-ready views over a party-program text-analysis dataset.
//!
//! The upstream pipeline analyzes each party's program text and exports one
//! combined JSON document (sentiment, readability, vocabulary, policy focus,
//! keywords, cross-party mentions, lexicon counts). This crate loads that
//! document and projects it into the flat row tables the dashboard charts
//! consume, writing one JSON file per chart plus a markdown summary.

pub mod fetch;
pub mod lexicon;
pub mod models;
pub mod projection;
pub mod render;
pub mod viz_export;
