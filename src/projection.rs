//! Pure projections from the analysis document to chart-ready row tables.
//!
//! Every projection maps `(document, optional parameter)` to one flat table:
//! one row per party, in document order, each row a JSON-object-shaped map
//! whose first field is `name` (the uppercased party key) followed by that
//! chart's series fields. Nothing here does I/O, holds state, or mutates its
//! input; identical inputs give field-for-field identical outputs.

use serde::Serialize;
use serde_json::{json, Value};

use crate::lexicon::{CategoryTable, LexicalCategory};
use crate::models::AnalysisDocument;

/// One chart row. The underlying map keeps insertion order, so `name` is
/// always the first field and series fields follow in projection order.
pub type Row = serde_json::Map<String, Value>;

pub const DEFAULT_TOP_KEYWORDS: usize = 5;

fn base_row(party: &str) -> Row {
    let mut row = Row::new();
    row.insert("name".into(), json!(party.to_uppercase()));
    row
}

/// `{name, average, coverage}` per party.
pub fn project_sentiment(doc: &AnalysisDocument) -> Vec<Row> {
    doc.iter()
        .map(|(party, rec)| {
            let mut row = base_row(party);
            row.insert("average".into(), json!(rec.sentiment_analysis.average_sentiment));
            row.insert("coverage".into(), json!(rec.sentiment_analysis.sentiment_coverage));
            row
        })
        .collect()
}

/// The three readability fields spread per party.
pub fn project_readability(doc: &AnalysisDocument) -> Vec<Row> {
    doc.iter()
        .map(|(party, rec)| {
            let r = &rec.text_analysis.readability_metrics;
            let mut row = base_row(party);
            row.insert("avg_sentence_length".into(), json!(r.avg_sentence_length));
            row.insert("avg_word_length".into(), json!(r.avg_word_length));
            row.insert("syllables_per_word".into(), json!(r.syllables_per_word));
            row
        })
        .collect()
}

/// The three comparative-metrics fields spread per party.
pub fn project_comparative(doc: &AnalysisDocument) -> Vec<Row> {
    doc.iter()
        .map(|(party, rec)| {
            let c = &rec.text_analysis.comparative_metrics;
            let mut row = base_row(party);
            row.insert("future_orientation".into(), json!(c.future_orientation));
            row.insert("concrete_measures".into(), json!(c.concrete_measures));
            row.insert("intensity_markers".into(), json!(c.intensity_markers));
            row
        })
        .collect()
}

/// The five policy-area rates spread per party. The combined table serves the
/// multi-series radar view; a per-party view is a one-row slice of it.
pub fn project_policy_focus(doc: &AnalysisDocument) -> Vec<Row> {
    doc.iter()
        .map(|(party, rec)| {
            let p = &rec.text_analysis.policy_focus;
            let mut row = base_row(party);
            row.insert("wirtschaft".into(), json!(p.wirtschaft));
            row.insert("umwelt".into(), json!(p.umwelt));
            row.insert("soziales".into(), json!(p.soziales));
            row.insert("bildung".into(), json!(p.bildung));
            row.insert("sicherheit".into(), json!(p.sicherheit));
            row
        })
        .collect()
}

/// The three vocabulary-richness fields spread per party.
pub fn project_vocabulary(doc: &AnalysisDocument) -> Vec<Row> {
    doc.iter()
        .map(|(party, rec)| {
            let v = &rec.text_analysis.vocabulary_richness;
            let mut row = base_row(party);
            row.insert("unique_words".into(), json!(v.unique_words));
            row.insert("type_token_ratio".into(), json!(v.type_token_ratio));
            row.insert("hapaxlegomena".into(), json!(v.hapaxlegomena));
            row
        })
        .collect()
}

/// The first `n` keywords per party, spread as `{word: count}`. The upstream
/// ordering (descending by count) is trusted, not re-sorted. A party with
/// fewer than `n` keywords contributes fewer fields, so rows are NOT
/// guaranteed to share a field set; renderers must treat a missing field as
/// "no bar for that series", not as zero.
pub fn project_top_keywords(doc: &AnalysisDocument, n: usize) -> Vec<Row> {
    assert!(n > 0, "top-keyword count must be positive");
    doc.iter()
        .map(|(party, rec)| {
            let mut row = base_row(party);
            for (word, count) in rec.text_analysis.top_keywords.iter().take(n) {
                row.insert(word.clone(), json!(count));
            }
            row
        })
        .collect()
}

/// The mentions table plus the series list the renderer draws from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartyMentions {
    /// Ordered key set of the first record's `mentioned_parties`; the
    /// document invariant says every record shares it.
    pub party_list: Vec<String>,
    pub rows: Vec<Row>,
}

/// Each party's `mentioned_parties` mapping spread onto its row.
pub fn project_party_mentions(doc: &AnalysisDocument) -> PartyMentions {
    let party_list = doc
        .first()
        .map(|(_, rec)| rec.mentioned_parties.keys().map(str::to_string).collect())
        .unwrap_or_default();

    let rows = doc
        .iter()
        .map(|(party, rec)| {
            let mut row = base_row(party);
            for (mentioned, count) in rec.mentioned_parties.iter() {
                row.insert(mentioned.to_string(), json!(count));
            }
            row
        })
        .collect();

    PartyMentions { party_list, rows }
}

/// For every word of `table[category]` in table order, that party's
/// `interesting_words_count[word]`, or 0 when the sparse map omits it. The
/// only projection parameterized by selector state; recompute on selection
/// change, otherwise pure like the rest.
pub fn project_lexical_category(
    doc: &AnalysisDocument,
    category: LexicalCategory,
    table: &CategoryTable,
) -> Vec<Row> {
    let words = table.words(category);
    doc.iter()
        .map(|(party, rec)| {
            let mut row = base_row(party);
            for word in words {
                let count = rec.interesting_words_count.get(word).copied().unwrap_or(0);
                row.insert(word.clone(), json!(count));
            }
            row
        })
        .collect()
}
