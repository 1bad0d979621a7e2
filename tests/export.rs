//! End-to-end export: full document in, advertised file set out.

use serde_json::{json, Value};
use tempfile::tempdir;

use wahl_vibes::lexicon::{CategoryTable, LexicalCategory};
use wahl_vibes::models::AnalysisDocument;
use wahl_vibes::render::render_summary_markdown;
use wahl_vibes::viz_export::write_all_viz;

fn record(average: f64, coverage: f64) -> Value {
    json!({
        "text_length": 29667,
        "sentiment_analysis": {
            "average_sentiment": average,
            "sentiment_words_count": 2966,
            "total_words": 29667,
            "sentiment_coverage": coverage,
            "max_positive_sentiment": 0.609,
            "max_negative_sentiment": -1.0
        },
        "text_analysis": {
            "readability_metrics": {
                "avg_sentence_length": 12.33,
                "avg_word_length": 6.32,
                "syllables_per_word": 2.05
            },
            "vocabulary_richness": {
                "unique_words": 5448,
                "type_token_ratio": 0.305,
                "hapaxlegomena": 3439
            },
            "top_keywords": [["wirtschaft", 40], ["klima", 22], ["arbeit", 18]],
            "policy_focus": {
                "wirtschaft": 8.90,
                "umwelt": 2.76,
                "soziales": 9.30,
                "bildung": 6.51,
                "sicherheit": 7.35
            },
            "sentence_stats": {
                "total_sentences": 2406,
                "max_sentence_length": 68,
                "min_sentence_length": 1,
                "complex_sentences": 311
            },
            "comparative_metrics": {
                "future_orientation": 113,
                "concrete_measures": 7,
                "intensity_markers": 23
            }
        },
        "mentioned_parties": { "union": 3, "spd": 1 },
        "interesting_words_count": { "krise": 9, "europa": 14 }
    })
}

fn sample_document() -> AnalysisDocument {
    serde_json::from_value(json!({
        "union": record(0.017, 0.100),
        "spd": record(0.020, 0.098)
    }))
    .unwrap()
}

fn read_json(path: &std::path::Path) -> Value {
    serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
}

#[test]
fn write_all_viz_writes_the_advertised_file_set() {
    let doc = sample_document();
    let table = CategoryTable::standard();
    let dir = tempdir().unwrap();

    write_all_viz(dir.path(), &doc, LexicalCategory::Sonstiges, &table, 5).unwrap();

    let index = read_json(&dir.path().join("viz.index.json"));
    assert_eq!(index["counts"]["parties"], json!(2));

    for file in index["files"].as_array().unwrap() {
        let path = dir.path().join(file.as_str().unwrap());
        assert!(path.exists(), "missing {:?}", path);
    }
}

#[test]
fn exported_sentiment_table_matches_the_document() {
    let doc = sample_document();
    let table = CategoryTable::standard();
    let dir = tempdir().unwrap();

    write_all_viz(dir.path(), &doc, LexicalCategory::NegativeNomen, &table, 5).unwrap();

    let sentiment = read_json(&dir.path().join("viz.sentiment.json"));
    assert_eq!(
        sentiment,
        json!([
            { "name": "UNION", "average": 0.017, "coverage": 0.100 },
            { "name": "SPD", "average": 0.020, "coverage": 0.098 }
        ])
    );
}

#[test]
fn exported_lexical_table_carries_category_words_and_rows() {
    let doc = sample_document();
    let table = CategoryTable::standard();
    let dir = tempdir().unwrap();

    write_all_viz(dir.path(), &doc, LexicalCategory::Sonstiges, &table, 5).unwrap();

    let lexical = read_json(&dir.path().join("viz.lexical.json"));
    assert_eq!(lexical["category"], json!("sonstiges"));
    assert_eq!(lexical["rows"].as_array().unwrap().len(), 2);
    // "europa" is counted in the fixture, the other sonstiges words zero-fill.
    assert_eq!(lexical["rows"][0]["europa"], json!(14));
    assert_eq!(lexical["rows"][0]["digitalisierung"], json!(0));
}

#[test]
fn exported_mentions_table_carries_the_party_list() {
    let doc = sample_document();
    let table = CategoryTable::standard();
    let dir = tempdir().unwrap();

    write_all_viz(dir.path(), &doc, LexicalCategory::Sonstiges, &table, 5).unwrap();

    let mentions = read_json(&dir.path().join("viz.party_mentions.json"));
    assert_eq!(mentions["party_list"], json!(["union", "spd"]));
    assert_eq!(mentions["rows"][0]["union"], json!(3));
    assert_eq!(mentions["rows"][1]["spd"], json!(1));
}

#[test]
fn summary_renders_one_section_per_party() {
    let doc = sample_document();
    let md = render_summary_markdown(&doc);
    assert!(md.contains("## UNION"));
    assert!(md.contains("## SPD"));
    assert!(md.find("## UNION").unwrap() < md.find("## SPD").unwrap());
    assert!(md.contains("Top keywords: wirtschaft (40)"));
}
