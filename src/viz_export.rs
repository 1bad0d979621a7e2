// src/viz_export.rs
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use std::{fs, path::Path};

use crate::lexicon::{CategoryTable, LexicalCategory};
use crate::models::AnalysisDocument;
use crate::projection;

/// Public entry point: write all chart-ready JSON tables into `out_dir`.
pub fn write_all_viz(
    out_dir: &Path,
    doc: &AnalysisDocument,
    category: LexicalCategory,
    table: &CategoryTable,
    top_n: usize,
) -> Result<()> {
    fs::create_dir_all(out_dir).with_context(|| format!("create {:?}", out_dir))?;

    // 1) The fixed-shape tables
    write_json(out_dir.join("viz.sentiment.json"), &projection::project_sentiment(doc))?;
    write_json(out_dir.join("viz.readability.json"), &projection::project_readability(doc))?;
    write_json(out_dir.join("viz.comparative.json"), &projection::project_comparative(doc))?;
    write_json(out_dir.join("viz.policy_focus.json"), &projection::project_policy_focus(doc))?;
    write_json(out_dir.join("viz.vocabulary.json"), &projection::project_vocabulary(doc))?;

    // 2) Keywords (field sets may differ per row; the renderer handles that)
    write_json(
        out_dir.join("viz.top_keywords.json"),
        &projection::project_top_keywords(doc, top_n),
    )?;

    // 3) Mentions, with the series list the renderer draws from
    write_json(
        out_dir.join("viz.party_mentions.json"),
        &projection::project_party_mentions(doc),
    )?;

    // 4) The selected lexical category
    let lexical = projection::project_lexical_category(doc, category, table);
    write_json(
        out_dir.join("viz.lexical.json"),
        &json!({
            "category": category.key(),
            "words": table.words(category),
            "rows": lexical,
        }),
    )?;

    // 5) Per-run index
    let idx = json!({
        "version": 1,
        "counts": {
            "parties": doc.len(),
            "lexicon_words": table.words(category).len(),
        },
        "files": [
            "viz.sentiment.json",
            "viz.readability.json",
            "viz.comparative.json",
            "viz.policy_focus.json",
            "viz.vocabulary.json",
            "viz.top_keywords.json",
            "viz.party_mentions.json",
            "viz.lexical.json"
        ]
    });
    write_json(out_dir.join("viz.index.json"), &idx)?;

    Ok(())
}

fn write_json<P: AsRef<Path>, T: ?Sized + Serialize>(path: P, value: &T) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .map(|_| ())
        .map_err(|e| e.into())
}
