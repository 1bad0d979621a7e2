use anyhow::{bail, Context, Result};
use reqwest::Client;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::models::AnalysisDocument;

/// Try to fetch the combined analysis document; return Ok(None) on 404 so the
/// caller can surface a single "document unavailable" state.
pub async fn fetch_document_opt(client: &Client, url: &str) -> Result<Option<AnalysisDocument>> {
    let start = std::time::Instant::now();

    debug!("Fetching analysis document - url={}", url);

    let resp = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Request failed for {}", url))?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        warn!("Analysis document not found (404) - {}", url);
        return Ok(None);
    }

    let resp = resp
        .error_for_status()
        .with_context(|| format!("HTTP error for {}", url))?;

    let doc: AnalysisDocument = resp
        .json()
        .await
        .with_context(|| format!("Decoding JSON for {}", url))?;

    validate_document(&doc)?;

    let elapsed = start.elapsed();
    info!(
        "Document fetch completed - url={}, duration={:.2}s, parties={}",
        url,
        elapsed.as_secs_f32(),
        doc.len()
    );

    Ok(Some(doc))
}

/// Load the document from a local file, for offline runs against an already
/// exported `combined_data.json`.
pub fn read_document(path: &Path) -> Result<AnalysisDocument> {
    debug!("Reading analysis document - path={:?}", path);

    let bytes = std::fs::read(path).with_context(|| format!("Reading {:?}", path))?;
    let doc: AnalysisDocument =
        serde_json::from_slice(&bytes).with_context(|| format!("Decoding JSON from {:?}", path))?;

    validate_document(&doc)?;

    info!("Document loaded - path={:?}, parties={}", path, doc.len());
    Ok(doc)
}

/// Post-decode checks: the document must be non-empty, and every record is
/// expected to share the first record's `mentioned_parties` key universe.
/// Universe drift is surprising data, not an error; it only degrades the
/// mentions chart, so it warns instead of failing the load.
pub fn validate_document(doc: &AnalysisDocument) -> Result<()> {
    if doc.is_empty() {
        bail!("analysis document contains no parties");
    }

    if let Some((_, reference)) = doc.first() {
        let expected: Vec<&str> = reference.mentioned_parties.keys().collect();
        for (party, rec) in doc.iter() {
            let got: Vec<&str> = rec.mentioned_parties.keys().collect();
            if got != expected {
                warn!(
                    "Mention key universe differs - party={}, expected={:?}, got={:?}",
                    party, expected, got
                );
            }
        }
    }

    Ok(())
}
