use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};

use wahl_vibes::fetch;
use wahl_vibes::lexicon::{CategorySelector, LexicalCategory, STANDARD_TABLE};
use wahl_vibes::projection::DEFAULT_TOP_KEYWORDS;
use wahl_vibes::render;
use wahl_vibes::viz_export;

/// wahl_vibes - chart-ready views over a party-program analysis document
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL or local path of the combined analysis document
    #[arg(short, long, default_value = "combined_data.json")]
    input: String,

    /// Output directory for generated view files (default: "out")
    #[arg(short, long, default_value = "out")]
    output_dir: String,

    /// Lexical category shown in the interesting-words chart
    #[arg(long, value_enum, default_value_t = LexicalCategory::NegativeNomen)]
    category: LexicalCategory,

    /// Keywords per party in the top-keywords chart
    #[arg(long, default_value_t = DEFAULT_TOP_KEYWORDS)]
    top_keywords: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();

    info!("Starting wahl_vibes");

    let args = Args::parse();

    // Guard here so a bad flag surfaces as a CLI error, not an engine assert.
    if args.top_keywords == 0 {
        bail!("--top-keywords must be positive");
    }

    let mut selector = CategorySelector::new();
    selector.set(args.category);
    debug!(
        "Run parameters - input={}, output_dir={}, category={}, top_keywords={}",
        args.input,
        args.output_dir,
        selector.current(),
        args.top_keywords
    );

    let doc = if args.input.starts_with("http://") || args.input.starts_with("https://") {
        let client = reqwest::Client::new();
        match fetch::fetch_document_opt(&client, &args.input).await? {
            Some(doc) => doc,
            None => bail!("analysis document unavailable at {}", args.input),
        }
    } else {
        fetch::read_document(Path::new(&args.input))?
    };

    let out_dir = Path::new(&args.output_dir);
    viz_export::write_all_viz(
        out_dir,
        &doc,
        selector.current(),
        &STANDARD_TABLE,
        args.top_keywords,
    )?;

    let summary = render::render_summary_markdown(&doc);
    write_summary(out_dir, &summary)?;

    info!(
        "Wrote chart tables and summary - output_dir={}, parties={}",
        args.output_dir,
        doc.len()
    );
    Ok(())
}

fn write_summary(out_dir: &Path, summary: &str) -> Result<()> {
    let path = out_dir.join("summary.md");
    std::fs::write(&path, summary).with_context(|| format!("write {:?}", path))
}
