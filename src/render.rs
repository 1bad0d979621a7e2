// src/render.rs
use crate::models::AnalysisDocument;

/// Markdown summary of the document: one section per party, in document
/// order, with the headline numbers behind each chart.
pub fn render_summary_markdown(doc: &AnalysisDocument) -> String {
    let mut md = String::new();
    md.push_str("# Parteiprogramm-Analyse\n\n");

    for (party, rec) in doc.iter() {
        md.push_str(&format!("## {}\n\n", party.to_uppercase()));
        md.push_str(&format!("- Text length: {} words\n", rec.text_length));

        let s = &rec.sentiment_analysis;
        md.push_str(&format!(
            "- Sentiment: avg {:.3}, coverage {:.1}%, extremes {:+.2} / {:+.2}\n",
            s.average_sentiment,
            s.sentiment_coverage * 100.0,
            s.max_positive_sentiment,
            s.max_negative_sentiment
        ));

        let r = &rec.text_analysis.readability_metrics;
        md.push_str(&format!(
            "- Readability: {:.2} words/sentence, {:.2} chars/word, {:.2} syllables/word\n",
            r.avg_sentence_length, r.avg_word_length, r.syllables_per_word
        ));

        let v = &rec.text_analysis.vocabulary_richness;
        md.push_str(&format!(
            "- Vocabulary: {} unique words, TTR {:.3}, {} hapax legomena\n",
            v.unique_words, v.type_token_ratio, v.hapaxlegomena
        ));

        if !rec.text_analysis.top_keywords.is_empty() {
            let top: Vec<String> = rec
                .text_analysis
                .top_keywords
                .iter()
                .take(5)
                .map(|(w, c)| format!("{} ({})", w, c))
                .collect();
            md.push_str(&format!("- Top keywords: {}\n", top.join(", ")));
        }

        if !rec.mentioned_parties.is_empty() {
            let mentions: Vec<String> = rec
                .mentioned_parties
                .iter()
                .map(|(p, c)| format!("{} {}×", p, c))
                .collect();
            md.push_str(&format!("- Mentions: {}\n", mentions.join(", ")));
        }

        md.push('\n');
    }

    md
}
