use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/* -------------------------------------------------------------------------- */
/* Ordered map                                                                */
/* -------------------------------------------------------------------------- */

/// String-keyed map that keeps JSON insertion order.
///
/// Chart rows must come out in document order, and the mentions chart derives
/// its series list from the key order of `mentioned_parties`, so the usual
/// sorted-map round trip would corrupt both.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V>(Vec<(String, V)>);

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        OrderedMap(Vec::new())
    }
}

impl<V> OrderedMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replacing in place when the key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.0.push((key, value));
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn first(&self) -> Option<(&str, &V)> {
        self.0.first().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut out = OrderedMap::new();
        for (k, v) in iter {
            out.insert(k, v);
        }
        out
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            entries.push((key, value));
        }
        Ok(OrderedMap(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/* -------------------------------------------------------------------------- */
/* Analysis document                                                          */
/* -------------------------------------------------------------------------- */

/// The combined analysis document: party key → per-party record, in document
/// order. Loaded once per run and held immutable.
pub type AnalysisDocument = OrderedMap<PartyAnalysis>;

/// One party's full analysis record, with the upstream exporter's exact field
/// names. Every section is required except the two that older export variants
/// omit: `sentence_stats` and `interesting_words_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyAnalysis {
    pub text_length: u64,
    pub sentiment_analysis: SentimentAnalysis,
    pub text_analysis: TextAnalysis,
    pub mentioned_parties: OrderedMap<u64>,
    /// Sparse lexicon counts; a word absent here counts as 0.
    #[serde(default)]
    pub interesting_words_count: OrderedMap<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub average_sentiment: f64, // [-1.0, 1.0]
    pub sentiment_words_count: u64,
    pub total_words: u64,
    pub sentiment_coverage: f64, // [0.0, 1.0]
    pub max_positive_sentiment: f64,
    pub max_negative_sentiment: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub readability_metrics: ReadabilityMetrics,
    pub vocabulary_richness: VocabularyRichness,
    /// Sorted descending by count upstream; the ordering is trusted as-is.
    pub top_keywords: Vec<(String, u64)>,
    pub policy_focus: PolicyFocus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_stats: Option<SentenceStats>,
    pub comparative_metrics: ComparativeMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityMetrics {
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub syllables_per_word: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyRichness {
    pub unique_words: u64,
    pub type_token_ratio: f64, // [0.0, 1.0]
    /// Words occurring exactly once in the corpus; expected ≤ unique_words.
    pub hapaxlegomena: u64,
}

/// Mentions per 1000 words for the five fixed policy areas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyFocus {
    pub wirtschaft: f64,
    pub umwelt: f64,
    pub soziales: f64,
    pub bildung: f64,
    pub sicherheit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceStats {
    pub total_sentences: u64,
    pub max_sentence_length: u64,
    pub min_sentence_length: u64,
    pub complex_sentences: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparativeMetrics {
    pub future_orientation: u64,
    pub concrete_measures: u64,
    pub intensity_markers: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_json() -> serde_json::Value {
        json!({
            "text_length": 26376,
            "sentiment_analysis": {
                "average_sentiment": 0.020,
                "sentiment_words_count": 2585,
                "total_words": 26376,
                "sentiment_coverage": 0.098,
                "max_positive_sentiment": 1.0,
                "max_negative_sentiment": -1.0
            },
            "text_analysis": {
                "readability_metrics": {
                    "avg_sentence_length": 14.53,
                    "avg_word_length": 7.11,
                    "syllables_per_word": 2.17
                },
                "vocabulary_richness": {
                    "unique_words": 4256,
                    "type_token_ratio": 0.292,
                    "hapaxlegomena": 2666
                },
                "top_keywords": [["wirtschaft", 40], ["klima", 22]],
                "policy_focus": {
                    "wirtschaft": 6.82,
                    "umwelt": 3.53,
                    "soziales": 12.47,
                    "bildung": 6.10,
                    "sicherheit": 5.99
                },
                "comparative_metrics": {
                    "future_orientation": 213,
                    "concrete_measures": 12,
                    "intensity_markers": 39
                }
            },
            "mentioned_parties": { "spd": 0, "union": 3, "afd": 1 },
            "interesting_words_count": { "krise": 12, "chance": 7 }
        })
    }

    #[test]
    fn ordered_map_preserves_document_key_order() {
        let raw = r#"{ "zebra": 1, "alpha": 2, "mitte": 3 }"#;
        let map: OrderedMap<u64> = serde_json::from_str(raw).unwrap();
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["zebra", "alpha", "mitte"]);

        // Order must survive the serialize side too.
        let back = serde_json::to_string(&map).unwrap();
        assert_eq!(back, r#"{"zebra":1,"alpha":2,"mitte":3}"#);
    }

    #[test]
    fn ordered_map_insert_replaces_in_place() {
        let mut map = OrderedMap::new();
        map.insert("a", 1u64);
        map.insert("b", 2);
        map.insert("a", 9);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(map.get("a"), Some(&9));
    }

    #[test]
    fn full_record_parses_with_exact_field_names() {
        let rec: PartyAnalysis = serde_json::from_value(record_json()).unwrap();
        assert_eq!(rec.text_length, 26376);
        assert_eq!(rec.sentiment_analysis.average_sentiment, 0.020);
        assert_eq!(rec.text_analysis.top_keywords[0], ("wirtschaft".to_string(), 40));
        assert_eq!(
            rec.mentioned_parties.keys().collect::<Vec<_>>(),
            vec!["spd", "union", "afd"]
        );
        assert_eq!(rec.interesting_words_count.get("krise"), Some(&12));
        assert!(rec.text_analysis.sentence_stats.is_none());
    }

    #[test]
    fn missing_lexicon_section_defaults_to_empty() {
        let mut v = record_json();
        v.as_object_mut().unwrap().remove("interesting_words_count");
        let rec: PartyAnalysis = serde_json::from_value(v).unwrap();
        assert!(rec.interesting_words_count.is_empty());
    }

    #[test]
    fn missing_required_section_is_a_decode_error() {
        let mut v = record_json();
        v.as_object_mut().unwrap().remove("sentiment_analysis");
        assert!(serde_json::from_value::<PartyAnalysis>(v).is_err());
    }

    #[test]
    fn document_parses_in_party_order() {
        let doc_json = json!({ "spd": record_json(), "afd": record_json() });
        let doc: AnalysisDocument = serde_json::from_value(doc_json).unwrap();
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["spd", "afd"]);
    }
}
