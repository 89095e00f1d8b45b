use crate::corpus::PreparedCorpus;
use crate::error::{RankError, Result};
use crate::tokenizer::tokenize;
use crate::vector::{cosine_similarity, lookup_sum, vectorize};
use crate::Corpus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Count of equal (query token, document token) pairs.
    Keyword,
    /// For each document term, the query's TF-IDF weight for it, summed.
    TfIdf,
    /// Cosine of the query and document TF-IDF vectors.
    Cosine,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Keyword, Strategy::TfIdf, Strategy::Cosine];

    /// One unordered (id, score) pair per document.
    pub fn score(&self, corpus: &Corpus, query: &str) -> Result<Vec<(String, f64)>> {
        let prepared = PreparedCorpus::prepare(corpus)?;
        Ok(self.score_prepared(&prepared, query))
    }

    pub fn score_prepared(&self, prepared: &PreparedCorpus, query: &str) -> Vec<(String, f64)> {
        match self {
            Strategy::Keyword => {
                let query_tokens = tokenize(query);
                prepared
                    .docs
                    .iter()
                    .map(|doc| {
                        // A query token matching k document occurrences contributes k.
                        // Pair counts reach query length x document length.
                        let matches: u64 = query_tokens
                            .iter()
                            .map(|q| doc.term_counts.get(q).copied().unwrap_or(0))
                            .sum();
                        (doc.id.clone(), matches as f64)
                    })
                    .collect()
            }
            Strategy::TfIdf => {
                let query_vector = vectorize(query, &prepared.idf);
                // Iterates the document's terms and reads query weights only; not a symmetric dot product.
                prepared
                    .docs
                    .iter()
                    .map(|doc| (doc.id.clone(), lookup_sum(&doc.vector, &query_vector)))
                    .collect()
            }
            Strategy::Cosine => {
                let query_vector = vectorize(query, &prepared.idf);
                prepared
                    .docs
                    .iter()
                    .map(|doc| (doc.id.clone(), cosine_similarity(&query_vector, &doc.vector)))
                    .collect()
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Keyword => "Keyword Matching",
            Strategy::TfIdf => "TF-IDF Scoring",
            Strategy::Cosine => "Cosine Similarity",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the menu number or a name: `1`/`keyword`, `2`/`tfidf`/`tf-idf`, `3`/`cosine`.
impl FromStr for Strategy {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "keyword" => Ok(Strategy::Keyword),
            "2" | "tfidf" | "tf-idf" => Ok(Strategy::TfIdf),
            "3" | "cosine" => Ok(Strategy::Cosine),
            _ => Err(RankError::UnsupportedStrategy(s.to_string())),
        }
    }
}
