//! Ranks a fixed set of text documents against a free-text query using
//! keyword overlap, TF-IDF, or cosine similarity.

pub mod corpus;
pub mod error;
pub mod ranker;
pub mod stats;
pub mod strategy;
pub mod tokenizer;
pub mod vector;

use std::collections::BTreeMap;

/// Document identifier -> raw text.
pub type Corpus = BTreeMap<String, String>;

pub use corpus::{CorpusCache, PreparedCorpus};
pub use error::{RankError, Result};
pub use ranker::{rank, RankedDocument, Ranker};
pub use stats::{inverse_document_frequency, term_frequency};
pub use strategy::Strategy;
pub use tokenizer::tokenize;
pub use vector::{cosine_similarity, vectorize};
