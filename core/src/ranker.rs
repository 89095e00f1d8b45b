use crate::corpus::{CorpusCache, PreparedCorpus};
use crate::error::Result;
use crate::strategy::Strategy;
use crate::Corpus;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDocument {
    pub id: String,
    pub score: f64,
}

/// Rank every document in `corpus` against `query`, highest score first.
///
/// Nothing is filtered or truncated. Equal scores keep corpus iteration order,
/// which for [`Corpus`] is identifier order.
pub fn rank(corpus: &Corpus, query: &str, strategy: Strategy) -> Result<Vec<RankedDocument>> {
    let prepared = PreparedCorpus::prepare(corpus)?;
    Ok(rank_prepared(&prepared, query, strategy))
}

pub fn rank_prepared(prepared: &PreparedCorpus, query: &str, strategy: Strategy) -> Vec<RankedDocument> {
    let mut ranked: Vec<RankedDocument> = strategy
        .score_prepared(prepared, query)
        .into_iter()
        .map(|(id, score)| RankedDocument { id, score })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    tracing::debug!(%strategy, num_docs = ranked.len(), top_score = ranked.first().map(|r| r.score), "ranked corpus");
    ranked
}

/// Ranking entry point that can reuse derived corpus statistics across queries.
///
/// Without a cache every call prepares the corpus from scratch, same as [`rank`].
#[derive(Clone, Default)]
pub struct Ranker {
    cache: Option<Arc<CorpusCache>>,
}

impl Ranker {
    pub fn new() -> Self { Self::default() }

    pub fn with_cache() -> Self {
        Self { cache: Some(Arc::new(CorpusCache::new())) }
    }

    pub fn is_cached(&self) -> bool { self.cache.is_some() }

    pub fn rank(&self, corpus: &Corpus, query: &str, strategy: Strategy) -> Result<Vec<RankedDocument>> {
        match &self.cache {
            Some(cache) => {
                let prepared = cache.get_or_prepare(corpus)?;
                Ok(rank_prepared(&prepared, query, strategy))
            }
            None => rank(corpus, query, strategy),
        }
    }
}
