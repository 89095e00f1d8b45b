use crate::error::{RankError, Result};
use crate::stats::{document_frequencies, idf_from_document_frequencies, term_frequency_from_tokens, InverseDocumentFrequency};
use crate::tokenizer::tokenize;
use crate::vector::{vectorize_tf, WeightedVector};
use crate::Corpus;
use parking_lot::Mutex;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct PreparedDocument {
    pub id: String,
    /// Occurrences of each term in the document.
    pub term_counts: HashMap<String, u64>,
    pub vector: WeightedVector,
}

/// Everything derived from one corpus snapshot: each document tokenized once,
/// the corpus IDF, and each document's TF-IDF vector. Documents keep corpus order.
#[derive(Debug, Clone)]
pub struct PreparedCorpus {
    pub docs: Vec<PreparedDocument>,
    pub idf: InverseDocumentFrequency,
}

impl PreparedCorpus {
    pub fn prepare(corpus: &Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(RankError::InvalidCorpus);
        }
        let tokenized: Vec<(&String, Vec<String>)> = corpus.iter().map(|(id, text)| (id, tokenize(text))).collect();
        let df = document_frequencies(tokenized.iter().map(|(_, tokens)| tokens.as_slice()));
        let idf = idf_from_document_frequencies(tokenized.len(), &df)?;

        let docs = tokenized
            .into_iter()
            .map(|(id, tokens)| {
                let tf = term_frequency_from_tokens(&tokens);
                let vector = vectorize_tf(&tf, &idf);
                let mut term_counts: HashMap<String, u64> = HashMap::new();
                for token in tokens {
                    *term_counts.entry(token).or_insert(0) += 1;
                }
                PreparedDocument { id: id.clone(), term_counts, vector }
            })
            .collect();
        tracing::debug!(num_docs = corpus.len(), vocabulary = idf.len(), "prepared corpus");
        Ok(Self { docs, idf })
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

/// Hash over every (id, text) pair in iteration order.
pub fn fingerprint(corpus: &Corpus) -> u64 {
    let mut hasher = DefaultHasher::new();
    corpus.len().hash(&mut hasher);
    for (id, text) in corpus {
        id.hash(&mut hasher);
        text.hash(&mut hasher);
    }
    hasher.finish()
}

/// Holds the most recently prepared corpus, keyed by its fingerprint.
/// A corpus whose fingerprint differs replaces the entry.
#[derive(Default)]
pub struct CorpusCache {
    entry: Mutex<Option<(u64, Arc<PreparedCorpus>)>>,
}

impl CorpusCache {
    pub fn new() -> Self { Self::default() }

    pub fn get_or_prepare(&self, corpus: &Corpus) -> Result<Arc<PreparedCorpus>> {
        let key = fingerprint(corpus);
        let mut entry = self.entry.lock();
        if let Some((cached_key, prepared)) = entry.as_ref() {
            if *cached_key == key {
                tracing::trace!(fingerprint = key, "corpus cache hit");
                return Ok(Arc::clone(prepared));
            }
        }
        tracing::debug!(fingerprint = key, "corpus cache miss");
        let prepared = Arc::new(PreparedCorpus::prepare(corpus)?);
        *entry = Some((key, Arc::clone(&prepared)));
        Ok(prepared)
    }

    pub fn clear(&self) { *self.entry.lock() = None; }

    pub fn cached_fingerprint(&self) -> Option<u64> {
        self.entry.lock().as_ref().map(|(key, _)| *key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus(pairs: &[(&str, &str)]) -> Corpus {
        pairs.iter().map(|(id, text)| (id.to_string(), text.to_string())).collect()
    }

    #[test]
    fn prepare_matches_free_functions() {
        let c = corpus(&[("a", "red apple red"), ("b", "green apple"), ("c", "")]);
        let prepared = PreparedCorpus::prepare(&c).unwrap();
        let idf = crate::stats::inverse_document_frequency(c.values()).unwrap();
        assert_eq!(prepared.idf, idf);
        for doc in &prepared.docs {
            assert_eq!(doc.vector, crate::vector::vectorize(&c[&doc.id], &idf));
        }
        assert_eq!(prepared.docs[0].term_counts["red"], 2);
        assert!(prepared.docs[2].term_counts.is_empty());
    }

    #[test]
    fn prepare_rejects_empty_corpus() {
        assert_eq!(PreparedCorpus::prepare(&Corpus::new()).unwrap_err(), RankError::InvalidCorpus);
    }

    #[test]
    fn fingerprint_changes_with_content() {
        let a = corpus(&[("a", "one")]);
        let b = corpus(&[("a", "two")]);
        assert_eq!(fingerprint(&a), fingerprint(&a.clone()));
        assert_ne!(fingerprint(&a), fingerprint(&b));
    }

    #[test]
    fn cache_reuses_and_invalidates() {
        let cache = CorpusCache::new();
        let a = corpus(&[("a", "one")]);
        let first = cache.get_or_prepare(&a).unwrap();
        let second = cache.get_or_prepare(&a).unwrap();
        assert!(Arc::ptr_eq(&first, &second));

        let b = corpus(&[("a", "one"), ("b", "two")]);
        let third = cache.get_or_prepare(&b).unwrap();
        assert!(!Arc::ptr_eq(&first, &third));
        assert_eq!(cache.cached_fingerprint(), Some(fingerprint(&b)));

        cache.clear();
        assert_eq!(cache.cached_fingerprint(), None);
    }
}
