use crate::stats::{term_frequency, InverseDocumentFrequency, TermFrequency};
use std::collections::BTreeMap;

/// Sparse TF-IDF vector. Only terms known to the corpus are stored.
pub type WeightedVector = BTreeMap<String, f64>;

/// TF-IDF weights for `text` against a corpus IDF.
pub fn vectorize(text: &str, idf: &InverseDocumentFrequency) -> WeightedVector {
    vectorize_tf(&term_frequency(text), idf)
}

/// Terms missing from `idf` carry no corpus signal and are dropped.
pub fn vectorize_tf(tf: &TermFrequency, idf: &InverseDocumentFrequency) -> WeightedVector {
    tf.iter()
        .filter_map(|(term, weight)| idf.get(term).map(|idf_t| (term.clone(), weight * idf_t)))
        .collect()
}

pub fn magnitude(vector: &WeightedVector) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}

/// Sum of `lookup[t]` over the terms of `keys`, ignoring the weights of `keys` itself.
pub fn lookup_sum(keys: &WeightedVector, lookup: &WeightedVector) -> f64 {
    keys.keys().map(|term| lookup.get(term).copied().unwrap_or(0.0)).sum()
}

/// Cosine similarity. The numerator runs over `query` terms; both magnitudes use every term.
/// Returns 0 when either vector has zero magnitude.
pub fn cosine_similarity(query: &WeightedVector, doc: &WeightedVector) -> f64 {
    let dot: f64 = query
        .iter()
        .map(|(term, w)| w * doc.get(term).copied().unwrap_or(0.0))
        .sum();
    let mag_q = magnitude(query);
    let mag_d = magnitude(doc);
    if mag_q == 0.0 || mag_d == 0.0 {
        return 0.0;
    }
    dot / (mag_q * mag_d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(pairs: &[(&str, f64)]) -> WeightedVector {
        pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
    }

    #[test]
    fn vectorize_drops_unknown_terms() {
        let idf = vec_of(&[("fox", 2.0)]);
        let v = vectorize("fox unicorn", &idf);
        assert_eq!(v.len(), 1);
        assert!((v["fox"] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn vectorize_empty_text() {
        let idf = vec_of(&[("fox", 2.0)]);
        assert!(vectorize("", &idf).is_empty());
        assert!(vectorize("the of", &idf).is_empty());
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let v = vec_of(&[("a", 1.0), ("b", 2.0)]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_with_zero_vector_is_zero() {
        let v = vec_of(&[("a", 1.0)]);
        let empty = WeightedVector::new();
        assert_eq!(cosine_similarity(&v, &empty), 0.0);
        assert_eq!(cosine_similarity(&empty, &v), 0.0);
        assert_eq!(cosine_similarity(&vec_of(&[("a", 0.0)]), &v), 0.0);
    }

    #[test]
    fn doc_only_terms_only_grow_the_denominator() {
        let q = vec_of(&[("a", 1.0)]);
        let d = vec_of(&[("a", 3.0), ("b", 4.0)]);
        assert!((cosine_similarity(&q, &d) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn lookup_sum_ignores_own_weights() {
        let doc = vec_of(&[("a", 100.0), ("b", -5.0)]);
        let query = vec_of(&[("a", 0.5), ("c", 9.0)]);
        assert!((lookup_sum(&doc, &query) - 0.5).abs() < 1e-12);
    }
}
