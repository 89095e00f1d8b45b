use crate::error::{RankError, Result};
use crate::tokenizer::tokenize;
use std::collections::{BTreeMap, HashMap, HashSet};

// Ordered maps keep float sums over them reproducible between calls.
pub type TermFrequency = BTreeMap<String, f64>;
pub type InverseDocumentFrequency = BTreeMap<String, f64>;

/// Term frequency of `text`: occurrences / total tokens. Empty text gives an empty map.
pub fn term_frequency(text: &str) -> TermFrequency {
    term_frequency_from_tokens(&tokenize(text))
}

pub fn term_frequency_from_tokens(tokens: &[String]) -> TermFrequency {
    let total = tokens.len();
    if total == 0 {
        return TermFrequency::new();
    }
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(term, count)| (term.to_string(), count as f64 / total as f64))
        .collect()
}

/// Number of documents each term appears in (presence, not frequency).
pub fn document_frequencies<'a, I>(documents: I) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut df: HashMap<String, usize> = HashMap::new();
    for tokens in documents {
        let seen_in_doc: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in seen_in_doc {
            *df.entry(term.to_string()).or_insert(0) += 1;
        }
    }
    df
}

/// `ln(num_docs / (1 + df))` per term. Terms present in every document go negative; that is kept.
pub fn idf_from_document_frequencies(num_docs: usize, df: &HashMap<String, usize>) -> Result<InverseDocumentFrequency> {
    if num_docs == 0 {
        return Err(RankError::InvalidCorpus);
    }
    let n = num_docs as f64;
    Ok(df
        .iter()
        .map(|(term, &count)| (term.clone(), (n / (1.0 + count as f64)).ln()))
        .collect())
}

/// IDF over a whole corpus. Each document is tokenized exactly once.
pub fn inverse_document_frequency<I, S>(documents: I) -> Result<InverseDocumentFrequency>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokenized: Vec<Vec<String>> = documents.into_iter().map(|text| tokenize(text.as_ref())).collect();
    let df = document_frequencies(tokenized.iter().map(Vec::as_slice));
    idf_from_document_frequencies(tokenized.len(), &df)
}
