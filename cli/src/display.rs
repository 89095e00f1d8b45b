use docrank_core::{Corpus, RankedDocument, Strategy};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub top_n: usize,
    pub snippet_chars: usize,
    /// Wrap raw query words found in snippets with `*`.
    pub highlight: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { top_n: 5, snippet_chars: 200, highlight: false }
    }
}

#[derive(Serialize)]
pub struct QueryResponse {
    pub query: String,
    pub strategy: Strategy,
    pub took_s: f64,
    pub total_docs: usize,
    pub results: Vec<QueryHit>,
}

#[derive(Serialize)]
pub struct QueryHit {
    pub id: String,
    pub score: f64,
    pub snippet: String,
}

impl QueryResponse {
    pub fn new(query: &str, strategy: Strategy, took_s: f64, ranked: &[RankedDocument], corpus: &Corpus, opts: &DisplayOptions) -> Self {
        let results = ranked
            .iter()
            .take(opts.top_n)
            .map(|r| QueryHit { id: r.id.clone(), score: r.score, snippet: snippet_for(corpus, &r.id, query, opts) })
            .collect();
        Self { query: query.to_string(), strategy, took_s, total_docs: ranked.len(), results }
    }
}

/// First `max_chars` characters of `text`.
pub fn snippet(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn snippet_for(corpus: &Corpus, id: &str, query: &str, opts: &DisplayOptions) -> String {
    let text = corpus.get(id).map(String::as_str).unwrap_or("");
    let s = snippet(text, opts.snippet_chars);
    if opts.highlight {
        let raw_terms: Vec<String> = query.split_whitespace().map(|t| t.to_string()).collect();
        highlight_terms(&s, &raw_terms)
    } else {
        s
    }
}

/// Case-insensitive, whole-word marking of each raw query term.
pub fn highlight_terms(snippet: &str, terms: &[String]) -> String {
    let mut s = snippet.to_string();
    for t in terms {
        if t.trim().is_empty() { continue; }
        let Ok(pat) = regex::RegexBuilder::new(&format!(r"\b{}\b", regex::escape(t)))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        s = pat.replace_all(&s, |caps: &regex::Captures| format!("*{}*", &caps[0])).to_string();
    }
    s
}

pub fn display_ranked_documents<W: Write>(out: &mut W, ranked: &[RankedDocument], corpus: &Corpus, query: &str, opts: &DisplayOptions) -> io::Result<()> {
    writeln!(out, "\nTop Relevant Documents:\n")?;
    for (i, r) in ranked.iter().take(opts.top_n).enumerate() {
        writeln!(out, "{}. {} (Score: {:.4})", i + 1, r.id, r.score)?;
        writeln!(out, "Snippet: {}...\n", snippet_for(corpus, &r.id, query, opts))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_counts_chars_not_bytes() {
        assert_eq!(snippet("héllo wörld", 4), "héll");
        assert_eq!(snippet("ab", 200), "ab");
    }

    #[test]
    fn highlight_is_case_insensitive_and_word_bounded() {
        let out = highlight_terms("Fox and foxes", &["fox".to_string()]);
        assert_eq!(out, "*Fox* and foxes");
    }

    #[test]
    fn display_truncates_to_top_n() {
        let corpus: Corpus = [("a.txt", "alpha"), ("b.txt", "beta"), ("c.txt", "gamma")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let ranked = vec![
            RankedDocument { id: "b.txt".into(), score: 2.0 },
            RankedDocument { id: "a.txt".into(), score: 1.0 },
            RankedDocument { id: "c.txt".into(), score: 0.0 },
        ];
        let opts = DisplayOptions { top_n: 2, ..DisplayOptions::default() };
        let mut out = Vec::new();
        display_ranked_documents(&mut out, &ranked, &corpus, "beta", &opts).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1. b.txt (Score: 2.0000)\nSnippet: beta..."));
        assert!(text.contains("2. a.txt (Score: 1.0000)"));
        assert!(!text.contains("c.txt"));
    }
}
