use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref STOPWORDS: HashSet<&'static str> = {
        let words: &[&str] = &[
            "and", "the", "is", "in", "at", "of", "on", "a", "to", "it", "for",
            "with", "as", "was", "by", "an", "be", "that", "this", "or", "are", "from", "but",
        ];
        words.iter().copied().collect()
    };
}

pub fn is_stopword(token: &str) -> bool { STOPWORDS.contains(token) }

fn is_separator(c: char) -> bool {
    // Unicode whitespace plus the ASCII file/group/record/unit separators.
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split on whitespace, drop any piece containing a non-alphanumeric char, lowercase, drop stopwords.
///
/// Alphanumeric is `char::is_alphanumeric`, so combining marks with the Alphabetic
/// property (e.g. U+0301 in a decomposed "é") are kept as part of a token.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(is_separator)
        .filter(|piece| !piece.is_empty())
        .filter(|piece| piece.chars().all(char::is_alphanumeric))
        .map(str::to_lowercase)
        .filter(|token| !is_stopword(token))
        .collect()
}
