use thiserror::Error;

pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankError {
    /// IDF is undefined over zero documents.
    #[error("invalid corpus: at least one document is required")]
    InvalidCorpus,

    #[error("unsupported ranking strategy: {0:?}")]
    UnsupportedStrategy(String),
}
