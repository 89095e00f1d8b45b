use anyhow::{bail, Context, Result};
use docrank_core::Corpus;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Read every `*.txt` file directly inside `dir`, following symlinks. The file name is the document id.
pub fn load_documents<P: AsRef<Path>>(dir: P) -> Result<Corpus> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        bail!("document folder {} does not exist", dir.display());
    }
    let mut corpus = Corpus::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true).into_iter() {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        if !entry.file_type().is_file() { continue; }
        let Some(name) = entry.file_name().to_str() else { continue };
        if !name.ends_with(".txt") { continue; }
        match fs::read_to_string(entry.path()) {
            Ok(text) => { corpus.insert(name.to_string(), text); }
            Err(err) => tracing::warn!(path = %entry.path().display(), %err, "skipping unreadable document"),
        }
    }
    tracing::info!(num_docs = corpus.len(), dir = %dir.display(), "loaded documents");
    Ok(corpus)
}
