use anyhow::Result;
use clap::{Parser, Subcommand};
use docrank::{display_ranked_documents, load_documents, run_interactive, DisplayOptions, QueryResponse};
use docrank_core::{Ranker, Strategy};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "docrank")]
#[command(about = "Rank a folder of text documents against a query", long_about = None)]
struct Cli {
    /// Folder containing .txt documents
    #[arg(long, env = "DOCRANK_DOCS", default_value = "./Docs", global = true)]
    docs: PathBuf,
    /// Number of results to show
    #[arg(long, default_value_t = 5, global = true)]
    top: usize,
    /// Snippet length in characters
    #[arg(long, default_value_t = 200, global = true)]
    snippet: usize,
    /// Mark query words inside snippets
    #[arg(long, default_value_t = false, global = true)]
    highlight: bool,
    /// Reuse corpus statistics across queries
    #[arg(long, default_value_t = false, global = true)]
    cache: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for queries and ranking methods (default)
    Interactive,
    /// Rank once and exit
    Query {
        /// keyword | tfidf | cosine (or 1 | 2 | 3)
        #[arg(long, short, default_value = "cosine")]
        strategy: Strategy,
        /// Print results as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        #[arg(required = true)]
        query: Vec<String>,
    },
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    let corpus = load_documents(&cli.docs)?;
    if corpus.is_empty() {
        println!("No valid documents found in the specified folder.");
        return Ok(());
    }

    let ranker = if cli.cache { Ranker::with_cache() } else { Ranker::new() };
    let opts = DisplayOptions { top_n: cli.top, snippet_chars: cli.snippet, highlight: cli.highlight };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => run_interactive(io::stdin().lock(), &mut out, &corpus, &ranker, &opts)?,
        Commands::Query { strategy, json, query } => {
            let query = query.join(" ");
            let start = Instant::now();
            let ranked = ranker.rank(&corpus, &query, strategy)?;
            let took_s = start.elapsed().as_secs_f64();
            tracing::info!(%strategy, took_s, "query ranked");
            if json {
                let response = QueryResponse::new(&query, strategy, took_s, &ranked, &corpus, &opts);
                serde_json::to_writer_pretty(&mut out, &response)?;
                writeln!(out)?;
            } else {
                display_ranked_documents(&mut out, &ranked, &corpus, &query, &opts)?;
            }
        }
    }
    Ok(())
}
