use crate::display::{display_ranked_documents, DisplayOptions};
use anyhow::Result;
use docrank_core::{Corpus, Ranker, Strategy};
use std::io::{BufRead, Write};

/// Prompt for queries until `exit` or end of input.
pub fn run_interactive<R: BufRead, W: Write>(mut input: R, out: &mut W, corpus: &Corpus, ranker: &Ranker, opts: &DisplayOptions) -> Result<()> {
    writeln!(out, "Loaded {} documents.", corpus.len())?;
    loop {
        write!(out, "\nEnter your query (or type 'exit' to quit): ")?;
        out.flush()?;
        let Some(query) = read_line(&mut input)? else { break };
        if query.eq_ignore_ascii_case("exit") {
            writeln!(out, "Exiting Document Ranking System. Goodbye!")?;
            break;
        }

        writeln!(out, "\nChoose a ranking method:")?;
        for (i, strategy) in Strategy::ALL.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, strategy)?;
        }
        write!(out, "Enter the number of your choice: ")?;
        out.flush()?;
        let Some(choice) = read_line(&mut input)? else { break };
        let strategy = match choice.parse::<Strategy>() {
            Ok(strategy) => strategy,
            Err(err) => {
                tracing::debug!(%err, "rejected ranking method");
                writeln!(out, "Invalid choice. Please try again.")?;
                continue;
            }
        };

        let ranked = ranker.rank(corpus, &query, strategy)?;
        display_ranked_documents(out, &ranked, corpus, &query, opts)?;
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
