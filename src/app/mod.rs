//! Command-line lookup: query words in, lyrics or a one-line error out.
//!
//! Misses (no query, no search result, no lyrics) end silently. Failures
//! are written to `err` as `Error: ...`. Lyrics reach `out` only once fully
//! cleaned.

use crate::lyrics::{Session, Stage};
use crate::web::PageFetcher;
use std::io::{self, Write};
use tracing::debug;

/// Joins command-line words into a query; `None` when there are none.
pub fn join_query(words: &[String]) -> Option<String> {
    if words.is_empty() {
        return None;
    }
    Some(words.join(" "))
}

/// `setup` runs only once a query is known, so a bad config stays silent
/// when there is nothing to look up.
pub async fn run<F, S>(
    words: &[String],
    setup: S,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<()>
where
    F: PageFetcher,
    S: FnOnce() -> anyhow::Result<Session<F>>,
{
    let Some(query) = join_query(words) else {
        debug!("no query given");
        return Ok(());
    };

    let session = match setup() {
        Ok(s) => s,
        Err(e) => return report(err, &e),
    };

    match session.fetch_lyrics(&query).await {
        Ok(Some(lyrics)) => {
            writeln!(out, "{lyrics}")?;
            out.flush()?;
            debug!(stage = %Stage::Printed);
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => report(err, &e),
    }
}

fn report(err: &mut impl Write, e: &anyhow::Error) -> io::Result<()> {
    writeln!(err, "Error: {e:#}")?;
    err.flush()
}
