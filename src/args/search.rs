//! Command-line search mode: fetch matching characters and print them.

use std::io::Write;

use crate::app::fetch_request;
use crate::logic::{ApplyOutcome, QueryController};
use crate::sources::{CharacterApi, CharacterSource};
use crate::state::{Character, FilterField};
use crate::theme::Settings;

/// What: Commit the filters and follow load more until `pages` pages are merged.
///
/// Inputs:
/// - `source`: Character source to query
/// - `query`: Controller holding the filters to commit
/// - `pages`: Total pages wanted (1 = only the committed page)
///
/// Output:
/// - `true` when the commit succeeded; `false` when it failed and the list is empty.
///
/// Details:
/// - Stops early when the API reports no further page or a load more fails.
pub async fn collect_pages<S: CharacterSource>(
    source: &S,
    query: &mut QueryController,
    pages: u32,
) -> bool {
    let req = query.apply_filters();
    if query.apply_response(fetch_request(source, req).await) == ApplyOutcome::Cleared {
        return false;
    }
    while query.current_page() < pages {
        let Some(req) = query.load_more() else {
            break;
        };
        if query.apply_response(fetch_request(source, req).await) == ApplyOutcome::Unchanged {
            break;
        }
    }
    true
}

/// Tab-separated line printed for one record.
#[must_use]
pub fn format_character_line(c: &Character) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        c.id, c.name, c.status, c.species, c.gender
    )
}

/// What: Write the collected records, or the empty-state message.
///
/// # Errors
/// - Returns `Err` when writing to `out` fails.
pub fn write_results<W: Write>(out: &mut W, results: &[Character]) -> std::io::Result<()> {
    if results.is_empty() {
        writeln!(out, "Nothing was found")?;
    }
    for c in results {
        writeln!(out, "{}", format_character_line(c))?;
    }
    Ok(())
}

/// What: Run a search against `source` and print what it found to `out`.
///
/// Inputs:
/// - `source`: Character source to query
/// - `query`: Controller holding the filters to commit
/// - `pages`: Pages to fetch
/// - `out`: Destination for result lines
///
/// Output:
/// - Process exit code: `0` once results or "Nothing was found" were written,
///   `1` when writing to `out` failed.
///
/// Details:
/// - A failed first page (the API answers 404 when nothing matches) prints
///   "Nothing was found" like an empty page; the cause is only logged.
pub async fn run_search<S: CharacterSource, W: Write>(
    source: &S,
    query: &mut QueryController,
    pages: u32,
    out: &mut W,
) -> i32 {
    if !collect_pages(source, query, pages).await {
        tracing::warn!(query = %query.committed_query(), "search returned no page");
    }
    if let Err(e) = write_results(out, query.results()) {
        tracing::error!(error = %e, "failed to write search results");
        return 1;
    }
    tracing::info!(
        results = query.results().len(),
        page = query.current_page(),
        "search mode finished"
    );
    0
}

/// What: Handle `--search` without starting the TUI.
///
/// Inputs:
/// - `filters`: Filter values from the command line
/// - `pages`: Pages to fetch
/// - `settings`: Endpoint, timeouts and load-more format
///
/// Output:
/// - Process exit code: `1` when the client could not be built or stdout
///   could not be written, otherwise `0` (also when nothing matched).
pub async fn handle_search(
    filters: Vec<(FilterField, String)>,
    pages: u32,
    settings: &Settings,
) -> i32 {
    tracing::info!(pages, "search mode requested from CLI");
    let api = match CharacterApi::from_settings(settings) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("mortydex: {e}");
            tracing::error!(error = %e, "failed to build character api client");
            return 1;
        }
    };

    let mut query = QueryController::new(settings.load_more_format);
    for (field, value) in filters {
        if let Err(e) = query.set_filter(field, &value) {
            eprintln!("mortydex: {e}");
            return 1;
        }
    }

    let mut stdout = std::io::stdout();
    run_search(&api, &mut query, pages, &mut stdout).await
}
