use tokio::sync::mpsc;

use crate::logic::ApplyOutcome;
use crate::state::{AppState, PageRequest, PageResponse};

/// What: Forward a controller request to the fetch worker, if there is one.
///
/// Inputs:
/// - `request_tx`: Channel to the fetch worker
/// - `req`: Request returned by a controller operation (`None` = no-op)
///
/// Output:
/// - `true` when a request was sent.
pub fn dispatch(request_tx: &mpsc::UnboundedSender<PageRequest>, req: Option<PageRequest>) -> bool {
    let Some(req) = req else {
        return false;
    };
    if request_tx.send(req).is_err() {
        tracing::error!("fetch worker channel closed; request dropped");
        return false;
    }
    true
}

/// What: Apply a completed fetch to the application state.
///
/// Inputs:
/// - `app`: Application state
/// - `resp`: Response from the fetch worker
///
/// Output:
/// - The controller's [`ApplyOutcome`].
///
/// Details:
/// - A replaced list starts with the first row highlighted; appended pages
///   keep the current highlight.
pub fn handle_page_response(app: &mut AppState, resp: PageResponse) -> ApplyOutcome {
    let outcome = app.query.apply_response(resp);
    match outcome {
        ApplyOutcome::Replaced { count } => {
            tracing::info!(count, "result list replaced");
            app.selected = 0;
            app.sync_selection();
        }
        ApplyOutcome::Appended { count } => {
            tracing::info!(
                count,
                total = app.query.results().len(),
                page = app.query.current_page(),
                "result list extended"
            );
            app.sync_selection();
        }
        ApplyOutcome::Cleared => app.sync_selection(),
        ApplyOutcome::Unchanged | ApplyOutcome::Stale => {}
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::FetchError;
    use crate::state::{Character, LocationRef, Page};

    fn character(id: u64) -> Character {
        Character {
            id,
            name: format!("C{id}"),
            status: "unknown".into(),
            species: "Alien".into(),
            kind: String::new(),
            gender: "unknown".into(),
            origin: LocationRef::default(),
            location: LocationRef::default(),
            image: String::new(),
            episode: Vec::new(),
        }
    }

    #[test]
    /// What: Commit resets the highlight; append keeps it.
    ///
    /// Inputs:
    /// - Page of 3 with next, highlight moved to row 2, then a page of 2 appended.
    ///
    /// Output:
    /// - Highlight back at 0 after replace, still 2 after append.
    fn handle_page_response_updates_selection() {
        let mut app = AppState::default();
        let req = app.query.apply_filters();
        let out = handle_page_response(
            &mut app,
            PageResponse::for_request(
                &req,
                Ok(Page {
                    results: (1..4).map(character).collect(),
                    has_next: true,
                }),
            ),
        );
        assert_eq!(out, ApplyOutcome::Replaced { count: 3 });
        assert_eq!(app.list_state.selected(), Some(0));
        app.move_selection(2);

        let more = app.query.load_more().expect("next page");
        let out = handle_page_response(
            &mut app,
            PageResponse::for_request(
                &more,
                Ok(Page {
                    results: (4..6).map(character).collect(),
                    has_next: false,
                }),
            ),
        );
        assert_eq!(out, ApplyOutcome::Appended { count: 2 });
        assert_eq!(app.selected, 2);
        assert_eq!(app.query.results().len(), 5);
    }

    #[test]
    fn failed_commit_clears_selection() {
        let mut app = AppState::default();
        let req = app.query.apply_filters();
        let out = handle_page_response(
            &mut app,
            PageResponse::for_request(&req, Err(FetchError::Status { status: 404 })),
        );
        assert_eq!(out, ApplyOutcome::Cleared);
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn dispatch_skips_none_and_sends_some() {
        let mut app = AppState::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        assert!(!dispatch(&tx, app.query.load_more()));
        assert!(dispatch(&tx, Some(app.query.apply_filters())));
        assert_eq!(rx.try_recv().expect("request sent").page, 1);
    }
}
