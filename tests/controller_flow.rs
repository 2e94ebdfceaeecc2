//! End-to-end flow tests: controller requests travel through the fetch worker
//! and come back into `AppState` the same way the runtime wires them.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use mortydex::app::{dispatch, handle_page_response, spawn_fetch_worker};
use mortydex::logic::ApplyOutcome;
use mortydex::sources::{CharacterSource, FetchError};
use mortydex::state::{AppState, Character, FilterField, Focus, Page, PageResponse};

/// In-memory API keyed by exact query string. Unknown queries fail with 404.
struct FakeApi {
    pages: HashMap<String, Page>,
    delays: HashMap<String, Duration>,
}

impl CharacterSource for FakeApi {
    async fn fetch_page(&self, query: &str) -> Result<Page, FetchError> {
        if let Some(d) = self.delays.get(query) {
            tokio::time::sleep(*d).await;
        }
        self.pages
            .get(query)
            .cloned()
            .ok_or(FetchError::Status { status: 404 })
    }
}

fn character(id: u64, status: &str) -> Character {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("Character {id}"),
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "" },
        "location": { "name": "Citadel of Ricks", "url": "" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": [],
    }))
    .expect("valid character json")
}

fn page(ids: &[u64], status: &str, has_next: bool) -> Page {
    Page {
        results: ids.iter().map(|id| character(*id, status)).collect(),
        has_next,
    }
}

struct Harness {
    app: AppState,
    request_tx: mpsc::UnboundedSender<mortydex::state::PageRequest>,
    response_rx: mpsc::UnboundedReceiver<PageResponse>,
}

impl Harness {
    fn new(api: FakeApi) -> Self {
        let (request_tx, request_rx) = mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::unbounded_channel();
        spawn_fetch_worker(Arc::new(api), request_rx, response_tx);
        Self {
            app: AppState::default(),
            request_tx,
            response_rx,
        }
    }

    /// Wait for the next response and apply it like the event loop does.
    async fn pump(&mut self) -> ApplyOutcome {
        let resp = tokio::time::timeout(Duration::from_secs(2), self.response_rx.recv())
            .await
            .ok()
            .flatten()
            .expect("response within timeout");
        handle_page_response(&mut self.app, resp)
    }

    fn key(&mut self, code: KeyCode) -> bool {
        let ev = CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
        mortydex::events::handle_event(&ev, &mut self.app, &self.request_tx)
    }
}

#[tokio::test]
/// What: Filter by status, then page through every result.
///
/// Inputs:
/// - `&status=alive` returns 2 records with a next page.
/// - `page=2 &status=alive` returns 3 records and no next page.
///
/// Output:
/// - 2 entries on page 1 with more available; 5 entries on page 2 without;
///   the `m` key is then a no-op.
async fn status_filter_then_load_more() {
    let mut pages = HashMap::new();
    pages.insert("&status=alive".to_string(), page(&[1, 2], "Alive", true));
    pages.insert(
        "page=2 &status=alive".to_string(),
        page(&[3, 4, 5], "Alive", false),
    );
    let mut h = Harness::new(FakeApi {
        pages,
        delays: HashMap::new(),
    });

    h.app
        .query
        .set_filter(FilterField::Status, "alive")
        .expect("valid status");
    assert!(dispatch(&h.request_tx, Some(h.app.query.apply_filters())));
    assert_eq!(h.pump().await, ApplyOutcome::Replaced { count: 2 });
    assert_eq!(h.app.query.current_page(), 1);
    assert!(h.app.query.can_load_more());
    assert_eq!(h.app.list_state.selected(), Some(0));

    h.app.focus = Focus::Results;
    h.key(KeyCode::Char('m'));
    assert_eq!(h.pump().await, ApplyOutcome::Appended { count: 3 });
    let ids: Vec<u64> = h.app.query.results().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(h.app.query.current_page(), 2);
    assert!(!h.app.query.has_more());

    h.key(KeyCode::Char('m'));
    assert!(
        tokio::time::timeout(Duration::from_millis(100), h.response_rx.recv())
            .await
            .is_err(),
        "exhausted list must not fetch"
    );
}

#[tokio::test]
/// What: Editing filters through keys and committing a query the API rejects.
///
/// Inputs:
/// - Unfiltered listing succeeds; `&name=zzz` is unknown to the fake API.
///
/// Output:
/// - The list is cleared and the load-more gate closes.
async fn failed_commit_clears_previous_results() {
    let mut pages = HashMap::new();
    pages.insert(String::new(), page(&[1, 2, 3], "Dead", true));
    let mut h = Harness::new(FakeApi {
        pages,
        delays: HashMap::new(),
    });

    dispatch(&h.request_tx, Some(h.app.query.apply_filters()));
    assert_eq!(h.pump().await, ApplyOutcome::Replaced { count: 3 });

    for c in ['z', 'z', 'z'] {
        h.key(KeyCode::Char(c));
    }
    h.key(KeyCode::Enter);
    assert_eq!(h.app.query.committed_query(), "&name=zzz");
    assert_eq!(h.pump().await, ApplyOutcome::Cleared);
    assert!(h.app.query.results().is_empty());
    assert!(!h.app.query.can_load_more());
    assert_eq!(h.app.list_state.selected(), None);
}

#[tokio::test]
/// What: A slow first commit cannot overwrite the results of a newer one.
///
/// Inputs:
/// - `&status=dead` answers after 300ms; `&status=alive` answers at once.
///
/// Output:
/// - The alive list is shown and nothing else arrives to replace it.
async fn newer_commit_wins_over_slow_older_commit() {
    let mut pages = HashMap::new();
    pages.insert("&status=dead".to_string(), page(&[10, 11], "Dead", false));
    pages.insert("&status=alive".to_string(), page(&[1], "Alive", false));
    let mut delays = HashMap::new();
    delays.insert("&status=dead".to_string(), Duration::from_millis(300));
    let mut h = Harness::new(FakeApi { pages, delays });

    h.app
        .query
        .set_filter(FilterField::Status, "dead")
        .expect("valid");
    dispatch(&h.request_tx, Some(h.app.query.apply_filters()));
    h.app
        .query
        .set_filter(FilterField::Status, "alive")
        .expect("valid");
    dispatch(&h.request_tx, Some(h.app.query.apply_filters()));

    assert_eq!(h.pump().await, ApplyOutcome::Replaced { count: 1 });
    assert!(
        tokio::time::timeout(Duration::from_millis(500), h.response_rx.recv())
            .await
            .is_err(),
        "superseded commit must be aborted"
    );
    assert_eq!(h.app.query.results()[0].status, "Alive");
}
