use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::sources::CharacterSource;
use crate::state::{FetchSlot, PageRequest, PageResponse};

/// What: Execute one request against a source.
///
/// Inputs:
/// - `source`: Character source to query
/// - `req`: Request produced by the controller
///
/// Output:
/// - Response echoing the request's id, generation, slot and page.
pub async fn fetch_request<S: CharacterSource>(source: &S, req: PageRequest) -> PageResponse {
    let outcome = source.fetch_page(&req.query).await;
    if let Err(e) = &outcome {
        tracing::warn!(id = req.id, page = req.page, error = %e, "character fetch failed");
    }
    PageResponse::for_request(&req, outcome)
}

/// Abortable task handle per fetch lane.
#[derive(Debug, Default)]
pub struct FetchSlots {
    /// In-flight commit fetch.
    commit: Option<JoinHandle<()>>,
    /// In-flight load-more fetch.
    load_more: Option<JoinHandle<()>>,
}

impl FetchSlots {
    /// What: Release the lanes a new request in `slot` supersedes.
    ///
    /// Details:
    /// - A commit aborts both lanes: the list it replaces makes any pending
    ///   load more meaningless.
    /// - A load more aborts only the previous load more.
    pub fn begin(&mut self, slot: FetchSlot) {
        if let Some(h) = self.load_more.take() {
            h.abort();
        }
        if slot == FetchSlot::Commit
            && let Some(h) = self.commit.take()
        {
            h.abort();
        }
    }

    /// Remember the task now occupying `slot`.
    pub fn store(&mut self, slot: FetchSlot, handle: JoinHandle<()>) {
        match slot {
            FetchSlot::Commit => self.commit = Some(handle),
            FetchSlot::LoadMore => self.load_more = Some(handle),
        }
    }

    /// Abort everything still running.
    pub fn abort_all(&mut self) {
        for h in [self.commit.take(), self.load_more.take()].into_iter().flatten() {
            h.abort();
        }
    }
}

/// What: Spawn background worker that executes fetch requests.
///
/// Inputs:
/// - `source`: Shared character source
/// - `request_rx`: Requests produced by the controller
/// - `response_tx`: Channel for completed responses
///
/// Output:
/// - Handle of the worker task; it ends when `request_rx` closes.
///
/// Details:
/// - Each request runs in its own task so a slow page never blocks a newer one.
/// - Superseded tasks are aborted through [`FetchSlots`]; the controller's
///   id/generation check still guards anything that completes first.
pub fn spawn_fetch_worker<S: CharacterSource>(
    source: Arc<S>,
    mut request_rx: mpsc::UnboundedReceiver<PageRequest>,
    response_tx: mpsc::UnboundedSender<PageResponse>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut slots = FetchSlots::default();
        while let Some(req) = request_rx.recv().await {
            let slot = req.slot;
            slots.begin(slot);
            tracing::debug!(id = req.id, ?slot, query = %req.query, "dispatching fetch");
            let src = Arc::clone(&source);
            let tx = response_tx.clone();
            let handle = tokio::spawn(async move {
                let resp = fetch_request(src.as_ref(), req).await;
                if let Err(e) = tx.send(resp) {
                    tracing::debug!(id = e.0.id, "response channel closed; response dropped");
                }
            });
            slots.store(slot, handle);
        }
        slots.abort_all();
        tracing::debug!("fetch worker stopped");
    })
}
