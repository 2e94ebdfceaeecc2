use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::sources::CharacterSource;
use crate::state::{PageRequest, PageResponse};

use super::workers::spawn_fetch_worker;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains the channel endpoints used between the main event loop, the
///   terminal event thread and the fetch worker
pub struct Channels {
    /// Terminal events from the reader thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiving side of terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set to stop the reader thread.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Requests to the fetch worker.
    pub request_tx: mpsc::UnboundedSender<PageRequest>,
    /// Completed fetches from the worker.
    pub response_rx: mpsc::UnboundedReceiver<PageResponse>,
}

impl Channels {
    /// What: Create all channels and spawn the fetch worker on `source`.
    ///
    /// Inputs:
    /// - `source`: Character source shared with the worker
    ///
    /// Output:
    /// - Channel endpoints for the event loop.
    pub fn new<S: CharacterSource>(source: Arc<S>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (request_tx, request_rx) = mpsc::unbounded_channel::<PageRequest>();
        let (response_tx, response_rx) = mpsc::unbounded_channel::<PageResponse>();
        spawn_fetch_worker(source, request_rx, response_tx);
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            request_tx,
            response_rx,
        }
    }
}

/// What: Spawn the blocking thread that forwards crossterm events.
///
/// Inputs:
/// - `event_tx`: Channel for terminal events
/// - `cancelled`: Flag checked between polls to stop the thread
///
/// Details:
/// - Polls with a 50ms timeout so cancellation is noticed promptly.
/// - Exits when the receiving side is dropped.
pub fn spawn_event_thread(event_tx: mpsc::UnboundedSender<CEvent>, cancelled: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !cancelled.load(Ordering::Relaxed) {
            match crossterm::event::poll(std::time::Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if cancelled.load(Ordering::Relaxed) || event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    // ignore transient read errors and continue
                    Err(_) => {}
                },
                Ok(false) | Err(_) => {}
            }
        }
    });
}
