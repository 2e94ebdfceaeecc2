use std::sync::Arc;
use std::sync::atomic::Ordering;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::sources::CharacterApi;
use crate::state::{AppState, FilterField};
use crate::theme::Settings;

mod background;
mod event_loop;
pub mod handlers;
pub mod workers;

use background::{Channels, spawn_event_thread};
use event_loop::run_event_loop;
use handlers::dispatch;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Leaves raw mode and the alternate screen when dropped, including during a
/// panic unwind out of the event loop.
struct TerminalGuard {
    /// Restore routine run on drop.
    restore: fn() -> Result<()>,
}

impl TerminalGuard {
    /// What: Enter raw mode and the alternate screen.
    ///
    /// Output:
    /// - Guard that undoes both on drop; `Err` if entering failed (anything
    ///   already switched on is switched back off first).
    fn enter() -> Result<Self> {
        let guard = Self {
            restore: restore_terminal,
        };
        enable_raw_mode()?;
        execute!(std::io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            tracing::error!(error = %e, "failed to restore terminal");
        }
    }
}

/// Leave the alternate screen and restore cooked mode.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(std::io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// What: Run the mortydex TUI end-to-end: build the API client, initialize the
/// terminal, spawn the event reader and fetch worker, drive the event loop and
/// restore the terminal on exit.
///
/// Inputs:
/// - `initial_filters`: Filter values given on the command line
/// - `settings`: Loaded settings (endpoint, timeouts, load-more format)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal or client errors.
///
/// Details:
/// - The first frame already shows the prefilled filters; the initial commit
///   fetches page 1 of that selection (the unfiltered listing by default).
/// - Invalid categorical values are logged and skipped.
pub async fn run(initial_filters: Vec<(FilterField, String)>, settings: Settings) -> Result<()> {
    let api = Arc::new(CharacterApi::from_settings(&settings)?);
    tracing::info!(base_url = %settings.base_url, "character api client ready");

    let mut app = AppState::new(settings.load_more_format);
    for (field, value) in initial_filters {
        if let Err(e) = app.query.set_filter(field, &value) {
            tracing::warn!(error = %e, "ignoring invalid startup filter");
        }
    }

    let mut channels = Channels::new(api);
    dispatch(&channels.request_tx, Some(app.query.apply_filters()));

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
    spawn_event_thread(
        channels.event_tx.clone(),
        channels.event_thread_cancelled.clone(),
    );

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    tracing::debug!(
        results = app.query.results().len(),
        page = app.query.current_page(),
        "main loop exited"
    );
    drop(guard);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    static RESTORES: AtomicUsize = AtomicUsize::new(0);

    fn counting_restore() -> Result<()> {
        RESTORES.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn failing_restore() -> Result<()> {
        Err("no tty".into())
    }

    #[test]
    /// What: The terminal guard restores on normal drop and on panic unwind.
    ///
    /// Inputs:
    /// - Guard dropped at scope end; guard owned by a closure that panics.
    ///
    /// Output:
    /// - Restore ran once per guard; a failing restore does not panic.
    fn terminal_guard_restores_on_drop_and_panic() {
        let before = RESTORES.load(Ordering::SeqCst);
        {
            let _guard = TerminalGuard {
                restore: counting_restore,
            };
        }
        assert_eq!(RESTORES.load(Ordering::SeqCst), before + 1);

        let unwound = std::panic::catch_unwind(|| {
            let _guard = TerminalGuard {
                restore: counting_restore,
            };
            panic!("event loop blew up");
        });
        assert!(unwound.is_err());
        assert_eq!(RESTORES.load(Ordering::SeqCst), before + 2);

        drop(TerminalGuard {
            restore: failing_restore,
        });
    }
}
