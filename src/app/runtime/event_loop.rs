use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::background::Channels;
use super::handlers::handle_page_response;

/// What: Process one iteration of channel message handling.
///
/// Inputs:
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Output: `true` if the event loop should exit, `false` to continue
async fn process_channel_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(&ev, app, &channels.request_tx)
        }
        Some(resp) = channels.response_rx.recv() => {
            handle_page_response(app, resp);
            false
        }
        else => true
    }
}

/// What: Run the main event loop, rendering after every handled message.
///
/// Inputs:
/// - `terminal`: Terminal to draw on
/// - `app`: Application state
/// - `channels`: Communication channels for background workers
///
/// Details:
/// - Exits when the event handler asks to quit or all channels close.
pub async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Err(e) = terminal.draw(|f| ui(f, app)) {
            tracing::error!(error = %e, "failed to draw frame");
        }
        if process_channel_messages(app, channels).await {
            break;
        }
    }
}
