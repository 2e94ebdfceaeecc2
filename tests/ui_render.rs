//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These check what the user can see for the main states of a session without
//! a real terminal.

use ratatui::{Terminal, backend::TestBackend};

use mortydex::state::{AppState, Character, FilterField, Modal, Page, PageResponse};
use mortydex::ui;

fn render(app: &mut AppState, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    terminal.draw(|f| ui::ui(f, app)).expect("draw");
    let buf = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn rick() -> Character {
    serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "" },
        "location": { "name": "Citadel of Ricks", "url": "" },
        "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
        "episode": ["https://rickandmortyapi.com/api/episode/1"],
    }))
    .expect("valid character json")
}

/// App with one committed page applied.
fn app_with(results: Vec<Character>, has_next: bool) -> AppState {
    let mut app = AppState::default();
    let req = app.query.apply_filters();
    mortydex::app::handle_page_response(
        &mut app,
        PageResponse::for_request(&req, Ok(Page { results, has_next })),
    );
    app
}

#[test]
/// What: Empty list after a finished fetch shows the nothing-found message.
///
/// Inputs:
/// - Commit answered with zero records.
///
/// Output:
/// - "Nothing was found" on screen and no "More" affordance.
fn empty_results_show_nothing_found() {
    let mut app = app_with(Vec::new(), false);
    let screen = render(&mut app, 100, 20);
    assert!(screen.contains("Nothing was found"));
    assert!(!screen.contains("More (m)"));
}

#[test]
/// What: The "More" affordance follows the has-more flag.
///
/// Inputs:
/// - One record with a next page, then one record without.
///
/// Output:
/// - Affordance present only in the first case; row shows name and status.
fn more_affordance_only_with_next_page() {
    let mut app = app_with(vec![rick()], true);
    let screen = render(&mut app, 100, 20);
    assert!(screen.contains("Rick Sanchez"));
    assert!(screen.contains("Alive"));
    assert!(screen.contains("More (m)"));

    let mut app = app_with(vec![rick()], false);
    assert!(!render(&mut app, 100, 20).contains("More (m)"));
}

#[test]
fn filter_bar_shows_placeholders_and_values() {
    let mut app = AppState::default();
    app.query
        .set_filter(FilterField::Species, "Robot")
        .expect("valid species");
    let screen = render(&mut app, 120, 20);
    assert!(screen.contains("Select status"));
    assert!(screen.contains("Robot"));
    assert!(screen.contains("Select gender"));
}

#[test]
/// What: Detail popup and help overlay render on top of the list.
///
/// Inputs:
/// - Detail opened for the first row; then help opened.
///
/// Output:
/// - Location and episode count visible; help heading visible.
fn detail_popup_and_help_overlay() {
    let mut app = app_with(vec![rick()], false);
    assert!(app.query.open_detail(0));
    let screen = render(&mut app, 100, 30);
    assert!(screen.contains("Citadel of Ricks"));
    assert!(screen.contains("Earth (C-137)"));
    assert!(screen.contains("Episodes"));

    app.query.close_detail();
    app.modal = Modal::Help;
    assert!(render(&mut app, 100, 30).contains("mortydex Help"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = app_with(vec![rick()], true);
    app.query.open_detail(0);
    app.modal = Modal::Help;
    let _ = render(&mut app, 10, 4);
}
