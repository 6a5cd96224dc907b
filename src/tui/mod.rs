mod app;
mod components;
mod theme;
mod traits;
mod views;

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use tokio::sync::mpsc;

use crate::{SharedData, SharedDataHandle};
use app::{AppState, Tab};
use components::{render_breadcrumb, render_status_bar, render_tab_bar};
use traits::{KeyResult, View};
use views::{LeaderboardView, ScrimListView, TournamentListView, WinnerListView};

const EVENT_POLL_INTERVAL_MS: u64 = 100;

pub async fn run(
    shared_data: SharedDataHandle,
    refresh_tx: mpsc::Sender<()>,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let initial_view: Box<dyn View> = Box::new(TournamentListView::new());
    let mut app_state = AppState::new(Tab::Tournaments, initial_view);

    // Main event loop
    loop {
        // One snapshot per frame. Rendering and key handling both see the
        // same data, even if the background loop swaps it in between.
        let snapshot: SharedData = shared_data.read().await.clone();

        terminal.draw(|f| {
            let size = f.area();

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2), // Tab bar
                    Constraint::Length(2), // Breadcrumb
                    Constraint::Min(0),    // Content
                    Constraint::Length(1), // Status bar
                ])
                .split(size);

            render_tab_bar(f, chunks[0], app_state.current_tab, &snapshot.config.theme);
            render_breadcrumb(f, chunks[1], &app_state.breadcrumb);

            app_state.current_view().render(f, chunks[2], &snapshot, true);

            render_status_bar(
                f,
                chunks[3],
                app_state.at_root(),
                snapshot.error_message.as_deref(),
                snapshot.last_refresh,
                &snapshot.config.time_format,
            );
        })?;

        // Handle events
        if event::poll(std::time::Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if handle_key_event(key, &mut app_state, &snapshot, &refresh_tx) {
                    break; // Exit requested
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Dispatch a key event. Returns true when the application should exit.
fn handle_key_event(
    key: KeyEvent,
    app_state: &mut AppState,
    snapshot: &SharedData,
    refresh_tx: &mpsc::Sender<()>,
) -> bool {
    // Global keys
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('r') => {
            // Drop the signal if a refresh is already queued
            let _ = refresh_tx.try_send(());
            return false;
        }
        _ => {}
    }

    // Tab switching only applies at the root of a tab
    if app_state.at_root() {
        match key.code {
            KeyCode::Char('1') => {
                switch_tab(app_state, Tab::Tournaments);
                return false;
            }
            KeyCode::Char('2') => {
                switch_tab(app_state, Tab::Scrims);
                return false;
            }
            KeyCode::Char('3') => {
                switch_tab(app_state, Tab::Winners);
                return false;
            }
            KeyCode::Char('4') => {
                switch_tab(app_state, Tab::Leaderboard);
                return false;
            }
            KeyCode::Left => {
                let new_tab = app_state.current_tab.prev();
                switch_tab(app_state, new_tab);
                return false;
            }
            KeyCode::Right => {
                let new_tab = app_state.current_tab.next();
                switch_tab(app_state, new_tab);
                return false;
            }
            _ => {}
        }
    }

    match app_state.current_view().handle_key(key, snapshot) {
        KeyResult::Handled => false,
        KeyResult::NotHandled => false,
        KeyResult::DrillDown(new_view) => {
            app_state.push_view(new_view);
            false
        }
        KeyResult::GoBack => {
            app_state.pop_view();
            false
        }
        KeyResult::Refresh => {
            let _ = refresh_tx.try_send(());
            false
        }
        KeyResult::Quit => true,
    }
}

fn switch_tab(app_state: &mut AppState, new_tab: Tab) {
    if app_state.current_tab == new_tab {
        return;
    }

    app_state.current_tab = new_tab;
    app_state.replace_root(root_view_for(new_tab));
}

fn root_view_for(tab: Tab) -> Box<dyn View> {
    match tab {
        Tab::Tournaments => Box::new(TournamentListView::new()),
        Tab::Scrims => Box::new(ScrimListView::new()),
        Tab::Winners => Box::new(WinnerListView::new()),
        Tab::Leaderboard => Box::new(LeaderboardView::new()),
    }
}
