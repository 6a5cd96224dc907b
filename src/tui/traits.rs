use crate::SharedData;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Result of key handling by a view
pub enum KeyResult {
    /// The view consumed the key event
    Handled,
    /// The view didn't handle this key, pass to parent
    NotHandled,
    /// Request to drill down into a child view
    DrillDown(Box<dyn View>),
    /// Request to go back up one level
    GoBack,
    /// Request an immediate data refresh
    Refresh,
    /// Request to quit the application
    Quit,
}

/// Core trait for all views in the hierarchical TUI.
///
/// Views are stateless with respect to data: the event loop snapshots
/// [`SharedData`] once per frame and hands the same snapshot to rendering
/// and key handling, so a background refresh can never change the list
/// under a selection mid-frame.
pub trait View {
    /// Render the view to the terminal
    fn render(&mut self, f: &mut Frame, area: Rect, data: &SharedData, focused: bool);

    /// Handle a key event against the current data snapshot
    fn handle_key(&mut self, key: KeyEvent, data: &SharedData) -> KeyResult;

    /// Get the breadcrumb label for this view
    fn breadcrumb_label(&self) -> String {
        "Unknown".to_string()
    }
}
