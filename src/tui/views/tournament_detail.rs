use crate::commands::{now_local, or_tba};
use crate::commands::tournaments::format_tournament_detail;
use crate::tui::components::Scrollable;
use crate::tui::theme;
use crate::tui::traits::{KeyResult, View};
use crate::SharedData;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

/// Drill-down view showing one tournament's detail record
pub struct TournamentDetailView {
    tournament_id: String,
    tournament_name: String,
    scrollable: Scrollable,
}

impl TournamentDetailView {
    pub fn new(tournament_id: String, tournament_name: String) -> Self {
        TournamentDetailView {
            tournament_id,
            tournament_name,
            scrollable: Scrollable::new(),
        }
    }
}

impl View for TournamentDetailView {
    fn render(&mut self, f: &mut Frame, area: Rect, data: &SharedData, _focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme::card_border_style())
            .title(format!(" {} ", or_tba(&self.tournament_name)));

        let content = match data.detail_for(&self.tournament_id) {
            Some(detail) => format_tournament_detail(detail, now_local(), &data.config.display()),
            None => format!("No detail record for '{}' yet.", self.tournament_id.trim()),
        };

        self.scrollable.render_paragraph(f, area, content, Some(block));
    }

    fn handle_key(&mut self, key: KeyEvent, _data: &SharedData) -> KeyResult {
        match key.code {
            KeyCode::Esc => KeyResult::GoBack,
            _ => {
                if self.scrollable.handle_key(key) {
                    KeyResult::Handled
                } else {
                    KeyResult::NotHandled
                }
            }
        }
    }

    fn breadcrumb_label(&self) -> String {
        if self.tournament_name.trim().is_empty() {
            self.tournament_id.trim().to_string()
        } else {
            self.tournament_name.trim().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn escape_goes_back() {
        let mut view = TournamentDetailView::new("t-1".to_string(), "Cup".to_string());
        let data = SharedData::default();
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(view.handle_key(key, &data), KeyResult::GoBack));
    }

    #[test]
    fn breadcrumb_falls_back_to_id() {
        let view = TournamentDetailView::new("t-1".to_string(), "  ".to_string());
        assert_eq!(view.breadcrumb_label(), "t-1");
    }
}
