use crate::commands::{now_local, or_tba};
use crate::status::{classify, non_empty};
use crate::tui::theme;
use crate::tui::traits::{KeyResult, View};
use crate::tui::views::TournamentDetailView;
use crate::SharedData;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Tournament listing with a selectable row per tournament.
/// Enter drills into the detail view for the selected id.
pub struct TournamentListView {
    selected_index: usize,
}

impl TournamentListView {
    pub fn new() -> Self {
        TournamentListView { selected_index: 0 }
    }

    fn clamp_selection(&mut self, len: usize) {
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }
}

impl Default for TournamentListView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TournamentListView {
    fn render(&mut self, f: &mut Frame, area: Rect, data: &SharedData, focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Tournaments ");

        if data.tournaments.is_empty() {
            let list = List::new(vec![ListItem::new(Span::styled(
                "No tournaments available",
                theme::hint_style(),
            ))])
            .block(block);
            f.render_widget(list, area);
            return;
        }

        self.clamp_selection(data.tournaments.len());
        let now = now_local();
        let theme_cfg = &data.config.theme;

        let items: Vec<ListItem> = data
            .tournaments
            .iter()
            .map(|t| {
                let status = classify(
                    non_empty(&t.start_date),
                    non_empty(&t.end_date),
                    None,
                    now,
                );
                let line = Line::from(vec![
                    Span::raw(format!("{:<28}", or_tba(&t.name))),
                    Span::styled(
                        format!("{:<12}", status.label().to_uppercase()),
                        theme::status_style(status, theme_cfg),
                    ),
                    Span::styled(
                        format!("{} - {}", or_tba(&t.start_date), or_tba(&t.end_date)),
                        theme::hint_style(),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .style(theme::list_normal_style())
            .highlight_style(theme::list_selected_style(theme_cfg))
            .highlight_symbol(theme::LIST_HIGHLIGHT_SYMBOL);

        let mut state = ListState::default();
        if focused {
            state.select(Some(self.selected_index));
        }

        f.render_stateful_widget(list, area, &mut state);
    }

    fn handle_key(&mut self, key: KeyEvent, data: &SharedData) -> KeyResult {
        match key.code {
            KeyCode::Up => {
                self.selected_index = self.selected_index.saturating_sub(1);
                KeyResult::Handled
            }
            KeyCode::Down => {
                let max = data.tournaments.len().saturating_sub(1);
                if self.selected_index < max {
                    self.selected_index += 1;
                }
                KeyResult::Handled
            }
            KeyCode::Enter => match data.tournaments.get(self.selected_index) {
                Some(t) => KeyResult::DrillDown(Box::new(TournamentDetailView::new(
                    t.tournament_id.clone(),
                    t.name.clone(),
                ))),
                None => KeyResult::Handled,
            },
            _ => KeyResult::NotHandled,
        }
    }

    fn breadcrumb_label(&self) -> String {
        "All".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use fragzone_api::Tournament;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn data_with(n: usize) -> SharedData {
        let tournaments = (0..n)
            .map(|i| Tournament {
                tournament_id: format!("t-{}", i),
                name: format!("Tournament {}", i),
                start_date: "2024-06-01".to_string(),
                end_date: "2024-06-03".to_string(),
                slots: Some(16),
            })
            .collect();
        SharedData {
            tournaments: Arc::new(tournaments),
            ..SharedData::default()
        }
    }

    #[test]
    fn selection_stays_within_bounds() {
        let data = data_with(2);
        let mut view = TournamentListView::new();

        view.handle_key(key(KeyCode::Down), &data);
        view.handle_key(key(KeyCode::Down), &data);
        view.handle_key(key(KeyCode::Down), &data);
        assert_eq!(view.selected_index, 1);

        view.handle_key(key(KeyCode::Up), &data);
        view.handle_key(key(KeyCode::Up), &data);
        assert_eq!(view.selected_index, 0);
    }

    #[test]
    fn enter_drills_into_selected_tournament() {
        let data = data_with(2);
        let mut view = TournamentListView::new();
        view.handle_key(key(KeyCode::Down), &data);

        match view.handle_key(key(KeyCode::Enter), &data) {
            KeyResult::DrillDown(child) => {
                assert_eq!(child.breadcrumb_label(), "Tournament 1");
            }
            _ => panic!("expected drill down"),
        }
    }

    #[test]
    fn enter_on_empty_list_is_a_noop() {
        let data = data_with(0);
        let mut view = TournamentListView::new();
        assert!(matches!(
            view.handle_key(key(KeyCode::Enter), &data),
            KeyResult::Handled
        ));
    }
}
