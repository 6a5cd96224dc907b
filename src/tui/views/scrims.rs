use crate::commands::{now_local, or_tba};
use crate::status::{classify, non_empty};
use crate::tui::theme;
use crate::tui::traits::{KeyResult, View};
use crate::SharedData;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Scrim listing. Scrims are single-day with a start time, so the
/// classifier gets the time but no end date.
pub struct ScrimListView {
    selected_index: usize,
}

impl ScrimListView {
    pub fn new() -> Self {
        ScrimListView { selected_index: 0 }
    }
}

impl Default for ScrimListView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ScrimListView {
    fn render(&mut self, f: &mut Frame, area: Rect, data: &SharedData, focused: bool) {
        let block = Block::default().borders(Borders::ALL).title(" Scrims ");

        if data.scrims.is_empty() {
            let list = List::new(vec![ListItem::new(Span::styled(
                "No scrims available",
                theme::hint_style(),
            ))])
            .block(block);
            f.render_widget(list, area);
            return;
        }

        if self.selected_index >= data.scrims.len() {
            self.selected_index = data.scrims.len() - 1;
        }
        let now = now_local();
        let theme_cfg = &data.config.theme;

        let items: Vec<ListItem> = data
            .scrims
            .iter()
            .map(|s| {
                let status = classify(non_empty(&s.start_date), None, non_empty(&s.time), now);
                let line = Line::from(vec![
                    Span::raw(format!("{:<28}", or_tba(&s.name))),
                    Span::styled(
                        format!("{:<12}", status.label().to_uppercase()),
                        theme::status_style(status, theme_cfg),
                    ),
                    Span::styled(
                        format!("{} {}", or_tba(&s.start_date), or_tba(&s.time)),
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
                let max = data.scrims.len().saturating_sub(1);
                if self.selected_index < max {
                    self.selected_index += 1;
                }
                KeyResult::Handled
            }
            _ => KeyResult::NotHandled,
        }
    }

    fn breadcrumb_label(&self) -> String {
        "Daily".to_string()
    }
}
