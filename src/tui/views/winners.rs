use crate::commands::or_tba;
use crate::tui::components::Scrollable;
use crate::tui::theme;
use crate::tui::traits::{KeyResult, View};
use crate::SharedData;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Past winners, newest first as the backend returns them
pub struct WinnerListView {
    scrollable: Scrollable,
}

impl WinnerListView {
    pub fn new() -> Self {
        WinnerListView {
            scrollable: Scrollable::new(),
        }
    }
}

impl Default for WinnerListView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for WinnerListView {
    fn render(&mut self, f: &mut Frame, area: Rect, data: &SharedData, _focused: bool) {
        let block = Block::default().borders(Borders::ALL).title(" Winners ");

        if data.winners.is_empty() {
            let list = List::new(vec![ListItem::new(Span::styled(
                "No winners recorded yet",
                theme::hint_style(),
            ))])
            .block(block);
            f.render_widget(list, area);
            return;
        }

        let mut content = String::new();
        for (i, w) in data.winners.iter().enumerate() {
            let kills = match w.kill {
                Some(n) => n.to_string(),
                None => "-".to_string(),
            };
            content.push_str(&format!(
                "#{:<3} {:<24} Team: {:<16} Kills: {}\n",
                i + 1,
                or_tba(&w.name),
                or_tba(&w.team_name),
                kills
            ));
        }

        self.scrollable.render_paragraph(f, area, content, Some(block));
    }

    fn handle_key(&mut self, key: KeyEvent, _data: &SharedData) -> KeyResult {
        if self.scrollable.handle_key(key) {
            KeyResult::Handled
        } else {
            KeyResult::NotHandled
        }
    }

    fn breadcrumb_label(&self) -> String {
        "Hall of Fame".to_string()
    }
}
