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

/// Overall leaderboard, one row per player
pub struct LeaderboardView {
    scrollable: Scrollable,
}

impl LeaderboardView {
    pub fn new() -> Self {
        LeaderboardView {
            scrollable: Scrollable::new(),
        }
    }
}

impl Default for LeaderboardView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for LeaderboardView {
    fn render(&mut self, f: &mut Frame, area: Rect, data: &SharedData, _focused: bool) {
        let block = Block::default().borders(Borders::ALL).title(" Leaderboard ");

        if data.leaderboard.is_empty() {
            let list = List::new(vec![ListItem::new(Span::styled(
                "No leaderboard data yet",
                theme::hint_style(),
            ))])
            .block(block);
            f.render_widget(list, area);
            return;
        }

        let mut content = String::new();
        content.push_str(&format!(
            "{:<6}{:<24}{:<20}{:<8}{:<8}\n",
            "Rank", "Player", "Team", "Kills", "Points"
        ));
        for (i, row) in data.leaderboard.iter().enumerate() {
            // Backend rank wins; fall back to list position
            let rank = row.rank.unwrap_or((i + 1) as i64);
            content.push_str(&format!(
                "{:<6}{:<24}{:<20}{:<8}{:<8}\n",
                rank,
                or_tba(&row.player_name),
                or_tba(&row.team_name),
                row.kill.unwrap_or(0),
                row.point.unwrap_or(0)
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
        "Season".to_string()
    }
}
