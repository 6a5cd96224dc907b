use crate::config::ThemeConfig;
use crate::status::Status;
use ratatui::style::{Color, Modifier, Style};

pub const MUTED_COLOR: Color = Color::DarkGray;

// Tab navigation
pub fn tab_active_style(theme: &ThemeConfig) -> Style {
    Style::new()
        .fg(theme.selection_fg)
        .add_modifier(Modifier::BOLD)
}

pub fn tab_inactive_style() -> Style {
    Style::new().fg(Color::White)
}

// Lists
pub fn list_selected_style(theme: &ThemeConfig) -> Style {
    Style::new()
        .fg(theme.selection_fg)
        .add_modifier(Modifier::BOLD)
}

pub fn list_normal_style() -> Style {
    Style::new().fg(Color::White)
}

pub const LIST_HIGHLIGHT_SYMBOL: &str = "> ";

// Status badges
pub fn status_style(status: Status, theme: &ThemeConfig) -> Style {
    match status {
        Status::Upcoming => Style::new().fg(theme.upcoming_fg),
        Status::Live => Style::new().fg(theme.live_fg).add_modifier(Modifier::BOLD),
        Status::Passed => Style::new().fg(theme.passed_fg),
    }
}

// Cards and hints
pub fn card_border_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}

pub fn hint_style() -> Style {
    Style::new().fg(MUTED_COLOR)
}

pub fn error_style() -> Style {
    Style::new().fg(Color::Red)
}
