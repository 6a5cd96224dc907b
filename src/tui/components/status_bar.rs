use crate::tui::theme;
use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::SystemTime;
use unicode_width::UnicodeWidthStr;

/// Render the bottom status bar: contextual key help on the left (or the
/// current fetch error), last refresh time on the right.
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    at_root: bool,
    error: Option<&str>,
    last_refresh: Option<SystemTime>,
    time_format: &str,
) {
    let mut spans = Vec::new();

    if let Some(err) = error {
        spans.push(Span::styled(format!("ERROR: {}", err), theme::error_style()));
    } else {
        let help_style = theme::hint_style();
        let keys: &[&str] = if at_root {
            &[
                "Up/Down Navigate",
                "Enter Open",
                "Left/Right Tabs",
                "1-4 Jump",
                "r Refresh",
                "q Quit",
            ]
        } else {
            &[
                "Up/Down Scroll",
                "Esc Back",
                "r Refresh",
                "q Quit",
            ]
        };

        for (i, key) in keys.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", help_style));
            }
            spans.push(Span::styled(*key, help_style));
        }
    }

    // Right-align the refresh time, padding by display width
    if let Some(refresh_time) = last_refresh {
        let refresh_text = format!("Last refresh: {}", format_refresh_time(refresh_time, time_format));

        let left_width: usize = spans.iter().map(|s| s.content.width()).sum();
        let padding = (area.width as usize)
            .saturating_sub(left_width)
            .saturating_sub(refresh_text.width());

        if padding > 0 {
            spans.push(Span::raw(" ".repeat(padding)));
            spans.push(Span::styled(refresh_text, theme::hint_style()));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn format_refresh_time(time: SystemTime, time_format: &str) -> String {
    let datetime: DateTime<Local> = time.into();
    datetime.format(time_format).to_string()
}
