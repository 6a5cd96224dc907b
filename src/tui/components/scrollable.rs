use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Paragraph, Wrap},
    Frame,
};

/// Scroll state for long text content rendered through a Paragraph
pub struct Scrollable {
    pub scroll_offset: u16,
    pub content_height: usize,
    pub viewport_height: u16,
}

impl Scrollable {
    pub fn new() -> Self {
        Scrollable {
            scroll_offset: 0,
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Handle scroll keys (Up, Down, PageUp, PageDown, Home, End)
    /// Returns true if the key was handled
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                self.scroll_down(1);
                true
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                true
            }
            KeyCode::PageDown => {
                self.scroll_down(10);
                true
            }
            KeyCode::Home => {
                self.scroll_offset = 0;
                true
            }
            KeyCode::End => {
                self.scroll_offset = self.max_scroll();
                true
            }
            _ => false,
        }
    }

    fn scroll_down(&mut self, n: u16) {
        self.scroll_offset = (self.scroll_offset + n).min(self.max_scroll());
    }

    fn max_scroll(&self) -> u16 {
        (self.content_height as u16).saturating_sub(self.viewport_height)
    }

    fn clamp_offset(&mut self) {
        let max = self.max_scroll();
        if self.scroll_offset > max {
            self.scroll_offset = max;
        }
    }

    /// Render scrollable content using a Paragraph widget
    pub fn render_paragraph(
        &mut self,
        f: &mut Frame,
        area: Rect,
        content: String,
        block: Option<Block>,
    ) {
        // Borders eat two rows of the viewport
        self.viewport_height = if block.is_some() {
            area.height.saturating_sub(2)
        } else {
            area.height
        };
        self.content_height = content.lines().count();
        self.clamp_offset();

        let mut paragraph = Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        if let Some(b) = block {
            paragraph = paragraph.block(b);
        }

        f.render_widget(paragraph, area);
    }
}

impl Default for Scrollable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn scrolling_stops_at_bottom() {
        let mut s = Scrollable::new();
        s.content_height = 30;
        s.viewport_height = 10;

        assert!(s.handle_key(key(KeyCode::End)));
        assert_eq!(s.scroll_offset, 20);

        assert!(s.handle_key(key(KeyCode::Down)));
        assert_eq!(s.scroll_offset, 20);
    }

    #[test]
    fn short_content_never_scrolls() {
        let mut s = Scrollable::new();
        s.content_height = 5;
        s.viewport_height = 10;

        s.handle_key(key(KeyCode::PageDown));
        assert_eq!(s.scroll_offset, 0);
    }
}
