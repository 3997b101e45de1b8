use crossterm::event::KeyCode;
use ratatui::widgets::ScrollbarState;

const PAGE_SIZE: usize = 10;

/// Scroll position of a dialog body plus the scrollbar mirroring it
#[derive(Debug, Default)]
pub struct DialogScroll {
    pub offset: usize,
    pub state: ScrollbarState,
}

impl DialogScroll {
    pub fn reset(&mut self) {
        self.offset = 0;
        self.state = ScrollbarState::new(0);
    }

    /// Apply a scrolling key; returns `false` if the key does not scroll
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        self.offset = match code {
            KeyCode::Up | KeyCode::Char('k') => self.offset.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => self.offset.saturating_add(1),
            KeyCode::PageUp => self.offset.saturating_sub(PAGE_SIZE),
            KeyCode::PageDown => self.offset.saturating_add(PAGE_SIZE),
            KeyCode::Home => 0,
            // Clamped to the content length at render time
            KeyCode::End => usize::MAX,
            _ => return false,
        };
        self.state = self.state.position(self.offset);
        true
    }

    /// Clamp the offset to the content and return the visible window of `lines`
    pub fn window<'a>(&mut self, lines: &[&'a str], visible_height: usize) -> Vec<&'a str> {
        let max_scroll = lines.len().saturating_sub(visible_height);
        self.offset = self.offset.min(max_scroll);
        self.state = self
            .state
            .content_length(lines.len())
            .viewport_content_length(visible_height)
            .position(self.offset);

        lines.iter().skip(self.offset).take(visible_height).copied().collect()
    }
}
