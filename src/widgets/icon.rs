//! Emoji tile for a draggable destination.
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph, Widget};

/// Width of an icon tile in cells
pub const ICON_WIDTH: u16 = 10;
/// Height of an icon tile in cells
pub const ICON_HEIGHT: u16 = 4;

/// A bordered tile with an emoji over its label
#[derive(Debug, Clone, Copy)]
pub struct IconWidget<'a> {
    emoji: &'a str,
    label: &'a str,
    dragging: bool,
}

impl<'a> IconWidget<'a> {
    pub fn new(emoji: &'a str, label: &'a str) -> Self {
        Self {
            emoji,
            label,
            dragging: false,
        }
    }

    /// Highlight the tile while it is held
    pub fn dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }
}

impl Widget for IconWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let border_style = if self.dragging {
            t.border_focused_style()
        } else {
            t.border_style()
        };

        Clear.render(area, buf);
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(t.background_style());

        Paragraph::new(vec![
            Line::from(self.emoji),
            Line::styled(self.label, t.text_style()),
        ])
        .alignment(Alignment::Center)
        .block(block)
        .render(area, buf);
    }
}
