//! Centered welcome text with a soft halo.
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

/// Halo glyph drawn on both sides of the label
const GLOW: &str = "✧";

/// One line of bold text, centered in the area it is given
#[derive(Debug, Clone, Copy)]
pub struct WelcomeLabel<'a> {
    text: &'a str,
}

impl<'a> WelcomeLabel<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }
}

impl Widget for WelcomeLabel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let t = theme();
        let line = Line::from(vec![
            Span::styled(format!("{GLOW}  "), t.glow_style()),
            Span::styled(self.text, t.welcome_style()),
            Span::styled(format!("  {GLOW}"), t.glow_style()),
        ]);
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_centered() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buf = Buffer::empty(area);
        WelcomeLabel::new("hello").render(area, &mut buf);

        let cells: Vec<&str> = (0..area.width).map(|x| buf[(x, 0)].symbol()).collect();
        let first = cells.iter().position(|s| *s == GLOW).unwrap();
        let last = cells.iter().rposition(|s| *s == GLOW).unwrap();
        assert!(cells[..first].iter().all(|s| *s == " "));

        // Centering rounds, so the margins differ by at most one cell
        let left = first as i32;
        let right = i32::from(area.width) - 1 - last as i32;
        assert!((left - right).abs() <= 1, "left {} right {}", left, right);

        let start = cells.iter().position(|s| *s == "h").unwrap();
        let text: String = cells[start..start + 5].concat();
        assert_eq!(text, "hello");
        assert!(first < start);
    }
}
