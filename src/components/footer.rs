use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Common footer component
pub struct Footer;

impl Footer {
    /// Render a one-line footer of key hints.
    ///
    /// Hints are separated by " | " and written as "Label: keys".
    ///
    /// # Returns
    /// The height used
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<u16> {
        frame.render_widget(Paragraph::new(Self::line(text)).alignment(Alignment::Center), area);
        Ok(1)
    }

    /// Styled spans for a footer text
    pub fn line(text: &str) -> Line<'_> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }

            // Split on ": " to separate label from keys
            if let Some((label, keys)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", label), t.muted_style()));
                spans.push(Span::styled(keys, t.title_style()));
            } else {
                spans.push(Span::styled(part, t.text_style()));
            }
        }

        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_splits_hints() {
        let line = Footer::line("Back: Esc | Help: ?");
        let text: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, vec!["Back: ", "Esc", " | ", "Help: ", "?"]);
    }
}
