//! Help Overlay Component
//!
//! Displays current keybindings and how to use the draggable icons.

use crate::keymap::Keymap;
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use indoc::indoc;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const HOW_TO: &str = indoc! {"
    Grab a planet with the mouse and fling it.
    Let go more than a short hop away to travel there;
    a gentle nudge just springs it back home.
"};

/// Renders the help overlay showing current keybindings
pub struct HelpOverlay;

impl HelpOverlay {
    /// Render the help overlay in the center of the screen
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let theme = theme();
        let popup_area = center_popup(area, 90, 80, 64, 20);

        // Clear the area behind the popup
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .border_style(theme.border_focused_style())
            .style(theme.background_style());

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // How to
                Constraint::Min(3),    // Bindings
                Constraint::Length(2), // Footer
            ])
            .split(inner_area);

        let how_to = Paragraph::new(HOW_TO)
            .style(theme.text_style())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(how_to, chunks[0]);

        let mut lines: Vec<Line> = Vec::new();
        for binding in keymap.all_bindings() {
            // Format: "    key      description"
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {:12}", binding.display()),
                    theme.title_style().remove_modifier(Modifier::BOLD),
                ),
                Span::styled(binding.action.description(), theme.text_style()),
            ]));
        }
        let bindings_paragraph = Paragraph::new(lines).alignment(Alignment::Left);
        frame.render_widget(bindings_paragraph, chunks[1]);

        // Footer with config location
        let footer_text = format!(
            "Edit keybindings in: {}\nPress any key to close",
            config_path
        );
        let footer = Paragraph::new(footer_text)
            .style(theme.muted_style())
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);

        Ok(())
    }
}
