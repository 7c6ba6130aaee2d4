//! Placeholder screen for a destination reached from the home screen.

use crate::components::footer::Footer;
use crate::config::Config;
use crate::keymap::Action;
use crate::navigation::Route;
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::starfield::StarField;
use crate::styles::theme;
use crate::utils::center_popup;
use crate::widgets::StarFieldWidget;
use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEventKind};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

const BACK_LABEL: &str = "‹ Back";

pub struct DetailScreen {
    route: Route,
    stars: StarField,
    back_area: Option<Rect>,
}

impl DetailScreen {
    pub fn new(route: Route, config: &Config, columns: u16, rows: u16) -> Self {
        // Fewer stars than home so the text stays readable
        let stars = StarField::generate(
            config.star_count / 2,
            f64::from(columns) * config.cell_width_px,
            f64::from(rows) * config.cell_height_px,
            config.seed.map(|seed| seed.wrapping_add(route as u64 + 1)),
        );
        Self {
            route,
            stars,
            back_area: None,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }
}

impl Screen for DetailScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let t = theme();
        let mut stars = StarFieldWidget::new(&self.stars);
        if let Some(elapsed) = ctx.twinkle_time() {
            stars = stars.twinkle(elapsed);
        }
        frame.render_widget(stars, area);

        if area.height == 0 {
            self.back_area = None;
            return Ok(());
        }

        let back_area = Rect::new(area.x + 1, area.y, BACK_LABEL.chars().count() as u16, 1).intersection(area);
        frame.render_widget(Paragraph::new(BACK_LABEL).style(t.title_style()), back_area);
        self.back_area = Some(back_area);

        let content_area = center_popup(area, 80, 50, 60, 7);
        let lines = vec![
            Line::from(Span::styled(
                format!("{}  {}", self.route.emoji(), self.route.title()),
                t.welcome_style(),
            )),
            Line::from(""),
            Line::styled(
                format!("The {} screen is still under construction.", self.route.title()),
                t.text_style(),
            ),
            Line::styled("Come back after the next launch window.", t.muted_style()),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            content_area,
        );

        let keymap = &ctx.config.keymap;
        let hints = format!(
            "Back: {} | Help: {}",
            keymap.key_display_for_action(Action::Back),
            keymap.key_display_for_action(Action::Help)
        );
        let footer_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        Footer::render(frame, footer_area, &hints)?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Mouse(mouse) = event {
            if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                let pos = Position::new(mouse.column, mouse.row);
                if self.back_area.is_some_and(|area| area.contains(pos)) {
                    return Ok(ScreenAction::Back);
                }
            }
        }
        Ok(ScreenAction::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn test_back_button_pops() {
        let config = Config::default();
        let mut screen = DetailScreen::new(Route::Moon, &config, 60, 20);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(&config, 0.0);
                screen.render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();

        let ctx = ScreenContext::new(&config);
        let click = |column, row| {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })
        };
        assert_eq!(screen.handle_event(click(30, 10), &ctx).unwrap(), ScreenAction::None);
        assert_eq!(screen.handle_event(click(2, 0), &ctx).unwrap(), ScreenAction::Back);
    }

    #[test]
    fn test_renders_title() {
        let config = Config::default();
        let mut screen = DetailScreen::new(Route::Galaxy, &config, 60, 20);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(&config, 0.0);
                screen.render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("under construction"));
        assert_eq!(screen.route(), Route::Galaxy);
    }
}
