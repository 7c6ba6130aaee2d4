//! Home screen: starfield, welcome label and three draggable destinations.
//!
//! Mouse events on an icon are turned into gesture samples for that icon's
//! [`DraggableIcon`]. Terminal cells are converted to gesture pixels with the
//! configured cell size, so the drag threshold means the same distance on
//! every terminal.

use crate::components::footer::Footer;
use crate::config::Config;
use crate::gesture::{DragState, DraggableIcon, GestureSample};
use crate::keymap::Action;
use crate::navigation::{NavigationSender, Route};
use crate::screens::screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
use crate::starfield::StarField;
use crate::utils::offset_rect;
use crate::widgets::icon::{ICON_HEIGHT, ICON_WIDTH};
use crate::widgets::{IconWidget, StarFieldWidget, WelcomeLabel};
use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::Frame;
use tracing::{debug, warn};

/// Horizontal space between icon tiles, in cells
const ICON_GAP: u16 = 4;
/// The label sits this far above the vertical center, in pixels
const LABEL_LIFT_PX: f64 = 30.0;

struct HomeIcon {
    route: Route,
    controller: DraggableIcon,
    /// Where the icon was last drawn, for hit testing
    area: Option<Rect>,
}

/// Pointer currently holding an icon
#[derive(Debug, Clone, Copy)]
struct PointerGrab {
    index: usize,
    column: u16,
    row: u16,
    /// Last cell the pointer was seen at
    last: (u16, u16),
}

pub struct HomeScreen {
    stars: StarField,
    welcome_message: String,
    icons: Vec<HomeIcon>,
    grab: Option<PointerGrab>,
    cell_width_px: f64,
    cell_height_px: f64,
}

impl HomeScreen {
    /// Set up the screen for a terminal of `columns` x `rows` cells.
    ///
    /// Generates the star field and binds one icon per destination to
    /// `navigator`.
    pub fn new(config: &Config, navigator: &NavigationSender, columns: u16, rows: u16) -> Self {
        let stars = StarField::generate(
            config.star_count,
            f64::from(columns) * config.cell_width_px,
            f64::from(rows) * config.cell_height_px,
            config.seed,
        );

        let icons = Route::DESTINATIONS
            .iter()
            .map(|&route| {
                let tx = navigator.clone();
                let controller = DraggableIcon::new(move || {
                    if tx.send(route).is_err() {
                        warn!("Navigation channel closed, dropping request for {}", route);
                    }
                });
                HomeIcon {
                    route,
                    controller,
                    area: None,
                }
            })
            .collect();

        Self {
            stars,
            welcome_message: config.welcome_message.clone(),
            icons,
            grab: None,
            cell_width_px: config.cell_width_px,
            cell_height_px: config.cell_height_px,
        }
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    /// Where the icon for `route` was last drawn
    pub fn icon_area(&self, route: Route) -> Option<Rect> {
        self.icon(route).and_then(|icon| icon.area)
    }

    pub fn icon_state(&self, route: Route) -> Option<DragState> {
        self.icon(route).map(|icon| icon.controller.state())
    }

    /// Offset of the icon for `route` in gesture pixels
    pub fn icon_offset(&self, route: Route) -> Option<(f64, f64)> {
        self.icon(route).map(|icon| {
            let offset = icon.controller.offset();
            (offset.dx, offset.dy)
        })
    }

    fn icon(&self, route: Route) -> Option<&HomeIcon> {
        self.icons.iter().find(|icon| icon.route == route)
    }

    /// Row of the welcome label inside `area`
    fn label_row(&self, area: Rect) -> u16 {
        let lift = (LABEL_LIFT_PX / self.cell_height_px).round() as u16;
        area.y + (area.height / 2).saturating_sub(lift)
    }

    /// Resting slots of the icons, side by side under the label
    fn icon_slots(&self, area: Rect) -> Vec<Rect> {
        let count = self.icons.len() as u16;
        let total_width = count * ICON_WIDTH + count.saturating_sub(1) * ICON_GAP;
        let left = area.x + area.width.saturating_sub(total_width) / 2;
        let top = self.label_row(area) + 2;
        (0..count)
            .map(|i| Rect::new(left + i * (ICON_WIDTH + ICON_GAP), top, ICON_WIDTH, ICON_HEIGHT))
            .collect()
    }

    /// Icon indices in paint order: resting icons first, moving ones on top
    fn draw_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.icons.len()).collect();
        order.sort_by_key(|&i| !self.icons[i].controller.is_idle());
        order
    }

    /// Topmost drawn icon under `pos`
    fn icon_at(&self, pos: Position) -> Option<usize> {
        self.draw_order()
            .into_iter()
            .rev()
            .find(|&i| self.icons[i].area.is_some_and(|area| area.contains(pos)))
    }

    fn release(&mut self, grab: PointerGrab, column: u16, row: u16) {
        let (tx, ty) = self.translation(grab, column, row);
        let icon = &mut self.icons[grab.index];
        let navigated = icon.controller.handle_sample(GestureSample::end(tx, ty));
        debug!("Released {} (navigated: {})", icon.route, navigated);
    }

    fn translation(&self, grab: PointerGrab, column: u16, row: u16) -> (f64, f64) {
        (
            (f64::from(column) - f64::from(grab.column)) * self.cell_width_px,
            (f64::from(row) - f64::from(grab.row)) * self.cell_height_px,
        )
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                // The Up for an earlier press never arrived; release where last seen
                if let Some(grab) = self.grab.take() {
                    let (column, row) = grab.last;
                    self.release(grab, column, row);
                }
                if let Some(index) = self.icon_at(Position::new(mouse.column, mouse.row)) {
                    debug!("Grabbed {}", self.icons[index].route);
                    self.grab = Some(PointerGrab {
                        index,
                        column: mouse.column,
                        row: mouse.row,
                        last: (mouse.column, mouse.row),
                    });
                    self.icons[index]
                        .controller
                        .handle_sample(GestureSample::active(0.0, 0.0));
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(grab) = self.grab.as_mut() {
                    grab.last = (mouse.column, mouse.row);
                    let grab = *grab;
                    let (tx, ty) = self.translation(grab, mouse.column, mouse.row);
                    self.icons[grab.index]
                        .controller
                        .handle_sample(GestureSample::active(tx, ty));
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(grab) = self.grab.take() {
                    self.release(grab, mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }
}

impl Screen for HomeScreen {
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        let mut stars = StarFieldWidget::new(&self.stars);
        if let Some(t) = ctx.twinkle_time() {
            stars = stars.twinkle(t);
        }
        frame.render_widget(stars, area);

        if area.height == 0 {
            return Ok(());
        }

        let label_area = Rect::new(area.x, self.label_row(area), area.width, 1).intersection(area);
        frame.render_widget(WelcomeLabel::new(&self.welcome_message), label_area);

        // Moving icons are drawn last so they pass over resting ones
        let slots = self.icon_slots(area);
        let order = self.draw_order();

        let (cell_w, cell_h) = (self.cell_width_px, self.cell_height_px);
        for i in order {
            let icon = &mut self.icons[i];
            let offset = icon.controller.offset();
            let dx = (offset.dx / cell_w).round() as i32;
            let dy = (offset.dy / cell_h).round() as i32;
            icon.area = offset_rect(slots[i], dx, dy, area);
            if let Some(icon_area) = icon.area {
                let dragging = icon.controller.state() == DragState::Dragging;
                frame.render_widget(
                    IconWidget::new(icon.route.emoji(), icon.route.title()).dragging(dragging),
                    icon_area,
                );
            }
        }

        let keymap = &ctx.config.keymap;
        let hints = format!(
            "Travel: drag a planet | Help: {} | Quit: {}",
            keymap.key_display_for_action(Action::Help),
            keymap.key_display_for_action(Action::Quit)
        );
        let footer_area = Rect::new(area.x, area.bottom() - 1, area.width, 1);
        Footer::render(frame, footer_area, &hints)?;

        Ok(())
    }

    fn handle_event(&mut self, event: Event, _ctx: &ScreenContext) -> Result<ScreenAction> {
        if let Event::Mouse(mouse) = event {
            self.handle_mouse(mouse);
        }
        Ok(ScreenAction::None)
    }

    fn tick(&mut self, dt: f64) {
        for icon in &mut self.icons {
            icon.controller.tick(dt);
        }
    }

    fn is_animating(&self) -> bool {
        self.grab.is_some() || self.icons.iter().any(|icon| !icon.controller.is_idle())
    }

    fn on_exit(&mut self, _ctx: &ScreenContext) -> Result<()> {
        // A pointer still held when the screen is covered never gets its Up
        if let Some(grab) = self.grab.take() {
            self.icons[grab.index].controller.reset();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::navigation_channel;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn draw(terminal: &mut Terminal<TestBackend>, screen: &mut HomeScreen, config: &Config) {
        terminal
            .draw(|frame| {
                let ctx = RenderContext::new(config, 0.0);
                screen.render(frame, frame.area(), &ctx).unwrap();
            })
            .unwrap();
    }

    #[test]
    fn test_stars_generated_in_pixel_space() {
        let config = Config::default();
        let (tx, _rx) = navigation_channel();
        let screen = HomeScreen::new(&config, &tx, 80, 30);
        assert_eq!(screen.stars().len(), 150);
        assert_eq!(screen.stars().width(), 640.0);
        assert_eq!(screen.stars().height(), 480.0);
    }

    #[test]
    fn test_icons_laid_out_without_overlap() {
        let config = Config::default();
        let (tx, _rx) = navigation_channel();
        let mut screen = HomeScreen::new(&config, &tx, 80, 30);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        draw(&mut terminal, &mut screen, &config);

        let areas: Vec<Rect> = Route::DESTINATIONS
            .iter()
            .map(|r| screen.icon_area(*r).unwrap())
            .collect();
        assert!(!areas[0].intersects(areas[1]));
        assert!(!areas[1].intersects(areas[2]));
        assert!(areas[0].x < areas[1].x && areas[1].x < areas[2].x);
    }

    #[test]
    fn test_short_drag_springs_back_without_navigation() {
        let config = Config::default();
        let (tx, rx) = navigation_channel();
        let mut screen = HomeScreen::new(&config, &tx, 80, 30);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        draw(&mut terminal, &mut screen, &config);

        let ctx = ScreenContext::new(&config);
        let earth = screen.icon_area(Route::Earth).unwrap();
        let (x, y) = (earth.x + 2, earth.y + 1);
        screen.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y), &ctx).unwrap();
        screen.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), x + 2, y + 1), &ctx).unwrap();
        assert_eq!(screen.icon_state(Route::Earth), Some(DragState::Dragging));
        assert_eq!(screen.icon_offset(Route::Earth), Some((16.0, 16.0)));

        screen.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), x + 2, y + 1), &ctx).unwrap();
        assert!(rx.try_recv().is_err());
        assert!(screen.is_animating());

        for _ in 0..600 {
            screen.tick(1.0 / 60.0);
        }
        assert!(!screen.is_animating());
        assert_eq!(screen.icon_offset(Route::Earth), Some((0.0, 0.0)));
    }

    #[test]
    fn test_click_outside_icons_is_ignored() {
        let config = Config::default();
        let (tx, rx) = navigation_channel();
        let mut screen = HomeScreen::new(&config, &tx, 80, 30);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        draw(&mut terminal, &mut screen, &config);

        let ctx = ScreenContext::new(&config);
        screen.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), 0, 0), &ctx).unwrap();
        screen.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), 0, 20), &ctx).unwrap();
        assert!(!screen.is_animating());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_press_hits_icon_drawn_on_top() {
        let config = Config::default();
        let (tx, _rx) = navigation_channel();
        let mut screen = HomeScreen::new(&config, &tx, 80, 30);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        draw(&mut terminal, &mut screen, &config);

        // Fling Earth right until it sits exactly over Moon
        let ctx = ScreenContext::new(&config);
        let earth = screen.icon_area(Route::Earth).unwrap();
        let moon = screen.icon_area(Route::Moon).unwrap();
        let (x, y) = (earth.x + 2, earth.y + 1);
        let shift = moon.x - earth.x;
        screen.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y), &ctx).unwrap();
        screen.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), x + shift, y), &ctx).unwrap();
        screen.handle_event(mouse(MouseEventKind::Up(MouseButton::Left), x + shift, y), &ctx).unwrap();
        draw(&mut terminal, &mut screen, &config);
        assert_eq!(screen.icon_area(Route::Earth), Some(moon));

        // The springing Earth is painted over the resting Moon, so it is what gets grabbed
        screen.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), moon.x + 2, moon.y + 1), &ctx).unwrap();
        assert_eq!(screen.icon_state(Route::Earth), Some(DragState::Dragging));
        assert_eq!(screen.icon_state(Route::Moon), Some(DragState::Idle));
    }

    #[test]
    fn test_press_without_release_ends_previous_gesture() {
        let config = Config::default();
        let (tx, rx) = navigation_channel();
        let mut screen = HomeScreen::new(&config, &tx, 80, 30);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        draw(&mut terminal, &mut screen, &config);

        let ctx = ScreenContext::new(&config);
        let earth = screen.icon_area(Route::Earth).unwrap();
        let moon = screen.icon_area(Route::Moon).unwrap();
        let (x, y) = (earth.x + 2, earth.y + 1);
        screen.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), x, y), &ctx).unwrap();
        screen.handle_event(mouse(MouseEventKind::Drag(MouseButton::Left), x + 1, y), &ctx).unwrap();

        // Up was lost; the next press still grabs
        screen.handle_event(mouse(MouseEventKind::Down(MouseButton::Left), moon.x + 2, moon.y + 1), &ctx).unwrap();
        assert_eq!(screen.icon_state(Route::Earth), Some(DragState::Releasing));
        assert_eq!(screen.icon_offset(Route::Earth), Some((8.0, 0.0)));
        assert_eq!(screen.icon_state(Route::Moon), Some(DragState::Dragging));
        assert!(rx.try_recv().is_err());
    }
}
