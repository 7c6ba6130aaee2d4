//! Shared test utilities for workflow integration tests.
//!
//! Provides `TestApp` - the full application state driven through a
//! `TestBackend` terminal, so tests can click and drag the way a user would.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::path::PathBuf;

use starfield::{AppState, Config, Route};

pub const COLUMNS: u16 = 80;
pub const ROWS: u16 = 30;

pub struct TestApp {
    pub state: AppState,
    terminal: Terminal<TestBackend>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(Config {
            seed: Some(42),
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let state = AppState::new(config, PathBuf::from("/tmp/starfield/config.toml"), COLUMNS, ROWS);
        let terminal = Terminal::new(TestBackend::new(COLUMNS, ROWS)).unwrap();
        let mut app = Self { state, terminal };
        app.draw();
        app
    }

    pub fn draw(&mut self) {
        let state = &mut self.state;
        self.terminal
            .draw(|frame| state.render(frame, 0.0).unwrap())
            .unwrap();
    }

    /// Feed one event, then let queued navigation through and redraw
    pub fn send(&mut self, event: Event) {
        self.state.handle_event(event).unwrap();
        self.state.apply_navigation().unwrap();
        self.draw();
    }

    pub fn press(&mut self, code: KeyCode) {
        self.send(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    pub fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        self.send(Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }));
    }

    /// Press on the icon for `route`, move by whole cells, and release there
    pub fn drag_icon(&mut self, route: Route, columns: i32, rows: i32) {
        let area = self.icon_area(route);
        let (x, y) = (area.x + 2, area.y + 1);
        let to_x = (i32::from(x) + columns) as u16;
        let to_y = (i32::from(y) + rows) as u16;
        self.mouse(MouseEventKind::Down(MouseButton::Left), x, y);
        self.mouse(MouseEventKind::Drag(MouseButton::Left), to_x, to_y);
        self.mouse(MouseEventKind::Up(MouseButton::Left), to_x, to_y);
    }

    pub fn icon_area(&self, route: Route) -> Rect {
        self.state
            .home()
            .icon_area(route)
            .unwrap_or_else(|| panic!("{} icon was not drawn", route))
    }

    /// Run animations until they settle, one 60 fps frame at a time
    pub fn settle(&mut self) {
        for _ in 0..600 {
            self.state.tick(1.0 / 60.0);
        }
        self.draw();
    }

    pub fn screen_text(&self) -> String {
        let buffer = self.terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }
}
