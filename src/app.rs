use crate::components::help_overlay::HelpOverlay;
use crate::config::Config;
use crate::keymap::Action;
use crate::navigation::{navigation_channel, NavigationReceiver, Route, Router};
use crate::screens::{DetailScreen, HomeScreen, RenderContext, Screen, ScreenAction, ScreenContext};
use crate::tui::Tui;
use crate::utils::format_path_for_display;
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Poll timeout when nothing moves
const IDLE_POLL: Duration = Duration::from_millis(250);
/// Redraw interval when only the stars twinkle
const TWINKLE_POLL: Duration = Duration::from_millis(100);
/// Longest step fed to the animations, so a stall never makes them jump
const MAX_TICK: f64 = 0.1;

/// Everything the app shows and reacts to, independent of the terminal.
///
/// The home screen stays mounted at the bottom of the stack; a detail screen
/// is mounted for every route pushed on top of it and dropped when popped.
pub struct AppState {
    config: Config,
    config_path: PathBuf,
    router: Router,
    navigation_rx: NavigationReceiver,
    home: HomeScreen,
    details: Vec<DetailScreen>,
    show_help: bool,
    should_quit: bool,
    size: (u16, u16),
}

impl AppState {
    pub fn new(config: Config, config_path: PathBuf, columns: u16, rows: u16) -> Self {
        let (navigator, navigation_rx) = navigation_channel();
        let home = HomeScreen::new(&config, &navigator, columns, rows);
        Self {
            config,
            config_path,
            router: Router::new(),
            navigation_rx,
            home,
            details: Vec::new(),
            show_help: false,
            should_quit: false,
            size: (columns, rows),
        }
    }

    pub fn current_route(&self) -> Route {
        self.router.current()
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn home(&self) -> &HomeScreen {
        &self.home
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn is_help_shown(&self) -> bool {
        self.show_help
    }

    /// How long the event loop may wait for input before redrawing
    pub fn poll_timeout(&self) -> Duration {
        if self.home.is_animating() {
            self.config.frame_duration()
        } else if self.config.twinkle {
            TWINKLE_POLL
        } else {
            IDLE_POLL
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Resize(columns, rows) => {
                debug!("Resized to {}x{}", columns, rows);
                self.size = (columns, rows);
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if self.show_help {
                    // Any key closes help
                    self.show_help = false;
                    return Ok(());
                }
                match self.config.keymap.get_action(key.code, key.modifiers) {
                    Some(Action::Quit) => self.should_quit = true,
                    Some(Action::Back) => self.go_back()?,
                    Some(Action::Help) => self.show_help = true,
                    None => {}
                }
            }
            Event::Mouse(_) if !self.show_help => {
                let ctx = ScreenContext::new(&self.config);
                let action = match self.details.last_mut() {
                    Some(detail) => detail.handle_event(event, &ctx)?,
                    None => self.home.handle_event(event, &ctx)?,
                };
                self.apply_action(action)?;
            }
            _ => {}
        }
        Ok(())
    }

    /// Advance animations by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        let dt = dt.clamp(0.0, MAX_TICK);
        self.home.tick(dt);
        for detail in &mut self.details {
            detail.tick(dt);
        }
    }

    /// Push a detail screen for every route the icons asked for
    pub fn apply_navigation(&mut self) -> Result<()> {
        while let Ok(route) = self.navigation_rx.try_recv() {
            if route == Route::Home || route == self.router.current() {
                continue;
            }
            self.exit_current()?;
            self.router.navigate(route);
            self.details
                .push(DetailScreen::new(route, &self.config, self.size.0, self.size.1));
            self.enter_current()?;
        }
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame, elapsed: f64) -> Result<()> {
        let area = frame.area();
        let ctx = RenderContext::new(&self.config, elapsed);
        match self.details.last_mut() {
            Some(detail) => detail.render(frame, area, &ctx)?,
            None => self.home.render(frame, area, &ctx)?,
        }

        if self.show_help {
            HelpOverlay::render(
                frame,
                area,
                &self.config.keymap,
                &format_path_for_display(&self.config_path),
            )?;
        }
        Ok(())
    }

    fn apply_action(&mut self, action: ScreenAction) -> Result<()> {
        match action {
            ScreenAction::None => {}
            ScreenAction::Back => self.go_back()?,
            ScreenAction::Quit => self.should_quit = true,
            ScreenAction::ShowHelp => self.show_help = true,
        }
        Ok(())
    }

    fn go_back(&mut self) -> Result<()> {
        if !self.router.go_back() {
            return Ok(());
        }
        if let Some(mut detail) = self.details.pop() {
            detail.on_exit(&ScreenContext::new(&self.config))?;
        }
        self.enter_current()
    }

    fn enter_current(&mut self) -> Result<()> {
        let ctx = ScreenContext::new(&self.config);
        match self.details.last_mut() {
            Some(detail) => detail.on_enter(&ctx),
            None => self.home.on_enter(&ctx),
        }
    }

    fn exit_current(&mut self) -> Result<()> {
        let ctx = ScreenContext::new(&self.config);
        match self.details.last_mut() {
            Some(detail) => detail.on_exit(&ctx),
            None => self.home.on_exit(&ctx),
        }
    }
}

/// Main application: terminal plus state
pub struct App {
    tui: Tui,
    state: AppState,
    started: Instant,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Result<Self> {
        let tui = Tui::new()?;
        let size = tui.size()?;
        let state = AppState::new(config, config_path, size.width, size.height);
        Ok(Self {
            tui,
            state,
            started: Instant::now(),
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("Starfield started");

        let mut last_frame = Instant::now();
        loop {
            let now = Instant::now();
            self.state.tick(now.duration_since(last_frame).as_secs_f64());
            last_frame = now;

            self.draw()?;

            if self.state.should_quit() {
                break;
            }

            if let Some(event) = self.tui.poll_event(self.state.poll_timeout())? {
                self.state.handle_event(event)?;
            }
            self.state.apply_navigation()?;
        }

        info!("Starfield exiting");
        self.tui.exit()?;
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let elapsed = self.started.elapsed().as_secs_f64();
        let state = &mut self.state;
        let mut result = Ok(());
        self.tui.terminal_mut().draw(|frame| {
            result = state.render(frame, elapsed);
        })?;
        result
    }
}
