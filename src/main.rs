use anyhow::{Context, Result};
use clap::Parser;
use starfield::cli::Cli;
use starfield::styles::{init_theme, ThemeType};
use starfield::utils::{get_config_path, get_log_dir};
use starfield::{App, Config};

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.command.is_some() {
        return cli.execute();
    }

    setup_panic_hook();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("starfield.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "starfield.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let config_path = get_config_path();
    let mut config = Config::load(&config_path).context("Failed to load configuration")?;
    cli.session.apply(&mut config);

    // NO_COLOR wins over the configured theme
    if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.theme = ThemeType::NoColor;
    }
    init_theme(config.theme);

    // Print log location before TUI starts (this will be visible briefly)
    eprintln!("Logs are being written to: {:?}", log_file);

    let mut app = App::new(config, config_path)?;
    let result = app.run();

    // Restore the terminal before flushing the log
    drop(app);
    drop(guard);

    result
}
