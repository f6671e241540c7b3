//! Navdrawer TUI - navigation drawer demo in the terminal.
//!
//! Three placeholder screens behind a sliding drawer:
//! - m or Space opens and closes the drawer
//! - j/k + Enter (or 1-3) pick a destination, which then closes the drawer
//! - Esc goes back through the visit history (drawer first, if open)
//! - e shows the shell event log, q quits

use std::io::{self, stdout};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use navdrawer_core::screen::Screen;
use navdrawer_tui::app::AppState;
use navdrawer_tui::config::{self, Config};
use navdrawer_tui::{input, ui};

/// Command-line flags. Anything set here overrides the config file.
#[derive(Parser)]
#[command(name = "navdrawer", about = "Navigation drawer demo: three screens, a sliding drawer, a back-stack")]
struct Cli {
    /// Path to a TOML config file (default: the platform config dir).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Screen to show at launch: start, page1, page2.
    #[arg(long)]
    screen: Option<Screen>,

    /// Drawer open/close travel time in milliseconds.
    #[arg(long, value_name = "MS")]
    drawer_ms: Option<u64>,

    /// Input poll timeout per frame in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,
}

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Config file, then flag overrides.
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(config::default_path);
    let mut config = config::load(&config_path)?;
    if let Some(screen) = cli.screen {
        config.start_screen = screen;
    }
    if let Some(ms) = cli.drawer_ms {
        config.drawer_travel_ms = ms;
    }
    if let Some(ms) = cli.tick_ms {
        config.tick_rate_ms = ms;
    }

    // Build app state.
    let mut app = AppState::new(&config);

    // Setup terminal.
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop.
    let result = run_app(&mut terminal, &mut app, &config);

    // Restore terminal.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
    config: &Config,
) -> Result<()> {
    let tick_rate = config.tick_rate();
    let mut last_frame = Instant::now();

    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain shell events published since the last frame (non-blocking)
        app.drain_shell_events();

        // 3. Poll for input; the timeout doubles as the animation tick
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Advance the drawer by however long this frame really took
        let dt = last_frame.elapsed();
        last_frame = Instant::now();
        app.scaffold.tick(dt);

        // 5. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}
