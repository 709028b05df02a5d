mod app;
mod logging;
mod ui;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::prelude::*;

use app::{handle_key, load_config, App, Config, Key};
use ui::ui;

const DEFAULT_FILE: &str = "output.txt";

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            default_hook(info);
        }));
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE));

    let (config, config_error) = match load_config() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };
    if let Some(log_file) = config.log_file() {
        logging::init(log_file.clone());
    }

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let height = terminal.size()?.height;
    let (theme_name, theme) = config.resolve_theme();
    logging::log(&format!("startup: theme {theme_name}, {height} rows"));
    let mut app = App::open(path, (height as usize).saturating_sub(2)).with_theme(theme);
    if let Some(err) = config_error {
        logging::log(&format!("config: {err:#}"));
        app.set_status(format!("Config error: {err}"));
    }

    run(&mut terminal, &mut app)
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(key) = Key::from_event(key) else {
            continue;
        };
        match handle_key(app, key) {
            Ok(true) => break,
            Ok(false) => {}
            Err(err) => {
                logging::log(&format!("fatal: {err:#}"));
                return Err(err);
            }
        }
    }
    logging::log("session closed");
    Ok(())
}
