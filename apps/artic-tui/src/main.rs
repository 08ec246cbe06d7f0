//! Artic TUI - artwork table browser
//!
//! Terminal UI over the Art Institute of Chicago API: a paginated,
//! multi-selectable table with a "select first N rows" popover.

mod app;
mod cli;
mod fetcher;
mod keybindings;
mod mode;
mod views;
mod widgets;

use std::fs::File;
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing_subscriber::EnvFilter;

use artic_core::{ArticSource, LoggingConfig, Msg};

use app::App;
use cli::Cli;
use fetcher::Fetcher;

/// How long to wait for a key before checking for fetch results
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    // Setup logging
    init_logging(&config.logging)?;
    tracing::info!(base_url = %config.api.base_url, page_size = config.table.page_size, "starting artic");

    let runtime = tokio::runtime::Runtime::new()?;
    let source = Arc::new(ArticSource::from_config(&config.api)?);
    let (tx, rx) = mpsc::unbounded_channel();
    let fetcher = Fetcher::new(runtime.handle().clone(), source, tx);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config.table.page_size);
    app.start();
    let res = run_app(&mut terminal, &mut app, &fetcher, rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("terminal error: {:?}", err);
        eprintln!("Error: {err:?}");
    }

    runtime.shutdown_timeout(Duration::from_millis(200));
    Ok(())
}

fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(config.file_path())?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    fetcher: &Fetcher,
    mut rx: UnboundedReceiver<Msg>,
) -> io::Result<()> {
    loop {
        while let Ok(msg) = rx.try_recv() {
            app.dispatch(msg);
        }
        for effect in app.take_effects() {
            fetcher.spawn(effect);
        }

        terminal.draw(|f| app.render(f))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }
        app.on_tick();
    }
}
