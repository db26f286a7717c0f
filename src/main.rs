//! FindMe — browse quiet places on a map in the terminal.
//!
//! Run the binary to open the browser with the bundled places.
//! Run with `--print-config` to dump the default config file.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stderr};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{
    event::spawn_event_reader,
    handler, images,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::catalog::Catalog;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Find quiet places to work and unwind")]
struct Cli {
    /// Start with no places on the map.
    #[arg(long)]
    empty: bool,

    /// Image drawn behind the pins.
    #[arg(long, value_name = "PATH")]
    map_image: Option<PathBuf>,

    /// Terminal width below which the compact layout is used.
    #[arg(long, value_name = "COLS")]
    compact_width: Option<u16>,

    /// Print the default config file and exit.
    #[arg(long)]
    print_config: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default().serialise());
        return Ok(());
    }

    let catalog = if cli.empty {
        Catalog::empty()
    } else {
        Catalog::sample()?
    };
    tracing::info!(places = catalog.len(), "catalog ready");

    let mut user_config = AppConfig::load();
    if let Some(cols) = cli.compact_width {
        user_config.set_compact_width(cols);
    }

    let mut state = AppState::new(catalog, user_config);
    if let Some(path) = cli.map_image {
        state.map_image = Some(path.clone());
        state.request_image(path);
    }

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stderr(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    state: &mut AppState,
) -> Result<()> {
    let mut events = spawn_event_reader();
    let (image_tx, mut image_rx) = tokio::sync::mpsc::unbounded_channel::<images::ImageResult>();

    loop {
        let size = terminal.size()?;
        state.terminal_area = ratatui::layout::Rect::new(0, 0, size.width, size.height);

        images::dispatch_pending(state, &image_tx);
        terminal.draw(|frame| ui::render::draw(frame, state))?;

        tokio::select! {
            biased;

            event = events.recv() => handler::handle_event(state, event),

            Some(loaded) = image_rx.recv() => {
                images::apply_result(state, loaded);
                while let Ok(more) = image_rx.try_recv() {
                    images::apply_result(state, more);
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
