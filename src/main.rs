//! vpnforge - terminal UI VPN config generator.
//!
//! Presents informational content about four VPN protocols and renders
//! placeholder configuration text from static templates. The generated
//! "configs" are cosmetic: no real keys, no handshake, no server.

mod app;
mod cli;
mod config;
mod constants;
mod event;
mod generator;
mod state;
mod theme;
mod ui;

use clap::Parser;
use color_eyre::Result;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use std::io::stdout;

use app::App;
use cli::args::{Args, Commands};
use config::Config;
use event::{Event, EventHandler};

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    match args.command {
        Some(Commands::Generate {
            protocol,
            output,
            stdout,
        }) => {
            if let Err(e) = cli::commands::generate(protocol, output, stdout) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::List) => {
            cli::commands::list();
            Ok(())
        }
        None => run_tui(),
    }
}

/// Set up the terminal, run the event loop, and restore the terminal on exit.
fn run_tui() -> Result<()> {
    let config = Config::load();
    let mut app = App::new(&config);

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout()))?;

    let events = EventHandler::new(config.tick_rate_ms);
    let result = event_loop(&mut terminal, &mut app, &events);

    // Always restore the terminal, even when the loop errored
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn event_loop(
    terminal: &mut ratatui::Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Key(key) => app.on_key(key),
            Event::Tick => app.on_tick(),
            Event::Resize(_, _) => {}
        }
    }
    Ok(())
}
