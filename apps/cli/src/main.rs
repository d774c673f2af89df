mod app;
mod event;
mod ui;

use std::path::{Path, PathBuf};

use clap::Parser;
use motd::{Endpoints, MotdClient, MotdSink, Presenter};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::event::{AppEvent, EventHandler};

#[derive(Parser)]
#[command(name = "motd-tui", about = "Fetch and show a message of the day")]
struct Args {
    /// JSON endpoint serving `{"motd": "..."}`. Overrides MOTD_JSON_URL.
    #[arg(long)]
    json_url: Option<String>,

    /// Plain-text endpoint. Overrides MOTD_TEXT_URL.
    #[arg(long)]
    text_url: Option<String>,

    /// Splash file with one message per line. Overrides MOTD_SPLASH_URL.
    #[arg(long)]
    splash_url: Option<String>,

    /// Write logs here; the terminal belongs to the UI.
    #[arg(long, env = "MOTD_LOG_FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let mut endpoints = Endpoints::from_env()?;
    if let Some(url) = args.json_url {
        endpoints = endpoints.with_json(url);
    }
    if let Some(url) = args.text_url {
        endpoints = endpoints.with_text(url);
    }
    if let Some(url) = args.splash_url {
        endpoints = endpoints.with_splash(url);
    }
    tracing::info!(?endpoints, "motd_tui_started");

    let (sink, motd_rx) = MotdSink::channel();
    let presenter = Presenter::new(MotdClient::new()?, endpoints, sink);

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, presenter, motd_rx).await;
    ratatui::restore();

    result
}

fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

async fn run(
    terminal: &mut DefaultTerminal,
    presenter: Presenter,
    motd_rx: mpsc::UnboundedReceiver<String>,
) -> anyhow::Result<()> {
    let mut app = App::new(presenter.endpoints().clone());
    let mut events = EventHandler::new(motd_rx);

    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        let Some(event) = events.next().await else {
            break;
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(title) = app.handle_key(key) {
                    presenter.press(&title);
                }
            }
            AppEvent::Motd(motd) => app.set_motd(motd),
            AppEvent::Resize => {}
        }
    }

    Ok(())
}
