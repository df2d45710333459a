use folio::adapters::{FilePreferenceStore, ReqwestHttpClient, SystemClipboard};
use folio::api::BlogClient;
use folio::app::{App, AppMessage};
use folio::cli::{parse_args, run_cli_command, CliCommand};
use folio::config::AppConfig;
use folio::logging::init_logging;
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner animation interval
const TICK_INTERVAL: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }

    let mut config = AppConfig::from_env();
    if let CliCommand::RunTui { api_url: Some(url) } = &command {
        config = config.with_api_base_url(url);
    }

    init_logging(config.log_path.as_deref());
    tracing::info!(api = %config.api_base_url, "folio starting");

    let http = Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout));
    let client = Arc::new(BlogClient::new(&config.api_base_url, http));

    let preferences_path = match config.preferences_path.clone() {
        Some(path) => Some(path),
        None => FilePreferenceStore::default_path(),
    };
    let preferences: Arc<dyn folio::traits::PreferenceStore> = match preferences_path {
        Some(path) => Arc::new(FilePreferenceStore::open(path)),
        None => {
            tracing::warn!("No config directory; theme preference will not persist");
            Arc::new(folio::adapters::InMemoryPreferences::new())
        }
    };

    let mut app = App::new(client, preferences, Arc::new(SystemClipboard::new()));

    setup_panic_hook();
    let mut term_manager = TerminalManager::new()?;

    let result = run_app(term_manager.terminal(), &mut app).await;

    drop(term_manager);
    if let Err(ref e) = result {
        tracing::error!(error = ?e, "Application error");
    }
    tracing::info!("folio exited");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: mpsc::UnboundedReceiver<AppMessage> = match app.take_message_rx() {
        Some(rx) => rx,
        None => return Ok(()),
    };
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(TICK_INTERVAL);

    app.init();

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tick.tick() => app.tick(),

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            Some(msg) = message_rx.recv() => app.handle_message(msg),
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
