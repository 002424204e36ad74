use marquee::adapters::{ReqwestHttpClient, TmdbCatalogClient};
use marquee::app::{tick_interval, App};
use marquee::cli::{parse_args, run_cli_command, CliCommand};
use marquee::config::{AppConfig, ConfigManager};
use marquee::error::CatalogError;
use marquee::logging;
use marquee::terminal::{setup_panic_hook, TerminalManager};
use marquee::traits::CatalogClient;
use marquee::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;

fn main() -> Result<()> {
    // Flags are handled before any terminal setup
    let command = parse_args(std::env::args());
    if let Some(code) = run_cli_command(&command) {
        std::process::exit(code);
    }
    let start_movie = match command {
        CliCommand::RunTui { movie } => movie,
        _ => None,
    };

    color_eyre::install()?;
    setup_panic_hook();
    logging::init_tracing();

    let config = ConfigManager::new()?.load_effective()?;
    if !config.has_api_key() {
        let hint = CatalogError::MissingApiKey.category().recovery_hint();
        tracing::warn!(hint, "no API key configured; catalog calls will fail");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::from_config(&config, build_catalog(&config));

    let mut manager = TerminalManager::new()?;
    let size = manager.terminal().size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(async {
        app.start(start_movie);
        run_app(manager.terminal(), &mut app, &config).await
    });

    manager.restore()?;
    tracing::info!("exiting");
    result
}

fn build_catalog(config: &AppConfig) -> Arc<dyn CatalogClient> {
    let http = ReqwestHttpClient::with_timeout(config.request_timeout());
    let catalog = TmdbCatalogClient::new(http)
        .with_base_url(&config.api_base_url)
        .with_api_key(config.api_key.clone().unwrap_or_default())
        .with_language(&config.language)
        .with_region(config.region.clone());
    Arc::new(catalog)
}

async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    // The receiver is moved out of the app so select! can borrow it
    // alongside `app`.
    let mut message_rx = app.message_rx.take();
    let mut ticker = tick_interval(config.tick_rate());

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse_event(mouse),
                    Some(Ok(Event::Resize(width, height))) => {
                        app.update_terminal_dimensions(width, height);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => {
                        tracing::warn!(error = %err, "terminal event error");
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
