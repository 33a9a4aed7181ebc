use std::io::BufRead;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use lexis_config::Config;
use lexis_config::ui::UiConfig;
use lexis_types::AppEvent;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::commands::{Command, HELP, parse_command};
use crate::render::{Painter, render_answer, render_card, render_error, render_stats};

/// Terminal front end on stdin/stdout
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    run_terminal(
        spawn_stdin_reader(),
        tokio::io::stdout(),
        app_to_ui_rx,
        ui_to_app_tx,
        config,
        cancel,
    )
    .await
}

/// Blocking stdin reads live on their own thread so a pending read never
/// holds up runtime shutdown. The channel closes at end of input.
fn spawn_stdin_reader() -> AsyncReceiver<String> {
    let (line_tx, line_rx) = kanal::bounded_async::<String>(16);
    let line_tx = line_tx.to_sync();

    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    line_rx
}

/// Reads command lines from `input` and prints app events to `output` until cancelled.
///
/// Quitting or closing the input only asks the app to shut down; events already
/// queued for the UI are still printed before the token fires.
pub async fn run_terminal<W>(
    input: AsyncReceiver<String>,
    mut output: W,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let (ui, painter) = {
        let config = config.read().await;
        (config.ui.clone(), Painter::from_config(&config.ui))
    };

    let mut input_open = true;

    loop {
        tokio::select! {
            biased;

            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::debug!("App channel closed");
                    break;
                };
                if let Some(text) = render_event(&event, &ui, &painter) {
                    write_line(&mut output, &text).await?;
                }
            }
            _ = cancel.cancelled() => {
                tracing::debug!("UI loop cancelled");
                break;
            }
            line = input.recv(), if input_open => {
                let Ok(line) = line else {
                    tracing::info!("Input closed");
                    input_open = false;
                    ui_to_app_tx.send(AppEvent::Shutdown).await?;
                    continue;
                };

                match parse_command(&line) {
                    Ok(Command::Event(event)) => ui_to_app_tx.send(event).await?,
                    Ok(Command::Help) => write_line(&mut output, HELP).await?,
                    Ok(Command::Quit) => {
                        input_open = false;
                        ui_to_app_tx.send(AppEvent::Shutdown).await?;
                    }
                    Ok(Command::Nothing) => {}
                    Err(message) => write_line(&mut output, &render_error(&message, &painter)).await?,
                }
            }
        }
    }

    Ok(())
}

fn render_event(event: &AppEvent, ui: &UiConfig, painter: &Painter) -> Option<String> {
    match event {
        AppEvent::BackendReady => Some("lexis is ready, type h for help".to_string()),
        AppEvent::ShowCard(card) => Some(format!("\n{}", render_card(card, ui, painter))),
        AppEvent::ShowAnswer { outcome, word } => Some(render_answer(*outcome, word, painter)),
        AppEvent::ShowStatsResult(stats) => Some(render_stats(stats, painter)),
        AppEvent::ShowError(message) => Some(render_error(message, painter)),
        // Requests flow the other way
        _ => None,
    }
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> anyhow::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
