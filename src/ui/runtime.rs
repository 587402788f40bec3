use crate::config::Config;
use crate::engine::PuzzleEngine;
use crate::quotes::load_quotes;
use crate::relay::{GuessSink, RelayClient, RelayServer};
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, Role, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc as std_mpsc;
use std::time::Duration;
use tokio::signal;
use tokio::sync::mpsc;

const TICK_RATE: Duration = Duration::from_millis(250);
const COMMAND_BUFFER: usize = 32;

/// Run one interactive session until the user quits or a signal arrives.
///
/// Quotes and relay endpoints are set up before the terminal switches to
/// raw mode, so startup failures print as ordinary errors.
pub fn run(role: Role, config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let shutdown = ShutdownHandle::new();

    let engine_config = config.game.engine_config();
    let engine = match config.game.seed {
        Some(seed) => PuzzleEngine::with_seed(engine_config, seed),
        None => PuzzleEngine::new(engine_config),
    };

    let quotes = if role.owns_puzzle() {
        runtime.block_on(load_quotes(&config.quotes))
    } else {
        Vec::new()
    };

    let channel = config.relay.channel.clone();
    let server = match role {
        Role::Display => Some(
            runtime.block_on(RelayServer::bind(&config.relay.bind_addr, &channel))?,
        ),
        Role::Solo | Role::Controller => None,
    };
    let client = match role {
        Role::Controller => {
            let timeout = Duration::from_secs(u64::from(config.relay.connect_timeout_seconds));
            Some(runtime.block_on(RelayClient::connect(
                &config.relay.connect_addr,
                &channel,
                timeout,
            ))?)
        }
        Role::Solo | Role::Display => None,
    };

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(TICK_RATE, shutdown.clone());
    let mut app = App::new(role, engine, quotes, channel);

    if let Some(server) = server {
        runtime.spawn(server.run(events.sender(), shutdown.clone()));
    }
    if let Some(client) = client {
        let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
        app.attach_commands(tx);
        runtime.spawn(forward_guesses(client, rx, events.sender()));
    }
    runtime.spawn(watch_signals(events.sender(), shutdown.clone()));

    if role.owns_puzzle() {
        app.start_round();
    }

    let result = event_loop(&mut terminal, &mut app, &events);

    shutdown.signal();
    drop(guard);
    runtime.shutdown_timeout(Duration::from_millis(500));
    tracing::info!(role = role.label(), "Session ended");
    result
}

fn event_loop(
    terminal: &mut crate::ui::terminal_guard::GameTerminal,
    app: &mut App,
    events: &EventHandler,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;
        if app.should_quit() {
            return Ok(());
        }

        match events.next(TICK_RATE) {
            Ok(AppEvent::Key(key)) => handle_key(app, key),
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::RelayGuess(letter)) => app.on_relay_guess(letter),
            Ok(AppEvent::RelayError(message)) => app.on_relay_error(message),
            Ok(AppEvent::Shutdown) => app.request_quit(),
            Err(std_mpsc::RecvTimeoutError::Timeout) => {}
            Err(std_mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
        }
    }
}

/// Drain UI commands into a relay sink, reporting failures back to the UI.
pub async fn forward_guesses<S: GuessSink>(
    sink: S,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        match command {
            UiCommand::SendGuess { letter } => {
                if let Err(err) = sink.send(letter).await {
                    tracing::warn!(%letter, error = %err, "Relay send failed");
                    if events.send(AppEvent::RelayError(err.to_string())).is_err() {
                        break;
                    }
                }
            }
        }
    }
    tracing::debug!("Guess forwarder stopped");
}

async fn watch_signals(events: std_mpsc::Sender<AppEvent>, shutdown: ShutdownHandle) {
    #[cfg(unix)]
    {
        let Ok(mut sigterm) = signal::unix::signal(signal::unix::SignalKind::terminate()) else {
            tracing::warn!("Failed to install SIGTERM handler");
            return;
        };
        tokio::select! {
            _ = signal::ctrl_c() => {},
            _ = sigterm.recv() => {},
            _ = shutdown.wait() => return,
        }
    }

    #[cfg(not(unix))]
    {
        tokio::select! {
            _ = signal::ctrl_c() => {},
            _ = shutdown.wait() => return,
        }
    }

    tracing::info!("Signal received");
    let _ = events.send(AppEvent::Shutdown);
}
