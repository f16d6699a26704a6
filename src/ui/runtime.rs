use crate::api::ApiClient;
use crate::config::Config;
use crate::error::AppError;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::worker::{self, Worker};
use std::sync::mpsc::RecvTimeoutError;
use std::time::{Duration, Instant};

pub fn run(config: &Config) -> Result<(), AppError> {
    let api = ApiClient::new(&config.api)?;
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("fleetdesk-worker")
        .enable_all()
        .build()?;

    let shutdown = ShutdownCoordinator::new();
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate, shutdown.handle());
    let (commands, command_rx) = worker::channel();
    runtime.spawn(Worker::new(api, events.sender()).run(command_rx, shutdown.handle()));

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(commands, &config.ui);
    app.start();
    tracing::info!(base_url = %config.api.base_url, "console started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(..)) => {}
            Ok(AppEvent::Completed(completion)) => app.on_completion(completion),
            Ok(AppEvent::Closed) => {
                tracing::warn!("terminal input closed, exiting");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    shutdown.signal();
    drop(app);
    drop(guard);
    runtime.shutdown_timeout(Duration::from_secs(1));
    tracing::info!("console stopped");
    Ok(())
}
