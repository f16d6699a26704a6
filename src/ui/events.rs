use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

use crate::shutdown::ShutdownHandle;
use crate::worker::Completion;

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// A worker request finished.
    Completed(Completion),
    /// The terminal stopped delivering input. Always the last input event.
    Closed,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Read input from the terminal through crossterm.
    pub fn new(tick_rate: Duration, shutdown: ShutdownHandle) -> Self {
        Self::with_source(tick_rate, shutdown, |timeout| {
            if event::poll(timeout)? {
                event::read().map(Some)
            } else {
                Ok(None)
            }
        })
    }

    /// Read input from `source`, which waits up to the given timeout and
    /// returns the next event if one arrived.
    pub fn with_source<F>(tick_rate: Duration, shutdown: ShutdownHandle, mut source: F) -> Self
    where
        F: FnMut(Duration) -> io::Result<Option<Event>> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            while !shutdown.is_shutting_down() {
                // Short poll timeout so the shutdown flag is checked often
                let timeout =
                    tick_rate.saturating_sub(last_tick.elapsed()).min(Duration::from_millis(50));

                let forwarded = match source(timeout) {
                    Ok(Some(Event::Key(key))) => event_tx.send(AppEvent::Input(key)),
                    Ok(Some(Event::Resize(cols, rows))) => {
                        event_tx.send(AppEvent::Resize(cols, rows))
                    }
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "terminal input failed");
                        let _ = event_tx.send(AppEvent::Closed);
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for other producers, such as the worker.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}
