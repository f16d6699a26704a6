use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

pub type ConsoleTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back into cooked mode on the main screen, once.
///
/// Both the guard's `Drop` and the panic hook hold the same flag, so
/// whichever runs first restores and the other does nothing.
pub struct TerminalGuard {
    restored: Arc<AtomicBool>,
}

impl TerminalGuard {
    fn new() -> Self {
        let guard = Self {
            restored: Arc::new(AtomicBool::new(false)),
        };
        let restored = Arc::clone(&guard.restored);
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_once(&restored, leave_console);
            previous(info);
        }));
        guard
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_once(&self.restored, leave_console);
    }
}

fn restore_once(restored: &AtomicBool, restore: impl FnOnce()) {
    if !restored.swap(true, Ordering::SeqCst) {
        restore();
    }
}

fn leave_console() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Switch to raw mode on the alternate screen.
pub fn setup_terminal() -> io::Result<(ConsoleTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard::new();
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Clear(ClearType::All), Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}
