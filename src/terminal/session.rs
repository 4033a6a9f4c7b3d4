use crossterm::{cursor, execute, terminal};
use std::io;

/// Alternate screen in raw mode for as long as the value lives.
///
/// Dropping it restores the terminal, also when the run bails out with an error.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        // raw mode delivers Ctrl-C as a key event instead of SIGINT
        if let Err(e) = terminal::enable_raw_mode() {
            let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
            return Err(e);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    }
}
