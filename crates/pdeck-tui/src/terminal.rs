//! Terminal setup and restoration

use ratatui::DefaultTerminal;

/// Restores the terminal when dropped, including on early `?` returns
pub struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen.
    ///
    /// A panic hook is chained first so a panic never leaves the shell in raw mode.
    pub fn enter() -> Self {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            ratatui::restore();
            previous(info);
        }));

        Self {
            terminal: ratatui::init(),
        }
    }

    pub fn terminal(&mut self) -> &mut DefaultTerminal {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
