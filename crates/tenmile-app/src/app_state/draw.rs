//! Writing the rendered view to stdout.

use std::io::{IsTerminal, Write};

use super::core::ChatApp;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

impl ChatApp {
    /// Redraw the whole conversation. The screen is cleared first only when
    /// stdout is a terminal, so piped output stays readable.
    pub(super) fn redraw(&self) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let clear = stdout.is_terminal();
        let mut out = stdout.lock();
        if clear {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        out.write_all(self.view.render(&self.session).as_bytes())?;
        out.flush()
    }
}
