use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Errors returned by terminal initialization/restore helpers.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("terminal setup failed: {0}")]
    Setup(#[source] io::Error),
    #[error("terminal restore failed: {0}")]
    Restore(#[source] io::Error),
}

/// Enter the alternate screen in raw mode with bracketed paste, and mouse
/// capture when `mouse` is set.
pub fn init_terminal(mouse: bool) -> Result<Term, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste).map_err(TerminalError::Setup)?;
    if mouse {
        execute!(stdout, EnableMouseCapture).map_err(TerminalError::Setup)?;
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(TerminalError::Setup)
}

/// Restore terminal state (leave alternate screen + disable raw mode) and show cursor.
pub fn restore_terminal(mut terminal: Term) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}

/// Best-effort restore used from the panic hook, where the `Terminal` is
/// out of reach.
pub fn restore_raw() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
}
