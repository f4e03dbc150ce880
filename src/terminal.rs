use std::io::{IsTerminal, Stdout, stdout};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use crossterm::cursor::Show;
use crossterm::event::KeyEvent;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::event;

/// Terminal capabilities the refresh loop needs. Acquire/release methods come
/// in pairs and are driven through [`TerminalSession`].
pub trait TerminalDriver {
    fn width(&mut self) -> Result<u16>;
    fn clear_and_home(&mut self) -> Result<()>;
    /// Replaces the visible frame with `lines`.
    fn write(&mut self, lines: Vec<Line<'static>>) -> Result<()>;

    fn enter_exclusive_screen(&mut self) -> Result<()>;
    fn exit_exclusive_screen(&mut self) -> Result<()>;
    fn hide_cursor(&mut self) -> Result<()>;
    fn show_cursor(&mut self) -> Result<()>;
    fn enable_raw_input(&mut self) -> Result<()>;
    fn restore(&mut self) -> Result<()>;

    fn read_key_with_timeout(&mut self, timeout: Duration) -> Result<Option<KeyEvent>>;
}

/// Holds the exclusive screen, hidden cursor and raw input for its lifetime.
///
/// Whatever was acquired is released in reverse order on drop, including when
/// acquisition fails part way or the owner unwinds.
pub struct TerminalSession<'a, D: TerminalDriver> {
    driver: &'a mut D,
    screen: bool,
    cursor_hidden: bool,
    raw: bool,
}

impl<'a, D: TerminalDriver> TerminalSession<'a, D> {
    pub fn acquire(driver: &'a mut D) -> Result<Self> {
        let mut session = TerminalSession {
            driver,
            screen: false,
            cursor_hidden: false,
            raw: false,
        };

        session
            .driver
            .enter_exclusive_screen()
            .wrap_err("failed to enter alternate screen")?;
        session.screen = true;

        session
            .driver
            .hide_cursor()
            .wrap_err("failed to hide cursor")?;
        session.cursor_hidden = true;

        session
            .driver
            .enable_raw_input()
            .wrap_err("failed to enable raw input")?;
        session.raw = true;

        Ok(session)
    }
}

impl<D: TerminalDriver> Deref for TerminalSession<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        &*self.driver
    }
}

impl<D: TerminalDriver> DerefMut for TerminalSession<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        &mut *self.driver
    }
}

impl<D: TerminalDriver> Drop for TerminalSession<'_, D> {
    fn drop(&mut self) {
        if self.raw
            && let Err(err) = self.driver.restore()
        {
            tracing::warn!(error = %err, "failed to restore terminal input mode");
        }
        if self.cursor_hidden
            && let Err(err) = self.driver.show_cursor()
        {
            tracing::warn!(error = %err, "failed to show cursor");
        }
        if self.screen
            && let Err(err) = self.driver.exit_exclusive_screen()
        {
            tracing::warn!(error = %err, "failed to leave alternate screen");
        }
    }
}

/// [`TerminalDriver`] over stdout, drawing through ratatui's diffing buffer.
pub struct CrosstermDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl CrosstermDriver {
    pub fn new() -> Result<Self> {
        if !stdout().is_terminal() {
            return Err(eyre!("stdout is not a terminal; wintop needs an interactive TTY"));
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))
            .wrap_err("failed to initialize terminal")?;
        Ok(CrosstermDriver { terminal })
    }
}

impl TerminalDriver for CrosstermDriver {
    fn width(&mut self) -> Result<u16> {
        Ok(self.terminal.size()?.width)
    }

    fn clear_and_home(&mut self) -> Result<()> {
        self.terminal.clear()?;
        Ok(())
    }

    fn write(&mut self, lines: Vec<Line<'static>>) -> Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(Paragraph::new(lines), frame.area()))?;
        Ok(())
    }

    fn enter_exclusive_screen(&mut self) -> Result<()> {
        execute!(self.terminal.backend_mut(), EnterAlternateScreen)?;
        Ok(())
    }

    fn exit_exclusive_screen(&mut self) -> Result<()> {
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.terminal.hide_cursor()?;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.terminal.show_cursor()?;
        Ok(())
    }

    fn enable_raw_input(&mut self) -> Result<()> {
        enable_raw_mode()?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        Ok(())
    }

    fn read_key_with_timeout(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        Ok(event::next_key(timeout)?)
    }
}

/// Restores the terminal before the default panic message is printed, so the
/// message lands on the main screen instead of the discarded alternate one.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), Show, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
