// Terminal surface for the fullscreen countdown

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue, style,
    terminal::{self, disable_raw_mode, enable_raw_mode, ClearType},
};
use std::io::{self, Stdout, Write};
use std::ops::{Deref, DerefMut};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScreenError {
    #[error("position {row},{col} is outside the screen")]
    OutOfBounds { row: u16, col: u16 },
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A key seen by a non-blocking poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Ctrl-C; raw mode delivers the interrupt as a key instead of a signal
    Interrupt,
    Press,
}

/// What the countdown needs from a terminal
pub trait Screen {
    /// Take over the terminal (alternate screen, raw input)
    fn acquire(&mut self) -> io::Result<()>;
    /// Hand the terminal back in the state `acquire` found it
    fn release(&mut self) -> io::Result<()>;
    /// Viewport as (rows, columns)
    fn size(&self) -> io::Result<(u16, u16)>;
    fn erase(&mut self) -> io::Result<()>;
    fn draw_text(&mut self, row: u16, col: u16, line: &str) -> Result<(), ScreenError>;
    fn refresh(&mut self) -> io::Result<()>;
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;
}

/// Holds a screen acquired with the cursor hidden, and undoes both on drop
pub struct ScreenGuard<'a, S: Screen> {
    screen: &'a mut S,
}

impl<'a, S: Screen> ScreenGuard<'a, S> {
    pub fn new(screen: &'a mut S) -> io::Result<Self> {
        screen.acquire()?;
        if let Err(e) = screen.set_cursor_visible(false) {
            let _ = screen.release();
            return Err(e);
        }
        Ok(Self { screen })
    }
}

impl<S: Screen> Deref for ScreenGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.screen
    }
}

impl<S: Screen> DerefMut for ScreenGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.screen
    }
}

impl<S: Screen> Drop for ScreenGuard<'_, S> {
    fn drop(&mut self) {
        let _ = self.screen.set_cursor_visible(true);
        let _ = self.screen.release();
    }
}

/// The real terminal, driven through crossterm
pub struct CrosstermScreen {
    out: Stdout,
}

impl CrosstermScreen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for CrosstermScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CrosstermScreen {
    fn acquire(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        if let Err(e) = execute!(self.out, terminal::EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        // Leave raw mode even if the screen switch fails
        let left = execute!(self.out, terminal::LeaveAlternateScreen);
        disable_raw_mode()?;
        left
    }

    fn size(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn erase(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))
    }

    fn draw_text(&mut self, row: u16, col: u16, line: &str) -> Result<(), ScreenError> {
        let (rows, cols) = self.size()?;
        if row >= rows || col >= cols {
            return Err(ScreenError::OutOfBounds { row, col });
        }

        let room = usize::from(cols - col);
        let clipped: String = line.chars().take(room).collect();
        queue!(self.out, cursor::MoveTo(col, row), style::Print(&clipped))?;

        if line.chars().count() > room {
            return Err(ScreenError::OutOfBounds { row, col: cols });
        }
        Ok(())
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    return Ok(Some(classify_key(key_event)));
                }
            }
        }
        Ok(None)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(self.out, cursor::Show)
        } else {
            execute!(self.out, cursor::Hide)
        }
    }
}

fn classify_key(key_event: KeyEvent) -> Key {
    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Key::Interrupt
        }
        _ => Key::Press,
    }
}
