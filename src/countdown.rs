// Countdown refresh loop: redraws the remaining time until the deadline or a key press

use crate::glyphs::GlyphRenderer;
use crate::screen::{Key, Screen, ScreenGuard};
use crate::types::RemainingTime;
use anyhow::{Context, Result};
use chrono::{Local, NaiveDateTime};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Default pause between redraws
pub const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Source of "now", and the only place the loop blocks
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
    fn sleep(&self, duration: Duration);
}

/// Local wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// How a countdown ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The deadline passed
    Expired,
    /// A key was pressed
    Interrupted,
    /// Ctrl-C at the keyboard, or SIGINT from outside
    Cancelled,
}

/// Take over `screen` and count down to `end`.
///
/// `cancel` is set from a signal handler; it is checked before and after every
/// sleep. The terminal is restored before this returns, whichever way the loop
/// ends.
pub fn run_countdown<S, C, G>(
    screen: &mut S,
    clock: &C,
    glyphs: &G,
    end: NaiveDateTime,
    tick: Duration,
    cancel: &AtomicBool,
) -> Result<Outcome>
where
    S: Screen,
    C: Clock,
    G: GlyphRenderer,
{
    let mut screen = ScreenGuard::new(screen).context("Failed to set up terminal")?;

    loop {
        if cancel.load(Ordering::SeqCst) {
            return Ok(Outcome::Cancelled);
        }

        let Some(remaining) = RemainingTime::until(end, clock.now()) else {
            return Ok(Outcome::Expired);
        };

        screen.erase().context("Failed to clear terminal")?;
        draw_centered(&mut *screen, glyphs, &remaining.to_string())?;
        screen.refresh().context("Failed to refresh terminal")?;

        clock.sleep(tick);

        if cancel.load(Ordering::SeqCst) {
            return Ok(Outcome::Cancelled);
        }

        match screen.poll_key().context("Failed to read keyboard")? {
            Some(Key::Interrupt) => return Ok(Outcome::Cancelled),
            Some(Key::Press) => return Ok(Outcome::Interrupted),
            None => {}
        }
    }
}

/// Draw `text` in large glyphs at the middle of the screen. Lines that don't
/// fit are dropped.
pub fn draw_centered<S, G>(screen: &mut S, glyphs: &G, text: &str) -> Result<()>
where
    S: Screen + ?Sized,
    G: GlyphRenderer,
{
    let (rows, cols) = screen.size().context("Failed to query terminal size")?;
    let lines = glyphs.render(text);
    let top = i64::from(rows / 2) - (lines.len() / 2) as i64;

    for (i, line) in lines.iter().enumerate() {
        let row = top + i as i64;
        let col = (i64::from(cols / 2) - (line.chars().count() / 2) as i64).max(0);
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            continue;
        };
        let _ = screen.draw_text(row, col, line);
    }

    Ok(())
}
