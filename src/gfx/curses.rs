//! `curses` helper library.
//!
//! Note that this module doesn't *actually* use `libcurses`, and merely
//! emulates its behavior at a high level in terms of `crossterm`.

use std::io;
use std::time::Duration;

use crossterm::event::Event;
use crossterm::event::KeyEvent;

use crate::gfx::texel;
use crate::gfx::texel::Texel;

/// Returns the current dimensions of the terminal window, as `(cols, rows)`.
pub fn dims() -> crossterm::Result<(usize, usize)> {
  let (cols, rows) = crossterm::terminal::size()?;
  Ok((cols as _, rows as _))
}

/// A low-level curses context.
///
/// While one of these is alive, the terminal is in raw mode on the alternate
/// screen; dropping it puts everything back.
pub struct Curses<W: io::Write = io::Stdout> {
  w: W,
  live: bool,
}

impl Curses {
  /// Initializes the `curses` environment on stdout.
  pub fn init() -> crossterm::Result<Curses> {
    Curses::with(io::stdout())
  }
}

/// Arguments for a draw call.
///
/// See [`Curses::draw()`].
#[allow(missing_docs)]
pub struct DrawCall {
  pub row: usize,
  pub col: usize,
  pub texel: Texel,
}

fn to_crossterm(color: texel::Color) -> crossterm::style::Color {
  match color {
    texel::Color::Rgb(rgb) => crossterm::style::Color::Rgb {
      r: rgb.red,
      g: rgb.green,
      b: rgb.blue,
    },
    texel::Color::Reset => crossterm::style::Color::Reset,
  }
}

impl<W: io::Write> Curses<W> {
  /// Initializes the `curses` environment for `w`.
  pub fn with(mut w: W) -> crossterm::Result<Curses<W>> {
    crossterm::execute!(
      w,
      crossterm::terminal::EnterAlternateScreen,
      crossterm::cursor::Hide,
      crossterm::terminal::DisableLineWrap,
    )?;
    crossterm::terminal::enable_raw_mode()?;

    Ok(Curses { w, live: true })
  }

  /// Returns the current dimensions of the window, as `(cols, rows)`.
  pub fn dims(&self) -> crossterm::Result<(usize, usize)> {
    dims()
  }

  /// Queues a draw of a single texel; nothing shows up until
  /// [`Curses::flush()`].
  pub fn draw(&mut self, call: DrawCall) -> crossterm::Result<()> {
    use crossterm::style::Colors;

    crossterm::queue!(
      self.w,
      crossterm::cursor::MoveTo(call.col as _, call.row as _),
      crossterm::style::SetColors(Colors {
        foreground: Some(to_crossterm(call.texel.fg())),
        background: Some(to_crossterm(call.texel.bg())),
      }),
      crossterm::style::Print(' '),
    )
  }

  /// Flushes every queued draw call to the terminal.
  pub fn flush(&mut self) -> crossterm::Result<()> {
    self.w.flush()?;
    Ok(())
  }

  /// Returns an iterator over currently-buffered keyboard inputs.
  ///
  /// The iterator ends as soon as no more input is immediately available, or
  /// if reading from the terminal fails.
  pub fn keys(&mut self) -> impl Iterator<Item = KeyEvent> + '_ {
    std::iter::from_fn(move || loop {
      match crossterm::event::poll(Duration::default()) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
          log::warn!("failed to poll terminal: {}", e);
          return None;
        }
      }
      match crossterm::event::read() {
        Ok(Event::Key(e)) => return Some(e),
        Ok(_) => continue,
        Err(e) => {
          log::warn!("failed to read terminal event: {}", e);
          return None;
        }
      }
    })
  }

  /// Clean up whatever mess the terminal made.
  fn cleanup(&mut self) -> crossterm::Result<()> {
    if !self.live {
      return Ok(());
    }
    self.live = false;

    crossterm::execute!(
      self.w,
      crossterm::style::ResetColor,
      crossterm::terminal::LeaveAlternateScreen,
      crossterm::cursor::Show,
      crossterm::terminal::EnableLineWrap,
    )?;
    crossterm::terminal::disable_raw_mode()?;
    self.flush()
  }

  /// Destroys the `curses` environment, taking the process along with it.
  pub fn die(&mut self, exit: i32) -> ! {
    if let Err(e) = self.cleanup() {
      log::error!("failed to restore terminal: {}", e);
    }
    std::process::exit(exit);
  }
}

impl<W: io::Write> Drop for Curses<W> {
  fn drop(&mut self) {
    if let Err(e) = self.cleanup() {
      log::error!("failed to restore terminal: {}", e);
    }
  }
}
