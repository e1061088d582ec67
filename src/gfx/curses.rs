//! `curses` helper library.
//!
//! Note that this module doesn't *actually* use `libcurses`, and merely
//! emulates its behavior at a high level in terms of another library.
//!
//! Unlike real curses, failures are surfaced as [`io::Error`]s; the only place
//! they are swallowed is teardown on drop, where there is nobody left to tell.

use std::io;

use crossterm::style;

use crate::gfx::texel;
use crate::gfx::texel::Texel;
use crate::gfx::texel::Weight;

/// Returns the current dimensions of the terminal window, as `(rows, cols)`.
pub fn dims() -> io::Result<(usize, usize)> {
  let (cols, rows) = crossterm::terminal::size().map_err(into_io)?;
  Ok((rows as _, cols as _))
}

/// Converts a `crossterm` error into a plain [`io::Error`].
pub fn into_io(e: crossterm::ErrorKind) -> io::Error {
  match e {
    crossterm::ErrorKind::IoError(e) => e,
    e => io::Error::new(io::ErrorKind::Other, e.to_string()),
  }
}

/// A low-level curses context.
///
/// The terminal is in raw mode on the alternate screen for as long as this
/// value is alive.
pub struct Curses<W: io::Write = io::Stdout> {
  w: W,
  live: bool,
}

impl Curses {
  /// Initializes the `curses` environment.
  pub fn init() -> io::Result<Curses> {
    Curses::with(io::stdout())
  }
}

/// Arguments for a draw call.
///
/// See [`Curses::draw()`].
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug)]
pub struct DrawCall {
  pub row: usize,
  pub col: usize,
  pub texel: Texel,
}

fn to_crossterm(color: texel::Color) -> style::Color {
  match color {
    texel::Color::Rgb(rgb) => style::Color::Rgb {
      r: rgb.red,
      g: rgb.green,
      b: rgb.blue,
    },
    texel::Color::Reset => style::Color::Reset,
  }
}

impl<W: io::Write> Curses<W> {
  /// Initializes the `curses` environment for `w`.
  pub fn with(mut w: W) -> io::Result<Curses<W>> {
    crossterm::execute!(
      w,
      crossterm::terminal::EnterAlternateScreen,
      crossterm::cursor::Hide,
      crossterm::terminal::DisableLineWrap,
      crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
    )
    .map_err(into_io)?;
    crossterm::terminal::enable_raw_mode().map_err(into_io)?;

    Ok(Curses { w, live: true })
  }

  /// Queues drawing the texel in `call` at the given location on the screen.
  ///
  /// Nothing is visible until [`Curses::flush()`] is called.
  pub fn draw(&mut self, call: DrawCall) -> io::Result<()> {
    let attr = match call.texel.weight() {
      Weight::Bold => style::Attribute::Bold,
      Weight::Normal => style::Attribute::NormalIntensity,
    };

    crossterm::queue!(
      self.w,
      crossterm::cursor::MoveTo(call.col as _, call.row as _),
      style::SetAttribute(attr),
      style::SetColors(style::Colors {
        foreground: Some(to_crossterm(call.texel.fg())),
        background: Some(style::Color::Reset),
      }),
      style::Print(call.texel.glyph().unwrap_or(' ')),
    )
    .map_err(into_io)
  }

  /// Queues a full clear of the screen.
  pub fn clear(&mut self) -> io::Result<()> {
    crossterm::queue!(
      self.w,
      style::ResetColor,
      crossterm::terminal::Clear(crossterm::terminal::ClearType::All),
    )
    .map_err(into_io)
  }

  /// Flushes all queued draw calls to the terminal.
  pub fn flush(&mut self) -> io::Result<()> {
    self.w.flush()
  }

  /// Restores the terminal to its normal state.
  ///
  /// Calling this more than once is a no-op.
  pub fn close(&mut self) -> io::Result<()> {
    if !self.live {
      return Ok(());
    }
    self.live = false;

    crossterm::execute!(
      self.w,
      style::ResetColor,
      crossterm::terminal::LeaveAlternateScreen,
      crossterm::cursor::Show,
      crossterm::terminal::EnableLineWrap,
    )
    .map_err(into_io)?;
    crossterm::terminal::disable_raw_mode().map_err(into_io)?;
    self.w.flush()
  }
}

impl<W: io::Write> Drop for Curses<W> {
  fn drop(&mut self) {
    if let Err(e) = self.close() {
      tracing::warn!(error = %e, "failed to restore terminal");
    }
  }
}
