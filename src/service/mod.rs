//! The director's view of the outside world.
//!
//! The [`Director`](crate::director::Director) only ever talks to a keyboard
//! and a display through these traits; the terminal implementations live in
//! the submodules.

use crate::actor::Actor;
use crate::error::Result;
use crate::geo::Point;

pub mod display;
pub mod keyboard;

pub use display::TerminalDisplay;
pub use keyboard::TerminalKeyboard;

/// A source of directional input.
pub trait KeyboardService {
  /// Returns the velocity the player is currently asking for, in world units
  /// per frame. No input means [`Point::zero()`].
  fn get_direction(&mut self) -> Point;
}

/// A window that actors can be drawn into.
///
/// A frame consists of [`clear_buffer()`], any number of draws, and then
/// [`flush_buffer()`], which is also where the frame rate is held steady.
///
/// [`clear_buffer()`]: DisplayService::clear_buffer
/// [`flush_buffer()`]: DisplayService::flush_buffer
pub trait DisplayService {
  /// Opens the window.
  fn open_window(&mut self) -> Result<()>;

  /// Returns whether the window is still open.
  ///
  /// Called once at the top of every frame; implementations may use this to
  /// notice that the player closed the window.
  fn is_window_open(&mut self) -> Result<bool>;

  /// Returns the playfield width, in world units.
  fn get_width(&self) -> i64;

  /// Returns the playfield height, in world units.
  fn get_height(&self) -> i64;

  /// Starts a new, blank frame.
  fn clear_buffer(&mut self) -> Result<()>;

  /// Draws a single actor into the current frame.
  fn draw_actor(&mut self, actor: &Actor) -> Result<()>;

  /// Draws every actor in `actors`, in order; later actors draw over earlier
  /// ones.
  fn draw_actors<'a>(
    &mut self,
    actors: impl IntoIterator<Item = &'a Actor>,
  ) -> Result<()> {
    for actor in actors {
      self.draw_actor(actor)?;
    }
    Ok(())
  }

  /// Presents the current frame.
  fn flush_buffer(&mut self) -> Result<()>;

  /// Closes the window. Closing a closed window does nothing.
  fn close_window(&mut self) -> Result<()>;
}
