//! Terminal keyboard input.

use std::cell::RefCell;
use std::rc::Rc;

use crate::geo::Point;
use crate::input::KeyCode;
use crate::input::UserInput;
use crate::service::KeyboardService;

/// A [`KeyboardService`] reading the keys pressed during the current frame.
///
/// The input snapshot is shared with the display, which refreshes it at the
/// top of every frame.
pub struct TerminalKeyboard {
  input: Rc<RefCell<UserInput>>,
  cell_size: i64,
}

impl TerminalKeyboard {
  /// Creates a new `TerminalKeyboard` that moves one `cell_size` per key
  /// press.
  pub fn new(input: Rc<RefCell<UserInput>>, cell_size: i64) -> Self {
    Self { input, cell_size }
  }
}

/// Computes the unit direction held down in `input`.
///
/// WASD and the arrow keys both work; opposing keys cancel out.
pub fn direction(input: &UserInput) -> Point {
  let axis = |neg: &[KeyCode], pos: &[KeyCode]| {
    let held = |keys: &[KeyCode]| keys.iter().any(|&k| input.has_key(k));
    held(pos) as i64 - held(neg) as i64
  };

  let dx = axis(
    &[KeyCode::Char('a'), KeyCode::Left],
    &[KeyCode::Char('d'), KeyCode::Right],
  );
  let dy = axis(
    &[KeyCode::Char('w'), KeyCode::Up],
    &[KeyCode::Char('s'), KeyCode::Down],
  );
  Point::new(dx, dy)
}

impl KeyboardService for TerminalKeyboard {
  fn get_direction(&mut self) -> Point {
    direction(&self.input.borrow()) * self.cell_size
  }
}
