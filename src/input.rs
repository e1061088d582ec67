//! Input processing utilties.

use std::collections::HashSet;
use std::io;
use std::time::Duration;

use crate::gfx::curses::into_io;

pub use crossterm::event::KeyCode;
pub use crossterm::event::KeyEvent;
pub use crossterm::event::KeyModifiers;

/// A tracker for a frame's key presses.
///
/// Due to the nature of teletype terminals, the only inputs we can really
/// capture are key-presses as recorded by the VT100 emulator. This struct
/// tracks all inputs for a particular frame, which can be querried by different
/// services throughout the frame.
///
/// At the begining of each frame [`UserInput::start_frame()`] should be called
/// to load up that frame's inputs from `stdin`.
#[derive(Debug)]
pub struct UserInput {
  keys: HashSet<KeyCode>,
  mods: KeyModifiers,
}

impl UserInput {
  /// Creates a new `UserInput`.
  pub fn new() -> Self {
    Self {
      keys: HashSet::new(),
      mods: KeyModifiers::empty(),
    }
  }

  /// Checks whether `code` was pressed this frame.
  pub fn has_key(&self, code: KeyCode) -> bool {
    self.keys.contains(&code)
  }

  /// Checks whether `mod` was held this frame.
  pub fn has_mod(&self, m: KeyModifiers) -> bool {
    self.mods.contains(m)
  }

  /// Checks whether the player asked to leave the game this frame, with `q`,
  /// `Esc` or `Ctrl-C`.
  pub fn quit_requested(&self) -> bool {
    let ctrl_c =
      self.has_key(KeyCode::Char('c')) && self.has_mod(KeyModifiers::CONTROL);
    ctrl_c || self.has_key(KeyCode::Char('q')) || self.has_key(KeyCode::Esc)
  }

  /// Records a single key press for this frame.
  pub fn press(&mut self, e: KeyEvent) {
    let code = match e.code {
      KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
      k => k,
    };
    self.keys.insert(code);
    self.mods |= e.modifiers;
  }

  /// Clears internal buffers and collects new inputs from `stdin`.
  ///
  /// This function should be called at the start of each frame, so that
  /// services downstream of it can query it for inputs.
  pub fn start_frame(&mut self) -> io::Result<()> {
    use crossterm::event;

    self.keys.clear();
    self.mods = KeyModifiers::empty();
    while event::poll(Duration::default()).map_err(into_io)? {
      if let event::Event::Key(e) = event::read().map_err(into_io)? {
        self.press(e);
      }
    }
    Ok(())
  }
}
