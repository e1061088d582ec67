//! Terminal display output.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::actor::Actor;
use crate::error::Result;
use crate::geo::Point;
use crate::geo::Rect;
use crate::gfx::curses;
use crate::gfx::Curses;
use crate::gfx::FrameBuffer;
use crate::input::UserInput;
use crate::service::DisplayService;
use crate::timing::FrameTimer;

/// A [`DisplayService`] that draws into the terminal.
///
/// "Opening the window" switches the terminal to the alternate screen in raw
/// mode; closing it switches back. The playfield is `columns` by `rows`
/// cells, drawn from the top-left of the terminal and clipped to whatever
/// part of it fits.
pub struct TerminalDisplay {
  curses: Option<Curses>,
  frame: FrameBuffer,
  timer: FrameTimer,
  input: Rc<RefCell<UserInput>>,
  columns: i64,
  rows: i64,
  cell_size: i64,
  debug: bool,
}

impl TerminalDisplay {
  /// Creates a new `TerminalDisplay`; nothing is drawn until
  /// [`DisplayService::open_window()`] is called.
  ///
  /// `input` is refreshed once per frame and shared with whoever else needs
  /// the frame's key presses.
  pub fn new(
    input: Rc<RefCell<UserInput>>,
    columns: u32,
    rows: u32,
    cell_size: u32,
    frame_rate: u32,
    debug: bool,
  ) -> Self {
    Self {
      curses: None,
      frame: FrameBuffer::new(),
      timer: FrameTimer::new(frame_rate),
      input,
      columns: columns.into(),
      rows: rows.into(),
      cell_size: cell_size.into(),
      debug,
    }
  }
}

/// Converts a position in world units to the terminal cell it is drawn in.
pub fn to_cell(position: Point, cell_size: i64) -> Point {
  Point::new(
    position.x().div_euclid(cell_size),
    position.y().div_euclid(cell_size),
  )
}

impl DisplayService for TerminalDisplay {
  fn open_window(&mut self) -> Result<()> {
    if self.curses.is_none() {
      self.curses = Some(Curses::init()?);
      tracing::info!(
        columns = self.columns,
        rows = self.rows,
        "opened terminal window"
      );
    }
    Ok(())
  }

  fn is_window_open(&mut self) -> Result<bool> {
    if self.curses.is_none() {
      return Ok(false);
    }

    let quit = {
      let mut input = self.input.borrow_mut();
      input.start_frame()?;
      input.quit_requested()
    };
    if quit {
      tracing::info!("player closed the window");
      self.close_window()?;
    }
    Ok(!quit)
  }

  fn get_width(&self) -> i64 {
    self.columns.saturating_mul(self.cell_size)
  }

  fn get_height(&self) -> i64 {
    self.rows.saturating_mul(self.cell_size)
  }

  fn clear_buffer(&mut self) -> Result<()> {
    let (rows, cols) = curses::dims()?;
    let terminal = Rect::with_dims(cols as i64, rows as i64);
    let viewport = Rect::with_dims(self.columns, self.rows)
      .intersect(terminal)
      .unwrap_or_else(|| Rect::with_dims(0, 0));
    self.frame.clear(viewport);
    Ok(())
  }

  fn draw_actor(&mut self, actor: &Actor) -> Result<()> {
    let at = to_cell(actor.position(), self.cell_size);
    self.frame.draw_text(at, actor.text(), actor.style());
    Ok(())
  }

  fn flush_buffer(&mut self) -> Result<()> {
    let curses = match &mut self.curses {
      Some(c) => c,
      None => return Ok(()),
    };

    if self.debug {
      let fps = self.timer.measure_fps(Duration::from_millis(500));
      let count = self.timer.frame_count();
      self.frame.debug(format!("fps: {:.2}, count: {}", fps, count));
    }
    let redrawn = self.frame.bake(curses)?;
    tracing::trace!(redrawn, "flushed frame");

    self.timer.end_frame();
    Ok(())
  }

  fn close_window(&mut self) -> Result<()> {
    if let Some(mut curses) = self.curses.take() {
      curses.close()?;
      tracing::info!(
        frames = self.timer.frame_count(),
        "closed terminal window"
      );
    }
    Ok(())
  }
}
