//! Double-buffered frame rendering.

use std::io;
use std::mem;

use crate::geo::Point;
use crate::geo::Rect;
use crate::geo::RectVec;
use crate::gfx::curses;
use crate::gfx::texel::colors;
use crate::gfx::texel::Texel;

/// A frame buffer that is built up over the course of a frame and then baked
/// onto a terminal.
///
/// Only the texels that changed since the previous bake are redrawn, unless
/// the dimensions of the frame changed, in which case the whole screen is.
pub struct FrameBuffer {
  baked: RectVec<Texel>,
  scratch: RectVec<Texel>,
  debug: Vec<String>,
}

impl FrameBuffer {
  /// Creates a new `FrameBuffer`.
  pub fn new() -> Self {
    Self {
      baked: RectVec::empty(),
      scratch: RectVec::empty(),
      debug: Vec::new(),
    }
  }

  /// Starts a new frame covering `viewport`, blanking every cell.
  pub fn clear(&mut self, viewport: Rect) {
    self.scratch.resize(viewport, Texel::empty());
    self.debug.clear();
  }

  /// Writes `text` left-to-right starting at the cell `at`, using `style` for
  /// colors and weight.
  ///
  /// Characters that fall outside of the viewport are dropped.
  pub fn draw_text(&mut self, at: Point, text: &str, style: Texel) {
    for (i, c) in text.chars().enumerate() {
      let p = at + Point::new(i as i64, 0);
      if let Some(tx) = self.scratch.get_mut(p) {
        *tx = style.with_glyph(c);
      }
    }
  }

  /// Adds a debug line, drawn over the bottom rows of the frame.
  pub fn debug(&mut self, line: String) {
    self.debug.push(line);
  }

  /// Returns the draw calls needed to bring the last baked frame up to date
  /// with the current one.
  ///
  /// The second value is whether the screen must be cleared first.
  pub fn changes(&self) -> (Vec<curses::DrawCall>, bool) {
    let origin = self.scratch.dims().upper_left();
    let same_dims = self.scratch.dims() == self.baked.dims();

    let calls = self
      .scratch
      .points()
      .zip(0..)
      .filter(|&((_, new_tx), i)| {
        !same_dims || self.baked.data()[i] != *new_tx
      })
      .map(|((p, new_tx), _)| {
        let rel = p - origin;
        curses::DrawCall {
          row: rel.y() as usize,
          col: rel.x() as usize,
          texel: *new_tx,
        }
      })
      .collect();
    (calls, !same_dims)
  }

  /// Bakes the current frame, drawing it onto `window`.
  ///
  /// Returns the number of cells that were redrawn.
  pub fn bake<W: io::Write>(
    &mut self,
    window: &mut curses::Curses<W>,
  ) -> io::Result<usize> {
    self.overlay_debug();

    let (calls, full_redraw) = self.changes();
    if full_redraw {
      window.clear()?;
    }
    for &call in &calls {
      window.draw(call)?;
    }
    window.flush()?;

    mem::swap(&mut self.scratch, &mut self.baked);
    Ok(calls.len())
  }

  fn overlay_debug(&mut self) {
    let viewport = self.scratch.dims();
    let debug = mem::take(&mut self.debug);
    let bottom = viewport.lower_right().y();
    for (i, msg) in debug.iter().rev().enumerate() {
      let row = bottom - 1 - i as i64;
      if row < viewport.upper_left().y() {
        break;
      }
      let at = Point::new(viewport.upper_left().x(), row);
      self.draw_text(at, msg, Texel::empty().with_fg(colors::RED));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_is_clipped_to_viewport() {
    let mut fb = FrameBuffer::new();
    fb.clear(Rect::with_dims(4, 2));
    fb.draw_text(Point::new(2, 1), "abcd", Texel::empty());
    fb.draw_text(Point::new(-1, 0), "xy", Texel::empty());

    let glyphs: String = fb
      .scratch
      .data()
      .iter()
      .map(|tx| tx.glyph().unwrap_or('.'))
      .collect();
    assert_eq!(glyphs, "y.....ab");
  }

  #[test]
  fn unchanged_cells_are_not_redrawn() {
    let mut fb = FrameBuffer::new();
    fb.clear(Rect::with_dims(5, 3));
    fb.draw_text(Point::new(1, 1), "#", Texel::empty());

    let (calls, full) = fb.changes();
    assert!(full);
    assert_eq!(calls.len(), 15);

    // Pretend the frame was baked.
    mem::swap(&mut fb.scratch, &mut fb.baked);
    fb.clear(Rect::with_dims(5, 3));
    fb.draw_text(Point::new(2, 1), "#", Texel::empty());

    let (calls, full) = fb.changes();
    assert!(!full);
    let moved: Vec<_> = calls.iter().map(|c| (c.row, c.col)).collect();
    assert_eq!(moved, vec![(1, 1), (1, 2)]);
    assert_eq!(calls[0].texel.glyph(), None);
    assert_eq!(calls[1].texel.glyph(), Some('#'));
  }

  #[test]
  fn debug_lines_sit_at_the_bottom() {
    let mut fb = FrameBuffer::new();
    fb.clear(Rect::with_dims(8, 3));
    fb.debug("fps".into());
    fb.overlay_debug();
    assert_eq!(fb.scratch.get(Point::new(0, 2)).unwrap().glyph(), Some('f'));
    assert_eq!(fb.scratch.get(Point::new(0, 0)).unwrap().glyph(), None);
  }
}
