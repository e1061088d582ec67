//! Actors: anything that can be drawn and moved around the playfield.

use crate::geo::Point;
use crate::gfx::texel::colors;
use crate::gfx::texel::Rgb;
use crate::gfx::texel::Texel;
use crate::gfx::texel::Weight;

/// A visible, moveable thing that participates in the game.
///
/// Positions and velocities are in world units; the display decides how those
/// map onto terminal cells. An actor's `text` is drawn starting at its
/// position, so most actors are a single glyph while banners carry a whole
/// line.
#[derive(Clone, PartialEq, Debug)]
pub struct Actor {
  text: String,
  color: Rgb,
  weight: Weight,
  position: Point,
  velocity: Point,
}

impl Actor {
  /// Creates a new white, stationary actor at the origin.
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      color: colors::WHITE,
      weight: Weight::Normal,
      position: Point::zero(),
      velocity: Point::zero(),
    }
  }

  /// Returns a copy of this actor placed at `position`.
  pub fn with_position(mut self, position: Point) -> Self {
    self.position = position;
    self
  }

  /// Returns a copy of this actor with the given color.
  pub fn with_color(mut self, color: Rgb) -> Self {
    self.color = color;
    self
  }

  /// Returns a copy of this actor drawn in bold.
  pub fn bold(mut self) -> Self {
    self.weight = Weight::Bold;
    self
  }

  /// Returns the text this actor is drawn as.
  pub fn text(&self) -> &str {
    &self.text
  }

  /// Replaces the text this actor is drawn as.
  pub fn set_text(&mut self, text: impl Into<String>) {
    self.text = text.into();
  }

  /// Returns this actor's position, in world units.
  pub fn position(&self) -> Point {
    self.position
  }

  /// Sets this actor's velocity, in world units per frame.
  pub fn set_velocity(&mut self, velocity: Point) {
    self.velocity = velocity;
  }

  /// Returns the texel style used to draw this actor's text.
  pub fn style(&self) -> Texel {
    Texel::empty().with_fg(self.color).with_weight(self.weight)
  }

  /// Advances this actor by one frame of its velocity.
  ///
  /// Actors that leave the `max_x` by `max_y` playfield re-enter it from the
  /// opposite edge.
  ///
  /// # Panics
  ///
  /// Panics if either bound is zero.
  pub fn move_next(&mut self, max_x: i64, max_y: i64) {
    self.position = (self.position + self.velocity).wrap(max_x, max_y);
  }
}
