//! Texels, terminal elements.
//!
//! A *texel* is our abstraction for a cell in a terminal. They're not *quite*
//! like cells, because they carry a little bit more information. See the
//! [`Texel`] type for more info.

pub use palette::named as colors;

/// An RGB value used by a [`Texel`].
pub type Rgb = palette::Srgb<u8>;

/// A foreground color for a [`Texel`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Color {
  /// A solid RGB value.
  Rgb(Rgb),

  /// The "default" value, i.e., reset to whatever the terminal's default colors
  /// are.
  Reset,
}

impl From<Rgb> for Color {
  fn from(rgb: Rgb) -> Self {
    Self::Rgb(rgb)
  }
}

/// A character weight.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[allow(missing_docs)]
#[rustfmt::skip]
pub enum Weight {
  Normal, Bold,
}

/// A "terminal element", analogous to a pixel or voxel.
///
/// A texel consists of a "glyph" (a printable character), a foreground color,
/// and a weight. The foreground defaults to the terminal's own; the background
/// always is the terminal's own.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Texel {
  glyph: Option<char>,
  fg: Rgb,
  meta: Meta,
}

bitflags::bitflags! {
  struct Meta: u16 {
    const WEIGHT_BOLD = 1 << 0;
    const FG_RESET = 1 << 1;
  }
}

impl Texel {
  /// Creates a new blank texel, which draws as a space in default colors.
  #[inline]
  pub fn empty() -> Self {
    Self {
      glyph: None,
      fg: colors::BLACK,
      meta: Meta::FG_RESET,
    }
  }

  /// Returns this texel's glyph.
  #[inline]
  pub fn glyph(self) -> Option<char> {
    self.glyph
  }

  /// Returns a copy of this texel with the given glyph.
  #[inline]
  pub fn with_glyph(mut self, glyph: impl Into<Option<char>>) -> Self {
    self.glyph = glyph.into();
    self
  }

  /// Returns this texel's foreground color.
  #[inline]
  pub fn fg(self) -> Color {
    if self.meta.contains(Meta::FG_RESET) {
      Color::Reset
    } else {
      self.fg.into()
    }
  }

  /// Returns a copy of this texel with the given foreground color.
  #[inline]
  pub fn with_fg(mut self, color: impl Into<Color>) -> Self {
    match color.into() {
      Color::Rgb(rgb) => {
        self.fg = rgb;
        self.meta.remove(Meta::FG_RESET);
      }
      Color::Reset => self.meta |= Meta::FG_RESET,
    }
    self
  }

  /// Returns this texel's weight.
  #[inline]
  pub fn weight(self) -> Weight {
    if self.meta.contains(Meta::WEIGHT_BOLD) {
      Weight::Bold
    } else {
      Weight::Normal
    }
  }

  /// Returns a copy of this texel with the given weight.
  #[inline]
  pub fn with_weight(mut self, weight: Weight) -> Self {
    self.meta.set(Meta::WEIGHT_BOLD, weight == Weight::Bold);
    self
  }
}
