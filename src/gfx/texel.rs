//! Texels, terminal elements.
//!
//! A *texel* is one cell of the terminal, which the [`Canvas`] treats as one
//! device pixel.
//!
//! [`Canvas`]: crate::gfx::Canvas

pub use palette::named as colors;

/// An RGB value used by a [`Texel`].
pub type Rgb = palette::Srgb<u8>;

/// A foreground or background color for a [`Texel`].
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

bitflags::bitflags! {
  struct Meta: u8 {
    const FG_RESET = 1 << 0;
    const BG_RESET = 1 << 1;
  }
}

/// A "terminal element", analogous to a pixel.
///
/// A texel is a blank cell with a foreground and a background color; either
/// color may be left as the terminal default.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Texel {
  fg: Rgb,
  bg: Rgb,
  meta: Meta,
}

impl Texel {
  /// Creates a blank texel in the terminal's default colors.
  #[inline]
  pub fn empty() -> Self {
    Self {
      fg: colors::BLACK,
      bg: colors::BLACK,
      meta: Meta::FG_RESET | Meta::BG_RESET,
    }
  }

  /// Creates a texel that paints its whole cell with `rgb`.
  #[inline]
  pub fn solid(rgb: Rgb) -> Self {
    Self::empty().with_bg(rgb)
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
      Color::Reset => self.meta.insert(Meta::FG_RESET),
    }
    self
  }

  /// Returns this texel's background color.
  #[inline]
  pub fn bg(self) -> Color {
    if self.meta.contains(Meta::BG_RESET) {
      Color::Reset
    } else {
      self.bg.into()
    }
  }

  /// Returns a copy of this texel with the given background color.
  #[inline]
  pub fn with_bg(mut self, color: impl Into<Color>) -> Self {
    match color.into() {
      Color::Rgb(rgb) => {
        self.bg = rgb;
        self.meta.remove(Meta::BG_RESET);
      }
      Color::Reset => self.meta.insert(Meta::BG_RESET),
    }
    self
  }
}
