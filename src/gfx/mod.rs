//! Drawing surfaces and the coordinate transform applied at draw time.
//!
//! Actors know nothing about where they end up: they compute a rectangle in
//! logical pixels, run it through a [`Scale`], and hand the result to a
//! [`Surface`].

use std::fmt;
use std::str::FromStr;

use crate::asset::Image;
use crate::error::Error;

pub mod canvas;
pub mod curses;
pub mod texel;

pub use canvas::Canvas;
pub use curses::Curses;

/// Something images can be drawn onto.
pub trait Surface {
  /// Draws `image` stretched over the rectangle with its upper-left corner at
  /// `(x, y)` and the given dimensions, all in device pixels.
  fn draw_image(
    &mut self,
    image: &Image,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
  );
}

impl<S: Surface + ?Sized> Surface for &mut S {
  fn draw_image(
    &mut self,
    image: &Image,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
  ) {
    (**self).draw_image(image, x, y, width, height)
  }
}

/// A uniform scale factor mapping logical pixels to device pixels.
///
/// The factor is the rational `numer / denom`, so that shrinking (e.g. `1/4`
/// for a terminal) is as easy as growing.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Scale {
  numer: i64,
  denom: i64,
}

impl Scale {
  /// The identity scale.
  pub const ONE: Scale = Scale { numer: 1, denom: 1 };

  /// Creates a new `Scale` of `numer / denom`.
  ///
  /// Returns an error if `denom` is zero.
  pub fn new(numer: i64, denom: i64) -> Result<Self, Error> {
    if denom == 0 {
      return Err(Error::InvalidScale(format!("{}/{}", numer, denom)));
    }
    if denom < 0 {
      return Ok(Self {
        numer: -numer,
        denom: -denom,
      });
    }
    Ok(Self { numer, denom })
  }

  /// Creates an integer scale factor.
  pub fn times(factor: i64) -> Self {
    Self {
      numer: factor,
      denom: 1,
    }
  }

  /// Maps a logical coordinate or length to device pixels.
  ///
  /// Division truncates toward zero.
  #[inline]
  pub fn scale(self, v: i64) -> i64 {
    v * self.numer / self.denom
  }

  /// Maps a device coordinate or length back to logical pixels.
  ///
  /// A zero scale maps everything to zero.
  #[inline]
  pub fn unscale(self, v: i64) -> i64 {
    if self.numer == 0 {
      return 0;
    }
    v * self.denom / self.numer
  }
}

impl Default for Scale {
  fn default() -> Self {
    Self::ONE
  }
}

impl fmt::Display for Scale {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.denom == 1 {
      write!(f, "{}", self.numer)
    } else {
      write!(f, "{}/{}", self.numer, self.denom)
    }
  }
}

impl FromStr for Scale {
  type Err = Error;

  /// Parses either `"N"` or `"N/D"`.
  fn from_str(s: &str) -> Result<Self, Error> {
    let bad = || Error::InvalidScale(s.to_string());
    let mut parts = s.trim().splitn(2, '/');
    let numer = parts
      .next()
      .and_then(|n| n.trim().parse().ok())
      .ok_or_else(bad)?;
    let denom = match parts.next() {
      Some(d) => d.trim().parse().map_err(|_| bad())?,
      None => 1,
    };
    Self::new(numer, denom).map_err(|_| bad())
  }
}

#[cfg(test)]
mod tests {
  use rstest::rstest;

  use super::*;

  #[rstest]
  #[case(Scale::ONE, 7, 7)]
  #[case(Scale::times(3), 7, 21)]
  #[case(Scale::times(3), -7, -21)]
  #[case(Scale::new(1, 4).unwrap(), 33, 8)]
  #[case(Scale::new(1, 4).unwrap(), -33, -8)]
  #[case(Scale::new(3, 2).unwrap(), 5, 7)]
  fn scale_maps_integers(#[case] s: Scale, #[case] v: i64, #[case] want: i64) {
    assert_eq!(s.scale(v), want);
  }

  #[rstest]
  #[case("2", Scale::times(2))]
  #[case("1/4", Scale::new(1, 4).unwrap())]
  #[case(" 3 / 2 ", Scale::new(3, 2).unwrap())]
  #[case("1/-2", Scale::new(-1, 2).unwrap())]
  fn scale_parses(#[case] s: &str, #[case] want: Scale) {
    assert_eq!(s.parse::<Scale>().unwrap(), want);
  }

  #[rstest]
  #[case("")]
  #[case("1/0")]
  #[case("x")]
  #[case("1/2/3")]
  fn scale_rejects_garbage(#[case] s: &str) {
    assert!(matches!(s.parse::<Scale>(), Err(Error::InvalidScale(_))));
  }

  #[test]
  fn unscale_inverts_exact_scales() {
    let s = Scale::new(1, 4).unwrap();
    assert_eq!(s.unscale(80), 320);
    assert_eq!(s.scale(s.unscale(80)), 80);
    assert_eq!(Scale::times(0).unscale(80), 0);
  }

  #[test]
  fn scale_displays_like_it_parses() {
    assert_eq!(Scale::new(1, 4).unwrap().to_string(), "1/4");
    assert_eq!(Scale::times(2).to_string(), "2");
  }
}
