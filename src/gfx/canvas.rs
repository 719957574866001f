//! A terminal framebuffer.

use crate::asset::Image;
use crate::geo::Point;
use crate::geo::Rect;
use crate::geo::RectVec;
use crate::gfx::curses;
use crate::gfx::texel::Rgb;
use crate::gfx::texel::Texel;
use crate::gfx::Surface;

/// Pixels with less alpha than this are treated as fully transparent.
const ALPHA_CUTOFF: u8 = 128;

/// A grid of [`Texel`]s that images are drawn onto before being sent to the
/// terminal.
///
/// One texel is one device pixel; device coordinates start at `(0, 0)` in the
/// upper-left of the window. Anything drawn outside the grid is clipped.
pub struct Canvas {
  cells: RectVec<Texel>,
  background: Texel,
}

impl Canvas {
  /// Creates a new `Canvas` of the given size, filled with `background`.
  pub fn new(cols: usize, rows: usize, background: Texel) -> Self {
    Self {
      cells: RectVec::new(Rect::with_dims(cols as i64, rows as i64), background),
      background,
    }
  }

  /// Returns this canvas' dimensions, as `(cols, rows)`.
  pub fn dims(&self) -> (usize, usize) {
    let r = self.cells.dims();
    (r.width() as usize, r.height() as usize)
  }

  /// Returns the texel at `(col, row)`, if it is on the canvas.
  pub fn get(&self, col: i64, row: i64) -> Option<&Texel> {
    self.cells.get(Point::new(col, row))
  }

  /// Wipes the canvas back to its background.
  pub fn clear(&mut self) {
    self.cells.fill(self.background);
  }

  /// Resizes the canvas, e.g. after the terminal window changes size; this
  /// also clears it.
  pub fn resize(&mut self, cols: usize, rows: usize) {
    self.cells.resize(
      Rect::with_dims(cols as i64, rows as i64),
      self.background,
    );
  }

  /// Sends the contents of this canvas to `window`.
  pub fn present<W: std::io::Write>(
    &self,
    window: &mut curses::Curses<W>,
  ) -> crossterm::Result<()> {
    for (p, texel) in self.cells.points() {
      window.draw(curses::DrawCall {
        row: p.y() as usize,
        col: p.x() as usize,
        texel: *texel,
      })?;
    }
    window.flush()
  }
}

impl Surface for Canvas {
  fn draw_image(
    &mut self,
    image: &Image,
    x: i64,
    y: i64,
    width: i64,
    height: i64,
  ) {
    if width <= 0 || height <= 0 {
      return;
    }

    let target = Rect::at(x, y, width, height);
    let visible = match target.intersect(self.cells.dims()) {
      Some(r) => r,
      None => return,
    };

    // Nearest-neighbour: each device pixel samples the image pixel under its
    // upper-left corner.
    for p in visible.points() {
      let rel = p - target.upper_left();
      let sx = rel.x() * image.width() / width;
      let sy = rel.y() * image.height() / height;
      let px = match image.pixel(sx, sy) {
        Some(px) => px,
        None => continue,
      };
      let [r, g, b, a] = px.0;
      if a < ALPHA_CUTOFF {
        continue;
      }
      if let Some(cell) = self.cells.get_mut(p) {
        *cell = Texel::solid(Rgb::new(r, g, b));
      }
    }
  }
}
