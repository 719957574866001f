//! Integer plane geometry.
//!
//! We use the screen convention for coordinates throughout: x increases to the
//! right, and y increases downwards.

use std::ops::Range;

use num::FromPrimitive;
use num::Signed;
use num::Zero;

mod impls;

/// A two-dimensional point.
///
/// `Point<T>` values may be added and subtracted componentwise, and scaled by
/// a scalar.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Point<T = i64>([T; 2]);

impl<T> Point<T> {
  /// Creates a new `Point` with the given coordinates.
  #[inline]
  pub fn new(x: T, y: T) -> Self {
    Self([x, y])
  }

  /// Creates a new `Point` representing the origin.
  #[inline]
  pub fn zero() -> Self
  where
    T: Zero,
  {
    Zero::zero()
  }

  /// Returns this `Point`'s coordinates as an array.
  #[inline]
  pub fn coords(self) -> [T; 2] {
    self.0
  }

  /// Returns the `x` coordinate.
  #[inline]
  pub fn x(self) -> T
  where
    T: Copy,
  {
    self.0[0]
  }

  /// Returns the `y` coordinate.
  #[inline]
  pub fn y(self) -> T
  where
    T: Copy,
  {
    self.0[1]
  }

  /// Returns a copy of this point with the `x` coordinate replaced.
  #[inline]
  pub fn with_x(mut self, x: T) -> Self {
    self.0[0] = x;
    self
  }

  /// Returns a copy of this point with the `y` coordinate replaced.
  #[inline]
  pub fn with_y(mut self, y: T) -> Self {
    self.0[1] = y;
    self
  }

  /// Componentwise orders the coordinates of `self` and `other`.
  ///
  /// Returns a pair of points whose coordinates are the minima and maxima in
  /// each coordinate, respectively.
  #[inline]
  pub fn sort_coords(self, other: Self) -> (Self, Self)
  where
    T: PartialOrd + Copy,
  {
    let [x1, y1] = self.0;
    let [x2, y2] = other.0;
    let (xmin, xmax) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    let (ymin, ymax) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
    (Self::new(xmin, ymin), Self::new(xmax, ymax))
  }
}

/// An axis-aligned rectangle, represented as a pair of [`Point`] values.
///
/// This is the shape collision queries work with.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Rect<T = i64>(Point<T>, Point<T>);

// Invariant: rect.0.x <= rect.1.x and rect.0.y <= rect.1.y.
impl<T: Signed + Copy + PartialOrd> Rect<T> {
  /// Creates a new `Rect` with the given [`Point`] values as opposing corners.
  #[inline]
  pub fn new(p1: Point<T>, p2: Point<T>) -> Self {
    let (min, max) = Point::sort_coords(p1, p2);
    Self(min, max)
  }

  /// Creates a new `Rect` with its upper-left corner at `(x, y)` and the given
  /// dimensions.
  ///
  /// Negative dimensions extend the rectangle up or to the left instead.
  #[inline]
  pub fn at(x: T, y: T, width: T, height: T) -> Self {
    Self::new(Point::new(x, y), Point::new(x + width, y + height))
  }

  /// Creates a new `Rect` of the given dimensions with one corner at the
  /// origin.
  #[inline]
  pub fn with_dims(width: T, height: T) -> Self {
    Self(Point::zero(), Point::new(width.abs(), height.abs()))
  }

  /// Returns the upper-left corner of this `Rect`.
  #[inline]
  pub fn upper_left(self) -> Point<T> {
    self.0
  }

  /// Returns the lower-right corner of this `Rect`.
  #[inline]
  pub fn lower_right(self) -> Point<T> {
    self.1
  }

  /// Returns the upper-left and lower-right corners of this `Rect`.
  #[inline]
  pub fn corners(self) -> (Point<T>, Point<T>) {
    (self.0, self.1)
  }

  /// Returns the `x` coordinate of the left edge.
  #[inline]
  pub fn x(self) -> T {
    self.0.x()
  }

  /// Returns the `y` coordinate of the top edge.
  #[inline]
  pub fn y(self) -> T {
    self.0.y()
  }

  /// Returns the width of this `Rect`.
  #[inline]
  pub fn width(self) -> T {
    self.1.x() - self.0.x()
  }

  /// Returns the height of this `Rect`.
  #[inline]
  pub fn height(self) -> T {
    self.1.y() - self.0.y()
  }

  /// Returns the area of this `Rect`.
  #[inline]
  pub fn area(self) -> T {
    self.width() * self.height()
  }

  /// Returns whether this `Rect` is empty, i.e., has non-positive area.
  #[inline]
  pub fn is_empty(self) -> bool {
    !self.area().is_positive()
  }

  /// Returns whether this `Rect` contains a given point.
  ///
  /// The points in a rectangle form an "exclusive" range; points on the right
  /// and bottom edges are *not* part of the rectangle.
  #[inline]
  pub fn contains(self, p: Point<T>) -> bool {
    (self.0.x()..self.1.x()).contains(&p.x())
      && (self.0.y()..self.1.y()).contains(&p.y())
  }

  /// Translates this `Rect` such that its center is (approximately) at
  /// `center`.
  pub fn centered_on(self, center: Point<T>) -> Self
  where
    T: FromPrimitive,
  {
    let two = T::from_u8(2).unwrap_or_else(T::one);
    let half = Point::new(self.width() / two, self.height() / two);
    Self::with_dims(self.width(), self.height()) - half + center
  }

  /// Computes the intersection of this `Rect` with `other`.
  ///
  /// Returns `None` if they do not overlap; rectangles that merely share an
  /// edge do not overlap.
  pub fn intersect(self, other: Rect<T>) -> Option<Rect<T>> {
    let (_, p1) = Point::sort_coords(self.0, other.0);
    let (p2, _) = Point::sort_coords(self.1, other.1);

    if p1.x() >= p2.x() || p1.y() >= p2.y() {
      return None;
    }

    Some(Rect(p1, p2))
  }

  /// Returns whether this `Rect` overlaps `other` at all.
  #[inline]
  pub fn intersects(self, other: Rect<T>) -> bool {
    self.intersect(other).is_some()
  }

  /// Returns an iterator over all points in this rectangle.
  ///
  /// Points are traversed in row-major order.
  pub fn points(self) -> impl Iterator<Item = Point<T>>
  where
    Range<T>: Iterator<Item = T>,
  {
    let [x1, y1] = self.0.coords();
    let [x2, y2] = self.1.coords();

    (y1..y2).flat_map(move |y| (x1..x2).map(move |x| Point::new(x, y)))
  }
}

/// A rectangle with associated data at each point.
// Invariant: self.1.len() == self.0.area()
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct RectVec<T>(Rect<i64>, Box<[T]>);

impl<T: Clone> RectVec<T> {
  /// Creates a new `RectVec` with the requested dimensions and filled with the
  /// given value.
  pub fn new(rect: Rect<i64>, val: T) -> Self {
    RectVec(rect, vec![val; rect.area() as usize].into_boxed_slice())
  }

  /// Returns this `RectVec`'s dimensions.
  pub fn dims(&self) -> Rect<i64> {
    self.0
  }

  /// Returns this `RectVec`'s data as a linear slice, in row-major order.
  pub fn data(&self) -> &[T] {
    &self.1
  }

  /// Overwrites every value with `val`.
  pub fn fill(&mut self, val: T) {
    for x in self.1.iter_mut() {
      *x = val.clone();
    }
  }

  /// Transforms this `RectVec`'s dimensions to the new rectangle, filling it
  /// with `val` in the process.
  pub fn resize(&mut self, new_rect: Rect<i64>, val: T) {
    if self.0.area() == new_rect.area() {
      self.0 = new_rect;
      self.fill(val);
    } else {
      *self = Self::new(new_rect, val);
    }
  }

  fn index_of(&self, p: Point<i64>) -> Option<usize> {
    if !self.dims().contains(p) {
      return None;
    }
    let rel = p - self.dims().upper_left();
    Some((rel.x() + rel.y() * self.dims().width()) as usize)
  }

  /// Gets a reference to the data value associated with `p`.
  ///
  /// Returns `None` if `p` is out-of-bounds.
  pub fn get(&self, p: Point<i64>) -> Option<&T> {
    let index = self.index_of(p)?;
    self.1.get(index)
  }

  /// Gets a mutable reference to the data value associated with `p`.
  ///
  /// Returns `None` if `p` is out-of-bounds.
  pub fn get_mut(&mut self, p: Point<i64>) -> Option<&mut T> {
    let index = self.index_of(p)?;
    self.1.get_mut(index)
  }

  /// Returns an iterator over the points of this `RectVec` and their associated
  /// values.
  pub fn points(&self) -> impl Iterator<Item = (Point<i64>, &T)> + '_ {
    self.dims().points().zip(self.1.iter())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rect_at_keeps_corner_and_dims() {
    let r = Rect::at(10, 20, 32, 16);
    assert_eq!(r.upper_left(), Point::new(10, 20));
    assert_eq!(r.lower_right(), Point::new(42, 36));
    assert_eq!((r.width(), r.height()), (32, 16));
  }

  #[test]
  fn rect_at_normalizes_negative_dims() {
    let r = Rect::at(10, 10, -4, -6);
    assert_eq!(r.upper_left(), Point::new(6, 4));
    assert_eq!((r.width(), r.height()), (4, 6));
  }

  #[test]
  fn centered_on_moves_center() {
    let r = Rect::with_dims(32, 16).centered_on(Point::new(100, 100));
    assert_eq!(r.upper_left(), Point::new(84, 92));
    assert_eq!(r.lower_right(), Point::new(116, 108));
  }

  #[test]
  fn edge_contact_is_not_an_intersection() {
    let a = Rect::at(0, 0, 10, 10);
    let b = Rect::at(10, 0, 10, 10);
    assert!(!a.intersects(b));
    assert_eq!(a.intersect(Rect::at(5, 5, 10, 10)), Some(Rect::at(5, 5, 5, 5)));
  }

  #[test]
  fn contains_is_exclusive_on_far_edges() {
    let r = Rect::at(0, 0, 2, 2);
    assert!(r.contains(Point::new(0, 0)));
    assert!(r.contains(Point::new(1, 1)));
    assert!(!r.contains(Point::new(2, 1)));
    assert!(!r.contains(Point::new(-1, 0)));
  }

  #[test]
  fn rect_vec_indexes_relative_to_corner() {
    let mut v = RectVec::new(Rect::at(5, 5, 3, 2), 0u8);
    *v.get_mut(Point::new(7, 6)).unwrap() = 9;
    assert_eq!(v.data(), &[0, 0, 0, 0, 0, 9]);
    assert_eq!(v.get(Point::new(8, 6)), None);

    let (p, _) = v.points().find(|(_, x)| **x == 9).unwrap();
    assert_eq!(p, Point::new(7, 6));
  }
}
