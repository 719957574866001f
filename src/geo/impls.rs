//! Operator overloads.

use std::ops::Add;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use num::traits::WrappingAdd;
use num::Zero;

use crate::geo::Point;
use crate::geo::Rect;

impl<T: Zero + Add<T, Output = T>> Zero for Point<T> {
  #[inline]
  fn zero() -> Self {
    Self::new(T::zero(), T::zero())
  }

  #[inline]
  fn is_zero(&self) -> bool {
    self.0.iter().all(Zero::is_zero)
  }
}

impl<T: Neg> Neg for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn neg(self) -> Self::Output {
    let [x, y] = self.0;
    Point::new(-x, -y)
  }
}

impl<T: Add<U>, U> Add<Point<U>> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn add(self, other: Point<U>) -> Self::Output {
    let ([x1, y1], [x2, y2]) = (self.0, other.0);
    Point::new(x1 + x2, y1 + y2)
  }
}

impl<T: Sub<U>, U> Sub<Point<U>> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn sub(self, other: Point<U>) -> Self::Output {
    let ([x1, y1], [x2, y2]) = (self.0, other.0);
    Point::new(x1 - x2, y1 - y2)
  }
}

impl<T: Mul<U>, U: Copy> Mul<U> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn mul(self, k: U) -> Self::Output {
    let [x, y] = self.0;
    Point::new(x * k, y * k)
  }
}

impl<T: WrappingAdd> WrappingAdd for Point<T> {
  #[inline]
  fn wrapping_add(&self, other: &Self) -> Self {
    let ([x1, y1], [x2, y2]) = (&self.0, &other.0);
    Point::new(x1.wrapping_add(x2), y1.wrapping_add(y2))
  }
}

impl<T: Add<U>, U: Copy> Add<Point<U>> for Rect<T> {
  type Output = Rect<T::Output>;
  #[inline]
  fn add(self, offset: Point<U>) -> Self::Output {
    Rect(self.0 + offset, self.1 + offset)
  }
}

impl<T: Sub<U>, U: Copy> Sub<Point<U>> for Rect<T> {
  type Output = Rect<T::Output>;
  #[inline]
  fn sub(self, offset: Point<U>) -> Self::Output {
    Rect(self.0 - offset, self.1 - offset)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn point_arithmetic_is_componentwise() {
    let mut p = Point::new(3i64, -4);
    assert_eq!(p + Point::new(1, 1), Point::new(4, -3));
    assert_eq!(p - Point::new(1, 1), Point::new(2, -5));
    assert_eq!(p * 2, Point::new(6, -8));
    assert_eq!(-p, Point::new(-3, 4));

    p = p.wrapping_add(&Point::new(2, 2));
    assert_eq!(p, Point::new(5, -2));
    assert!(Point::<i64>::zero().is_zero());
  }

  #[test]
  fn wrapping_add_wraps_each_axis() {
    let p = Point::new(i64::MAX, i64::MIN);
    assert_eq!(
      p.wrapping_add(&Point::new(1, -1)),
      Point::new(i64::MIN, i64::MAX)
    );
  }

  #[test]
  fn rect_translates_both_corners() {
    let r = Rect::at(0i64, 0, 4, 4) + Point::new(2, 3);
    assert_eq!(r, Rect::at(2, 3, 4, 4));
  }
}
