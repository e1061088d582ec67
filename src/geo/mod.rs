//! Geometry and math library.

use std::mem;
use std::ops::Range;

use num::Integer;
use num::Signed;
use num::Zero;

mod impls;

/// A two-dimensional point.
///
/// We use the following convention for coordinates: x increases to the right
/// direction, and y in the downwards direction.
///
/// `Point<T>` values may be added and subtracted componentwise, and compare
/// equal exactly when both of their components do.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
pub struct Point<T = i64>([T; 2]);

impl<T> Point<T> {
  /// Creates a new `Point` with the given coordinates.
  #[inline]
  pub const fn new(x: T, y: T) -> Self {
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

  /// Wraps this point into the box `[0, max_x) x [0, max_y)`.
  ///
  /// Each coordinate is reduced with floored modulo, so a point one unit to
  /// the left of the origin lands on the right edge rather than going
  /// negative.
  ///
  /// # Panics
  ///
  /// Panics if either bound is zero.
  #[inline]
  pub fn wrap(self, max_x: T, max_y: T) -> Self
  where
    T: Integer + Copy,
  {
    Self::new(self.x().mod_floor(&max_x), self.y().mod_floor(&max_y))
  }

  /// Componentwise orders the coordinates of `self` and `other`.
  ///
  /// Returns a pair of points whose coordinates are the minima and maxima in
  /// each coordinate, respectively.
  #[inline]
  pub fn sort_coords(mut self, mut other: Self) -> (Self, Self)
  where
    T: PartialOrd,
  {
    for i in 0..self.len() {
      if self[i] > other[i] {
        mem::swap(&mut self[i], &mut other[i])
      }
    }
    (self, other)
  }
}

/// A rectangle, represented as a pair of [`Point`] values.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct Rect<T = i64>(Point<T>, Point<T>);

// Invariant: rect.0.x <= rect.1.x and rect.0.y <= rect.1.y.
impl<T: Signed> Rect<T> {
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

  /// Returns the width of this `Rect`.
  #[inline]
  pub fn width(self) -> T
  where
    T: Copy,
  {
    self.1.x() - self.0.x()
  }

  /// Returns the height of this `Rect`.
  #[inline]
  pub fn height(self) -> T
  where
    T: Copy,
  {
    self.1.y() - self.0.y()
  }

  /// Returns the area of this `Rect`.
  #[inline]
  pub fn area(self) -> T
  where
    T: Copy,
  {
    self.width() * self.height()
  }

  /// Returns whether this `Rect` contains a given point.
  ///
  /// Note that the points in a rectangle form an "exclusive" range; points
  /// colinear with the lower-right corner are *not* part of the rectangle.
  #[inline]
  pub fn contains(self, p: Point<T>) -> bool
  where
    T: Copy + PartialOrd,
  {
    (0..p.len()).all(|i| (self.0[i]..self.1[i]).contains(&p[i]))
  }

  /// Computes the intersection of this `Rect` with `other`.
  ///
  /// Returns `None` if they do not intersect at all.
  pub fn intersect(self, other: Rect<T>) -> Option<Rect<T>>
  where
    T: PartialOrd,
  {
    let (_, p1) = Point::sort_coords(self.0, other.0);
    let (p2, _) = Point::sort_coords(self.1, other.1);

    if p1[0] >= p2[0] || p1[1] >= p2[1] {
      return None;
    }

    Some(Rect(p1, p2))
  }

  /// Returns an iterator over all points in this rectangle.
  ///
  /// Points are traversed in row-major order.
  pub fn points(self) -> impl Iterator<Item = Point<T>>
  where
    T: Copy,
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
  /// Creates a new, empty `RectVec` with arbitrary degenerate coordinates.
  pub fn empty() -> Self {
    RectVec(Rect::with_dims(0, 0), Vec::new().into_boxed_slice())
  }

  /// Creates a new `RectVec` with the requested dimensions and filled with the
  /// given value.
  pub fn new(rect: Rect<i64>, val: T) -> Self {
    RectVec(rect, vec![val; rect.area() as usize].into_boxed_slice())
  }

  /// Returns this `RectVec`'s dimensions.
  pub fn dims(&self) -> Rect<i64> {
    self.0
  }

  /// Returns this `RectVec`'s data as a linear slice.
  pub fn data(&self) -> &[T] {
    &self.1
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

  /// Overwrites every value with `val`, keeping the dimensions.
  pub fn fill(&mut self, val: T) {
    for x in self.1.iter_mut() {
      *x = val.clone();
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
  fn points_compare_componentwise() {
    assert_eq!(Point::new(3, 4), Point::new(3, 4));
    assert_ne!(Point::new(3, 4), Point::new(4, 3));
    assert_eq!(Point::new(1, 2) + Point::new(10, 20), Point::new(11, 22));
    assert_eq!(Point::new(1, 2) - Point::new(10, 20), Point::new(-9, -18));
  }

  #[test]
  fn wrap_uses_floored_modulo() {
    assert_eq!(Point::new(905, 600).wrap(900, 600), Point::new(5, 0));
    assert_eq!(Point::new(-15, 3).wrap(900, 600), Point::new(885, 3));
    assert_eq!(Point::new(10, -5).wrap(900, 600), Point::new(10, 595));
    assert_eq!(Point::new(42, 17).wrap(900, 600), Point::new(42, 17));
  }

  #[test]
  fn rect_intersection_clips() {
    let a = Rect::with_dims(10, 5);
    let b = Rect(Point::new(8, 3), Point::new(20, 20));
    let i = a.intersect(b).unwrap();
    assert_eq!(i.upper_left(), Point::new(8, 3));
    assert_eq!(i.lower_right(), Point::new(10, 5));

    let far = Rect(Point::new(50, 50), Point::new(60, 60));
    assert_eq!(a.intersect(far), None);
  }

  #[test]
  fn rect_vec_indexes_row_major() {
    let mut grid = RectVec::new(Rect::with_dims(3, 2), 0);
    *grid.get_mut(Point::new(2, 1)).unwrap() = 7;
    assert_eq!(grid.data(), &[0, 0, 0, 0, 0, 7]);
    assert_eq!(grid.get(Point::new(3, 0)), None);
    assert_eq!(grid.get(Point::new(-1, 0)), None);

    let seen: Vec<_> = grid.points().map(|(p, &v)| (p, v)).collect();
    assert_eq!(seen[5], (Point::new(2, 1), 7));
  }
}
