//! Operator overloads.

use std::ops::Add;
use std::ops::Deref;
use std::ops::DerefMut;
use std::ops::Mul;
use std::ops::Sub;

use num::Zero;

use crate::geo::Point;

const N: usize = 2;

#[inline]
fn zip<T, U, V>(x: [T; N], y: [U; N], mut f: impl FnMut(T, U) -> V) -> [V; N] {
  let [x0, x1] = x;
  let [y0, y1] = y;
  [f(x0, y0), f(x1, y1)]
}

impl<T> Deref for Point<T> {
  type Target = [T; N];
  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T> DerefMut for Point<T> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl<T: Zero + Add<T, Output = T>> Zero for Point<T> {
  #[inline]
  fn zero() -> Self {
    Self([T::zero(), T::zero()])
  }

  #[inline]
  fn is_zero(&self) -> bool {
    self.iter().all(|x| x.is_zero())
  }
}

impl<T: Add<U>, U> Add<Point<U>> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn add(self, other: Point<U>) -> Self::Output {
    Point(zip(self.0, other.0, |x, y| x + y))
  }
}

impl<T: Sub<U>, U> Sub<Point<U>> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn sub(self, other: Point<U>) -> Self::Output {
    Point(zip(self.0, other.0, |x, y| x - y))
  }
}

impl<T: Mul<U>, U: Copy> Mul<U> for Point<T> {
  type Output = Point<T::Output>;
  #[inline]
  fn mul(self, other: U) -> Self::Output {
    Point(self.0.map(|x| x * other))
  }
}
