use std::iter::FusedIterator;

use crate::error::{Error, misuse};
use crate::outcome::Outcome;

/// A value of type `T`, or nothing.
///
/// Unlike a nullable reference, any `T` can be [present](Maybe::Present), including values that are themselves
/// "null-like" such as `None` in a `Maybe<Option<T>>`.
///
/// All combinators take `self` by value and return new values; use [`as_ref`](Self::as_ref) to combine borrowed
/// contents without consuming the `Maybe`.
#[derive(Default, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Maybe<T> {
  #[default]
  Absent,
  Present(T),
}

impl<T> Maybe<T> {
  /// Creates a present value from `value` if it is `Some`, or an absent value otherwise.
  #[inline]
  pub fn from_option(value: Option<T>) -> Self {
    match value {
      Some(value) => Self::Present(value),
      None => Self::Absent,
    }
  }

  /// Creates a present value.
  #[inline]
  pub const fn just(value: T) -> Self { Self::Present(value) }

  /// Creates a present value from a possibly absent `value`, failing with [`Error::InvalidConstruction`] if it is
  /// `None`.
  #[inline]
  pub fn try_just(value: Option<T>) -> Result<Self, Error> {
    match value {
      Some(value) => Ok(Self::Present(value)),
      None => Err(misuse(Error::InvalidConstruction)),
    }
  }

  /// Creates an absent value.
  #[inline]
  pub const fn none() -> Self { Self::Absent }


  #[inline]
  pub const fn is_empty(&self) -> bool { matches!(self, Self::Absent) }

  #[inline]
  pub const fn is_present(&self) -> bool { !self.is_empty() }

  #[inline]
  pub const fn as_ref(&self) -> Maybe<&T> {
    match self {
      Self::Present(value) => Maybe::Present(value),
      Self::Absent => Maybe::Absent,
    }
  }


  /// Gets the value, failing with [`Error::EmptyAccess`] if absent.
  #[inline]
  pub fn get(self) -> Result<T, Error> {
    match self {
      Self::Present(value) => Ok(value),
      Self::Absent => Err(misuse(Error::EmptyAccess)),
    }
  }

  #[inline]
  pub fn get_or_default(self, default: T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => default,
    }
  }

  /// Gets the value, or the result of `f` if absent. `f` is only called when absent.
  #[inline]
  pub fn get_or_else(self, f: impl FnOnce() -> T) -> T {
    match self {
      Self::Present(value) => value,
      Self::Absent => f(),
    }
  }

  /// Gets the value as `Some`, or `None` if absent.
  #[inline]
  pub fn get_or_null(self) -> Option<T> {
    match self {
      Self::Present(value) => Some(value),
      Self::Absent => None,
    }
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
    match self {
      Self::Present(value) => Maybe::Present(f(value)),
      Self::Absent => Maybe::Absent,
    }
  }

  /// Keeps the value only if `predicate` returns `true` for it.
  #[inline]
  pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
    if let Self::Present(value) = self {
      if predicate(&value) {
        return Self::Present(value);
      }
    }
    Self::Absent
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
    match self {
      Self::Present(value) => f(value),
      Self::Absent => Maybe::Absent,
    }
  }

  /// Returns `self` if present, or `other` otherwise.
  #[inline]
  pub fn or_else(self, other: Self) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => other,
    }
  }

  /// Returns `self` if present, or the result of `f` otherwise.
  #[inline]
  pub fn or_else_with(self, f: impl FnOnce() -> Self) -> Self {
    match self {
      Self::Present(_) => self,
      Self::Absent => f(),
    }
  }

  /// Turns a present value into a success, and absence into a failure with `error`.
  #[inline]
  pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
    match self {
      Self::Present(value) => Outcome::Success(value),
      Self::Absent => Outcome::Failure(error),
    }
  }


  /// Iterates over the value, yielding it once if present, or nothing if absent. Every call starts over.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self.as_ref().get_or_null())
  }
}

impl<T> From<Option<T>> for Maybe<T> {
  #[inline]
  fn from(value: Option<T>) -> Self { Self::from_option(value) }
}

impl<T> From<Maybe<T>> for Option<T> {
  #[inline]
  fn from(maybe: Maybe<T>) -> Self { maybe.get_or_null() }
}

impl<T> FromIterator<T> for Maybe<T> {
  /// Takes the first element, if any.
  #[inline]
  fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
    Self::from_option(iter.into_iter().next())
  }
}


// Iteration

/// Iterator over a borrowed [`Maybe`] or the success value of a borrowed [`Outcome`], created by [`Maybe::iter`]
/// and [`Outcome::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
  inner: Option<&'a T>,
}
impl<'a, T> Iter<'a, T> {
  #[inline]
  pub(crate) fn new(inner: Option<&'a T>) -> Self { Self { inner } }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = &'a T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> { self.inner.take() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.inner.is_some() as usize;
    (len, Some(len))
  }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> { self.inner.take() }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`Maybe`] or the success value of an [`Outcome`].
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
  inner: Option<T>,
}
impl<T> IntoIter<T> {
  #[inline]
  pub(crate) fn new(inner: Option<T>) -> Self { Self { inner } }
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  #[inline]
  fn next(&mut self) -> Option<Self::Item> { self.inner.take() }

  #[inline]
  fn size_hint(&self) -> (usize, Option<usize>) {
    let len = self.inner.is_some() as usize;
    (len, Some(len))
  }
}
impl<T> DoubleEndedIterator for IntoIter<T> {
  #[inline]
  fn next_back(&mut self) -> Option<Self::Item> { self.inner.take() }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Maybe<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter {
    IntoIter::new(self.get_or_null())
  }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
