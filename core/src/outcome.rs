use crate::error::{Error, misuse};
use crate::maybe::{IntoIter, Iter, Maybe};

/// The outcome of a computation: a successful value of type `T`, or a failure carrying an error of type `E`.
///
/// Combinators short-circuit on failure the same way [`Maybe`]'s combinators short-circuit on absence, but the failure
/// branch carries the error so that chains can inspect it with [`or_else`](Self::or_else).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Outcome<T, E> {
  Success(T),
  Failure(E),
}

impl<T, E> Outcome<T, E> {
  #[inline]
  pub const fn success(value: T) -> Self { Self::Success(value) }

  /// Creates a success from a possibly absent `value`, failing with [`Error::InvalidConstruction`] if it is `None`.
  #[inline]
  pub fn try_success(value: Option<T>) -> Result<Self, Error> {
    match value {
      Some(value) => Ok(Self::Success(value)),
      None => Err(misuse(Error::InvalidConstruction)),
    }
  }

  #[inline]
  pub const fn error(error: E) -> Self { Self::Failure(error) }

  /// Runs `f`, capturing its returned error as a failure and its returned value as a success.
  ///
  /// Only errors returned through `E` are captured. Panics raised by `f` are unrecoverable and propagate past this
  /// function.
  #[inline]
  pub fn attempt(f: impl FnOnce() -> Result<T, E>) -> Self {
    match f() {
      Ok(value) => Self::Success(value),
      Err(error) => Self::captured(error),
    }
  }

  /// Like [`attempt`](Self::attempt), converting the returned error into `E`.
  #[inline]
  pub fn attempt_into<F: Into<E>>(f: impl FnOnce() -> Result<T, F>) -> Self {
    Self::attempt(|| f().map_err(Into::into))
  }

  #[inline]
  pub(crate) fn captured(error: E) -> Self {
    #[cfg(feature = "tracing")] {
      tracing::debug!(error_type = std::any::type_name::<E>(), "captured failure");
    }
    Self::Failure(error)
  }


  #[inline]
  pub const fn is_success(&self) -> bool { matches!(self, Self::Success(_)) }

  #[inline]
  pub const fn is_error(&self) -> bool { !self.is_success() }

  #[inline]
  pub const fn as_ref(&self) -> Outcome<&T, &E> {
    match self {
      Self::Success(value) => Outcome::Success(value),
      Self::Failure(error) => Outcome::Failure(error),
    }
  }


  /// Gets the success value, or returns the stored error as-is.
  #[inline]
  pub fn get(self) -> Result<T, E> {
    match self {
      Self::Success(value) => Ok(value),
      Self::Failure(error) => Err(error),
    }
  }

  /// Gets the stored error, failing with [`Error::NotAnError`] if this is a success.
  #[inline]
  pub fn get_error(self) -> Result<E, Error> {
    match self {
      Self::Success(_) => Err(misuse(Error::NotAnError)),
      Self::Failure(error) => Ok(error),
    }
  }

  #[inline]
  pub fn get_or_default(self, default: T) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(_) => default,
    }
  }

  /// Gets the success value, or the result of `f` applied to the error.
  #[inline]
  pub fn get_or_else(self, f: impl FnOnce(E) -> T) -> T {
    match self {
      Self::Success(value) => value,
      Self::Failure(error) => f(error),
    }
  }

  #[inline]
  pub fn get_or_null(self) -> Option<T> {
    match self {
      Self::Success(value) => Some(value),
      Self::Failure(_) => None,
    }
  }


  #[inline]
  pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
    match self {
      Self::Success(value) => Outcome::Success(f(value)),
      Self::Failure(error) => Outcome::Failure(error),
    }
  }

  #[inline]
  pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
    match self {
      Self::Success(value) => Outcome::Success(value),
      Self::Failure(error) => Outcome::Failure(f(error)),
    }
  }

  #[inline]
  pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
    match self {
      Self::Success(value) => f(value),
      Self::Failure(error) => Outcome::Failure(error),
    }
  }

  /// Returns `self` if successful, or recovers from the error with `f`. `f` is called exactly once on failure, and
  /// never on success.
  #[inline]
  pub fn or_else<F>(self, f: impl FnOnce(E) -> Outcome<T, F>) -> Outcome<T, F> {
    match self {
      Self::Success(value) => Outcome::Success(value),
      Self::Failure(error) => f(error),
    }
  }


  /// Projects onto the success value, discarding the error.
  #[inline]
  pub fn to_option(self) -> Maybe<T> {
    match self {
      Self::Success(value) => Maybe::Present(value),
      Self::Failure(_) => Maybe::Absent,
    }
  }

  /// Projects onto the error, discarding the success value.
  #[inline]
  pub fn error_option(self) -> Maybe<E> {
    match self {
      Self::Success(_) => Maybe::Absent,
      Self::Failure(error) => Maybe::Present(error),
    }
  }

  /// Iterates over the success value, yielding it once on success, or nothing on failure. Every call starts over.
  #[inline]
  pub fn iter(&self) -> Iter<'_, T> {
    Iter::new(self.as_ref().get_or_null())
  }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
  #[inline]
  fn from(result: Result<T, E>) -> Self {
    match result {
      Ok(value) => Self::Success(value),
      Err(error) => Self::Failure(error),
    }
  }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
  #[inline]
  fn from(outcome: Outcome<T, E>) -> Self { outcome.get() }
}

impl<T, E> IntoIterator for Outcome<T, E> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { IntoIter::new(self.get_or_null()) }
}

impl<'a, T, E> IntoIterator for &'a Outcome<T, E> {
  type Item = &'a T;
  type IntoIter = Iter<'a, T>;

  #[inline]
  fn into_iter(self) -> Self::IntoIter { self.iter() }
}
