use std::future::Future;

use futures::future::{self, Either};
use futures::FutureExt;

use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// Extension methods for a [`Maybe`] holding a future.
pub trait MaybeFutureExt {
  type Output;

  /// Maps the output of the future with `f` once it completes, keeping absence as-is.
  fn map_future<U>(self, f: impl FnOnce(Self::Output) -> U) -> Maybe<impl Future<Output=U>>;

  /// Turns a `Maybe` of a future into a future of a `Maybe`. An absent value resolves immediately.
  fn transpose_future(self) -> impl Future<Output=Maybe<Self::Output>>;
}

impl<F: Future> MaybeFutureExt for Maybe<F> {
  type Output = F::Output;

  #[inline]
  fn map_future<U>(self, f: impl FnOnce(Self::Output) -> U) -> Maybe<impl Future<Output=U>> {
    self.map(|fut| fut.map(f))
  }

  #[inline]
  fn transpose_future(self) -> impl Future<Output=Maybe<Self::Output>> {
    match self {
      Maybe::Present(fut) => Either::Left(fut.map(Maybe::Present)),
      Maybe::Absent => Either::Right(future::ready(Maybe::Absent)),
    }
  }
}

impl<T, E> Outcome<T, E> {
  /// Asynchronous [`attempt`](Self::attempt): awaits `fut`, capturing its returned error as a failure.
  ///
  /// The returned future does nothing until polled, and can be polled by any executor.
  #[inline]
  pub fn attempt_future(fut: impl Future<Output=Result<T, E>>) -> impl Future<Output=Self> {
    fut.map(|result| match result {
      Ok(value) => Self::Success(value),
      Err(error) => Self::captured(error),
    })
  }
}

