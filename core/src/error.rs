/// Misuse of a [`Maybe`](crate::Maybe) or [`Outcome`](crate::Outcome) by the caller.
///
/// These are logic errors at the call site, never the *value* of a computation. Errors produced by computations are
/// carried inside [`Outcome`](crate::Outcome) as its own error type instead.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum Error {
  #[error("Cannot construct a present value from an absent input")]
  InvalidConstruction,
  #[error("Cannot get the value of an absent Maybe")]
  EmptyAccess,
  #[error("Cannot get the error of a successful Outcome")]
  NotAnError,
}

/// Emits a trace event for `error` when the `tracing` feature is enabled, then returns it.
#[inline]
pub(crate) fn misuse(error: Error) -> Error {
  #[cfg(feature = "tracing")] {
    tracing::trace!(%error, "value wrapper misuse");
  }
  error
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    assert_eq!(Error::InvalidConstruction.to_string(), "Cannot construct a present value from an absent input");
    assert_eq!(Error::EmptyAccess.to_string(), "Cannot get the value of an absent Maybe");
    assert_eq!(Error::NotAnError.to_string(), "Cannot get the error of a successful Outcome");
  }

  #[test]
  fn misuse_returns_error_unchanged() {
    assert_eq!(misuse(Error::EmptyAccess), Error::EmptyAccess);
  }
}
