//! Immutable value wrappers for explicit control flow: [`Maybe`] for optional values and [`Outcome`] for computations
//! that either succeed with a value or fail with an error.
//!
//! Both are plain enums with structural equality. Their combinators short-circuit on absence or failure, so chains of
//! operations need no branching at each step:
//!
//! ```
//! use valwrap_core::{Maybe, Outcome};
//!
//! let port = Maybe::from(std::env::var("PORT").ok())
//!   .and_then(|port| Outcome::attempt(|| port.parse::<u16>()).to_option())
//!   .filter(|port| *port != 0)
//!   .get_or_default(8080);
//! assert!(port > 0);
//! ```
//!
//! Features:
//!
//! - `tracing`: emit [`tracing`](https://docs.rs/tracing) events on misuse and on captured failures.
//! - `future`: adapters for wrapped futures and an asynchronous [`Outcome::attempt`].

pub mod error;
pub mod maybe;
pub mod outcome;
pub mod util;

pub use error::Error;
pub use maybe::Maybe;
pub use outcome::Outcome;
#[cfg(feature = "future")]
pub use util::future::MaybeFutureExt;
