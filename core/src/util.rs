#[cfg(feature = "future")]
pub mod future;
