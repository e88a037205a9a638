//! Relay integration tests.
//!
//! Starts a fake upstream and the relay on ephemeral ports and exercises
//! them with reqwest.

#[cfg(feature = "http")]
mod assets;

#[cfg(all(feature = "http", feature = "client"))]
mod end_to_end;
