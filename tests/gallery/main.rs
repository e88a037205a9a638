//! Gallery controller integration tests over the in-memory catalog.

mod support;
mod pagination;
