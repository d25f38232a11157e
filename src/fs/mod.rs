//! Filesystem utilities for inigen.

mod append;

pub use append::append_locked;
