//! Fibonacci sequence printer
//!
//! The core is a single step that advances a `(previous, current)` window.
//! The driver applies it a fixed number of times and prints each term.

pub mod common;
pub mod driver;
pub mod sequence;

pub use common::{Error, Result};
pub use sequence::{advance, Term, Window};
