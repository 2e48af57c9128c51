//! Configuration, logging and error plumbing shared by the binary and library

pub mod config;
pub mod error;
pub mod logging;
pub mod paths;

pub use error::{Error, Result};
