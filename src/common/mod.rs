//! Shared infrastructure for the audit pipeline.

pub mod error;
pub mod text;

pub use error::{Error, Result};
