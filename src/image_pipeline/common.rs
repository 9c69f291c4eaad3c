//! Common utilities module
//!
//! Shared error types used across decoding, encoding, and batch conversion.

pub mod error;

pub use error::{ConversionError, Result};
