//! Foundation types for the scanner front end.
//!
//! This module provides the primitives every later stage builds on:
//! - [`Outcome`] - Success/failure result algebra with tag guards
//! - [`TextLocation`] - Line/column coordinate threaded through scanning
//! - Domain constants (tag and field names, initial coordinates)
//!
//! This module has NO dependencies on other scanlet modules.

pub mod constants;
mod location;
mod outcome;

pub use location::TextLocation;
pub use outcome::{Outcome, OutcomeError, is_failure, is_ok, is_result};
