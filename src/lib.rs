//! # scanlet-base
//!
//! Foundation primitives for a lexer/parser front end.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Source loading (SourceFile, read_source_file)
//!   ↓
//! base      → Primitives (Outcome, TextLocation, constants)
//! ```
//!
//! A scanner loads each input with [`read_source_file`], branches on the
//! returned [`Outcome`], and folds a [`TextLocation`] over the contents:
//!
//! ```no_run
//! use scanlet::{Outcome, TextLocation, read_source_file};
//!
//! match read_source_file("main.src") {
//!     Outcome::Ok(file) => {
//!         let end = file.file_contents().chars().fold(TextLocation::start(), |at, c| {
//!             if c == '\n' { at.handle_newline() } else { at.advance(1) }
//!         });
//!         println!("{} ends at {end}", file.file_path());
//!     }
//!     Outcome::Failure(reason) => eprintln!("{reason}"),
//! }
//! ```

// ============================================================================
// MODULES (dependency order: base → project)
// ============================================================================

/// Foundation types: Outcome, TextLocation, constants
pub mod base;

/// Source loading: SourceFile, read_source_file, LoadError
pub mod project;

// Re-export foundation types
pub use base::{Outcome, OutcomeError, TextLocation, is_failure, is_ok, is_result};
pub use project::{LoadError, SourceFile, load_source_file, read_source_file};
