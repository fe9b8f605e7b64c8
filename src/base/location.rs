//! Position tracking for scanners
//!
//! A [`TextLocation`] is the coordinate a scanner threads through its input
//! to report diagnostics. It knows nothing about the characters being
//! scanned: the caller decides per character whether to [`advance`] or to
//! [`handle_newline`].
//!
//! [`advance`]: TextLocation::advance
//! [`handle_newline`]: TextLocation::handle_newline

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{FIRST_COLUMN, FIRST_LINE};

/// A position in source text (1-based lines, 0-based columns)
///
/// Columns count raw character units, not graphemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextLocation {
    pub line_number: usize,
    pub column: usize,
}

impl TextLocation {
    /// Create a location from a column and a line number.
    ///
    /// Arguments are column first, matching [`TextLocation::at_column`].
    pub const fn new(column: usize, line_number: usize) -> Self {
        Self {
            line_number,
            column,
        }
    }

    /// The start-of-file position: line 1, column 0.
    pub const fn start() -> Self {
        Self::new(FIRST_COLUMN, FIRST_LINE)
    }

    /// A position on the first line at the given column.
    pub const fn at_column(column: usize) -> Self {
        Self::new(column, FIRST_LINE)
    }

    /// Move `amount` columns to the right on the current line.
    ///
    /// Only valid when no newline was crossed. There is no bounds check
    /// against the real line length; the column saturates at `usize::MAX`.
    #[must_use]
    pub const fn advance(self, amount: usize) -> Self {
        Self::new(self.column.saturating_add(amount), self.line_number)
    }

    /// Move to the first column of the next line.
    ///
    /// The line number saturates at `usize::MAX`.
    #[must_use]
    pub const fn handle_newline(self) -> Self {
        Self::new(FIRST_COLUMN, self.line_number.saturating_add(1))
    }
}

impl Default for TextLocation {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_number, self.column)
    }
}
