//! Display-width rules used for the maximum line length.

use unicode_width::UnicodeWidthChar;

/// Tab stops are set at every 8th column.
pub const TAB_WIDTH: usize = 8;

/// Column reached after a tab typed at `column`.
#[inline]
#[must_use]
pub const fn next_tab_stop(column: usize) -> usize {
    column + TAB_WIDTH - column % TAB_WIDTH
}

/// Terminal columns occupied by `c`.
///
/// Wide (East Asian) characters take two columns; control and other
/// non-printable characters take none.
#[inline]
#[must_use]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}
