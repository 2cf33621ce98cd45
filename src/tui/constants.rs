//! Named constants for TUI layout and navigation.

/// Number of rows to move per page-up/page-down action.
pub(crate) const PAGE_SIZE: usize = 10;

/// How long a status message stays visible, in seconds.
pub(crate) const STATUS_CLEAR_SECS: u64 = 4;

/// Width of the `ID` column in the matrix table.
pub(crate) const ID_COLUMN_WIDTH: u16 = 5;

/// Width of each level column in the matrix table.
pub(crate) const LEVEL_COLUMN_WIDTH: u16 = 8;

/// Widest a bar in the graph view may get.
pub(crate) const MAX_BAR_WIDTH: u16 = 12;

/// Gap between bars in the graph view.
pub(crate) const BAR_GAP: u16 = 2;
