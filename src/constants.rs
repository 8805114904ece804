//! Shared crate-wide constants.

/// Height (in terminal rows) of the fixed top bar. The window manager never
/// places or maximizes a window into this strip.
pub const TOP_BAR_HEIGHT: u16 = 1;

/// Absolute floor for window dimensions, regardless of per-app minimums.
/// Below this there is no room for chrome plus at least one content cell.
pub const MIN_WINDOW_WIDTH: u16 = 12;
pub const MIN_WINDOW_HEIGHT: u16 = 4;

/// Horizontal / vertical step (in cells) applied per keyboard nudge when
/// moving a window. Columns step twice as far as rows so a nudge feels
/// roughly square on common cell aspect ratios.
pub const MOVE_STEP_COLS: i32 = 2;
pub const MOVE_STEP_ROWS: i32 = 1;

/// Offset between successive default window origins (cascade placement).
pub const CASCADE_STEP: u16 = 2;

/// How many cascade slots to cycle through before wrapping back to the
/// first origin.
pub const CASCADE_SLOTS: u64 = 8;
