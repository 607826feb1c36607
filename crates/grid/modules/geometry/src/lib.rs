//! Grid geometry for the page builder canvas.
//!
//! Elements live on a fixed 12-column grid with unbounded rows. This crate
//! holds the shared data model plus the two leaf algorithms every other grid
//! module builds on: bounds validation/repair and overlap detection.

// Constants and data model
mod types;
pub use types::{
    COLUMNS, DEFAULT_MAX_HEIGHT, DEFAULT_MAX_WIDTH, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, GAP,
    ElementPosition, GridConstraints, GridPosition, PADDING, ROW_HEIGHT,
};

// Bounds checking and best-effort repair
mod validation;
pub use validation::{clamp_range, clamp_to_grid, is_valid_position};

// Overlap testing
mod collision;
pub use collision::{CollisionResult, detect_collisions, has_overlap, max_bottom};
