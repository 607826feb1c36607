//! Placement on the canvas grid.
//!
//! Resolves where an element lands: a deterministic collision-free search
//! with a guaranteed fallback, strategy-seeded initial placement, and
//! snapping of free-form drag positions back onto grid cells.

// Collision-free placement search
mod finder;
pub use finder::{PlacementStrategy, find_available_position, find_optimal_position};

// Drag snapping
mod snap;
pub use snap::{FractionalPosition, snap_to_grid};
