//! Grid layout engine for the page builder canvas.
//!
//! Re-exports the grid modules and adds the element-set operations the editor
//! calls on add, drag, resize and delete. Every operation reads a snapshot of
//! the caller's element list and returns a new list; nothing is mutated in
//! place and no state is kept between calls.

pub use grid_coords::{
    CalcLength, CalcRect, CoordinateMapper, DEFAULT_CONTAINER_WIDTH, GridMetrics, PixelRect,
};
pub use grid_geometry::{
    COLUMNS, CollisionResult, ElementPosition, GAP, GridConstraints, GridPosition, PADDING,
    ROW_HEIGHT, clamp_to_grid, detect_collisions, has_overlap, is_valid_position, max_bottom,
};
pub use grid_placement::{
    FractionalPosition, PlacementStrategy, find_available_position, find_optimal_position,
    snap_to_grid,
};
pub use grid_responsive::{
    Breakpoint, ResponsiveElement, ResponsivePosition, generate_responsive_positions,
    get_breakpoint_position, project_layout,
};

mod error;
pub use error::{LayoutError, LayoutResult};

mod editing;
pub use editing::{
    add_element, commit_drag, drag_preview, find_element, move_element, remove_element,
    resize_element, resolve_overlaps, stacking_order,
};
