//! Snapping of free-form drag positions onto grid cells.

use grid_geometry::{COLUMNS, GridPosition, clamp_range};
use serde::{Deserialize, Serialize};

/// Grid position in fractional cell units, as produced mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FractionalPosition {
    /// Row, possibly between cells
    pub row: f32,
    /// Column, possibly between cells
    pub col: f32,
    /// Width in columns
    pub width: f32,
    /// Height in rows
    pub height: f32,
}

impl FractionalPosition {
    /// Create a new fractional position.
    pub const fn new(row: f32, col: f32, width: f32, height: f32) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }
}

impl From<GridPosition> for FractionalPosition {
    fn from(position: GridPosition) -> Self {
        Self {
            row: position.row as f32,
            col: position.col as f32,
            width: position.width as f32,
            height: position.height as f32,
        }
    }
}

/// Round to the nearest cell; `as` saturates on overflow and maps NaN to 0.
#[inline]
fn round_cell(value: f32) -> i32 {
    value.round() as i32
}

/// Commit a fractional position to whole grid cells.
///
/// Rounds every field, then keeps the element on the grid: width in
/// `[1, 12]`, column in `[0, 12 - width]`, height at least 1, row at least 0.
/// The bottom edge `row + height` always fits in an `i32`. Idempotent.
pub fn snap_to_grid(position: FractionalPosition) -> GridPosition {
    let width = clamp_range(round_cell(position.width), 1, COLUMNS);
    let col = clamp_range(round_cell(position.col), 0, COLUMNS - width);
    let height = round_cell(position.height).max(1);
    GridPosition {
        row: clamp_range(round_cell(position.row), 0, i32::MAX - height),
        col,
        width,
        height,
    }
}
