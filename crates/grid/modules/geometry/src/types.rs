//! Grid constants and the placement data model.

use serde::{Deserialize, Serialize};

/// Number of columns in the canvas grid.
pub const COLUMNS: i32 = 12;

/// Height of a single grid row in pixels.
pub const ROW_HEIGHT: f32 = 80.0;

/// Gap between adjacent cells in pixels.
pub const GAP: f32 = 16.0;

/// Padding on the container edge in pixels.
pub const PADDING: f32 = 24.0;

/// Smallest width an element may take, in columns.
pub const DEFAULT_MIN_WIDTH: i32 = 1;

/// Largest width an element may take, in columns.
pub const DEFAULT_MAX_WIDTH: i32 = COLUMNS;

/// Smallest height an element may take, in rows.
pub const DEFAULT_MIN_HEIGHT: i32 = 1;

/// Largest height an element may take, in rows.
pub const DEFAULT_MAX_HEIGHT: i32 = 20;

/// Rectangle on the grid, in cell units.
///
/// Fields are signed so that out-of-range caller input can be represented
/// and repaired by [`crate::clamp_to_grid`] instead of rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridPosition {
    /// First occupied row (0-indexed)
    pub row: i32,
    /// First occupied column (0-indexed)
    pub col: i32,
    /// Number of columns spanned
    pub width: i32,
    /// Number of rows spanned
    pub height: i32,
}

impl GridPosition {
    /// Create a new grid position.
    pub const fn new(row: i32, col: i32, width: i32, height: i32) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// Column just past the right edge (exclusive). Saturates at `i32::MAX`.
    pub const fn right(&self) -> i32 {
        self.col.saturating_add(self.width)
    }

    /// Row just past the bottom edge (exclusive). Saturates at `i32::MAX`.
    pub const fn bottom(&self) -> i32 {
        self.row.saturating_add(self.height)
    }

    /// Same size, moved to `(row, col)`.
    #[must_use]
    pub const fn at(self, row: i32, col: i32) -> Self {
        Self { row, col, ..self }
    }
}

impl AsRef<Self> for GridPosition {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// A placed canvas element.
///
/// Serializes flat, the way the page document stores it:
/// `{"elementId": "hero", "row": 0, "col": 0, "width": 12, "height": 4, "zIndex": 1}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementPosition {
    /// Identifier, unique within the element set
    pub element_id: String,
    /// Grid rectangle occupied by the element
    #[serde(flatten)]
    pub position: GridPosition,
    /// Stacking order; absent means the default layer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl ElementPosition {
    /// Create an element on the default layer.
    pub fn new(element_id: impl Into<String>, position: GridPosition) -> Self {
        Self {
            element_id: element_id.into(),
            position,
            z_index: None,
        }
    }

    /// Set the stacking order.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = Some(z_index);
        self
    }

    /// Copy of this element at a new grid rectangle, keeping id and layer.
    #[must_use]
    pub fn moved_to(&self, position: GridPosition) -> Self {
        Self {
            element_id: self.element_id.clone(),
            position,
            z_index: self.z_index,
        }
    }
}

impl AsRef<GridPosition> for ElementPosition {
    fn as_ref(&self) -> &GridPosition {
        &self.position
    }
}

/// Bounds for validation and for the placement search space.
///
/// `max_col` bounds the starting column; `max_row` is unbounded when `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConstraints {
    /// Leftmost allowed starting column
    pub min_col: i32,
    /// Rightmost allowed starting column
    pub max_col: i32,
    /// Topmost allowed starting row
    pub min_row: i32,
    /// Bottommost allowed starting row, if any
    pub max_row: Option<i32>,
    /// Minimum width in columns
    pub min_width: i32,
    /// Maximum width in columns
    pub max_width: i32,
    /// Minimum height in rows
    pub min_height: i32,
    /// Maximum height in rows
    pub max_height: i32,
}

impl Default for GridConstraints {
    fn default() -> Self {
        Self {
            min_col: 0,
            max_col: COLUMNS - 1,
            min_row: 0,
            max_row: None,
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl GridConstraints {
    /// Default constraints with the row range capped at `max_row`.
    #[must_use]
    pub fn with_max_row(mut self, max_row: i32) -> Self {
        self.max_row = Some(max_row);
        self
    }
}
