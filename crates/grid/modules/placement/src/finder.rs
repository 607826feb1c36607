//! Collision-free placement search.
//!
//! The search is row-major: rows top to bottom starting at the desired row,
//! columns left to right inside each row. The first free slot wins, so ties
//! always resolve toward the top-left rather than toward the drop point.

use core::fmt;
use core::str::FromStr;

use grid_geometry::{
    COLUMNS, GridConstraints, GridPosition, clamp_range, clamp_to_grid, has_overlap,
    is_valid_position, max_bottom,
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Where a newly added element should be seeded before conflict resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlacementStrategy {
    /// Row 0, column 0
    Top,
    /// Below everything already placed
    Bottom,
    /// Horizontally centred on row 0
    Center,
    /// Column 0 on row 0
    Left,
    /// Flush right on row 0
    Right,
    /// Row 0, column 0
    #[default]
    Auto,
}

impl PlacementStrategy {
    /// Lowercase name used in documents and on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
            Self::Left => "left",
            Self::Right => "right",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for PlacementStrategy {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

impl FromStr for PlacementStrategy {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "center" => Ok(Self::Center),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "auto" => Ok(Self::Auto),
            other => Err(format!("unknown placement strategy '{other}'")),
        }
    }
}

/// Check a candidate against every existing element.
fn collides_with_any<Element: AsRef<GridPosition>>(
    candidate: &GridPosition,
    existing: &[Element],
) -> bool {
    existing
        .iter()
        .any(|element| has_overlap(candidate, element.as_ref()))
}

/// Find a valid, collision-free position as close to `desired` as the
/// row-major search allows.
///
/// 1. A valid, free `desired` is returned unchanged.
/// 2. Otherwise rows are scanned from `desired.row` down to `max_row`
///    (or to the bottom of the existing content when rows are unbounded),
///    columns left to right, with the size repaired by [`clamp_to_grid`].
/// 3. If the row range is exhausted the element is appended below all
///    existing content at the leftmost column.
///
/// Always returns a position that overlaps nothing in `existing`.
pub fn find_available_position<Element: AsRef<GridPosition>>(
    desired: &GridPosition,
    existing: &[Element],
    constraints: &GridConstraints,
) -> GridPosition {
    if is_valid_position(desired, constraints) && !collides_with_any(desired, existing) {
        return *desired;
    }

    let sized = clamp_to_grid(desired, constraints);
    let bottom = max_bottom(existing);
    let first_row = desired.row.max(constraints.min_row);
    // With unbounded rows the row at `bottom` is empty, so the scan always terminates there.
    let last_row = constraints
        .max_row
        .unwrap_or_else(|| bottom.max(first_row));
    let first_col = constraints.min_col;
    let last_col = constraints.max_col.min(COLUMNS - sized.width);

    trace!(
        "placement search for {desired:?}: rows {first_row}..={last_row}, cols {first_col}..={last_col}"
    );

    for row in first_row..=last_row {
        for col in first_col..=last_col {
            let candidate = sized.at(row, col);
            if is_valid_position(&candidate, constraints)
                && !collides_with_any(&candidate, existing)
            {
                return candidate;
            }
        }
    }

    let fallback = sized.at(
        constraints.min_row.max(bottom),
        clamp_range(0, constraints.min_col, last_col),
    );
    debug!(
        "no free slot for {desired:?} in rows {first_row}..={last_row}; appending at {fallback:?}"
    );
    fallback
}

/// Seed a `width` x `height` element according to `strategy`, then resolve
/// conflicts with [`find_available_position`].
pub fn find_optimal_position<Element: AsRef<GridPosition>>(
    width: i32,
    height: i32,
    existing: &[Element],
    strategy: PlacementStrategy,
    constraints: &GridConstraints,
) -> GridPosition {
    let free_columns = (COLUMNS - width).max(0);
    let (row, col) = match strategy {
        PlacementStrategy::Top | PlacementStrategy::Left | PlacementStrategy::Auto => (0, 0),
        PlacementStrategy::Bottom => (max_bottom(existing), 0),
        PlacementStrategy::Center => (0, free_columns / 2),
        PlacementStrategy::Right => (0, free_columns),
    };
    let seed = GridPosition::new(row, col, width, height);
    find_available_position(&seed, existing, constraints)
}
