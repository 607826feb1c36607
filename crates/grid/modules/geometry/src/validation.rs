//! Bounds checking and repair of grid positions.

use crate::types::{COLUMNS, GridConstraints, GridPosition};

/// Clamp `value` into `[low, high]`.
///
/// Unlike [`Ord::clamp`] this never panics: when the bounds are inverted the
/// upper bound wins.
#[inline]
pub fn clamp_range(value: i32, low: i32, high: i32) -> i32 {
    value.max(low).min(high)
}

/// Check whether `position` satisfies `constraints` and fits the grid.
pub fn is_valid_position(position: &GridPosition, constraints: &GridConstraints) -> bool {
    let row_in_bounds = position.row >= constraints.min_row
        && constraints.max_row.is_none_or(|max_row| position.row <= max_row);
    let col_in_bounds = position.col >= constraints.min_col && position.col <= constraints.max_col;

    row_in_bounds
        && col_in_bounds
        && position.right() <= COLUMNS
        && (constraints.min_width..=constraints.max_width).contains(&position.width)
        && (constraints.min_height..=constraints.max_height).contains(&position.height)
}

/// Repair `position` so that it satisfies `constraints`.
///
/// Width is settled first so the column range `[min_col, 12 - width]` is
/// never empty for satisfiable constraints; the column is then pulled into
/// that range. Total for any input.
pub fn clamp_to_grid(position: &GridPosition, constraints: &GridConstraints) -> GridPosition {
    let width_cap = constraints
        .max_width
        .min(COLUMNS - constraints.min_col.max(0));
    let width = clamp_range(position.width, constraints.min_width, width_cap);

    let col_cap = constraints.max_col.min(COLUMNS - width);
    let col = clamp_range(position.col, constraints.min_col, col_cap);

    let row = clamp_range(
        position.row,
        constraints.min_row,
        constraints.max_row.unwrap_or(i32::MAX),
    );
    let height = clamp_range(
        position.height,
        constraints.min_height,
        constraints.max_height,
    );

    GridPosition {
        row,
        col,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test the basic validity rules under default constraints.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_is_valid_position_defaults() {
        let constraints = GridConstraints::default();
        assert!(is_valid_position(&GridPosition::new(0, 0, 12, 1), &constraints));
        assert!(is_valid_position(&GridPosition::new(500, 6, 6, 20), &constraints));
        assert!(!is_valid_position(&GridPosition::new(0, 7, 6, 1), &constraints));
        assert!(!is_valid_position(&GridPosition::new(-1, 0, 6, 1), &constraints));
        assert!(!is_valid_position(&GridPosition::new(0, -1, 6, 1), &constraints));
        assert!(!is_valid_position(&GridPosition::new(0, 0, 0, 1), &constraints));
        assert!(!is_valid_position(&GridPosition::new(0, 0, 6, 21), &constraints));
    }

    /// A bounded row range rejects rows past it.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_is_valid_position_max_row() {
        let constraints = GridConstraints::default().with_max_row(3);
        assert!(is_valid_position(&GridPosition::new(3, 0, 4, 1), &constraints));
        assert!(!is_valid_position(&GridPosition::new(4, 0, 4, 1), &constraints));
    }

    /// Test clamping of an element hanging off the right edge.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_clamp_to_grid_right_overflow() {
        let constraints = GridConstraints::default();
        let clamped = clamp_to_grid(&GridPosition::new(2, 10, 4, 2), &constraints);
        assert_eq!(clamped, GridPosition::new(2, 8, 4, 2));
    }

    /// Test clamping of degenerate sizes and negative offsets.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_clamp_to_grid_degenerate() {
        let constraints = GridConstraints::default();
        let clamped = clamp_to_grid(&GridPosition::new(-3, -2, 0, 40), &constraints);
        assert_eq!(clamped, GridPosition::new(0, 0, 1, 20));

        let wide = clamp_to_grid(&GridPosition::new(0, 4, 30, 1), &constraints);
        assert_eq!(wide, GridPosition::new(0, 0, 12, 1));
    }

    /// A raised minimum column caps the width so the element still fits.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_clamp_to_grid_min_col_caps_width() {
        let constraints = GridConstraints {
            min_col: 6,
            ..GridConstraints::default()
        };
        let clamped = clamp_to_grid(&GridPosition::new(0, 0, 12, 1), &constraints);
        assert_eq!(clamped, GridPosition::new(0, 6, 6, 1));
        assert!(is_valid_position(&clamped, &constraints));
    }

    /// Valid positions pass through untouched.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_clamp_to_grid_keeps_valid() {
        let constraints = GridConstraints::default();
        let position = GridPosition::new(7, 3, 5, 4);
        assert_eq!(clamp_to_grid(&position, &constraints), position);
    }

    /// Exhaustive sweep: clamping always yields a valid position.
    ///
    /// # Panics
    /// Panics if any clamped position is invalid.
    #[test]
    fn test_clamp_to_grid_always_valid() {
        let constraint_sets = [
            GridConstraints::default(),
            GridConstraints::default().with_max_row(4),
            GridConstraints {
                min_col: 2,
                max_col: 5,
                min_row: 1,
                max_row: Some(6),
                min_width: 2,
                max_width: 8,
                min_height: 2,
                max_height: 3,
            },
        ];
        for constraints in &constraint_sets {
            for row in -2..10 {
                for col in -3..15 {
                    for width in -1..15 {
                        for height in [-1, 0, 1, 5, 25] {
                            let position = GridPosition::new(row, col, width, height);
                            let clamped = clamp_to_grid(&position, constraints);
                            assert!(
                                is_valid_position(&clamped, constraints),
                                "{position:?} clamped to invalid {clamped:?} under {constraints:?}"
                            );
                        }
                    }
                }
            }
        }
    }

    /// Inverted bounds do not panic.
    #[test]
    fn test_clamp_range_inverted() {
        assert_eq!(clamp_range(5, 10, 2), 2);
        assert_eq!(clamp_range(5, 0, 12), 5);
    }
}
