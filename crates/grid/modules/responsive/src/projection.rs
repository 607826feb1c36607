//! Projection of desktop positions onto narrower breakpoints.

use grid_geometry::{COLUMNS, ElementPosition, GridPosition, clamp_range};
use serde::{Deserialize, Serialize};

use crate::breakpoint::Breakpoint;

/// Columns a tablet projection may span.
pub const TABLET_COLUMNS: i32 = 8;

/// Per-breakpoint positions of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsivePosition {
    /// Single-column phone layout
    pub mobile: GridPosition,
    /// Narrowed tablet layout
    pub tablet: GridPosition,
    /// Authored layout
    pub desktop: GridPosition,
}

/// Responsive positions of a named element, as stored with the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsiveElement {
    /// Element identifier
    pub element_id: String,
    /// Derived positions
    pub positions: ResponsivePosition,
}

/// Derive mobile and tablet positions from a desktop position.
///
/// Mobile stacks everything full-bleed; tablet caps the width at 8 columns
/// and pulls the column back so the element fits within them. Row and height
/// carry over unchanged.
pub fn generate_responsive_positions(desktop: &GridPosition) -> ResponsivePosition {
    let tablet_width = desktop.width.min(TABLET_COLUMNS);
    ResponsivePosition {
        mobile: GridPosition {
            row: desktop.row,
            col: 0,
            width: COLUMNS,
            height: desktop.height,
        },
        tablet: GridPosition {
            row: desktop.row,
            col: clamp_range(desktop.col, 0, TABLET_COLUMNS - tablet_width),
            width: tablet_width,
            height: desktop.height,
        },
        desktop: *desktop,
    }
}

/// Look up the position for `breakpoint`.
pub const fn get_breakpoint_position(
    responsive: &ResponsivePosition,
    breakpoint: Breakpoint,
) -> GridPosition {
    match breakpoint {
        Breakpoint::Mobile => responsive.mobile,
        Breakpoint::Tablet => responsive.tablet,
        Breakpoint::Desktop => responsive.desktop,
    }
}

/// Project every element of a desktop layout, preserving order.
pub fn project_layout(elements: &[ElementPosition]) -> Vec<ResponsiveElement> {
    elements
        .iter()
        .map(|element| ResponsiveElement {
            element_id: element.element_id.clone(),
            positions: generate_responsive_positions(&element.position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A wide element hanging right is pulled back onto the tablet grid.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_tablet_reclamps_column() {
        let responsive = generate_responsive_positions(&GridPosition::new(1, 8, 6, 2));
        assert_eq!(responsive.tablet, GridPosition::new(1, 2, 6, 2));
    }

    /// Full-width desktop elements are capped to 8 tablet columns.
    #[test]
    fn test_tablet_caps_width() {
        let responsive = generate_responsive_positions(&GridPosition::new(0, 0, 12, 3));
        assert_eq!(responsive.tablet, GridPosition::new(0, 0, 8, 3));
    }

    /// Narrow elements keep their column when they already fit.
    #[test]
    fn test_tablet_keeps_fitting_column() {
        let responsive = generate_responsive_positions(&GridPosition::new(4, 3, 4, 1));
        assert_eq!(responsive.tablet, GridPosition::new(4, 3, 4, 1));
    }

    /// Mobile is always full-bleed.
    #[test]
    fn test_mobile_full_bleed() {
        let responsive = generate_responsive_positions(&GridPosition::new(5, 7, 3, 4));
        assert_eq!(responsive.mobile, GridPosition::new(5, 0, 12, 4));
    }

    /// Desktop passes through and lookups return the matching entry.
    ///
    /// # Panics
    /// Panics if assertions fail.
    #[test]
    fn test_desktop_passthrough_and_lookup() {
        for row in 0..4 {
            for col in 0..12 {
                for width in 1..=(12 - col) {
                    let desktop = GridPosition::new(row, col, width, 2);
                    let responsive = generate_responsive_positions(&desktop);
                    assert_eq!(responsive.desktop, desktop);
                    assert_eq!(
                        get_breakpoint_position(&responsive, Breakpoint::Desktop),
                        desktop
                    );
                    assert_eq!(
                        get_breakpoint_position(&responsive, Breakpoint::Tablet),
                        responsive.tablet
                    );
                    assert_eq!(
                        get_breakpoint_position(&responsive, Breakpoint::Mobile),
                        responsive.mobile
                    );
                    assert!(responsive.tablet.right() <= TABLET_COLUMNS);
                }
            }
        }
    }

    /// Layout projection keeps ids and order.
    #[test]
    fn test_project_layout() {
        let elements = vec![
            ElementPosition::new("hero", GridPosition::new(0, 0, 12, 4)),
            ElementPosition::new("cta", GridPosition::new(4, 9, 3, 1)),
        ];
        let projected = project_layout(&elements);
        let ids: Vec<&str> = projected
            .iter()
            .map(|element| element.element_id.as_str())
            .collect();
        assert_eq!(ids, vec!["hero", "cta"]);
        assert_eq!(projected[1].positions.tablet, GridPosition::new(4, 5, 3, 1));
    }

    /// Stored responsive documents use camelCase ids and flat positions.
    ///
    /// # Panics
    /// Panics if the document does not have the stored shape.
    #[test]
    fn test_stored_shape() {
        let projected = project_layout(&[ElementPosition::new(
            "card",
            GridPosition::new(1, 8, 6, 2),
        )]);
        let value = serde_json::to_value(&projected).unwrap_or_default();
        assert_eq!(
            value,
            serde_json::json!([{
                "elementId": "card",
                "positions": {
                    "mobile": {"row": 1, "col": 0, "width": 12, "height": 2},
                    "tablet": {"row": 1, "col": 2, "width": 6, "height": 2},
                    "desktop": {"row": 1, "col": 8, "width": 6, "height": 2}
                }
            }])
        );
        let parsed: Result<Vec<ResponsiveElement>, _> = serde_json::from_value(value);
        assert_eq!(parsed.ok(), Some(projected));
    }
}
