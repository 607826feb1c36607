//! Overlap detection between grid rectangles.

use crate::types::GridPosition;

/// Result of testing a candidate against an element set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionResult<'elements, Element> {
    /// Whether any element overlaps the candidate
    pub has_collision: bool,
    /// Overlapping elements, in input order
    pub colliding_elements: Vec<&'elements Element>,
}

/// Check whether two rectangles overlap.
///
/// Each axis is a half-open interval, `[col, col + width)` and
/// `[row, row + height)`, so rectangles sharing only an edge do not collide.
pub fn has_overlap(first: &GridPosition, second: &GridPosition) -> bool {
    first.col < second.right()
        && second.col < first.right()
        && first.row < second.bottom()
        && second.row < first.bottom()
}

/// Collect every element in `existing` that overlaps `candidate`.
pub fn detect_collisions<'elements, Element: AsRef<GridPosition>>(
    candidate: &GridPosition,
    existing: &'elements [Element],
) -> CollisionResult<'elements, Element> {
    let colliding_elements: Vec<&Element> = existing
        .iter()
        .filter(|element| has_overlap(candidate, element.as_ref()))
        .collect();
    CollisionResult {
        has_collision: !colliding_elements.is_empty(),
        colliding_elements,
    }
}

/// Lowest occupied edge of the element set, never above row 0.
pub fn max_bottom<Element: AsRef<GridPosition>>(existing: &[Element]) -> i32 {
    existing
        .iter()
        .map(|element| element.as_ref().bottom())
        .fold(0, i32::max)
}
