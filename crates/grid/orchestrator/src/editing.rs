//! Element-set operations driven by editor gestures.

use grid_coords::{CoordinateMapper, PixelRect};
use grid_geometry::{ElementPosition, GridConstraints, GridPosition};
use grid_placement::{
    FractionalPosition, PlacementStrategy, find_available_position, find_optimal_position,
    snap_to_grid,
};
use log::{debug, trace};

use crate::error::{LayoutError, LayoutResult};

/// Look up an element by id.
pub fn find_element<'elements>(
    elements: &'elements [ElementPosition],
    element_id: &str,
) -> Option<&'elements ElementPosition> {
    elements
        .iter()
        .find(|element| element.element_id == element_id)
}

/// Index of `element_id`, or [`LayoutError::UnknownElement`].
fn index_of(elements: &[ElementPosition], element_id: &str) -> LayoutResult<usize> {
    elements
        .iter()
        .position(|element| element.element_id == element_id)
        .ok_or_else(|| LayoutError::UnknownElement(element_id.to_owned()))
}

/// Every element except the one at `skip`.
fn others(elements: &[ElementPosition], skip: usize) -> Vec<&ElementPosition> {
    elements
        .iter()
        .enumerate()
        .filter_map(|(index, element)| (index != skip).then_some(element))
        .collect()
}

/// Place a new `width` x `height` element seeded by `strategy`.
///
/// # Errors
/// Returns [`LayoutError::DuplicateElement`] if `element_id` is already placed.
pub fn add_element(
    elements: &[ElementPosition],
    element_id: &str,
    width: i32,
    height: i32,
    strategy: PlacementStrategy,
    constraints: &GridConstraints,
) -> LayoutResult<Vec<ElementPosition>> {
    if find_element(elements, element_id).is_some() {
        return Err(LayoutError::DuplicateElement(element_id.to_owned()));
    }
    let position = find_optimal_position(width, height, elements, strategy, constraints);
    debug!("add '{element_id}' ({strategy}) at {position:?}");

    let mut updated = elements.to_vec();
    updated.push(ElementPosition::new(element_id, position));
    Ok(updated)
}

/// Where `element_id` would land if committed at `desired`.
///
/// The element is re-placed against the other elements only.
///
/// # Errors
/// Returns [`LayoutError::UnknownElement`] if `element_id` is not placed.
fn resolve_move(
    elements: &[ElementPosition],
    element_id: &str,
    desired: &GridPosition,
    constraints: &GridConstraints,
) -> LayoutResult<(usize, GridPosition)> {
    let index = index_of(elements, element_id)?;
    let placed = find_available_position(desired, &others(elements, index), constraints);
    Ok((index, placed))
}

/// Move (or reshape) an element to `desired`, resolving any collision.
///
/// # Errors
/// Returns [`LayoutError::UnknownElement`] if `element_id` is not placed.
pub fn move_element(
    elements: &[ElementPosition],
    element_id: &str,
    desired: &GridPosition,
    constraints: &GridConstraints,
) -> LayoutResult<Vec<ElementPosition>> {
    let (index, placed) = resolve_move(elements, element_id, desired, constraints)?;
    if placed != *desired {
        debug!("move '{element_id}' to {desired:?} resolved to {placed:?}");
    }

    let mut updated = elements.to_vec();
    updated[index] = elements[index].moved_to(placed);
    Ok(updated)
}

/// Resize an element in place, keeping its top-left cell when possible.
///
/// # Errors
/// Returns [`LayoutError::UnknownElement`] if `element_id` is not placed.
pub fn resize_element(
    elements: &[ElementPosition],
    element_id: &str,
    width: i32,
    height: i32,
    constraints: &GridConstraints,
) -> LayoutResult<Vec<ElementPosition>> {
    let current = find_element(elements, element_id)
        .ok_or_else(|| LayoutError::UnknownElement(element_id.to_owned()))?;
    let desired = GridPosition {
        width,
        height,
        ..current.position
    };
    move_element(elements, element_id, &desired, constraints)
}

/// Cell position a drag at `rect` would commit to, for drop feedback.
///
/// # Errors
/// Returns [`LayoutError::UnknownElement`] if `element_id` is not placed.
pub fn drag_preview(
    elements: &[ElementPosition],
    element_id: &str,
    rect: &PixelRect,
    mapper: &CoordinateMapper,
    constraints: &GridConstraints,
) -> LayoutResult<GridPosition> {
    let snapped = snap_to_grid(FractionalPosition::from(mapper.pixels_to_grid(rect)));
    trace!("drag '{element_id}' over {rect:?} snaps to {snapped:?}");
    resolve_move(elements, element_id, &snapped, constraints).map(|(_, placed)| placed)
}

/// Commit a pixel-space drag: map to cells, snap, then resolve collisions.
///
/// # Errors
/// Returns [`LayoutError::UnknownElement`] if `element_id` is not placed.
pub fn commit_drag(
    elements: &[ElementPosition],
    element_id: &str,
    rect: &PixelRect,
    mapper: &CoordinateMapper,
    constraints: &GridConstraints,
) -> LayoutResult<Vec<ElementPosition>> {
    let placed = drag_preview(elements, element_id, rect, mapper, constraints)?;
    move_element(elements, element_id, &placed, constraints)
}

/// Remove an element.
///
/// # Errors
/// Returns [`LayoutError::UnknownElement`] if `element_id` is not placed.
pub fn remove_element(
    elements: &[ElementPosition],
    element_id: &str,
) -> LayoutResult<Vec<ElementPosition>> {
    let index = index_of(elements, element_id)?;
    let mut updated = elements.to_vec();
    updated.remove(index);
    debug!("remove '{element_id}'");
    Ok(updated)
}

/// Re-place every element so that no two overlap.
///
/// Elements are settled in reading order (row, then column, then layer), each
/// against those already settled, so an overlap-free layout comes back
/// unchanged. The result keeps the input order.
pub fn resolve_overlaps(
    elements: &[ElementPosition],
    constraints: &GridConstraints,
) -> Vec<ElementPosition> {
    let mut order: Vec<usize> = (0..elements.len()).collect();
    order.sort_by_key(|&index| {
        let element = &elements[index];
        (
            element.position.row,
            element.position.col,
            element.z_index.unwrap_or(0),
        )
    });

    let mut settled: Vec<GridPosition> = Vec::with_capacity(elements.len());
    let mut resolved = elements.to_vec();
    for index in order {
        let current = &elements[index];
        let placed = find_available_position(&current.position, &settled, constraints);
        if placed != current.position {
            debug!(
                "resolve '{}' from {:?} to {placed:?}",
                current.element_id, current.position
            );
        }
        settled.push(placed);
        resolved[index] = current.moved_to(placed);
    }
    resolved
}

/// Elements in paint order: ascending layer, ties keep input order.
pub fn stacking_order(elements: &[ElementPosition]) -> Vec<&ElementPosition> {
    let mut ordered: Vec<&ElementPosition> = elements.iter().collect();
    ordered.sort_by_key(|element| element.z_index.unwrap_or(0));
    ordered
}
