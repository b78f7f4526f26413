//! Grid auto-placement for newly created entities.

use crate::entities::OverlayKind;
use kurbo::Point;

/// Distance of the first slot from the document origin, in pixels.
pub const INITIAL_OFFSET: f64 = 40.0;

/// Spacing between grid slots, in pixels.
pub const GRID_SIZE: f64 = 220.0;

/// Number of slots per grid row.
pub const GRID_COLUMNS: usize = 3;

/// Group of entities whose count drives placement.
///
/// Entities in different partitions never affect each other's slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    TextBoxes,
    Overlays(OverlayKind),
}

/// Position of the slot at `index`, filling rows left to right, top to bottom.
///
/// `index` is the number of entities already in the partition. No collision
/// detection is done; overlapping entities are expected to be dragged apart.
pub fn grid_position(index: usize) -> Point {
    let column = index % GRID_COLUMNS;
    let row = index / GRID_COLUMNS;
    Point::new(
        INITIAL_OFFSET + column as f64 * GRID_SIZE,
        INITIAL_OFFSET + row as f64 * GRID_SIZE,
    )
}
